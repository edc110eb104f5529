//! A rust driver for the Keithley 2200 series of programmable DC power supplies.
//!
//! Every function of the instrument is a [`Capability`] with a SCPI header and a rule for each of
//! its parameters. Arguments are checked against these rules before anything is sent, such that
//! an invalid setpoint never reaches the instrument. Setpoints whose limits depend on the model,
//! e.g. the current of a 2220-30-1 which is limited to 1.5 A, are checked against the model the
//! instrument reports. The model is queried once and then cached.
//!
//! # Example
//!
//! This example shows the usage via the serial interface.
//! ```no_run
//! use keithley_2200::{Arg, Capability, Keithley2200, SerialInterfaceKeithley2200};
//! use measurements::{Current, Voltage};
//!
//! // The port where the power supply is connected to
//! let port = "/dev/ttyUSB0";
//!
//! // Open the port with 9600 baud, "\n" as terminator, and a timeout of 2 seconds.
//! let serial_inst =
//!     SerialInterfaceKeithley2200::simple(port).expect("Failed to open serial port");
//! let mut inst = Keithley2200::try_new(serial_inst).unwrap();
//!
//! println!("{}", inst.get_identity().unwrap());
//!
//! // Set voltage and current, then turn the output on.
//! inst.set_voltage(Voltage::from_volts(12.0)).unwrap();
//! inst.set_current(Arg::from(500).with_unit("mA")).unwrap();
//! inst.set_output("ON").unwrap();
//!
//! // Every capability can also be used through the generic dispatcher.
//! inst.apply(Capability::Current, &[Current::from_amperes(0.75).into()]).unwrap();
//! println!("Voltage: {}", inst.measure_voltage().unwrap());
//! println!("Output: {}", inst.query(Capability::Output).unwrap());
//! ```
//!
//! # License
//!
//! Licensed under either of
//!
//! - Apache License, Version 2.0 ([LICENSE-APACHE](http://www.apache.org/licenses/LICENSE-2.0))
//! - MIT license ([LICENSE-MIT](http://opensource.org/licenses/MIT))
//!
//! at your option.

#![warn(missing_docs)]

mod args;
mod capability;
mod commands;
mod error;
mod identity;
mod interface;
pub mod models;
pub mod rules;
mod units;

pub use args::{Arg, ArgValue};
pub use capability::{Access, Capability, CapabilitySpec, Param};
pub use error::{Keithley2200Error, ValidationError};
pub use identity::Identity;
pub use interface::{BaudRate, SerialConfig, SerialInterfaceKeithley2200};
pub use units::BaseUnit;

use instrument_channel::{CommunicationError, InstrumentChannel};
use log::debug;

use crate::{
    models::Quantity,
    rules::{Checked, check_range},
    units::format_value,
};

/// A rust driver for the Keithley 2200 series.
///
/// The driver owns its channel. To share it between threads, wrap it in a mutex.
/// See the top-level documentation for an example on how to use this driver.
#[derive(Debug)]
pub struct Keithley2200<T: InstrumentChannel> {
    interface: T,
    model: Option<String>,
}

impl<T: InstrumentChannel> Keithley2200<T> {
    /// Create a new Keithley2200 instance with the given instrument channel.
    ///
    /// Nothing is sent to the instrument. The model is queried when it is needed first.
    ///
    /// # Arguments
    /// * `interface` - An instrument channel that implements the [`InstrumentChannel`] trait.
    pub fn try_new(interface: T) -> Result<Self, Keithley2200Error> {
        Ok(Keithley2200 {
            interface,
            model: None,
        })
    }

    /// Create a new Keithley2200 instance for an instrument whose model is already known.
    ///
    /// The model is not queried from the instrument until [`Keithley2200::invalidate_model`] is
    /// called or the channel is replaced.
    ///
    /// # Arguments
    /// * `interface` - An instrument channel that implements the [`InstrumentChannel`] trait.
    /// * `model` - The model identifier, e.g. `"2220-30-1"`.
    pub fn with_model(interface: T, model: &str) -> Self {
        Keithley2200 {
            interface,
            model: Some(model.to_string()),
        }
    }

    /// Write a capability with the given arguments.
    ///
    /// All arguments are checked first. If any of them is invalid, a
    /// [`Keithley2200Error::Validation`] is returned and nothing is written. Model-dependent
    /// limits may query the model first, see [`Keithley2200::get_model`].
    ///
    /// # Arguments
    /// * `capability` - The capability to write.
    /// * `args` - One argument per parameter of the capability, in order.
    pub fn apply(&mut self, capability: Capability, args: &[Arg]) -> Result<(), Keithley2200Error> {
        let spec = capability.spec();
        if !spec.access.writable() {
            return Err(reject(spec.header, ValidationError::NotWritable(spec.header)));
        }
        let rendered = self.render(spec.header, spec.params, args)?;
        self.interface.write(&command(spec.header, &rendered))?;
        Ok(())
    }

    /// Query a capability and return the reply of the instrument as is.
    ///
    /// Only the terminator is stripped from the reply.
    ///
    /// # Arguments
    /// * `capability` - The capability to query.
    pub fn query(&mut self, capability: Capability) -> Result<String, Keithley2200Error> {
        self.query_with(capability, &[])
    }

    /// Query a capability whose query takes arguments, e.g. the voltage of list step 3.
    ///
    /// The arguments are checked the same way as for [`Keithley2200::apply`].
    ///
    /// # Arguments
    /// * `capability` - The capability to query.
    /// * `args` - The leading arguments of the capability, e.g. the step index.
    pub fn query_with(
        &mut self,
        capability: Capability,
        args: &[Arg],
    ) -> Result<String, Keithley2200Error> {
        let spec = capability.spec();
        if !spec.access.queryable() {
            return Err(reject(spec.header, ValidationError::NotQueryable(spec.header)));
        }
        let rendered = self.render(spec.header, &spec.params[..spec.query_params], args)?;
        let head = format!("{}?", spec.header);
        Ok(self.interface.query(&command(&head, &rendered))?)
    }

    /// Get the identification of the instrument.
    pub fn get_identity(&mut self) -> Result<Identity, Keithley2200Error> {
        let resp = self.query(Capability::Identify)?;
        Ok(Identity::from_idn(&resp)?)
    }

    /// Get the model of the instrument, e.g. `2220-30-1`.
    ///
    /// The model is queried with `*IDN?` on the first call and cached afterwards.
    pub fn get_model(&mut self) -> Result<String, Keithley2200Error> {
        if let Some(model) = &self.model {
            return Ok(model.clone());
        }
        let model = self.get_identity()?.model;
        debug!("Resolved instrument model: {model}");
        self.model = Some(model.clone());
        Ok(model)
    }

    /// Forget the cached model, such that it is queried again when needed.
    pub fn invalidate_model(&mut self) {
        if let Some(model) = self.model.take() {
            debug!("Invalidated cached model {model}");
        }
    }

    /// Replace the channel, e.g. after reopening the port, and return the old one.
    ///
    /// The cached model is invalidated, as another instrument might be connected now.
    pub fn replace_channel(&mut self, interface: T) -> T {
        self.invalidate_model();
        std::mem::replace(&mut self.interface, interface)
    }

    /// Release the channel.
    pub fn into_channel(self) -> T {
        self.interface
    }

    /// Check all arguments against their parameters and join them for the command.
    fn render(
        &mut self,
        header: &'static str,
        params: &[Param],
        args: &[Arg],
    ) -> Result<String, Keithley2200Error> {
        if params.len() != args.len() {
            return Err(reject(
                header,
                ValidationError::ArgumentCount {
                    header,
                    expected: params.len(),
                    got: args.len(),
                },
            ));
        }

        // Everything that does not need the model is checked before the model is resolved.
        let checked = params
            .iter()
            .zip(args)
            .map(|(param, arg)| param.rule.check(arg))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| reject(header, err))?;

        let mut parts = Vec::with_capacity(checked.len());
        for item in checked {
            let part = match item {
                Checked::Ready(text) => text,
                Checked::Pending {
                    quantity,
                    value,
                    unit,
                } => {
                    let (min, max) = self.model_bound(header, quantity)?;
                    check_range(value, min, max).map_err(|err| reject(header, err))?;
                    format_value(value, unit)
                }
            };
            parts.push(part);
        }
        Ok(parts.join(","))
    }

    /// Bound of a quantity for the connected model.
    fn model_bound(
        &mut self,
        header: &'static str,
        quantity: Quantity,
    ) -> Result<(f64, f64), Keithley2200Error> {
        let model = self.get_model()?;
        models::bound(quantity, &model)
            .ok_or_else(|| reject(header, ValidationError::UnsupportedModel(model)))
    }

    /// Query a reading and parse it as a number.
    fn query_reading(&mut self, capability: Capability) -> Result<f64, Keithley2200Error> {
        let resp = self.query(capability)?;
        let val = resp
            .trim()
            .parse::<f64>()
            .map_err(|_| CommunicationError::ResponseParseError(resp))?;
        Ok(val)
    }
}

fn command(head: &str, args: &str) -> String {
    if args.is_empty() {
        head.to_string()
    } else {
        format!("{head} {args}")
    }
}

fn reject(header: &str, err: ValidationError) -> Keithley2200Error {
    debug!("Rejected arguments for {header}: {err}");
    Keithley2200Error::Validation(err)
}
