//! Provide a serial interface for the Keithley 2200 series.

use std::time::Duration;

use instrument_channel::{CommunicationError, InstrumentChannel, SerialInterface, StreamChannel};
use serialport::SerialPort;

use crate::ValidationError;

/// Baud rates the Keithley 2200 series supports on its serial port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaudRate {
    /// 4800 baud
    B4800,
    /// 9600 baud, the factory setting.
    #[default]
    B9600,
    /// 19200 baud
    B19200,
    /// 38400 baud
    B38400,
    /// 57600 baud
    B57600,
    /// 115200 baud
    B115200,
}

impl BaudRate {
    /// The baud rate as number.
    pub fn as_u32(&self) -> u32 {
        match self {
            BaudRate::B4800 => 4800,
            BaudRate::B9600 => 9600,
            BaudRate::B19200 => 19200,
            BaudRate::B38400 => 38400,
            BaudRate::B57600 => 57600,
            BaudRate::B115200 => 115200,
        }
    }
}

impl TryFrom<u32> for BaudRate {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            4800 => Ok(BaudRate::B4800),
            9600 => Ok(BaudRate::B9600),
            19200 => Ok(BaudRate::B19200),
            38400 => Ok(BaudRate::B38400),
            57600 => Ok(BaudRate::B57600),
            115200 => Ok(BaudRate::B115200),
            _ => Err(ValidationError::UnsupportedBaudRate(value)),
        }
    }
}

/// Settings to open the serial port with.
///
/// ```
/// use std::time::Duration;
///
/// use keithley_2200::{BaudRate, SerialConfig};
///
/// let mut config = SerialConfig::new("/dev/ttyUSB0");
/// config.baud_rate = BaudRate::try_from(115200).unwrap();
/// config.timeout = Duration::from_millis(500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    /// The name of the serial port, e.g., `"/dev/ttyUSB0"` or `"COM3"`.
    pub port: String,
    /// Baud rate, must match the setting on the instrument.
    pub baud_rate: BaudRate,
    /// Terminator of commands and responses.
    pub terminator: String,
    /// How long to wait for a response.
    pub timeout: Duration,
}

impl SerialConfig {
    /// Default configuration for the given port: 9600 baud, `"\n"` terminator, and 2 s timeout.
    pub fn new(port: &str) -> Self {
        SerialConfig {
            port: port.to_string(),
            baud_rate: BaudRate::default(),
            terminator: "\n".to_string(),
            timeout: Duration::from_millis(2000),
        }
    }
}

/// A SerialInterface for the Keithley 2200 series.
///
/// Opens the port with 8 data bits, one stop bit, no parity, and no flow control, which is what
/// the instrument uses.
#[derive(Debug)]
pub struct SerialInterfaceKeithley2200 {}

impl SerialInterfaceKeithley2200 {
    /// Open a serial port with the default [`SerialConfig`].
    ///
    /// Arguments:
    /// * `port` - The name of the serial port, e.g., `"/dev/ttyUSB0"` or `"COM3"`.
    pub fn simple(
        port: &str,
    ) -> Result<StreamChannel<Box<dyn SerialPort>>, CommunicationError> {
        Self::with_config(&SerialConfig::new(port))
    }

    /// Open a serial port with the given configuration.
    ///
    /// Arguments:
    /// * `config` - Port, baud rate, terminator, and timeout to use.
    pub fn with_config(
        config: &SerialConfig,
    ) -> Result<StreamChannel<Box<dyn SerialPort>>, CommunicationError> {
        let port = serialport::new(&config.port, config.baud_rate.as_u32())
            .timeout(config.timeout)
            .data_bits(serialport::DataBits::Eight)
            .stop_bits(serialport::StopBits::One)
            .parity(serialport::Parity::None)
            .flow_control(serialport::FlowControl::None);
        let mut channel = SerialInterface::full(port)?;
        channel.set_terminator(&config.terminator);
        Ok(channel)
    }
}
