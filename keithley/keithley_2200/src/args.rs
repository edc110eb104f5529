//! Arguments that are passed to capabilities.

use std::{fmt::Display, time::Duration};

use measurements::{Current, Voltage};

/// The value of an argument as the caller gave it.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// An integer, e.g. a register value or a step index.
    Int(i64),
    /// A real number, e.g. a setpoint.
    Real(f64),
    /// Text, e.g. `"ON"`, `"MAX"`, `"LIST"`, or a number such as `"0.5"`.
    Text(String),
}

impl Display for ArgValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgValue::Int(val) => write!(f, "{val}"),
            ArgValue::Real(val) => write!(f, "{val}"),
            ArgValue::Text(val) => write!(f, "{val}"),
        }
    }
}

/// An argument to a capability: a value and an optional unit.
///
/// Arguments are usually created with `into()` from integers, floats, strings, booleans, or
/// unitful quantities:
///
/// ```
/// use std::time::Duration;
///
/// use keithley_2200::Arg;
/// use measurements::Voltage;
///
/// let state: Arg = "on".into();
/// let step: Arg = 3.into();
/// let setpoint = Arg::from("500").with_unit("mV");
/// let same_setpoint: Arg = Voltage::from_millivolts(500.0).into();
/// let delay: Arg = Duration::from_millis(250).into();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Arg {
    value: ArgValue,
    unit: Option<String>,
}

impl Arg {
    /// Create an argument without unit.
    pub fn new(value: ArgValue) -> Self {
        Arg { value, unit: None }
    }

    /// Attach a unit such as `"mV"`, `"kV"`, `"mA"`, or `"ms"` to the value.
    ///
    /// The value is converted to the base unit of the capability before it is checked.
    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    /// The value as given.
    pub fn value(&self) -> &ArgValue {
        &self.value
    }

    /// The unit, if any.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
}

impl Display for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} {unit}", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(value: $t) -> Self {
                    Arg::new(ArgValue::Int(i64::from(value)))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::new(ArgValue::Real(value))
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Arg::new(ArgValue::Real(f64::from(value)))
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::new(ArgValue::Text(value.to_string()))
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::new(ArgValue::Text(value))
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::new(ArgValue::Int(i64::from(value)))
    }
}

impl From<Voltage> for Arg {
    fn from(value: Voltage) -> Self {
        Arg::new(ArgValue::Real(value.as_volts())).with_unit("V")
    }
}

impl From<Current> for Arg {
    fn from(value: Current) -> Self {
        Arg::new(ArgValue::Real(value.as_amperes())).with_unit("A")
    }
}

impl From<Duration> for Arg {
    fn from(value: Duration) -> Self {
        Arg::new(ArgValue::Real(value.as_secs_f64())).with_unit("s")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::*;

    #[rstest]
    fn test_from_primitives() {
        assert_eq!(Arg::from(3u8).value(), &ArgValue::Int(3));
        assert_eq!(Arg::from(true).value(), &ArgValue::Int(1));
        assert_eq!(Arg::from(false).value(), &ArgValue::Int(0));
        assert_eq!(Arg::from(1.5).value(), &ArgValue::Real(1.5));
        assert_eq!(Arg::from("MAX").value(), &ArgValue::Text("MAX".to_string()));
        assert_eq!(Arg::from("MAX").unit(), None);
    }

    #[rstest]
    fn test_from_quantities() {
        let volt = Arg::from(Voltage::from_volts(12.0));
        assert_eq!(volt.value(), &ArgValue::Real(12.0));
        assert_eq!(volt.unit(), Some("V"));

        let curr = Arg::from(Current::from_amperes(1.5));
        assert_eq!(curr.value(), &ArgValue::Real(1.5));
        assert_eq!(curr.unit(), Some("A"));

        let delay = Arg::from(Duration::from_millis(1500));
        assert_eq!(delay.value(), &ArgValue::Real(1.5));
        assert_eq!(delay.unit(), Some("s"));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Arg::from("500").with_unit("mV").to_string(), "500 mV");
        assert_eq!(Arg::from(64).to_string(), "64");
    }
}
