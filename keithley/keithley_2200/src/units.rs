//! Module to handle unit prefixes and conversion to base units.

use std::fmt::Display;

use crate::ValidationError;

/// The base units values are sent to the instrument in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUnit {
    /// Volt
    Volt,
    /// Ampere
    Ampere,
    /// Second
    Second,
}

impl BaseUnit {
    /// Unit symbol as it is appended to values in commands.
    pub fn symbol(&self) -> &'static str {
        match self {
            BaseUnit::Volt => "V",
            BaseUnit::Ampere => "A",
            BaseUnit::Second => "s",
        }
    }

    /// Convert a value given in `unit` to this base unit.
    ///
    /// Units are compared case-insensitively, so `"MV"` is millivolt and never megavolt. No unit
    /// means the value already is in the base unit.
    pub(crate) fn normalize(&self, value: f64, unit: Option<&str>) -> Result<f64, ValidationError> {
        let Some(unit) = unit else {
            return Ok(value);
        };
        let prefix = match (self, unit.trim().to_ascii_lowercase().as_str()) {
            (BaseUnit::Volt, "v") | (BaseUnit::Ampere, "a") | (BaseUnit::Second, "s") => {
                Prefix::None
            }
            (BaseUnit::Volt, "mv") | (BaseUnit::Ampere, "ma") | (BaseUnit::Second, "ms") => {
                Prefix::Milli
            }
            (BaseUnit::Volt, "kv") => Prefix::Kilo,
            _ => {
                return Err(ValidationError::UnknownUnit {
                    unit: unit.to_string(),
                    base: self.symbol(),
                });
            }
        };
        Ok(prefix.apply(value))
    }
}

impl Display for BaseUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy)]
enum Prefix {
    None,
    Milli,
    Kilo,
}

impl Prefix {
    fn apply(self, value: f64) -> f64 {
        // Divide instead of multiplying by 1e-3, such that 500 mV is exactly 0.5 V.
        match self {
            Prefix::None => value,
            Prefix::Milli => value / 1000.0,
            Prefix::Kilo => value * 1000.0,
        }
    }
}

/// Format a value in base units the way it is sent to the instrument, e.g. `1.5A`.
pub(crate) fn format_value(value: f64, unit: BaseUnit) -> String {
    // -0 would otherwise be sent as "-0".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}{}", unit.symbol())
}
