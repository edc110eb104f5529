//! Validation rules for capability parameters.
//!
//! Every parameter has exactly one [`Rule`]. Checking an argument against its rule either yields
//! the text that goes into the command or a single [`ValidationError`]. Only model-dependent
//! bounds cannot be decided here, those come back pending and are finished by the
//! driver once the model is known.

use crate::{
    Arg, ArgValue, ValidationError,
    models::Quantity,
    units::{BaseUnit, format_value},
};

/// How a toggle is sent to the instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleForm {
    /// `ON` / `OFF`
    Word,
    /// `1` / `0`, for lines that carry a digital level.
    Digit,
}

/// Bound of a numeric parameter, after conversion to its base unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Inclusive range that is the same for all models.
    Fixed {
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },
    /// Any value at least this large.
    AtLeast(f64),
    /// Inclusive range that depends on the model, see [`crate::models`].
    Model(Quantity),
}

/// The constraint a single parameter must satisfy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// `0`, `1`, `ON`, or `OFF`, case-insensitive.
    Toggle(ToggleForm),
    /// An integer inside one of the inclusive ranges, or one of the symbols.
    Integer {
        /// Allowed inclusive ranges.
        allowed: &'static [(i64, i64)],
        /// Symbolic values that are passed through, e.g. `MIN` and `MAX`.
        symbols: &'static [&'static str],
    },
    /// One of a fixed set of tokens, case-insensitive.
    Token(&'static [&'static str]),
    /// A number with unit, or one of the symbols.
    Numeric {
        /// Unit the value is normalized to and sent in.
        unit: BaseUnit,
        /// Allowed values in base units.
        bound: Bound,
        /// Symbolic values that bypass the bound, e.g. `MIN`, `MAX`, and `DEF`.
        symbols: &'static [&'static str],
    },
}

/// Outcome of checking an argument against its rule.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Checked {
    /// The argument is valid and formatted for the command.
    Ready(String),
    /// The argument is a valid number in base units, but its bound depends on the model.
    Pending {
        quantity: Quantity,
        value: f64,
        unit: BaseUnit,
    },
}

impl Rule {
    /// Check an argument against this rule.
    pub(crate) fn check(&self, arg: &Arg) -> Result<Checked, ValidationError> {
        match *self {
            Rule::Toggle(form) => {
                no_unit(arg)?;
                check_toggle(arg.value(), form).map(Checked::Ready)
            }
            Rule::Integer { allowed, symbols } => {
                no_unit(arg)?;
                if let Some(symbol) = find_symbol(arg.value(), symbols) {
                    return Ok(Checked::Ready(symbol));
                }
                let value = as_integer(arg.value())?;
                if allowed.iter().any(|(min, max)| (*min..=*max).contains(&value)) {
                    Ok(Checked::Ready(value.to_string()))
                } else {
                    Err(ValidationError::IntValueOutOfRange {
                        value,
                        allowed: describe_ranges(allowed),
                    })
                }
            }
            Rule::Token(tokens) => {
                no_unit(arg)?;
                find_symbol(arg.value(), tokens)
                    .map(Checked::Ready)
                    .ok_or_else(|| ValidationError::UnknownToken {
                        value: arg.value().to_string(),
                        allowed: tokens.join(", "),
                    })
            }
            Rule::Numeric {
                unit,
                bound,
                symbols,
            } => {
                if let Some(symbol) = find_symbol(arg.value(), symbols) {
                    return Ok(Checked::Ready(symbol));
                }
                let value = unit.normalize(as_number(arg.value())?, arg.unit())?;
                match bound {
                    Bound::Fixed { min, max } => {
                        check_range(value, min, max)?;
                        Ok(Checked::Ready(format_value(value, unit)))
                    }
                    Bound::AtLeast(min) => {
                        check_range(value, min, f64::INFINITY)?;
                        Ok(Checked::Ready(format_value(value, unit)))
                    }
                    Bound::Model(quantity) => Ok(Checked::Pending {
                        quantity,
                        value,
                        unit,
                    }),
                }
            }
        }
    }
}

/// Check that `value` lies inside `[min, max]`. NaN never does.
pub(crate) fn check_range(value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::FloatValueOutOfRange { value, min, max })
    }
}

fn no_unit(arg: &Arg) -> Result<(), ValidationError> {
    match arg.unit() {
        Some(unit) => Err(ValidationError::UnexpectedUnit(unit.to_string())),
        None => Ok(()),
    }
}

fn check_toggle(value: &ArgValue, form: ToggleForm) -> Result<String, ValidationError> {
    let state = match value {
        ArgValue::Int(0) => false,
        ArgValue::Int(1) => true,
        ArgValue::Text(text) => match text.trim().to_ascii_uppercase().as_str() {
            "0" | "OFF" => false,
            "1" | "ON" => true,
            _ => return Err(ValidationError::InvalidToggle(text.clone())),
        },
        other => return Err(ValidationError::InvalidToggle(other.to_string())),
    };
    let token = match (form, state) {
        (ToggleForm::Word, true) => "ON",
        (ToggleForm::Word, false) => "OFF",
        (ToggleForm::Digit, true) => "1",
        (ToggleForm::Digit, false) => "0",
    };
    Ok(token.to_string())
}

/// The upper-cased text if it is one of `symbols`.
fn find_symbol(value: &ArgValue, symbols: &[&str]) -> Option<String> {
    let ArgValue::Text(text) = value else {
        return None;
    };
    let upper = text.trim().to_ascii_uppercase();
    symbols.contains(&upper.as_str()).then_some(upper)
}

fn as_integer(value: &ArgValue) -> Result<i64, ValidationError> {
    match value {
        ArgValue::Int(val) => Ok(*val),
        // Integral floats such as 3.0 are accepted. The range check bounds the cast.
        ArgValue::Real(val) if val.fract() == 0.0 && val.abs() < 1e15 => Ok(*val as i64),
        ArgValue::Real(val) => Err(ValidationError::NotAnInteger(val.to_string())),
        ArgValue::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::NotAnInteger(text.clone())),
    }
}

fn as_number(value: &ArgValue) -> Result<f64, ValidationError> {
    let number = match value {
        ArgValue::Int(val) => *val as f64,
        ArgValue::Real(val) => *val,
        ArgValue::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::NotANumber(text.clone()))?,
    };
    if number.is_finite() {
        Ok(number)
    } else {
        Err(ValidationError::NotANumber(value.to_string()))
    }
}

/// Describe allowed ranges for error messages, e.g. `[1, 22] or 64`.
fn describe_ranges(allowed: &[(i64, i64)]) -> String {
    allowed
        .iter()
        .map(|(min, max)| {
            if min == max {
                min.to_string()
            } else {
                format!("[{min}, {max}]")
            }
        })
        .collect::<Vec<_>>()
        .join(" or ")
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::*;

    const BYTE: Rule = Rule::Integer {
        allowed: &[(0, 255)],
        symbols: &[],
    };
    const KEY: Rule = Rule::Integer {
        allowed: &[(1, 22), (64, 64)],
        symbols: &[],
    };
    const SETPOINT: Rule = Rule::Numeric {
        unit: BaseUnit::Volt,
        bound: Bound::Fixed {
            min: 0.0,
            max: 30.0,
        },
        symbols: &["MIN", "MAX", "DEF"],
    };

    fn ready(text: &str) -> Result<Checked, ValidationError> {
        Ok(Checked::Ready(text.to_string()))
    }

    #[rstest]
    #[case(Arg::from(1), "ON")]
    #[case(Arg::from(0), "OFF")]
    #[case(Arg::from("on"), "ON")]
    #[case(Arg::from("Off"), "OFF")]
    #[case(Arg::from("1"), "ON")]
    #[case(Arg::from(true), "ON")]
    fn test_toggle_word(#[case] arg: Arg, #[case] expected: &str) {
        assert_eq!(Rule::Toggle(ToggleForm::Word).check(&arg), ready(expected));
    }

    #[rstest]
    #[case(Arg::from("ON"), "1")]
    #[case(Arg::from(0), "0")]
    fn test_toggle_digit(#[case] arg: Arg, #[case] expected: &str) {
        assert_eq!(Rule::Toggle(ToggleForm::Digit).check(&arg), ready(expected));
    }

    #[rstest]
    #[case(Arg::from(2))]
    #[case(Arg::from(-1))]
    #[case(Arg::from(1.0))]
    #[case(Arg::from("yes"))]
    #[case(Arg::from(""))]
    fn test_toggle_invalid(#[case] arg: Arg) {
        assert!(matches!(
            Rule::Toggle(ToggleForm::Word).check(&arg),
            Err(ValidationError::InvalidToggle(_))
        ));
    }

    #[rstest]
    #[case(Arg::from(0), "0")]
    #[case(Arg::from(255), "255")]
    #[case(Arg::from("17"), "17")]
    #[case(Arg::from(8.0), "8")]
    fn test_integer(#[case] arg: Arg, #[case] expected: &str) {
        assert_eq!(BYTE.check(&arg), ready(expected));
    }

    #[rstest]
    #[case(1)]
    #[case(22)]
    #[case(64)]
    fn test_key_codes(#[case] code: i64) {
        assert_eq!(KEY.check(&Arg::from(code)), ready(&code.to_string()));
    }

    #[rstest]
    #[case(0)]
    #[case(23)]
    #[case(63)]
    #[case(65)]
    fn test_key_codes_out_of_range(#[case] code: i64) {
        assert_eq!(
            KEY.check(&Arg::from(code)),
            Err(ValidationError::IntValueOutOfRange {
                value: code,
                allowed: "[1, 22] or 64".to_string(),
            })
        );
    }

    #[rstest]
    #[case(Arg::from(2.5))]
    #[case(Arg::from("abc"))]
    #[case(Arg::from("MAX"))]
    fn test_integer_not_an_integer(#[case] arg: Arg) {
        assert!(matches!(
            BYTE.check(&arg),
            Err(ValidationError::NotAnInteger(_))
        ));
    }

    #[rstest]
    fn test_integer_symbols() {
        let rule = Rule::Integer {
            allowed: &[(2, 80)],
            symbols: &["MIN", "MAX"],
        };
        assert_eq!(rule.check(&Arg::from("max")), ready("MAX"));
        assert!(rule.check(&Arg::from("DEF")).is_err());
    }

    #[rstest]
    fn test_unit_on_integer() {
        assert_eq!(
            BYTE.check(&Arg::from(3).with_unit("V")),
            Err(ValidationError::UnexpectedUnit("V".to_string()))
        );
    }

    #[rstest]
    fn test_token() {
        let rule = Rule::Token(&["MAN", "IMM", "EXT", "BUS"]);
        assert_eq!(rule.check(&Arg::from("bus")), ready("BUS"));
        assert_eq!(
            rule.check(&Arg::from("TIMER")),
            Err(ValidationError::UnknownToken {
                value: "TIMER".to_string(),
                allowed: "MAN, IMM, EXT, BUS".to_string(),
            })
        );
        assert!(rule.check(&Arg::from(1)).is_err());
    }

    #[rstest]
    #[case(Arg::from(0), "0V")]
    #[case(Arg::from(30), "30V")]
    #[case(Arg::from("12.5"), "12.5V")]
    #[case(Arg::from("500").with_unit("mV"), "0.5V")]
    #[case(Arg::from("0.5").with_unit("V"), "0.5V")]
    #[case(Arg::from("max"), "MAX")]
    #[case(Arg::from("Def"), "DEF")]
    fn test_numeric_fixed(#[case] arg: Arg, #[case] expected: &str) {
        assert_eq!(SETPOINT.check(&arg), ready(expected));
    }

    #[rstest]
    #[case(Arg::from(30.001))]
    #[case(Arg::from(-0.1))]
    #[case(Arg::from(0.031).with_unit("kV"))]
    fn test_numeric_fixed_out_of_range(#[case] arg: Arg) {
        assert!(matches!(
            SETPOINT.check(&arg),
            Err(ValidationError::FloatValueOutOfRange { .. })
        ));
    }

    #[rstest]
    #[case(Arg::from("abc"))]
    #[case(Arg::from("NaN"))]
    #[case(Arg::from(f64::INFINITY))]
    fn test_numeric_not_a_number(#[case] arg: Arg) {
        assert!(matches!(
            SETPOINT.check(&arg),
            Err(ValidationError::NotANumber(_))
        ));
    }

    #[rstest]
    fn test_numeric_model_pending() {
        let rule = Rule::Numeric {
            unit: BaseUnit::Ampere,
            bound: Bound::Model(Quantity::Current),
            symbols: &["MIN", "MAX", "DEF"],
        };
        assert_eq!(
            rule.check(&Arg::from(1500).with_unit("mA")),
            Ok(Checked::Pending {
                quantity: Quantity::Current,
                value: 1.5,
                unit: BaseUnit::Ampere,
            })
        );
        assert_eq!(rule.check(&Arg::from("MAX")), ready("MAX"));
    }

    #[rstest]
    fn test_numeric_at_least() {
        let rule = Rule::Numeric {
            unit: BaseUnit::Second,
            bound: Bound::AtLeast(0.0),
            symbols: &[],
        };
        assert_eq!(rule.check(&Arg::from(250).with_unit("ms")), ready("0.25s"));
        assert!(rule.check(&Arg::from(-1)).is_err());
    }

    #[rstest]
    fn test_check_range_nan() {
        assert!(check_range(f64::NAN, 0.0, 1.0).is_err());
    }
}
