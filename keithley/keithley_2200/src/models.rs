//! Ratings of the supported power supply models.
//!
//! The maximum output voltage and current differ between the models of the family. All
//! model-dependent checks, for setpoints and list steps alike, go through [`bound`].

use std::fmt::Display;

/// A quantity whose limit depends on the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Output voltage in V.
    Voltage,
    /// Output current in A.
    Current,
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Voltage => write!(f, "voltage"),
            Quantity::Current => write!(f, "current"),
        }
    }
}

/// Output ratings of one model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelRating {
    /// Model identifier as reported in the second field of `*IDN?`.
    pub model: &'static str,
    /// Maximum output voltage in V.
    pub max_voltage: f64,
    /// Maximum output current in A.
    pub max_current: f64,
}

/// All models with known ratings.
pub const MODEL_RATINGS: &[ModelRating] = &[
    ModelRating { model: "2200-20-5", max_voltage: 20.0, max_current: 5.0 },
    ModelRating { model: "2200-30-5", max_voltage: 30.0, max_current: 5.0 },
    ModelRating { model: "2200-32-3", max_voltage: 32.0, max_current: 3.0 },
    ModelRating { model: "2200-60-2", max_voltage: 60.0, max_current: 2.5 },
    ModelRating { model: "2200-72-1", max_voltage: 72.0, max_current: 1.2 },
    ModelRating { model: "2220-30-1", max_voltage: 30.0, max_current: 1.5 },
    ModelRating { model: "2220G-30-1", max_voltage: 30.0, max_current: 1.5 },
    ModelRating { model: "2230-30-1", max_voltage: 30.0, max_current: 5.0 },
    ModelRating { model: "2230G-30-1", max_voltage: 30.0, max_current: 5.0 },
    ModelRating { model: "2231A-30-3", max_voltage: 30.0, max_current: 3.0 },
];

/// Look up the ratings of a model. Model names are compared case-insensitively.
pub fn rating(model: &str) -> Option<&'static ModelRating> {
    MODEL_RATINGS
        .iter()
        .find(|rating| rating.model.eq_ignore_ascii_case(model.trim()))
}

/// Inclusive `(min, max)` bound of `quantity` for `model`, or `None` for unknown models.
pub fn bound(quantity: Quantity, model: &str) -> Option<(f64, f64)> {
    let rating = rating(model)?;
    let max = match quantity {
        Quantity::Voltage => rating.max_voltage,
        Quantity::Current => rating.max_current,
    };
    Some((0.0, max))
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("2200-72-1", 1.2)]
    #[case("2220-30-1", 1.5)]
    #[case("2220G-30-1", 1.5)]
    #[case("2200-60-2", 2.5)]
    #[case("2200-32-3", 3.0)]
    #[case("2231A-30-3", 3.0)]
    #[case("2200-20-5", 5.0)]
    #[case("2200-30-5", 5.0)]
    #[case("2230-30-1", 5.0)]
    #[case("2230G-30-1", 5.0)]
    fn test_current_bound(#[case] model: &str, #[case] max: f64) {
        assert_eq!(bound(Quantity::Current, model), Some((0.0, max)));
    }

    #[rstest]
    #[case("2200-20-5", 20.0)]
    #[case("2200-30-5", 30.0)]
    #[case("2230G-30-1", 30.0)]
    #[case("2230-30-1", 30.0)]
    #[case("2220G-30-1", 30.0)]
    #[case("2220-30-1", 30.0)]
    #[case("2231A-30-3", 30.0)]
    #[case("2200-32-3", 32.0)]
    #[case("2200-60-2", 60.0)]
    #[case("2200-72-1", 72.0)]
    fn test_voltage_bound(#[case] model: &str, #[case] max: f64) {
        assert_eq!(bound(Quantity::Voltage, model), Some((0.0, max)));
    }

    #[rstest]
    fn test_case_insensitive() {
        assert_eq!(rating("2220g-30-1").map(|r| r.model), Some("2220G-30-1"));
    }

    #[rstest]
    #[case("2280S-32-6")]
    #[case("")]
    fn test_unknown_model(#[case] model: &str) {
        assert!(rating(model).is_none());
        assert!(bound(Quantity::Voltage, model).is_none());
    }
}
