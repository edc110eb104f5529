//! Parse the identification string of the instrument.

use std::fmt::Display;

use instrument_channel::CommunicationError;

/// The identification of the instrument, as reported by `*IDN?`.
///
/// A typical response is `Keithley instruments, 2220-30-1, 9030120, 1.06-1.04`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Manufacturer name.
    pub manufacturer: String,
    /// Model identifier, with all whitespace removed, e.g. `2220-30-1`.
    pub model: String,
    /// Serial number of the unit.
    pub serial_number: String,
    /// Firmware version. Any further comma separated fields are kept here as well.
    pub firmware: String,
}

impl Identity {
    /// Parse the response to `*IDN?`.
    ///
    /// Responses with less than four comma separated fields cannot be parsed and return a
    /// [`CommunicationError::ResponseParseError`] containing the full response.
    pub fn from_idn(response: &str) -> Result<Self, CommunicationError> {
        let mut fields = response.trim().splitn(4, ',');
        let (Some(manufacturer), Some(model), Some(serial_number), Some(firmware)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(CommunicationError::ResponseParseError(response.to_string()));
        };

        let model: String = model.chars().filter(|c| !c.is_whitespace()).collect();
        if model.is_empty() {
            return Err(CommunicationError::ResponseParseError(response.to_string()));
        }

        Ok(Identity {
            manufacturer: manufacturer.trim().to_string(),
            model,
            serial_number: serial_number.trim().to_string(),
            firmware: firmware.trim().to_string(),
        })
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} (SN {}, firmware {})",
            self.manufacturer, self.model, self.serial_number, self.firmware
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("Keithley instruments, 2220-30-1, 9030120, 1.06-1.04", "2220-30-1")]
    #[case("KEITHLEY INSTRUMENTS,2200-72-1,123,1.0", "2200-72-1")]
    #[case("Keithley instruments, 2231A - 30 - 3, 1, 1.0", "2231A-30-3")]
    fn test_model(#[case] response: &str, #[case] model: &str) {
        assert_eq!(Identity::from_idn(response).unwrap().model, model);
    }

    #[rstest]
    fn test_all_fields() {
        let idn = Identity::from_idn("Keithley instruments, 2200-20-5, 9031234, 1.13-1.04\n")
            .unwrap();
        assert_eq!(
            idn,
            Identity {
                manufacturer: "Keithley instruments".to_string(),
                model: "2200-20-5".to_string(),
                serial_number: "9031234".to_string(),
                firmware: "1.13-1.04".to_string(),
            }
        );
        assert_eq!(
            idn.to_string(),
            "Keithley instruments 2200-20-5 (SN 9031234, firmware 1.13-1.04)"
        );
    }

    #[rstest]
    fn test_extra_fields_in_firmware() {
        let idn = Identity::from_idn("Keithley,2230-30-1,1,1.0,extra").unwrap();
        assert_eq!(idn.firmware, "1.0,extra");
    }

    #[rstest]
    #[case("")]
    #[case("Keithley instruments, 2220-30-1")]
    #[case("Keithley, , 1, 1.0")]
    fn test_invalid(#[case] response: &str) {
        assert!(matches!(
            Identity::from_idn(response),
            Err(CommunicationError::ResponseParseError(_))
        ));
    }
}
