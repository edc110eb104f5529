//! Blocking serial channels using the `serialport` crate.

use serialport::{SerialPort, SerialPortBuilder};

use crate::{CommunicationError, DEFAULT_TIMEOUT, StreamChannel};

/// Shortcuts to open a serial port as a [`StreamChannel`].
///
/// The returned channel uses the timeout that is configured on the port builder and the
/// default terminator `"\n"`, which can be changed with
/// [`crate::InstrumentChannel::set_terminator`].
#[derive(Debug)]
pub struct SerialInterface {}

impl SerialInterface {
    /// Open a serial port with the given baud rate and a timeout of three seconds.
    ///
    /// All other settings are left at the [`serialport`] defaults (8N1, no flow control).
    ///
    /// # Arguments
    /// * `port` - The name of the serial port, e.g., `"/dev/ttyUSB0"` or `"COM3"`.
    /// * `baud_rate` - The baud rate to open the port with.
    pub fn simple(
        port: &str,
        baud_rate: u32,
    ) -> Result<StreamChannel<Box<dyn SerialPort>>, CommunicationError> {
        let spb = serialport::new(port, baud_rate).timeout(DEFAULT_TIMEOUT);
        Self::full(spb)
    }

    /// Open a fully configured serial port.
    ///
    /// # Arguments
    /// * `spb` - A [`serialport::SerialPortBuilder`] that is opened as is.
    pub fn full(
        spb: SerialPortBuilder,
    ) -> Result<StreamChannel<Box<dyn SerialPort>>, CommunicationError> {
        let port = spb.open()?;
        let timeout = port.timeout();
        Ok(StreamChannel::new(port, timeout))
    }
}
