//! A channel over any byte stream.
//!
//! It can be built from any type that implements [`std::io::Read`] and [`std::io::Write`], such
//! as [`std::net::TcpStream`] for a LAN-to-serial bridge or a boxed [`serialport::SerialPort`].

use std::{
    io::{Read, Write},
    time::Duration,
};

use crate::{CommunicationError, InstrumentChannel};

/// A general instrument channel that wraps a [`std::io::Read`] + [`std::io::Write`] port.
///
/// # Example
///
/// ```no_run
/// use std::{net::TcpStream, time::Duration};
///
/// use instrument_channel::{InstrumentChannel, StreamChannel};
///
/// let stream = TcpStream::connect("192.168.10.1:4001").unwrap();
/// let mut channel = StreamChannel::new(stream, Duration::from_secs(2));
/// println!("{}", channel.query("*IDN?").unwrap());
/// ```
#[derive(Debug)]
pub struct StreamChannel<P: Read + Write> {
    port: P,
    terminator: String,
    timeout: Duration,
}

impl<P: Read + Write> StreamChannel<P> {
    /// Create a new [`StreamChannel`] with the default terminator `"\n"`.
    pub fn new(port: P, timeout: Duration) -> Self {
        Self {
            port,
            terminator: "\n".to_string(),
            timeout,
        }
    }

    /// Change the time to wait for a response.
    ///
    /// Note that this only bounds how long we keep reading, the port itself may have a timeout
    /// of its own.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Release the wrapped port.
    pub fn into_inner(self) -> P {
        self.port
    }
}

impl<P: Read + Write> InstrumentChannel for StreamChannel<P> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), CommunicationError> {
        self.port.read_exact(buf)?;
        Ok(())
    }

    fn write_raw(&mut self, data: &[u8]) -> Result<(), CommunicationError> {
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    fn get_terminator(&self) -> &str {
        self.terminator.as_str()
    }

    fn set_terminator(&mut self, terminator: &str) {
        self.terminator = terminator.to_string();
    }

    fn get_timeout(&self) -> Duration {
        self.timeout
    }
}
