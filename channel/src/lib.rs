//! instrument_channel: blocking, line-oriented channels to SCPI instruments
//!
//! This crate provides the communication side of an instrument driver. A driver only needs two
//! primitives from a channel: writing a command and querying a response. Both are provided by the
//! [`InstrumentChannel`] trait, which implementors get for free as soon as they can write raw
//! bytes and read an exact number of bytes.
//!
//! # Currently implemented channels are:
//! - [`StreamChannel`]: any type that implements [`std::io::Read`] and [`std::io::Write`].
//! - [`SerialInterface`]: a blocking serial port using the [`serialport`] crate (feature `serial`).
//! - [`LoopbackChannel`]: a scripted channel to test instrument drivers without hardware.
//!
//! Every command is ASCII text followed by a terminator, usually `"\n"`. Responses are read until
//! the terminator is found or the channel timeout has passed.
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

mod loopback;
#[cfg(feature = "serial")]
mod serial;
mod stream;

pub use loopback::LoopbackChannel;
#[cfg(feature = "serial")]
pub use serial::SerialInterface;
pub use stream::StreamChannel;

use std::time::{Duration, Instant};

use log::{debug, warn};
use thiserror::Error;

/// Timeout used by channels that do not provide their own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// The error enum for everything that can go wrong on the wire.
///
/// Drivers should pass these errors on to the caller unmodified, such that a timeout or a lost
/// connection can be told apart from an invalid argument.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CommunicationError {
    /// Error when reading from/writing to a channel. See [`std::io::Error`] for more details.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Response from the instrument could not be decoded or parsed. This error contains the
    /// response that was received from the instrument.
    #[error("Response from instrument could not be parsed. Response was: {0}")]
    ResponseParseError(String),
    #[cfg(feature = "serial")]
    /// Serial port errors can occur when opening a serial channel. See the [`serialport::Error`]
    /// documentation for more information.
    #[error(transparent)]
    Serialport(#[from] serialport::Error),
    /// Timeout occurred while waiting for a response from the instrument. The error contains the
    /// timeout that was exceeded.
    #[error(
        "Timeout occured while waiting for a response from the instrument. Timeout was set to {0:?}."
    )]
    Timeout(Duration),
    /// Timeout occurred while waiting for a response to a query. The error contains the query
    /// that was sent and the timeout that was exceeded.
    #[error(
        "Timeout occured while waiting for a response to query: {query}. Timeout was set to {timeout:?}."
    )]
    TimeoutQuery {
        /// The query that timed out.
        query: String,
        /// The timeout that was set.
        timeout: Duration,
    },
}

/// The `InstrumentChannel` trait defines how a driver talks to its instrument.
///
/// Only [`InstrumentChannel::write_raw`] and [`InstrumentChannel::read_exact`] must be
/// implemented. Writing commands, reading terminated lines, and querying are provided on top of
/// them.
pub trait InstrumentChannel {
    /// Read exactly as many bytes from the channel as fit into `buf`.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), CommunicationError>;

    /// Write all bytes in `data` to the channel and flush it.
    fn write_raw(&mut self, data: &[u8]) -> Result<(), CommunicationError>;

    /// Get the terminator that ends every command and response.
    fn get_terminator(&self) -> &str {
        "\n"
    }

    /// Set the terminator of the channel from a `&str`.
    ///
    /// # Arguments:
    /// - `_terminator` - A string slice that will be used as the terminator for commands
    fn set_terminator(&mut self, _terminator: &str) {}

    /// Get the time to wait for a response before giving up.
    fn get_timeout(&self) -> Duration {
        DEFAULT_TIMEOUT
    }

    /// Send a command to the instrument.
    ///
    /// The terminator is appended and the whole line is written in one go.
    ///
    /// # Arguments:
    /// - `cmd` - The command to send, without terminator.
    fn write(&mut self, cmd: &str) -> Result<(), CommunicationError> {
        let line = format!("{cmd}{}", self.get_terminator());
        debug!("Sending command: {cmd}");
        self.write_raw(line.as_bytes())
    }

    /// Read from the channel until the terminator is received.
    ///
    /// The terminator is stripped from the returned string, everything else is returned as it was
    /// received. If no terminator shows up within the timeout, a [`CommunicationError::Timeout`]
    /// is returned.
    fn read_until_terminator(&mut self) -> Result<String, CommunicationError> {
        let terminator = self.get_terminator().as_bytes().to_vec();
        let timeout = self.get_timeout();
        let mut response: Vec<u8> = Vec::new();
        let mut single_buf = [0u8];

        let tic = Instant::now();
        while tic.elapsed() < timeout {
            self.read_exact(&mut single_buf)?;
            response.push(single_buf[0]);
            if response.ends_with(&terminator) {
                response.truncate(response.len() - terminator.len());
                return match String::from_utf8(response) {
                    Ok(reply) => {
                        debug!("Received reply: {reply}");
                        Ok(reply)
                    }
                    Err(err) => {
                        let lossy = String::from_utf8_lossy(err.as_bytes()).into_owned();
                        warn!("Received invalid UTF-8 data: {lossy}");
                        Err(CommunicationError::ResponseParseError(lossy))
                    }
                };
            }
        }
        Err(CommunicationError::Timeout(timeout))
    }

    /// Query the instrument with a command and return the response as a String.
    ///
    /// # Arguments
    /// * `cmd` - The command to send to the instrument for which we expect a response.
    fn query(&mut self, cmd: &str) -> Result<String, CommunicationError> {
        self.write(cmd)?;
        match self.read_until_terminator() {
            Err(CommunicationError::Timeout(timeout)) => Err(CommunicationError::TimeoutQuery {
                query: cmd.to_string(),
                timeout,
            }),
            other => other,
        }
    }
}
