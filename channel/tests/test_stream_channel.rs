//! Tests for the [`StreamChannel`] and the provided methods of [`InstrumentChannel`].

use std::{collections::VecDeque, time::Duration};

use rstest::*;

use instrument_channel::{CommunicationError, InstrumentChannel, StreamChannel};

/// Set up an empty channel with a 3 second timeout.
#[fixture]
fn empt_chan() -> StreamChannel<VecDeque<u8>> {
    StreamChannel::new(VecDeque::new(), Duration::from_secs(3))
}

/// Set up a channel whose pending data has no terminator and that does not wait at all.
#[fixture]
fn no_term_chan() -> StreamChannel<VecDeque<u8>> {
    StreamChannel::new(
        VecDeque::from(vec![b'r', b'e', b's', b'p']),
        Duration::from_secs(0),
    )
}

#[rstest]
fn test_terminator(mut empt_chan: StreamChannel<VecDeque<u8>>) {
    assert_eq!(empt_chan.get_terminator(), "\n");

    empt_chan.set_terminator("\r\n");
    assert_eq!(empt_chan.get_terminator(), "\r\n");
}

#[rstest]
fn test_timeout(mut empt_chan: StreamChannel<VecDeque<u8>>) {
    assert_eq!(empt_chan.get_timeout(), Duration::from_secs(3));

    empt_chan.set_timeout(Duration::from_millis(2000));
    assert_eq!(empt_chan.get_timeout(), Duration::from_millis(2000));
}

/// A `VecDeque` reads back what was written, so a write shows up with its terminator.
#[rstest]
fn test_write_appends_terminator(mut empt_chan: StreamChannel<VecDeque<u8>>) {
    empt_chan.set_terminator("\r\n");
    empt_chan.write("*RST").unwrap();

    let port = empt_chan.into_inner();
    assert_eq!(port, VecDeque::from(b"*RST\r\n".to_vec()));
}

/// The reply to a query is returned without terminator, but otherwise untouched.
#[rstest]
fn test_query_returns_reply_verbatim(mut empt_chan: StreamChannel<VecDeque<u8>>) {
    // The query is echoed back by the `VecDeque`, so the reply is the query itself.
    let resp = empt_chan.query(" MEAS:VOLT? ").unwrap();
    assert_eq!(resp, " MEAS:VOLT? ");
}

#[rstest]
fn test_read_until_terminator_timeout(mut no_term_chan: StreamChannel<VecDeque<u8>>) {
    match no_term_chan.read_until_terminator() {
        Err(CommunicationError::Timeout(timeout)) => {
            assert_eq!(Duration::from_secs(0), timeout);
        }
        _ => panic!("Expected timeout error, but got a different result."),
    }
}

#[rstest]
fn test_query_timeout(mut no_term_chan: StreamChannel<VecDeque<u8>>) {
    match no_term_chan.query("VOLT?") {
        Err(CommunicationError::TimeoutQuery { query, timeout }) => {
            assert_eq!("VOLT?", query);
            assert_eq!(Duration::from_secs(0), timeout);
        }
        _ => panic!("Expected timeout error, but got a different result."),
    }
}

/// Running out of data before the terminator is an I/O error from the port.
#[rstest]
fn test_read_eof_is_io_error() {
    let mut chan = StreamChannel::new(VecDeque::from(b"1.5".to_vec()), Duration::from_secs(3));
    assert!(matches!(
        chan.read_until_terminator(),
        Err(CommunicationError::Io(_))
    ));
}

#[rstest]
fn test_invalid_utf8_reply() {
    let port = VecDeque::from(vec![0xff, 0xfe, b'\n']);
    let mut chan = StreamChannel::new(port, Duration::from_secs(3));
    assert!(matches!(
        chan.read_until_terminator(),
        Err(CommunicationError::ResponseParseError(_))
    ));
}

/// Channels that only implement the required methods use the defaults.
struct BareChannel;

impl InstrumentChannel for BareChannel {
    fn read_exact(&mut self, _buf: &mut [u8]) -> Result<(), CommunicationError> {
        Ok(())
    }

    fn write_raw(&mut self, _data: &[u8]) -> Result<(), CommunicationError> {
        Ok(())
    }
}

#[rstest]
fn test_default_terminator_and_timeout() {
    let mut chan = BareChannel;
    chan.set_terminator("\r");
    assert_eq!(chan.get_terminator(), "\n");
    assert_eq!(chan.get_timeout(), Duration::from_secs(3));
}
