//! A scripted channel that stands in for an instrument in tests.

use std::collections::VecDeque;

use crate::{CommunicationError, InstrumentChannel};

/// A channel that plays back a script of expected commands and canned replies.
///
/// Every command the driver writes is compared, terminator included, with the next expected
/// command; a mismatch panics. Replies are handed out in order whenever the driver reads. When the
/// channel is dropped, [`LoopbackChannel::finalize`] checks that the whole script was used, so a
/// driver that sends too little also fails its test.
///
/// # Example
///
/// ```
/// use instrument_channel::{InstrumentChannel, LoopbackChannel};
///
/// let mut channel = LoopbackChannel::new(vec!["*RST", "*IDN?"], vec!["KEITHLEY,2200-30-5,1,1.0"]);
/// channel.write("*RST").unwrap();
/// assert_eq!("KEITHLEY,2200-30-5,1,1.0", channel.query("*IDN?").unwrap());
/// ```
#[derive(Debug)]
pub struct LoopbackChannel {
    expected: VecDeque<String>,
    replies: VecDeque<String>,
    pending: VecDeque<u8>,
    terminator: String,
}

impl LoopbackChannel {
    /// Create a new loopback channel with the default terminator `"\n"`.
    ///
    /// # Arguments:
    /// * `expected` - Commands the host must send to the instrument, in order, without terminator.
    /// * `replies` - Replies the instrument sends back, in order, without terminator.
    pub fn new<S: Into<String>>(expected: Vec<S>, replies: Vec<S>) -> Self {
        LoopbackChannel {
            expected: expected.into_iter().map(Into::into).collect(),
            replies: replies.into_iter().map(Into::into).collect(),
            pending: VecDeque::new(),
            terminator: "\n".to_string(),
        }
    }

    /// Panic if any expected command or reply was not used.
    ///
    /// This is called automatically on drop. Calling it manually is harmless.
    pub fn finalize(&mut self) {
        if let Some(cmd) = self.expected.pop_front() {
            panic!("Leftover expected commands found from host to instrument: {cmd}");
        }
        if let Some(reply) = self.replies.pop_front() {
            panic!("Leftover expected replies found from instrument to host: {reply}");
        }
    }

    /// Assert that the terminator currently set on the channel is `expected`.
    pub fn test_terminator(&self, expected: &str) {
        assert_eq!(
            expected, self.terminator,
            "Expected terminator '{expected}', got '{}'",
            self.terminator
        );
    }

    /// Next byte of the current reply. Loads the next reply when the current one is used up.
    fn next_byte(&mut self) -> u8 {
        loop {
            if let Some(byte) = self.pending.pop_front() {
                return byte;
            }
            let reply = self
                .replies
                .pop_front()
                .expect("No more replies were expected from instrument to host.");
            self.pending
                .extend(format!("{reply}{}", self.terminator).into_bytes());
        }
    }
}

impl InstrumentChannel for LoopbackChannel {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), CommunicationError> {
        for byte in buf.iter_mut() {
            *byte = self.next_byte();
        }
        Ok(())
    }

    fn write_raw(&mut self, data: &[u8]) -> Result<(), CommunicationError> {
        let exp = self
            .expected
            .pop_front()
            .expect("No more commands were expected from host to instrument.");
        let exp = format!("{exp}{}", self.terminator);
        assert_eq!(
            exp.as_bytes(),
            data,
            "Expected command '{exp:?}', got '{:?}'",
            String::from_utf8_lossy(data)
        );
        Ok(())
    }

    fn get_terminator(&self) -> &str {
        self.terminator.as_str()
    }

    fn set_terminator(&mut self, terminator: &str) {
        self.terminator = terminator.to_string();
    }
}

impl Drop for LoopbackChannel {
    fn drop(&mut self) {
        // A second panic while unwinding would abort the test binary.
        if !std::thread::panicking() {
            self.finalize();
        }
    }
}
