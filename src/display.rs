//! Core display operations
//!
//! [`Display`] is the public face of the driver. It owns one [`ByteSink`]
//! and one [`DelayNs`] provider for its whole lifetime, runs the device
//! initialization sequence at construction, and maps each high-level
//! operation onto the byte sequences defined in [`command`].
//!
//! ## Timing
//!
//! The device needs a short settling interval after every flushed
//! command before it accepts the next byte. The driver enforces this
//! with a real timed wait through the injected [`DelayNs`]; the interval
//! is configurable per instance via [`Display::with_settle_time`] and
//! defaults to [`DEFAULT_SETTLE_US`].
//!
//! ## Lifecycle
//!
//! Construction either yields a fully initialized controller or an
//! error; there is no half-initialized state to observe. Disposal is
//! `drop`, or [`Display::release`] to get the sink and delay provider
//! back. Both paths release the transport exactly once.

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::command::{
    self, CLEAR, CURSOR_MOVE, DISPLAY_ON_CURSOR_OFF, ENTRY_MODE_RIGHT, FUNCTION_SET_8BIT,
};
use crate::error::Error;
use crate::interface::ByteSink;

type DisplayResult<S> = core::result::Result<(), Error<S>>;

/// Default settling interval after each flush, in microseconds
///
/// Long enough to cover the controller's slowest instruction (clear,
/// 1.52ms per the HD44780 datasheet) with some margin.
pub const DEFAULT_SETTLE_US: u32 = 2_000;

/// Driver for the Pertelian X2040 character display
///
/// Generic over the byte transport and the delay provider. See the
/// [crate docs](crate) for a usage example.
pub struct Display<S, D>
where
    S: ByteSink,
    D: DelayNs,
{
    /// Byte transport to the device
    sink: S,
    /// Delay provider for inter-command settling
    delay: D,
    /// Settling interval after each flush, in microseconds
    settle_us: u32,
}

impl<S, D> Display<S, D>
where
    S: ByteSink,
    D: DelayNs,
{
    /// Create a controller and initialize the device
    ///
    /// Takes ownership of the sink and delay provider and runs the fixed
    /// initialization sequence before returning. Uses the default
    /// settling interval ([`DEFAULT_SETTLE_US`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] if the transport fails during
    /// initialization. The sink is dropped (and with it the physical
    /// channel) on that path.
    pub fn new(sink: S, delay: D) -> Result<Self, Error<S>> {
        Self::with_settle_time(sink, delay, DEFAULT_SETTLE_US)
    }

    /// Create a controller with an explicit settling interval
    ///
    /// `settle_us` is the wait applied after every flushed command, in
    /// microseconds. Use this when the default is too conservative for
    /// your device revision, or too short for a slow bridge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] if the transport fails during
    /// initialization.
    pub fn with_settle_time(sink: S, delay: D, settle_us: u32) -> Result<Self, Error<S>> {
        let mut display = Self {
            sink,
            delay,
            settle_us,
        };
        display.init()?;
        Ok(display)
    }

    /// Run the device initialization sequence
    ///
    /// Order is load-bearing: the interface width must be configured
    /// before the device will interpret the remaining codes correctly.
    fn init(&mut self) -> DisplayResult<S> {
        debug!("initializing display");
        self.send_code(FUNCTION_SET_8BIT)?;
        self.send_code(ENTRY_MODE_RIGHT)?;
        self.send_code(CURSOR_MOVE)?;
        self.send_code(DISPLAY_ON_CURSOR_OFF)?;
        self.send_code(CLEAR)?;
        Ok(())
    }

    /// Write text to one of the four display lines
    ///
    /// `line` is 0-based, top to bottom. Text longer than
    /// [`LINE_WIDTH`](crate::command::LINE_WIDTH) characters runs into
    /// the interleaved continuation line; the device does not clip.
    ///
    /// All validation happens before any byte is transmitted, so a
    /// failed call leaves the wire untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::LineOutOfRange`] if `line` is not in `0..=3`
    /// - [`Error::EmptyText`] if `text` is empty
    /// - [`Error::NonAsciiText`] if `text` contains a non-ASCII character
    /// - [`Error::Sink`] if the transport fails
    pub fn write_line(&mut self, line: u8, text: &str) -> DisplayResult<S> {
        let Some(address) = command::line_address(line) else {
            return Err(Error::LineOutOfRange { line });
        };
        if text.is_empty() {
            return Err(Error::EmptyText);
        }
        if let Some(index) = text.bytes().position(|byte| !byte.is_ascii()) {
            return Err(Error::NonAsciiText { index });
        }

        trace!("line {}: {} bytes", line, text.len());
        // Line selection is the one control byte that goes out bare: the
        // address already carries bit 7, so the device decodes it as a
        // set-address command without marker framing.
        self.sink.send_byte(address).map_err(Error::Sink)?;
        for byte in text.bytes() {
            self.send_data(byte)?;
        }
        Ok(())
    }

    /// Switch the backlight on or off
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] if the transport fails.
    pub fn enable_backlight(&mut self, enable: bool) -> DisplayResult<S> {
        self.send_code(command::backlight(enable))
    }

    /// Clear all four lines
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] if the transport fails.
    pub fn clear(&mut self) -> DisplayResult<S> {
        self.send_code(CLEAR)
    }

    /// Set display, cursor, and cursor-blink visibility
    ///
    /// The three switches are independent; see
    /// [`command::display_control`] for the bit layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] if the transport fails.
    pub fn set_display_cursor(
        &mut self,
        display_on: bool,
        cursor_on: bool,
        blink_on: bool,
    ) -> DisplayResult<S> {
        self.send_code(command::display_control(display_on, cursor_on, blink_on))
    }

    /// Get the settling interval in microseconds
    pub fn settle_time(&self) -> u32 {
        self.settle_us
    }

    /// Set the settling interval in microseconds
    ///
    /// Applies to all subsequent commands; initialization has already
    /// run by the time a caller holds a `Display`.
    pub fn set_settle_time(&mut self, settle_us: u32) -> &mut Self {
        self.settle_us = settle_us;
        self
    }

    /// Release the transport and delay provider
    ///
    /// Consumes the controller, so the sink cannot be used through a
    /// stale handle or released twice. Dropping the controller releases
    /// the sink as well; use this form to reuse the channel afterwards.
    pub fn release(self) -> (S, D) {
        (self.sink, self.delay)
    }

    /// Send a framed control code: marker, code, flush, settle
    fn send_code(&mut self, code: u8) -> DisplayResult<S> {
        trace!("command 0x{:02X}", code);
        for byte in command::wrap(code) {
            self.sink.send_byte(byte).map_err(Error::Sink)?;
        }
        self.flush_and_settle()
    }

    /// Send one raw data byte: byte, flush, settle
    fn send_data(&mut self, byte: u8) -> DisplayResult<S> {
        self.sink.send_byte(byte).map_err(Error::Sink)?;
        self.flush_and_settle()
    }

    fn flush_and_settle(&mut self) -> DisplayResult<S> {
        self.sink.flush().map_err(Error::Sink)?;
        self.delay.delay_us(self.settle_us);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct MockError;

    #[derive(Debug)]
    struct MockSink {
        bytes: alloc::vec::Vec<u8>,
        flushes: usize,
        fail_at_byte: Option<usize>,
    }

    impl MockSink {
        fn new() -> Self {
            Self {
                bytes: alloc::vec::Vec::new(),
                flushes: 0,
                fail_at_byte: None,
            }
        }

        fn failing_at(index: usize) -> Self {
            Self {
                fail_at_byte: Some(index),
                ..Self::new()
            }
        }
    }

    impl ByteSink for MockSink {
        type Error = MockError;

        fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
            if self.fail_at_byte == Some(self.bytes.len()) {
                return Err(MockError);
            }
            self.bytes.push(byte);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct MockDelay {
        waits: usize,
        total_us: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.waits += 1;
            self.total_us += u64::from(ns) / 1_000;
        }
    }

    /// Wire bytes produced by the initialization sequence
    const INIT_BYTES: [u8; 10] = [
        0xFE, 0x38, 0xFE, 0x06, 0xFE, 0x10, 0xFE, 0x0C, 0xFE, 0x01,
    ];

    fn test_display() -> Display<MockSink, MockDelay> {
        Display::new(MockSink::new(), MockDelay::default()).unwrap()
    }

    #[test]
    fn test_init_sequence_bytes_and_flushes() {
        let display = test_display();
        let (sink, _) = display.release();
        assert_eq!(sink.bytes, INIT_BYTES);
        // One flush per wrapped command pair
        assert_eq!(sink.flushes, 5);
    }

    #[test]
    fn test_init_settles_after_each_flush() {
        let display = test_display();
        let (_, delay) = display.release();
        assert_eq!(delay.waits, 5);
        assert_eq!(delay.total_us, 5 * u64::from(DEFAULT_SETTLE_US));
    }

    #[test]
    fn test_init_sink_failure_propagates() {
        // Fail on the very first marker byte
        let result = Display::new(MockSink::failing_at(0), MockDelay::default());
        assert!(matches!(result, Err(Error::Sink(MockError))));
    }

    #[test]
    fn test_init_sink_failure_mid_sequence() {
        // Fail on the third command's code byte
        let result = Display::new(MockSink::failing_at(5), MockDelay::default());
        assert!(matches!(result, Err(Error::Sink(MockError))));
    }

    #[test]
    fn test_write_line_emits_bare_address_then_text() {
        let mut display = test_display();
        display.write_line(1, "AB").unwrap();
        let (sink, _) = display.release();
        assert_eq!(sink.bytes[INIT_BYTES.len()..], [0xC0, 0x41, 0x42]);
        // Address byte rides with the first data flush; only the two
        // text bytes are flushed individually.
        assert_eq!(sink.flushes, 5 + 2);
    }

    #[test]
    fn test_write_line_each_line_address() {
        for (line, address) in [(0u8, 0x80u8), (1, 0xC0), (2, 0x94), (3, 0xD4)] {
            let mut display = test_display();
            display.write_line(line, "x").unwrap();
            let (sink, _) = display.release();
            assert_eq!(sink.bytes[INIT_BYTES.len()..], [address, b'x']);
        }
    }

    #[test]
    fn test_write_line_out_of_range_sends_nothing() {
        let mut display = test_display();
        let result = display.write_line(4, "hi");
        assert!(matches!(result, Err(Error::LineOutOfRange { line: 4 })));
        let (sink, _) = display.release();
        assert_eq!(sink.bytes.len(), INIT_BYTES.len());
        assert_eq!(sink.flushes, 5);
    }

    #[test]
    fn test_write_line_empty_text_sends_nothing() {
        let mut display = test_display();
        let result = display.write_line(0, "");
        assert!(matches!(result, Err(Error::EmptyText)));
        let (sink, _) = display.release();
        assert_eq!(sink.bytes.len(), INIT_BYTES.len());
    }

    #[test]
    fn test_write_line_non_ascii_sends_nothing() {
        let mut display = test_display();
        let result = display.write_line(0, "h\u{e9}llo");
        assert!(matches!(result, Err(Error::NonAsciiText { index: 1 })));
        let (sink, _) = display.release();
        assert_eq!(sink.bytes.len(), INIT_BYTES.len());
    }

    #[test]
    fn test_write_line_validates_line_before_text() {
        // Both arguments invalid; the line check wins
        let mut display = test_display();
        let result = display.write_line(9, "");
        assert!(matches!(result, Err(Error::LineOutOfRange { line: 9 })));
    }

    #[test]
    fn test_enable_backlight_on() {
        let mut display = test_display();
        display.enable_backlight(true).unwrap();
        let (sink, _) = display.release();
        assert_eq!(sink.bytes[INIT_BYTES.len()..], [0xFE, 0x03]);
    }

    #[test]
    fn test_enable_backlight_off() {
        let mut display = test_display();
        display.enable_backlight(false).unwrap();
        let (sink, _) = display.release();
        assert_eq!(sink.bytes[INIT_BYTES.len()..], [0xFE, 0x02]);
    }

    #[test]
    fn test_clear() {
        let mut display = test_display();
        display.clear().unwrap();
        let (sink, _) = display.release();
        assert_eq!(sink.bytes[INIT_BYTES.len()..], [0xFE, 0x01]);
    }

    #[test]
    fn test_set_display_cursor_all_on() {
        let mut display = test_display();
        display.set_display_cursor(true, true, true).unwrap();
        let (sink, _) = display.release();
        assert_eq!(sink.bytes[INIT_BYTES.len()..], [0xFE, 0x1E]);
    }

    #[test]
    fn test_set_display_cursor_all_off() {
        let mut display = test_display();
        display.set_display_cursor(false, false, false).unwrap();
        let (sink, _) = display.release();
        assert_eq!(sink.bytes[INIT_BYTES.len()..], [0xFE, 0x10]);
    }

    #[test]
    fn test_default_settle_time() {
        let display = test_display();
        assert_eq!(display.settle_time(), DEFAULT_SETTLE_US);
    }

    #[test]
    fn test_with_settle_time() {
        let display = Display::with_settle_time(MockSink::new(), MockDelay::default(), 500).unwrap();
        assert_eq!(display.settle_time(), 500);
        let (_, delay) = display.release();
        assert_eq!(delay.total_us, 5 * 500);
    }

    #[test]
    fn test_set_settle_time() {
        let mut display = test_display();
        display.set_settle_time(10_000);
        assert_eq!(display.settle_time(), 10_000);
        display.clear().unwrap();
        let (_, delay) = display.release();
        assert_eq!(delay.total_us, 5 * u64::from(DEFAULT_SETTLE_US) + 10_000);
    }

    #[test]
    fn test_transport_failure_during_operation() {
        // Init takes 10 bytes; fail on the clear command's code byte
        let mut display = Display::new(MockSink::failing_at(11), MockDelay::default()).unwrap();
        let result = display.clear();
        assert!(matches!(result, Err(Error::Sink(MockError))));
    }

    #[test]
    fn test_release_returns_sink_and_delay() {
        let display = test_display();
        let (sink, delay) = display.release();
        assert_eq!(sink.bytes.len(), INIT_BYTES.len());
        assert_eq!(delay.waits, 5);
    }
}
