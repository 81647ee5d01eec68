//! Error types for the driver
//!
//! A single [`Error`] enum covers both validation failures, raised before
//! any byte is transmitted, and transport failures surfaced from the
//! [`ByteSink`]. The enum is generic over the sink so the concrete
//! transport error stays available to callers.
//!
//! ## Example
//!
//! ```
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use pertelian::{ByteSink, Display, Error};
//!
//! # struct MockSink;
//! # impl ByteSink for MockSink {
//! #     type Error = Infallible;
//! #     fn send_byte(&mut self, _byte: u8) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! let mut display = match Display::new(MockSink, MockDelay) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! // The X2040 has four lines; line 4 does not exist.
//! let result = display.write_line(4, "hello");
//! assert!(matches!(result, Err(Error::LineOutOfRange { line: 4 })));
//! ```

use crate::interface::ByteSink;

/// Errors that can occur when driving the display
///
/// Generic over the sink type to preserve the specific transport error.
/// Validation variants are raised before any transmission, so a failed
/// call has no observable effect on the wire.
#[derive(Debug)]
pub enum Error<S: ByteSink> {
    /// Transport failure from the underlying [`ByteSink`]
    ///
    /// Propagated unchanged. The protocol has no recovery state, so the
    /// controller should be considered unusable after one of these.
    Sink(S::Error),
    /// Line index outside the display's four lines
    LineOutOfRange {
        /// Requested line index (valid range is 0 to 3)
        line: u8,
    },
    /// Text payload is empty
    ///
    /// Writing nothing is rejected rather than silently sending a bare
    /// line address.
    EmptyText,
    /// Text payload contains a character outside the ASCII range
    ///
    /// The device renders single-byte ASCII only; anything else is
    /// rejected before transmission.
    NonAsciiText {
        /// Byte offset of the first non-ASCII character
        index: usize,
    },
}

impl<S: ByteSink> core::fmt::Display for Error<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Sink(_) => write!(f, "Transport error"),
            Self::LineOutOfRange { line } => {
                write!(f, "Line {line} out of range (display has 4 lines)")
            }
            Self::EmptyText => write!(f, "Text payload is empty"),
            Self::NonAsciiText { index } => {
                write!(f, "Non-ASCII character at byte offset {index}")
            }
        }
    }
}

impl<S: ByteSink + core::fmt::Debug> core::error::Error for Error<S> {}
