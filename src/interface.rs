//! Transport abstraction
//!
//! This module provides the [`ByteSink`] trait, the minimal capability the
//! driver needs from a transport: push one byte toward the device and
//! flush. The X2040 protocol is write-only, so there is no read side.
//!
//! The [`Display`](crate::display::Display) owns its sink for the whole
//! controller lifetime and releases it when dropped or on
//! [`release`](crate::display::Display::release).
//!
//! On a host the device usually appears as a serial device file; the
//! [`io`](crate::io) module (requires the `std` feature) adapts any
//! `std::io::Write` into a sink. Embedded users implement the trait over
//! whatever UART or bridge carries bytes to the display.
//!
//! ## Example
//!
//! ```
//! use pertelian::ByteSink;
//! # use core::convert::Infallible;
//!
//! struct LoggingSink {
//!     sent: usize,
//! }
//!
//! impl ByteSink for LoggingSink {
//!     type Error = Infallible;
//!
//!     fn send_byte(&mut self, _byte: u8) -> Result<(), Self::Error> {
//!         self.sent += 1;
//!         Ok(())
//!     }
//!
//!     fn flush(&mut self) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//! ```

use core::fmt::Debug;

/// Write-only byte transport to the display
///
/// Implementations own the physical channel. The driver calls
/// [`send_byte`](ByteSink::send_byte) for every wire byte and
/// [`flush`](ByteSink::flush) at each protocol boundary (after a framed
/// command, after each text byte); the device's settling time is handled
/// by the driver, not the sink.
pub trait ByteSink {
    /// Error type for transport operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Transmit one raw byte
    ///
    /// The byte may be buffered until the next [`flush`](ByteSink::flush).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying channel fails.
    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Push all previously sent bytes to the device
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying channel fails.
    fn flush(&mut self) -> Result<(), Self::Error>;
}
