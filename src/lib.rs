//! Pertelian X2040 Character LCD Driver
//!
//! A driver for the Pertelian X2040, a 4x20 serial character display
//! with an HD44780-compatible controller behind a byte-oriented bridge.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 delay support
//! - Transport-agnostic: anything implementing [`ByteSink`] can carry
//!   the protocol
//! - `std` feature with ready-made adapters for host-side serial device
//!   files
//!
//! ## Protocol
//!
//! The device accepts a write-only byte stream. Control codes are framed
//! as `0xFE` followed by the code; the line address byte and text data
//! go out bare. See the [`command`] module for the full table.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use pertelian::{ByteSink, Display};
//!
//! # struct MockSink;
//! # impl ByteSink for MockSink {
//! #     type Error = Infallible;
//! #     fn send_byte(&mut self, _byte: u8) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let sink = MockSink;
//! # let delay = MockDelay;
//! // Construction runs the device initialization sequence
//! let mut display = match Display::new(sink, delay) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! let _ = display.enable_backlight(true);
//! let _ = display.write_line(0, "Hello, world");
//! let _ = display.set_display_cursor(true, false, false);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Device command codes and pure protocol encoding
pub mod command;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Transport abstraction
pub mod interface;

/// Host-side transport adapters (requires `std` feature)
#[cfg(feature = "std")]
pub mod io;

pub use command::{COMMAND_MARKER, LINE_ADDRESSES, LINE_COUNT, LINE_WIDTH};
pub use display::{DEFAULT_SETTLE_US, Display};
pub use error::Error;
pub use interface::ByteSink;

#[cfg(feature = "std")]
pub use io::{Delay, WriterSink};
