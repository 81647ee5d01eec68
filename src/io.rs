//! Host-side transport adapters (requires the `std` feature)
//!
//! On a host the X2040 shows up as a serial device file (on Linux
//! typically `/dev/ttyUSB0`). This module adapts any `std::io::Write`
//! into a [`ByteSink`] and provides a thread-sleep [`Delay`], so a
//! host-side caller needs no HAL crate:
//!
//! ```rust,no_run
//! use pertelian::io::{Delay, WriterSink};
//! use pertelian::Display;
//!
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let port = std::fs::OpenOptions::new()
//!     .write(true)
//!     .open("/dev/ttyUSB0")?;
//! let mut display = Display::new(WriterSink::new(port), Delay)?;
//! display.enable_backlight(true)?;
//! display.write_line(0, "Hello")?;
//! # Ok(())
//! # }
//! ```

use std::io::Write;

use crate::interface::ByteSink;

/// [`ByteSink`] over any [`std::io::Write`]
///
/// The writer owns the channel; dropping the sink closes it.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap and return the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ByteSink for WriterSink<W> {
    type Error = std::io::Error;

    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.writer.write_all(&[byte])
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.writer.flush()
    }
}

/// Thread-sleep delay provider for host-side use
#[derive(Debug, Default, Clone, Copy)]
pub struct Delay;

impl embedded_hal::delay::DelayNs for Delay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }
}
