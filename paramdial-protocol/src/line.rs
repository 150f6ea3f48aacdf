//! Line framing for the serial link.
//!
//! Bytes are accumulated until a `\n` arrives; the bytes before it form
//! one line. `\r` is dropped wherever it appears so CRLF hosts work
//! unchanged. A line longer than [`MAX_LINE_LEN`] is discarded in full
//! and reported once, when its terminator arrives.

use heapless::{String, Vec};
use paramdial_hal::{Line, MAX_LINE_LEN};

/// Line terminator
pub const LINE_END: u8 = b'\n';

/// Errors reported when a terminator closes a bad line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded the buffer and was dropped
    TooLong,
    /// Line was not valid UTF-8
    InvalidUtf8,
}

/// Accumulates bytes into lines
#[derive(Debug, Clone)]
pub struct LineBuffer {
    buffer: Vec<u8, MAX_LINE_LEN>,
    overflowed: bool,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Create an empty line buffer
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            overflowed: false,
        }
    }

    /// Drop any partial line
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.overflowed = false;
    }

    /// Number of bytes waiting for a terminator
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` when a terminator completes a line,
    /// `Ok(None)` when more bytes are needed, or `Err` if the line just
    /// terminated had to be dropped.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        match byte {
            LINE_END => {
                if self.overflowed {
                    self.reset();
                    return Err(LineError::TooLong);
                }
                let bytes = core::mem::take(&mut self.buffer);
                String::from_utf8(bytes)
                    .map(Some)
                    .map_err(|_| LineError::InvalidUtf8)
            }
            b'\r' => Ok(None),
            _ => {
                if !self.overflowed && self.buffer.push(byte).is_err() {
                    self.overflowed = true;
                    self.buffer.clear();
                }
                Ok(None)
            }
        }
    }

    /// Feed multiple bytes
    ///
    /// Returns the first complete line found, if any, together with the
    /// number of bytes consumed. Bytes after that line are left unread.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> (usize, Result<Option<Line>, LineError>) {
        for (i, &byte) in bytes.iter().enumerate() {
            match self.feed(byte) {
                Ok(None) => {}
                other => return (i + 1, other),
            }
        }
        (bytes.len(), Ok(None))
    }
}
