//! Serial port adapter
//!
//! Wraps any blocking `embedded-io` byte stream that can report pending
//! input ([`ReadReady`]) and exposes it as the line-oriented
//! [`LineRx`]/[`LineTx`] pair the application polls.

use embedded_io::{Read, ReadReady, Write};
use paramdial_hal::{Line, LineRx, LineTx, RxError};

use crate::line::{LineBuffer, LineError, LINE_END};

/// Line-oriented view of a byte stream
pub struct SerialPort<T> {
    io: T,
    lines: LineBuffer,
}

impl<T> SerialPort<T> {
    /// Wrap a byte stream
    pub fn new(io: T) -> Self {
        Self {
            io,
            lines: LineBuffer::new(),
        }
    }

    /// Access the wrapped stream
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.io
    }
}

impl<T: Read + ReadReady> LineRx for SerialPort<T> {
    fn poll_line(&mut self) -> Result<Option<Line>, RxError> {
        let mut byte = [0u8; 1];
        loop {
            // Only read what is already buffered so the tick never stalls
            if !self.io.read_ready().map_err(|_| RxError::Transport)? {
                return Ok(None);
            }
            if self.io.read(&mut byte).map_err(|_| RxError::Transport)? == 0 {
                return Ok(None);
            }
            match self.lines.feed(byte[0]) {
                Ok(Some(line)) => return Ok(Some(line)),
                Ok(None) => {}
                Err(LineError::TooLong) => return Err(RxError::Overrun),
                Err(LineError::InvalidUtf8) => return Err(RxError::Encoding),
            }
        }
    }
}

impl<T: Write> LineTx for SerialPort<T> {
    type Error = T::Error;

    fn write_line(&mut self, text: &str) -> Result<(), Self::Error> {
        self.io.write_all(text.as_bytes())?;
        self.io.write_all(&[LINE_END])?;
        self.io.flush()
    }
}
