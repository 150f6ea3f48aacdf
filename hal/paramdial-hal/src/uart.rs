//! Line-oriented serial abstractions
//!
//! The host link is plain ASCII, one command per `\n`-terminated line.
//! Receivers hand out whole lines only; partial input stays buffered in
//! the implementation until its terminator arrives.

use heapless::String;

/// Longest accepted line, excluding the terminator
pub const MAX_LINE_LEN: usize = 96;

/// One received line, terminator stripped
pub type Line = String<MAX_LINE_LEN>;

/// Receive-side failures
///
/// The first two are recoverable per line: the offending line is dropped
/// and the next one starts clean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxError {
    /// Line exceeded [`MAX_LINE_LEN`] and was discarded
    Overrun,
    /// Line was not valid UTF-8 and was discarded
    Encoding,
    /// Underlying transport failed
    Transport,
}

/// Line receiver
pub trait LineRx {
    /// Return the next complete line if one is buffered
    ///
    /// Never blocks: `Ok(None)` means no full line has arrived yet.
    fn poll_line(&mut self) -> Result<Option<Line>, RxError>;
}

/// Line transmitter
pub trait LineTx {
    /// Error type for transmit operations
    type Error;

    /// Write `text` followed by a `\n` terminator
    fn write_line(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// Combined serial line interface
pub trait LineSerial: LineRx + LineTx {}

// Blanket implementation
impl<T: LineRx + LineTx> LineSerial for T {}

/// UART configuration
#[derive(Debug, Clone, Copy)]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 9600,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBits {
    One,
    Two,
}
