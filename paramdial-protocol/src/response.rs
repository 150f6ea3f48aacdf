//! Panel responses
//!
//! Each response is exactly one line. Lookup failures keep the shape of
//! the successful reply with `ERROR` in the value position; syntax
//! failures use the generic `ERR,<description>` line.

use core::fmt::{self, Write};

use paramdial_hal::Line;

/// Value placeholder for failed lookups
pub const NOT_FOUND: &str = "ERROR";

/// `ERR` descriptions for failures found after parsing
pub mod errors {
    pub const LINE_TOO_LONG: &str = "Line too long";
    pub const INVALID_ENCODING: &str = "Invalid encoding";
    pub const INVALID_DIGITAL_PIN: &str = "Invalid read:digital pin";
    pub const INVALID_ANALOG_CHANNEL: &str = "Invalid read:analog channel";
    pub const ANALOG_READ_FAILED: &str = "Analog read failed";
}

/// One line sent to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response<'a> {
    /// `A,<name>`
    Added { name: &'a str },
    /// `G,<name>,<value|ERROR>`
    Current { name: &'a str, value: Option<i32> },
    /// `U,<name>,<value|ERROR>`
    Updated { name: &'a str, value: Option<i32> },
    /// `L,<index>,<name>,<min>,<max>,<current>`
    Listed {
        index: usize,
        name: &'a str,
        min: i32,
        max: i32,
        current: i32,
    },
    /// `S,<index>,<name>,<current>`
    Selected {
        index: usize,
        name: &'a str,
        current: i32,
    },
    /// Bare label echo
    Software { name: &'a str },
    /// `D,<pin>,<0|1>`
    Digital { pin: i32, high: bool },
    /// `A,<index>,<raw>`
    Analog { index: i32, raw: u16 },
    /// `ERR,<description>`
    Error(&'a str),
}

impl Response<'_> {
    /// Render into a line buffer
    ///
    /// Text that would not fit is cut at the buffer end.
    pub fn to_line(&self) -> Line {
        let mut line = Line::new();
        // Overflow only truncates; names are bounded well below the line size
        let _ = write!(line, "{}", self);
        line
    }
}

/// Writes `value` or the not-found marker
struct Lookup(Option<i32>);

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str(NOT_FOUND),
        }
    }
}

impl fmt::Display for Response<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Response::Added { name } => write!(f, "A,{}", name),
            Response::Current { name, value } => write!(f, "G,{},{}", name, Lookup(value)),
            Response::Updated { name, value } => write!(f, "U,{},{}", name, Lookup(value)),
            Response::Listed {
                index,
                name,
                min,
                max,
                current,
            } => write!(f, "L,{},{},{},{},{}", index, name, min, max, current),
            Response::Selected {
                index,
                name,
                current,
            } => write!(f, "S,{},{},{}", index, name, current),
            Response::Software { name } => f.write_str(name),
            Response::Digital { pin, high } => write!(f, "D,{},{}", pin, u8::from(high)),
            Response::Analog { index, raw } => write!(f, "A,{},{}", index, raw),
            Response::Error(description) => write!(f, "ERR,{}", description),
        }
    }
}
