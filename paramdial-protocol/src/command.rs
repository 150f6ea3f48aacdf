//! Host command parsing
//!
//! A request line is `<keyword>[,<args>]`. The keyword is everything before
//! the first comma and must match exactly (case-sensitive). Arguments are
//! sliced out of the line without copying.

use crate::number::parse_int;

// Request keywords
pub const KW_ADD_PARAM: &str = "add:param";
pub const KW_GET_CURRENT: &str = "get:paramCurval";
pub const KW_UPDATE_CURRENT: &str = "update:paramsCurval";
pub const KW_LIST_PARAMS: &str = "get:AlladdedParams";
pub const KW_SET_SOFTWARE: &str = "set:software";
pub const KW_READ_DIGITAL: &str = "read:digital";
pub const KW_READ_ANALOG: &str = "read:analog";

/// Argument separator
pub const SEPARATOR: char = ',';

/// A parsed host request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Register a parameter (`add:param,<name>,<min>,<max>,<current>`)
    AddParam {
        name: &'a str,
        min: i32,
        max: i32,
        current: i32,
    },
    /// Query a current value (`get:paramCurval,<name>`)
    GetCurrent { name: &'a str },
    /// Set a current value (`update:paramsCurval,<name>,<value>`)
    UpdateCurrent { name: &'a str, value: i32 },
    /// Dump every stored parameter (`get:AlladdedParams`)
    ListParams,
    /// Set the display label (`set:software,<name>`)
    SetSoftware { name: &'a str },
    /// Sample a digital pin (`read:digital,<pin>`)
    ReadDigital { pin: i32 },
    /// Sample an analog channel (`read:analog,<index>`)
    ReadAnalog { index: i32 },
}

/// Reasons a request line is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    InvalidAddFormat,
    InvalidGetFormat,
    InvalidUpdateFormat,
    InvalidSoftwareFormat,
    InvalidDigitalFormat,
    InvalidAnalogFormat,
    UnknownCommand,
}

impl ParseError {
    /// Description sent back in the `ERR,<description>` line
    pub fn message(&self) -> &'static str {
        match self {
            ParseError::InvalidAddFormat => "Invalid add:param format",
            ParseError::InvalidGetFormat => "Invalid get:paramCurval format",
            ParseError::InvalidUpdateFormat => "Invalid update:paramsCurval format",
            ParseError::InvalidSoftwareFormat => "Invalid set:software format",
            ParseError::InvalidDigitalFormat => "Invalid read:digital format",
            ParseError::InvalidAnalogFormat => "Invalid read:analog format",
            ParseError::UnknownCommand => "Unknown command",
        }
    }
}

impl<'a> Command<'a> {
    /// Parse a request line
    ///
    /// Surrounding whitespace is ignored. Numeric fields use the
    /// permissive [`parse_int`] rules.
    pub fn parse(line: &'a str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (keyword, args) = match line.split_once(SEPARATOR) {
            Some((keyword, args)) => (keyword, Some(args)),
            None => (line, None),
        };

        match keyword {
            KW_ADD_PARAM => {
                let args = args.ok_or(ParseError::InvalidAddFormat)?;
                let mut fields = args.splitn(4, SEPARATOR);
                match (fields.next(), fields.next(), fields.next(), fields.next()) {
                    (Some(name), Some(min), Some(max), Some(current)) => Ok(Command::AddParam {
                        name,
                        min: parse_int(min),
                        max: parse_int(max),
                        current: parse_int(current),
                    }),
                    _ => Err(ParseError::InvalidAddFormat),
                }
            }
            KW_GET_CURRENT => {
                let name = args.ok_or(ParseError::InvalidGetFormat)?;
                Ok(Command::GetCurrent { name })
            }
            KW_UPDATE_CURRENT => {
                let (name, value) = args
                    .and_then(|args| args.split_once(SEPARATOR))
                    .ok_or(ParseError::InvalidUpdateFormat)?;
                Ok(Command::UpdateCurrent {
                    name,
                    value: parse_int(value),
                })
            }
            KW_LIST_PARAMS => Ok(Command::ListParams),
            KW_SET_SOFTWARE => {
                let name = args.ok_or(ParseError::InvalidSoftwareFormat)?;
                Ok(Command::SetSoftware { name: name.trim() })
            }
            KW_READ_DIGITAL => {
                let pin = args.ok_or(ParseError::InvalidDigitalFormat)?;
                Ok(Command::ReadDigital {
                    pin: parse_int(pin),
                })
            }
            KW_READ_ANALOG => {
                let index = args.ok_or(ParseError::InvalidAnalogFormat)?;
                Ok(Command::ReadAnalog {
                    index: parse_int(index),
                })
            }
            _ => Err(ParseError::UnknownCommand),
        }
    }
}
