//! Paramdial Serial Line Protocol
//!
//! This crate defines the text protocol a host uses to register and tune
//! parameters on the panel. It covers framing (bytes to lines), command
//! parsing and response formatting; executing commands is the job of
//! `paramdial-core`.
//!
//! # Protocol Overview
//!
//! Every message is one ASCII line terminated by `\n`. Requests are a
//! case-sensitive keyword followed by comma-separated arguments:
//!
//! ```text
//! host → panel                           panel → host
//! add:param,Speed,0,100,50               A,Speed
//! get:paramCurval,Speed                  G,Speed,50
//! update:paramsCurval,Speed,150          U,Speed,100
//! get:AlladdedParams                     L,0,Speed,0,100,100
//! set:software,Mixer                     Mixer
//! read:digital,8                         D,8,1
//! read:analog,0                          A,0,2048
//! (anything else)                        ERR,Unknown command
//! ```
//!
//! The panel also emits unsolicited `U,<name>,<value>` lines when the knob
//! changes a value and `S,<index>,<name>,<value>` when the button selects
//! another parameter.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod number;
pub mod port;
pub mod response;

pub use command::{Command, ParseError};
pub use line::{LineBuffer, LineError};
pub use number::parse_int;
pub use port::SerialPort;
pub use response::{errors, Response};
