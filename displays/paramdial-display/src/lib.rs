//! Display abstraction and parameter presenter for Paramdial
//!
//! This crate provides:
//! - `DisplayBackend` trait for the panel's monochrome screen
//! - `Presenter`, the Full / Rapid paint-mode state machine that decides
//!   how much of the screen a repaint touches
//!
//! # Architecture
//!
//! The presenter only ever talks to a `DisplayBackend`. The firmware
//! implements it for an SSD1306 frame buffer; tests implement it with an
//! in-memory recorder.
//!
//! ```text
//! row 0  ████████████░░░░░░░░░░  progress bar (pixel row 0)
//! row 3  Parameter: Speed        |  row 3        42
//! row 4  Value: 42               |
//! row 7  Software: Mixer         |
//!          Full mode             |     Rapid mode
//! ```

#![no_std]

pub mod backend;
pub mod presenter;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use presenter::{bar_fill, DisplayMode, Presenter};
