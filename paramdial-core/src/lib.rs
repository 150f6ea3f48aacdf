//! Board-agnostic application logic for the parameter panel
//!
//! This crate contains everything the panel does that does not depend on
//! specific hardware:
//!
//! - Parameter registry (fixed capacity, overwrite-oldest)
//! - Selection of the parameter the knob adjusts
//! - Encoder/button input policy with the rapid/full display hysteresis
//! - Command dispatch and the per-tick application loop
//!
//! Hardware is reached through the capability traits in `paramdial-hal`
//! and `paramdial-display`, bundled per board by [`Board`].

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod app;
pub mod board;
pub mod config;
pub mod input;
pub mod registry;
pub mod selection;

pub use app::AppState;
pub use board::Board;
pub use config::UiConfig;
pub use input::InputController;
pub use registry::{Parameter, ParameterRegistry, MAX_NAME_LEN, MAX_PARAMS};
pub use selection::Selection;
