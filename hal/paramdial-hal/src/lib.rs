//! Paramdial Hardware Abstraction Layer
//!
//! This crate defines the capabilities the parameter panel needs from a
//! board. Chip-specific code in `paramdial-hal-rp2040` implements them;
//! the application logic in `paramdial-core` only ever sees these traits,
//! which is what lets the whole tick run against in-memory fakes on the
//! host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  paramdial-core (registry, input, tick) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  paramdial-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  paramdial-hal-rp2040 (embassy-rp impls)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`], [`gpio::DigitalInputs`] - Digital input
//! - [`adc::AnalogInputs`] - Analog channel reads
//! - [`uart::LineRx`], [`uart::LineTx`] - Line-oriented serial
//! - [`encoder::RotaryEncoder`] - Relative encoder counts
//! - [`clock::Clock`] - Monotonic milliseconds

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod clock;
pub mod encoder;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AnalogInputs};
pub use clock::Clock;
pub use encoder::{QuadratureDecoder, RotaryEncoder, Step};
pub use gpio::{DigitalInputs, GpioError, InputPin};
pub use uart::{Line, LineRx, LineSerial, LineTx, RxError, UartConfig, MAX_LINE_LEN};
