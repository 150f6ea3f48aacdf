//! RP2040-specific HAL for the parameter panel
//!
//! Implements the `paramdial-hal` capability traits on top of `embassy-rp`
//! in blocking mode, since the application loop polls everything once per
//! tick:
//!
//! - Pin bank for host-requested digital reads
//! - ADC bank for host-requested analog reads
//! - Quadrature encoder and push-button inputs
//! - Monotonic clock from the embassy time driver

#![no_std]

pub mod adc;
pub mod clock;
pub mod encoder;
pub mod gpio;
pub mod pins;

pub use adc::AnalogBank;
pub use clock::EmbassyClock;
pub use encoder::GpioEncoder;
pub use gpio::Button;
pub use pins::{PinBank, NUM_PINS};
