//! GPIO pin bank
//!
//! Holds every pin the board has not wired to a fixed function, so the
//! host can sample them by number. Pins missing from the bank are refused.

use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_rp::Peri;
use paramdial_hal::{DigitalInputs, GpioError};

/// GPIO count on the RP2040
pub const NUM_PINS: usize = 30;

/// Pins available by number at runtime
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; NUM_PINS],
}

impl PinBank {
    /// Create a bank; `None` entries are permanently unavailable
    pub fn new(pins: [Option<Peri<'static, AnyPin>>; NUM_PINS]) -> Self {
        Self { pins }
    }
}

impl DigitalInputs for PinBank {
    fn read_digital(&mut self, pin: u8) -> Result<bool, GpioError> {
        let slot = self
            .pins
            .get_mut(usize::from(pin))
            .ok_or(GpioError::InvalidPin)?;
        let pin = slot.as_mut().ok_or(GpioError::Reserved)?;
        // Floating input, released again when `input` drops
        let input = Input::new(pin.reborrow(), Pull::None);
        Ok(input.is_high())
    }
}
