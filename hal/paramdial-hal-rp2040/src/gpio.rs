//! Push-button input

use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_rp::Peri;
use paramdial_hal::InputPin;

/// Button to ground with the internal pull-up enabled (active low)
pub struct Button {
    input: Input<'static>,
}

impl Button {
    pub fn new(pin: Peri<'static, AnyPin>) -> Self {
        Self {
            input: Input::new(pin, Pull::Up),
        }
    }
}

impl InputPin for Button {
    fn is_high(&mut self) -> bool {
        self.input.is_high()
    }
}
