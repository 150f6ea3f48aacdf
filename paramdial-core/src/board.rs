//! Board capabilities
//!
//! Everything the application touches outside its own state goes through
//! one [`Board`] value. Firmware implements it over real peripherals;
//! tests implement it over in-memory fakes.

use embedded_hal::delay::DelayNs;
use paramdial_display::DisplayBackend;
use paramdial_hal::{AnalogInputs, Clock, DigitalInputs, InputPin, LineSerial, RotaryEncoder};

/// Peripherals the application loop polls and drives
pub trait Board {
    type Serial: LineSerial;
    type Display: DisplayBackend;
    type Encoder: RotaryEncoder;
    /// Selection button, active low
    type Button: InputPin;
    type Pins: DigitalInputs;
    type Analog: AnalogInputs;
    type Clock: Clock;
    type Delay: DelayNs;

    fn serial(&mut self) -> &mut Self::Serial;
    fn display(&mut self) -> &mut Self::Display;
    fn encoder(&mut self) -> &mut Self::Encoder;
    fn button(&mut self) -> &mut Self::Button;
    fn pins(&mut self) -> &mut Self::Pins;
    fn analog(&mut self) -> &mut Self::Analog;
    fn clock(&self) -> &Self::Clock;
    fn delay(&mut self) -> &mut Self::Delay;
}
