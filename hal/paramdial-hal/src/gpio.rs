//! GPIO pin abstractions
//!
//! Provides traits for digital inputs that can be implemented by
//! chip-specific code.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Errors from host-requested digital reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Pin number does not exist on this chip
    InvalidPin,
    /// Pin is wired to a board function (button, encoder, bus)
    Reserved,
}

/// Bank of general-purpose pins readable by number
///
/// Backs the `read:digital` command. The pin is configured as a plain input
/// (no pull) for the duration of the read.
pub trait DigitalInputs {
    /// Configure `pin` as input and sample it
    fn read_digital(&mut self, pin: u8) -> Result<bool, GpioError>;
}
