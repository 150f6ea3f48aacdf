//! Analog input abstractions

/// Errors from host-requested analog reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Channel index is not mapped to an analog pin
    InvalidChannel,
    /// Conversion failed
    Conversion,
}

/// Analog channels addressed by board index (A0, A1, ...)
pub trait AnalogInputs {
    /// Perform one blocking conversion on channel `index`
    ///
    /// Returns the raw converter value (12 bits on RP2040).
    fn read_analog(&mut self, index: u8) -> Result<u16, AdcError>;
}
