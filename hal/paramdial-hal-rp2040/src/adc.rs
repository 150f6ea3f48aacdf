//! ADC channel bank
//!
//! Host channel indices 0-3 are GPIO26-GPIO29; index 4 is the internal
//! temperature sensor.

use embassy_rp::adc::{Adc, Blocking, Channel};
use paramdial_hal::{AdcError, AnalogInputs};

/// Number of host-visible analog channels
pub const NUM_CHANNELS: usize = 5;

/// Blocking ADC with its channels in host index order
pub struct AnalogBank {
    adc: Adc<'static, Blocking>,
    channels: [Channel<'static>; NUM_CHANNELS],
}

impl AnalogBank {
    pub fn new(adc: Adc<'static, Blocking>, channels: [Channel<'static>; NUM_CHANNELS]) -> Self {
        Self { adc, channels }
    }
}

impl AnalogInputs for AnalogBank {
    fn read_analog(&mut self, index: u8) -> Result<u16, AdcError> {
        let channel = self
            .channels
            .get_mut(usize::from(index))
            .ok_or(AdcError::InvalidChannel)?;
        self.adc
            .blocking_read(channel)
            .map_err(|_| AdcError::Conversion)
    }
}
