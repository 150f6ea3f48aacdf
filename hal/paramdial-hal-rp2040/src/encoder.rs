//! Rotary encoder on two GPIO inputs
//!
//! The pins are sampled once per [`RotaryEncoder::tick`] and fed through
//! the shared [`QuadratureDecoder`]. Ticks run every loop period (2 ms),
//! fast enough for a hand-turned detent encoder.

use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_rp::Peri;
use paramdial_hal::{QuadratureDecoder, RotaryEncoder};

/// Polled quadrature encoder
pub struct GpioEncoder {
    a: Input<'static>,
    b: Input<'static>,
    decoder: QuadratureDecoder,
    count: i32,
}

impl GpioEncoder {
    /// Create an encoder on pins A (CLK) and B (DT), both pulled up
    pub fn new(a: Peri<'static, AnyPin>, b: Peri<'static, AnyPin>) -> Self {
        let a = Input::new(a, Pull::Up);
        let b = Input::new(b, Pull::Up);
        let decoder = QuadratureDecoder::new(a.is_high(), b.is_high());
        Self {
            a,
            b,
            decoder,
            count: 0,
        }
    }
}

impl RotaryEncoder for GpioEncoder {
    fn tick(&mut self) {
        if let Some(step) = self.decoder.update(self.a.is_high(), self.b.is_high()) {
            self.count = self.count.saturating_add(step.delta());
        }
    }

    fn delta(&self) -> i32 {
        self.count
    }

    fn reset_delta(&mut self) {
        self.count = 0;
    }
}
