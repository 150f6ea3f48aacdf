//! Local input policy
//!
//! Turns raw encoder counts and button levels into intents, and decides
//! how adjustments are painted:
//!
//! - Encoder counts are consumed every tick; the encoder is reset as soon
//!   as a nonzero delta is read so turns never pile up across ticks.
//! - Two committed adjustments less than `rapid_threshold_ms` apart put
//!   the display in Rapid mode; a slower adjustment paints Full.
//! - Once Rapid mode has been idle for the threshold it expires back to
//!   Full.
//! - The button is active low, debounced by a short delay and a confirming
//!   re-read, and fires once per press.

use embedded_hal::delay::DelayNs;
use paramdial_display::DisplayMode;
use paramdial_hal::{InputPin, RotaryEncoder};

use crate::board::Board;
use crate::config::UiConfig;

/// Encoder and button state between ticks
#[derive(Debug, Clone)]
pub struct InputController {
    mode: DisplayMode,
    /// Time of the last committed adjustment
    last_adjust_ms: Option<u64>,
    /// A confirmed press has not been released yet
    button_held: bool,
    rapid_threshold_ms: u64,
    debounce_ms: u32,
}

impl InputController {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            mode: DisplayMode::Full,
            last_adjust_ms: None,
            button_held: false,
            rapid_threshold_ms: config.rapid_threshold_ms,
            debounce_ms: config.debounce_ms,
        }
    }

    /// Paint mode chosen by the last adjustment
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_rapid(&self) -> bool {
        self.mode == DisplayMode::Rapid
    }

    /// Sample the encoder and take its accumulated delta
    pub fn poll_encoder<E: RotaryEncoder>(&mut self, encoder: &mut E) -> i32 {
        encoder.tick();
        let delta = encoder.delta();
        if delta != 0 {
            encoder.reset_delta();
        }
        delta
    }

    /// Record an adjustment at `now_ms` and pick its paint mode
    pub fn commit(&mut self, now_ms: u64) -> DisplayMode {
        let rapid = matches!(
            self.last_adjust_ms,
            Some(last) if now_ms.saturating_sub(last) < self.rapid_threshold_ms
        );
        self.last_adjust_ms = Some(now_ms);
        self.mode = if rapid {
            DisplayMode::Rapid
        } else {
            DisplayMode::Full
        };
        self.mode
    }

    /// Leave Rapid mode once it has been idle for the threshold
    ///
    /// Returns true when the mode just changed back to Full, meaning the
    /// caller should repaint.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        if self.mode != DisplayMode::Rapid {
            return false;
        }
        let idle = self
            .last_adjust_ms
            .map_or(true, |last| now_ms.saturating_sub(last) >= self.rapid_threshold_ms);
        if idle {
            self.mode = DisplayMode::Full;
        }
        idle
    }

    /// Drop back to Full mode (selection changed)
    pub fn force_full(&mut self) {
        self.mode = DisplayMode::Full;
    }

    /// Check the button and report one debounced press
    pub fn poll_button<P: Board>(&mut self, board: &mut P) -> bool {
        if !self.press_started(board.button().is_low()) {
            return false;
        }
        board.delay().delay_ms(self.debounce_ms);
        self.confirm_press(board.button().is_low())
    }

    /// First sample: is this a new press worth debouncing?
    fn press_started(&mut self, low: bool) -> bool {
        if !low {
            self.button_held = false;
            return false;
        }
        !self.button_held
    }

    /// Second sample after the debounce delay
    fn confirm_press(&mut self, low: bool) -> bool {
        if low {
            self.button_held = true;
        }
        low
    }
}
