//! User interface tuning
//!
//! Timing constants and defaults for the local controls. There is no
//! runtime configuration store; boards override fields at construction.

use heapless::String;

/// Maximum software label length
pub const MAX_LABEL_LEN: usize = 31;

/// Label shown until the host sends `set:software`
pub const DEFAULT_LABEL: &str = "Unknown";

/// Input and display timing
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiConfig {
    /// Adjustments closer together than this repaint in Rapid mode
    pub rapid_threshold_ms: u64,
    /// Settle time before the button is re-read
    pub debounce_ms: u32,
    /// Initial software label
    pub default_label: String<MAX_LABEL_LEN>,
    /// Pause between application ticks
    pub loop_period_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        let mut default_label = String::new();
        let _ = default_label.push_str(DEFAULT_LABEL);
        Self {
            rapid_threshold_ms: 600,
            debounce_ms: 50,
            default_label,
            loop_period_ms: 2,
        }
    }
}
