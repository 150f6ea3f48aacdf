//! Bounded integer parameter

use heapless::String;

/// Maximum stored name length; longer names are cut
pub const MAX_NAME_LEN: usize = 14;

/// A named integer with inclusive bounds
///
/// `min <= current <= max` holds for every value constructed through
/// [`Parameter::new`] and every write through [`Parameter::set_current`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Parameter {
    name: String<MAX_NAME_LEN>,
    min: i32,
    max: i32,
    current: i32,
}

impl Parameter {
    /// Build a parameter, truncating the name and clamping `current`
    ///
    /// Reversed bounds are swapped so the range is never empty.
    pub fn new(name: &str, min: i32, max: i32, current: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            name: truncate(name),
            min,
            max,
            current: current.clamp(min, max),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    /// Clamp `value` into this parameter's range
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    /// Store `value` clamped into range and return what was stored
    pub fn set_current(&mut self, value: i32) -> i32 {
        self.current = self.clamp(value);
        self.current
    }
}

/// Copy as much of `text` as fits into `N` bytes without splitting a char
pub fn truncate<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
