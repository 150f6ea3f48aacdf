//! Selected parameter
//!
//! The knob always adjusts the selected registry index. Nothing is
//! selected until the first parameter arrives; after that the button
//! cycles through the valid indices.

/// Index of the parameter under local control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selection {
    index: Option<usize>,
}

impl Selection {
    /// Start with nothing selected
    pub const fn new() -> Self {
        Self { index: None }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Select index 0 (first parameter registered)
    pub fn select_first(&mut self) {
        self.index = Some(0);
    }

    /// Move to the next of `count` entries, wrapping to 0
    ///
    /// Does nothing when `count` is 0.
    pub fn advance(&mut self, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let next = match self.index {
            Some(index) => (index + 1) % count,
            None => 0,
        };
        self.index = Some(next);
        self.index
    }
}
