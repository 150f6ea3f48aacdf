//! Parameter registry
//!
//! Fixed-capacity store of host-registered parameters. Slots fill in
//! order; once all [`MAX_PARAMS`] are used, each new parameter overwrites
//! the oldest one. Overwriting is silent and shifts what an index refers
//! to, so holders of an index may see a different parameter afterwards.
//!
//! Name lookups scan the valid slots in slot order and stop at the first
//! exact match. Duplicate names are allowed; after a wrap-around the first
//! match in slot order is not necessarily the most recently added one.

mod parameter;

pub use parameter::{truncate, Parameter, MAX_NAME_LEN};

/// Registry capacity
pub const MAX_PARAMS: usize = 5;

/// Circular parameter store
#[derive(Debug, Clone, Default)]
pub struct ParameterRegistry {
    slots: [Parameter; MAX_PARAMS],
    /// Next slot to write
    head: usize,
    /// Valid slots, `0..count`
    count: usize,
}

impl ParameterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a parameter in the next slot and return that slot's index
    ///
    /// The name is truncated to [`MAX_NAME_LEN`] and `initial` is clamped
    /// into `[min, max]`. When the registry is full the oldest entry is
    /// replaced.
    pub fn add(&mut self, name: &str, min: i32, max: i32, initial: i32) -> usize {
        let slot = self.head;
        self.slots[slot] = Parameter::new(name, min, max, initial);
        self.head = (self.head + 1) % MAX_PARAMS;
        if self.count < MAX_PARAMS {
            self.count += 1;
        }
        slot
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of valid entries
    pub fn len(&self) -> usize {
        self.count
    }

    /// Index of the first entry named `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.valid().iter().position(|p| p.name() == name)
    }

    /// Set the current value of the entry named `name`
    ///
    /// Returns the clamped value actually stored, or `None` if no entry
    /// has that name.
    pub fn update_by_name(&mut self, name: &str, value: i32) -> Option<i32> {
        let index = self.position(name)?;
        Some(self.slots[index].set_current(value))
    }

    /// Set the current value of the entry at `index`
    ///
    /// Out-of-range indices are ignored and return `None`.
    pub fn update_by_index(&mut self, index: usize, value: i32) -> Option<i32> {
        if index >= self.count {
            return None;
        }
        Some(self.slots[index].set_current(value))
    }

    pub fn min(&self, name: &str) -> Option<i32> {
        self.find(name).map(Parameter::min)
    }

    pub fn max(&self, name: &str) -> Option<i32> {
        self.find(name).map(Parameter::max)
    }

    pub fn current(&self, name: &str) -> Option<i32> {
        self.find(name).map(Parameter::current)
    }

    /// Copy of the entry named `name`
    pub fn get(&self, name: &str) -> Option<Parameter> {
        self.find(name).cloned()
    }

    /// Copy of the entry at `index`, or an empty parameter if out of range
    pub fn get_by_index(&self, index: usize) -> Parameter {
        self.valid().get(index).cloned().unwrap_or_default()
    }

    /// Copies of all valid entries with their indices, in slot order
    pub fn snapshot(&self) -> impl Iterator<Item = (usize, Parameter)> + Clone + '_ {
        self.valid().iter().cloned().enumerate()
    }

    fn find(&self, name: &str) -> Option<&Parameter> {
        self.valid().iter().find(|p| p.name() == name)
    }

    fn valid(&self) -> &[Parameter] {
        &self.slots[..self.count]
    }
}
