//! Monotonic time source

/// Monotonic millisecond clock
///
/// Must never go backwards. Wrap-around is not a concern at 64 bits.
pub trait Clock {
    /// Milliseconds since boot
    fn now_ms(&self) -> u64;
}
