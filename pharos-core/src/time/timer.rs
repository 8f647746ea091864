//! Simple timer with 1 ms resolution

/// Millisecond timer over the platform's wrapping counter
///
/// Stores only the counter value at its start point. `elapsed_ms` is valid
/// for any later `now_ms`, including after the counter has wrapped past
/// `u32::MAX` once since `restart` (the counter period is ~49.7 days, far
/// longer than any interval the board measures).
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timer {
    start_ms: u32,
}

impl Timer {
    /// Create a timer whose start point is counter value 0
    pub const fn new() -> Self {
        Self { start_ms: 0 }
    }

    /// Create a timer already started at `now_ms`
    pub const fn started_at(now_ms: u32) -> Self {
        Self { start_ms: now_ms }
    }

    /// Move the start point to `now_ms`
    pub fn restart(&mut self, now_ms: u32) {
        self.start_ms = now_ms;
    }

    /// Milliseconds since the start point, wraparound-safe
    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.start_ms)
    }

    /// Advance the start point by `delta_ms` without restarting
    ///
    /// Cyclic consumers (blink patterns) drop whole elapsed cycles this
    /// way so `elapsed_ms` stays small indefinitely while the phase within
    /// the current cycle is untouched.
    pub fn rebase(&mut self, delta_ms: u32) {
        self.start_ms = self.start_ms.wrapping_add(delta_ms);
    }
}
