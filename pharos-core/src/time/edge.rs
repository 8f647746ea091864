//! Interrupt-shared edge timestamp

use core::cell::Cell;

use critical_section::Mutex;

/// Millisecond timestamp shared between an edge ISR and the polling loop
///
/// The edge-detection handler stores the counter value on every electrical
/// transition; the polling side reads it to decide whether a hold has
/// lasted long enough, and writes it back after a successful trigger.
///
/// Every access goes through a critical section. The polling side must
/// never assume a torn-free read without that guard - on targets where a
/// 32-bit store is not single-copy atomic, an unguarded read can observe
/// half of an in-flight ISR write.
///
/// `const fn new` so instances can live in a `static` next to the ISR:
///
/// ```ignore
/// static RESET_EDGE: EdgeTimestamp = EdgeTimestamp::new();
///
/// // in the edge ISR:
/// RESET_EDGE.record(millis());
/// ```
pub struct EdgeTimestamp(Mutex<Cell<u32>>);

impl Default for EdgeTimestamp {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeTimestamp {
    /// Create a timestamp cell holding counter value 0
    pub const fn new() -> Self {
        Self(Mutex::new(Cell::new(0)))
    }

    /// Store the current counter value
    ///
    /// Called from the edge ISR on every transition, and from the polling
    /// side to re-arm after a trigger.
    pub fn record(&self, now_ms: u32) {
        critical_section::with(|cs| self.0.borrow(cs).set(now_ms));
    }

    /// Read the last recorded counter value
    pub fn get(&self) -> u32 {
        critical_section::with(|cs| self.0.borrow(cs).get())
    }

    /// Milliseconds since the last recorded edge, wraparound-safe
    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.get())
    }
}
