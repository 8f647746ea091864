//! Millisecond timing
//!
//! The platform clock is a free-running `u32` millisecond counter that
//! wraps every ~49.7 days. Nothing in this module ever compares raw
//! counter values; all elapsed-time math goes through wrapping
//! subtraction, which stays correct across a single wrap of the counter.

mod edge;
mod timer;

pub use edge::EdgeTimestamp;
pub use timer::Timer;
