//! Board-agnostic core logic for the Pharos controller board
//!
//! This crate contains the logic that does not depend on specific hardware
//! implementations:
//!
//! - Wraparound-safe millisecond timing ([`time::Timer`])
//! - The interrupt-shared edge timestamp cell ([`time::EdgeTimestamp`])
//! - Link/rail status to summary-text and LED-pattern mapping ([`status`])
//! - Composition-root configuration types ([`config`])
//!
//! Everything here is a pure function of its inputs plus a `now_ms`
//! millisecond reading, so the whole crate tests on the host.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod status;
pub mod time;
