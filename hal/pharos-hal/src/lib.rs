//! Pharos Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs (ESP8266, RP2040, etc.). This enables the board
//! logic to run unchanged on different hardware platforms - and, just as
//! importantly, on the host under `cargo test` with mock pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Board logic (pharos-board, drivers)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pharos-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  chip HAL crate (out of tree)           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`adc::AdcReader`] - Raw analog samples
//!
//! # Time
//!
//! There is deliberately no clock trait. Every polled operation in the
//! workspace takes `now_ms: u32` read from the platform's free-running,
//! wrapping millisecond counter. Timing logic stays a pure function of
//! that value.

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;

pub use adc::AdcReader;
pub use gpio::{InputPin, OutputPin};
