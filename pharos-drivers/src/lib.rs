//! Hardware device drivers for the Pharos controller board
//!
//! Concrete implementations over the `pharos-hal` traits:
//!
//! - Output devices: patterned GPIO actuator (constant/blink/pulse) and a
//!   plain switch output
//! - Hold button with an interrupt-recorded edge timestamp
//! - Voltage rail monitor with ppm calibration and alarm classification
//!
//! Everything is polled; each device exposes an `update(now_ms)` the
//! external scheduler calls once per tick.

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod output;
pub mod sensor;

pub use button::HoldButton;
pub use output::{GpioActuator, SimpleOutput};
pub use sensor::RailMonitor;
