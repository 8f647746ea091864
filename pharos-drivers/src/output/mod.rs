//! Output devices
//!
//! - [`GpioActuator`] - binary output with constant/blink/pulse behavior
//! - [`SimpleOutput`] - plain on/off switch output, no timing

mod actuator;
mod simple;

pub use actuator::GpioActuator;
pub use simple::SimpleOutput;
