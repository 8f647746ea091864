//! Analog sensors

mod rail;

pub use rail::RailMonitor;
