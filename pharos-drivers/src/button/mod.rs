//! Input devices

mod hold;

pub use hold::HoldButton;
