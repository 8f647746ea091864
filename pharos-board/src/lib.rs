//! Composition root for the Pharos controller board
//!
//! [`Board`] ties the devices from `pharos-drivers` and the screen from
//! `pharos-display` together: one struct, assembled once at startup from
//! whatever peripherals the board variant actually has, then handed to
//! the external scheduler which calls [`Board::update`] once per tick.
//!
//! Peripherals that are not fitted are `None` and silently skipped; that
//! is the normal state for most variants, not an error.

#![no_std]
#![deny(unsafe_code)]

mod board;

pub use board::Board;
