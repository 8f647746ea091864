//! Display abstraction and differential status screen for Pharos
//!
//! This crate provides:
//! - [`DisplayBackend`] - the trait a display driver (SSD1306 over I2C,
//!   a simulator, a test mock) implements: clear, draw, commit, contrast
//! - [`StatusScreen`] - the board-facing screen: one summary line with an
//!   icon, a fixed-depth scrolling log, diff-gated redraws, and idle
//!   auto-dimming
//!
//! # Architecture
//!
//! The screen keeps its own character buffers and compares every incoming
//! line against them; the backend's commit (a full-frame I2C transfer, the
//! one genuinely slow operation on the board) only happens when content
//! actually changed. Brightness is modulated independently of content on
//! every poll, so an unchanged screen still dims down after idle.
//!
//! Pixel-level rendering lives behind the backend trait, out of this
//! crate.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod icons;
pub mod screen;

pub use backend::{DisplayBackend, DisplayError};
pub use screen::{StatusScreen, LINE_CAP, LOG_LINES};
