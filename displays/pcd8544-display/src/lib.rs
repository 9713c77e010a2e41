//! PCD8544 display engine
//!
//! Drives 84x48 monochrome panels built on the PCD8544 controller (Nokia
//! 5110/3310 LCDs). This crate provides:
//!
//! - [`Transport`] for the serial link, with an SPI implementation
//! - [`Pcd8544`] tracking the controller's RAM write pointer
//! - Glyph compositing at any vertical pixel offset
//! - Proportional text layout over width-prefixed bitmap fonts
//! - Pixel and line primitives
//! - The power-up intro animation
//!
//! # Display RAM
//!
//! ```text
//!          x = 0                                     x = 83
//! bank 0   ┌─────────────────────────────────────────────┐  rows 0-7
//! bank 1   │                                             │  rows 8-15
//!   ...    │  one byte per (x, bank), bit 0 at the top   │
//! bank 5   └─────────────────────────────────────────────┘  rows 40-47
//! ```
//!
//! The controller RAM is the only buffer. Drawing writes straight through
//! and nothing is read back.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod compositor;
pub mod config;
pub mod cursor;
pub mod driver;
pub mod font;
pub mod intro;
pub mod primitives;
pub mod text;
pub mod transport;

#[cfg(test)]
mod mock;

// Re-export key types
pub use command::DisplayMode;
pub use config::DisplayConfig;
pub use cursor::{Cursor, BANKS, COLUMNS};
pub use driver::{reset, Pcd8544};
pub use font::{FontTag, Glyph};
pub use transport::{DisplayError, Mode, SpiTransport, Transport};
