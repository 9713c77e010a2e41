//! Power-up intro animation
//!
//! The name "Allison Marias" grows outward from its initials, one frame at
//! a time, in the cursive font on bank 2. Each frame is centred by hand.

use embedded_hal::delay::DelayNs;

use crate::driver::Pcd8544;
use crate::font::FontTag;
use crate::transport::{DisplayError, Transport};

/// One animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Start column
    pub x: u8,
    /// Bank
    pub y: u8,
    /// Vertical offset within the bank
    pub offset: u8,
    /// Text to draw
    pub text: &'static str,
    /// Font to draw it in
    pub font: FontTag,
    /// How long the frame stays up before the display is cleared
    pub hold_ms: u32,
}

impl Frame {
    const fn cursive(x: u8, text: &'static str, hold_ms: u32) -> Self {
        Self {
            x,
            y: 2,
            offset: 4,
            text,
            font: FontTag::Cursive,
            hold_ms,
        }
    }
}

/// The power-up intro
pub const INTRO: [Frame; 7] = [
    Frame::cursive(33, "AM", 2000),
    Frame::cursive(31, "AlMa", 200),
    Frame::cursive(29, "All Ma", 200),
    Frame::cursive(27, "Alli Mar", 200),
    Frame::cursive(23, "Allis Mari", 200),
    Frame::cursive(19, "Alliso Maria", 200),
    Frame::cursive(11, "Allison  Marias", 2000),
];

/// Play `frames` in order, clearing the display after each
///
/// Blocks for the sum of all hold times.
pub fn play<T, D>(
    display: &mut Pcd8544<T>,
    frames: &[Frame],
    delay: &mut D,
) -> Result<(), DisplayError>
where
    T: Transport,
    D: DelayNs,
{
    for frame in frames {
        display.draw_text(frame.x, frame.y, frame.offset, frame.text, frame.font)?;
        delay.delay_ms(frame.hold_ms);
        display.clear_display()?;
    }
    Ok(())
}
