//! Text layout
//!
//! Lays glyphs out left to right on one bank at a fixed vertical offset.
//! The cursor moves by each glyph's width. Text is not clipped: a line
//! longer than the panel follows the controller's wrap into the next bank.

use core::fmt::{self, Write};

use heapless::String;

use crate::compositor::MAX_OFFSET;
use crate::cursor::{Cursor, COLUMNS};
use crate::driver::Pcd8544;
use crate::font::FontTag;
use crate::transport::{DisplayError, Transport};

/// Longest formatted line, one character per column
pub const LINE_CAPACITY: usize = COLUMNS as usize;

impl<T: Transport> Pcd8544<T> {
    /// Draw `text` in `font` starting at column `x` of bank `y`
    ///
    /// Ignored when the start is off the panel or `offset > 7`. Characters
    /// the font does not define take no space.
    pub fn draw_text(
        &mut self,
        x: u8,
        y: u8,
        offset: u8,
        text: &str,
        font: FontTag,
    ) -> Result<(), DisplayError> {
        if !Cursor::is_valid(x, y) || offset > MAX_OFFSET {
            return Ok(());
        }

        self.set_address(x, y)?;
        let font = font.font();
        for ch in text.chars() {
            let glyph = font.glyph_or_blank(ch);
            if glyph.is_blank() {
                continue;
            }
            let at = self.cursor();
            self.draw_shape(at.x(), at.y(), offset, glyph.columns())?;
        }
        Ok(())
    }

    /// Format and draw a line of text
    ///
    /// Output beyond [`LINE_CAPACITY`] characters is dropped.
    pub fn draw_fmt(
        &mut self,
        x: u8,
        y: u8,
        offset: u8,
        font: FontTag,
        args: fmt::Arguments<'_>,
    ) -> Result<(), DisplayError> {
        let mut line: String<LINE_CAPACITY> = String::new();
        let _ = line.write_fmt(args);
        self.draw_text(x, y, offset, &line, font)
    }
}
