//! Pixel and line primitives
//!
//! Display RAM is write-only, so every primitive replaces whole column
//! bytes. Pixels sharing a byte with a drawn pixel are cleared.

use crate::compositor::MAX_OFFSET;
use crate::cursor::{Cursor, HEIGHT};
use crate::driver::Pcd8544;
use crate::transport::{DisplayError, Transport};

/// Column byte with `length` set bits starting at bit `offset`
///
/// Runs past bit 7 are cut at the bank boundary.
pub const fn vertical_run(offset: u8, length: u8) -> u8 {
    if offset > MAX_OFFSET {
        return 0;
    }
    let room = 8 - offset;
    let span = if length < room { length } else { room };
    (((1u16 << span) - 1) as u8) << offset
}

impl<T: Transport> Pcd8544<T> {
    /// Set a single pixel at column `x`, bit `offset` of bank `y`
    pub fn draw_pixel(&mut self, x: u8, y: u8, offset: u8) -> Result<(), DisplayError> {
        if !Cursor::is_valid(x, y) || offset > MAX_OFFSET {
            return Ok(());
        }
        self.set_address(x, y)?;
        self.write_data(1 << offset)
    }

    /// Draw a one-pixel horizontal line of `length` columns
    pub fn draw_hline(
        &mut self,
        x: u8,
        y: u8,
        offset: u8,
        length: u8,
    ) -> Result<(), DisplayError> {
        if !Cursor::is_valid(x, y) || offset > MAX_OFFSET {
            return Ok(());
        }
        self.set_address(x, y)?;
        for _ in 0..length {
            self.write_data(1 << offset)?;
        }
        Ok(())
    }

    /// Draw a vertical line in pixel coordinates
    ///
    /// `top` is the pixel row (0-47). The line is clipped at the bottom edge
    /// and takes one write per bank it crosses.
    pub fn draw_vline(&mut self, x: u8, top: u8, height: u8) -> Result<(), DisplayError> {
        if !Cursor::is_valid(x, 0) || top >= HEIGHT {
            return Ok(());
        }

        let bottom = (top as u16 + height as u16).min(HEIGHT as u16) as u8;
        let mut row = top;
        while row < bottom {
            let offset = row % 8;
            let length = (8 - offset).min(bottom - row);
            self.set_address(x, row / 8)?;
            self.write_data(vertical_run(offset, length))?;
            row += length;
        }
        Ok(())
    }
}
