//! Glyph compositing with vertical bit offsets
//!
//! The controller only addresses whole banks. Drawing a shape `offset`
//! pixels below a bank boundary treats each column as a 16-bit value
//! `byte << offset`: the low byte lands in the current bank, the high byte
//! (the spillover) in the bank below.
//!
//! ```text
//!   bank y     bit 0 ┐
//!                ... │ byte << offset
//!              bit 7 ┘
//!   bank y+1   bit 0 ┐
//!                ... │ byte >> (8 - offset)
//! ```
//!
//! Writing the spillover moves the RAM pointer, so every spilling column
//! costs an address set to the bank below, the spillover write, an address
//! set back, and the main write.

use crate::cursor::Cursor;
use crate::driver::Pcd8544;
use crate::transport::{DisplayError, Transport};

/// Largest vertical offset within a bank
pub const MAX_OFFSET: u8 = 7;

/// Split a column byte drawn `offset` pixels down
///
/// Returns the byte for the current bank and, when the shift changed the
/// byte, the spillover for the bank below. `offset` must be at most 7.
pub const fn split_column(byte: u8, offset: u8) -> (u8, Option<u8>) {
    debug_assert!(offset <= MAX_OFFSET);
    let shifted = byte << offset;
    if offset == 0 || shifted == byte {
        (shifted, None)
    } else {
        (shifted, Some(byte >> (8 - offset)))
    }
}

impl<T: Transport> Pcd8544<T> {
    /// Draw column bytes left to right from (x, y), shifted down by `offset`
    ///
    /// Ignored when (x, y) is off the panel or `offset > 7`. Columns past the
    /// right edge follow the controller's wrap into the next bank. Spillover
    /// below the last bank is dropped.
    pub fn draw_shape(
        &mut self,
        x: u8,
        y: u8,
        offset: u8,
        columns: &[u8],
    ) -> Result<(), DisplayError> {
        if !Cursor::is_valid(x, y) || offset > MAX_OFFSET {
            return Ok(());
        }

        self.set_address(x, y)?;
        for &byte in columns {
            self.composite_column(byte, offset)?;
        }
        Ok(())
    }

    /// Composite one column at the cursor; the cursor ends one column right
    fn composite_column(&mut self, byte: u8, offset: u8) -> Result<(), DisplayError> {
        let (main, spill) = split_column(byte, offset);

        if let Some(spill) = spill {
            let here = self.cursor();
            if let Some(below) = here.next_bank() {
                self.set_address(below.x(), below.y())?;
                self.write_data(spill)?;
                self.set_address(here.x(), here.y())?;
            }
        }

        self.write_data(main)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::mock::{Op, Recorder};

    fn addr(x: u8, y: u8) -> [Op; 2] {
        [Op::Command(0x80 | x), Op::Command(0x40 | y)]
    }

    #[test]
    fn test_split_without_offset() {
        for byte in [0x00, 0x01, 0x80, 0xFF] {
            assert_eq!(split_column(byte, 0), (byte, None));
        }
    }

    #[test]
    fn test_split_with_offset() {
        assert_eq!(split_column(0x3C, 4), (0xC0, Some(0x03)));
        assert_eq!(split_column(0xFF, 1), (0xFE, Some(0x01)));
        assert_eq!(split_column(0x81, 7), (0x80, Some(0x40)));
    }

    #[test]
    fn test_split_reconstructs_column() {
        for byte in 0..=u8::MAX {
            for offset in 0..=MAX_OFFSET {
                let (main, spill) = split_column(byte, offset);
                let column = ((spill.unwrap_or(0) as u16) << 8) | main as u16;
                assert_eq!(column, (byte as u16) << offset);
            }
        }
    }

    #[test]
    fn test_offset_zero_is_one_write_per_column() {
        let mut display = Pcd8544::new(Recorder::new());
        display.draw_shape(5, 1, 0, &[0x12, 0xFF, 0x80]).unwrap();

        let mut expected = addr(5, 1).to_vec();
        expected.extend([Op::Data(0x12), Op::Data(0xFF), Op::Data(0x80)]);
        assert_eq!(display.transport().ops(), expected.as_slice());
    }

    #[test]
    fn test_spillover_column() {
        let mut display = Pcd8544::new(Recorder::new());
        display.draw_shape(33, 2, 4, &[0x3C]).unwrap();

        let mut expected = addr(33, 2).to_vec();
        expected.extend(addr(33, 3));
        expected.push(Op::Data(0x03));
        expected.extend(addr(33, 2));
        expected.push(Op::Data(0xC0));
        assert_eq!(display.transport().ops(), expected.as_slice());
        assert_eq!(display.cursor(), Cursor::new(34, 2).unwrap());
    }

    #[test]
    fn test_unchanged_byte_does_not_spill() {
        // 0x00 stays 0x00 under any shift
        let mut display = Pcd8544::new(Recorder::new());
        display.draw_shape(0, 0, 5, &[0x00, 0x00]).unwrap();
        assert_eq!(display.transport().command_count(), 2);
        assert_eq!(display.transport().data_count(), 2);
    }

    #[test]
    fn test_spillover_dropped_on_last_bank() {
        let mut display = Pcd8544::new(Recorder::new());
        display.draw_shape(10, 5, 3, &[0xFF, 0x01]).unwrap();

        let mut expected = addr(10, 5).to_vec();
        expected.extend([Op::Data(0xF8), Op::Data(0x08)]);
        assert_eq!(display.transport().ops(), expected.as_slice());
    }

    #[test]
    fn test_invalid_arguments_are_ignored() {
        let mut display = Pcd8544::new(Recorder::new());
        display.draw_shape(84, 0, 0, &[0xFF]).unwrap();
        display.draw_shape(0, 6, 0, &[0xFF]).unwrap();
        display.draw_shape(0, 0, 8, &[0xFF]).unwrap();
        assert!(display.transport().ops().is_empty());
    }

    #[test]
    fn test_shape_wraps_at_right_edge() {
        let mut display = Pcd8544::new(Recorder::new());
        display.draw_shape(83, 1, 0, &[0xAA, 0x55]).unwrap();
        assert_eq!(display.cursor(), Cursor::new(1, 2).unwrap());
    }

    #[test]
    fn test_spillover_after_wrap_uses_new_bank() {
        let mut display = Pcd8544::new(Recorder::new());
        display.draw_shape(83, 1, 4, &[0x00, 0xF0]).unwrap();

        let ops = display.transport().ops();
        // Second column continues at (0, 2) and spills into bank 3
        let tail = &ops[ops.len() - 6..];
        let mut expected = addr(0, 3).to_vec();
        expected.push(Op::Data(0x0F));
        expected.extend(addr(0, 2));
        expected.push(Op::Data(0x00));
        assert_eq!(tail, expected.as_slice());
    }
}
