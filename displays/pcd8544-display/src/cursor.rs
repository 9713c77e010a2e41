//! Display RAM addressing
//!
//! Display RAM is 84 columns by 6 banks, one byte per (column, bank). Each
//! byte is a vertical strip of 8 pixels with bit 0 at the top.

/// Number of columns (X addresses)
pub const COLUMNS: u8 = 84;
/// Number of 8-pixel banks (Y addresses)
pub const BANKS: u8 = 6;
/// Panel height in pixels
pub const HEIGHT: u8 = BANKS * 8;
/// Bytes of display RAM
pub const RAM_SIZE: usize = COLUMNS as usize * BANKS as usize;

/// Controller write pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    x: u8,
    y: u8,
}

impl Cursor {
    /// Top-left corner, also the controller's reset address
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a cursor, or `None` when the address is off the panel
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if Self::is_valid(x, y) {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Whether (x, y) is a RAM address
    pub const fn is_valid(x: u8, y: u8) -> bool {
        x < COLUMNS && y < BANKS
    }

    /// Column (0-83)
    pub const fn x(&self) -> u8 {
        self.x
    }

    /// Bank (0-5)
    pub const fn y(&self) -> u8 {
        self.y
    }

    /// Address after one data byte in horizontal addressing mode
    ///
    /// Wraps from column 83 to column 0 of the next bank, and from the last
    /// bank back to bank 0.
    pub const fn advance(self) -> Self {
        if self.x + 1 < COLUMNS {
            Self {
                x: self.x + 1,
                y: self.y,
            }
        } else if self.y + 1 < BANKS {
            Self { x: 0, y: self.y + 1 }
        } else {
            Self::ORIGIN
        }
    }

    /// Same column one bank lower, if there is one
    pub const fn next_bank(self) -> Option<Self> {
        Self::new(self.x, self.y + 1)
    }
}
