//! Bold font
//!
//! Emboldened regular glyphs for space, digits and upper-case letters.
//! Every set column is smeared one column to the right.

/// Characters in table order
pub(super) const CHARS: &str = " 0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Width-prefixed glyph records
#[rustfmt::skip]
pub(super) const DATA: [u8; 289] = [
    4, 0x00, 0x00, 0x00, 0x00, // ' '
    7, 0x3E, 0x7F, 0x59, 0x4D, 0x7F, 0x3E, 0x00, // '0'
    5, 0x42, 0x7F, 0x7F, 0x40, 0x00, // '1'
    7, 0x42, 0x63, 0x71, 0x59, 0x4F, 0x46, 0x00, // '2'
    7, 0x21, 0x61, 0x45, 0x4F, 0x7B, 0x31, 0x00, // '3'
    7, 0x18, 0x1C, 0x16, 0x7F, 0x7F, 0x10, 0x00, // '4'
    7, 0x27, 0x67, 0x45, 0x45, 0x7D, 0x39, 0x00, // '5'
    7, 0x3C, 0x7E, 0x4B, 0x49, 0x79, 0x30, 0x00, // '6'
    7, 0x01, 0x71, 0x79, 0x0D, 0x07, 0x03, 0x00, // '7'
    7, 0x36, 0x7F, 0x49, 0x49, 0x7F, 0x36, 0x00, // '8'
    7, 0x06, 0x4F, 0x49, 0x69, 0x3F, 0x1E, 0x00, // '9'
    7, 0x7E, 0x7F, 0x11, 0x11, 0x7F, 0x7E, 0x00, // 'A'
    7, 0x7F, 0x7F, 0x49, 0x49, 0x7F, 0x36, 0x00, // 'B'
    7, 0x3E, 0x7F, 0x41, 0x41, 0x63, 0x22, 0x00, // 'C'
    7, 0x7F, 0x7F, 0x41, 0x63, 0x3E, 0x1C, 0x00, // 'D'
    7, 0x7F, 0x7F, 0x49, 0x49, 0x49, 0x41, 0x00, // 'E'
    7, 0x7F, 0x7F, 0x09, 0x09, 0x09, 0x01, 0x00, // 'F'
    7, 0x3E, 0x7F, 0x49, 0x49, 0x7B, 0x7A, 0x00, // 'G'
    7, 0x7F, 0x7F, 0x08, 0x08, 0x7F, 0x7F, 0x00, // 'H'
    5, 0x41, 0x7F, 0x7F, 0x41, 0x00, // 'I'
    7, 0x20, 0x60, 0x41, 0x7F, 0x3F, 0x01, 0x00, // 'J'
    7, 0x7F, 0x7F, 0x1C, 0x36, 0x63, 0x41, 0x00, // 'K'
    7, 0x7F, 0x7F, 0x40, 0x40, 0x40, 0x40, 0x00, // 'L'
    7, 0x7F, 0x7F, 0x0E, 0x0E, 0x7F, 0x7F, 0x00, // 'M'
    7, 0x7F, 0x7F, 0x0C, 0x18, 0x7F, 0x7F, 0x00, // 'N'
    7, 0x3E, 0x7F, 0x41, 0x41, 0x7F, 0x3E, 0x00, // 'O'
    7, 0x7F, 0x7F, 0x09, 0x09, 0x0F, 0x06, 0x00, // 'P'
    7, 0x3E, 0x7F, 0x51, 0x71, 0x7F, 0x5E, 0x00, // 'Q'
    7, 0x7F, 0x7F, 0x19, 0x39, 0x6F, 0x46, 0x00, // 'R'
    7, 0x46, 0x4F, 0x49, 0x49, 0x79, 0x31, 0x00, // 'S'
    7, 0x01, 0x01, 0x7F, 0x7F, 0x01, 0x01, 0x00, // 'T'
    7, 0x3F, 0x7F, 0x40, 0x40, 0x7F, 0x3F, 0x00, // 'U'
    7, 0x1F, 0x3F, 0x60, 0x60, 0x3F, 0x1F, 0x00, // 'V'
    7, 0x3F, 0x7F, 0x78, 0x78, 0x7F, 0x3F, 0x00, // 'W'
    7, 0x63, 0x77, 0x1C, 0x1C, 0x77, 0x63, 0x00, // 'X'
    7, 0x07, 0x0F, 0x78, 0x78, 0x0F, 0x07, 0x00, // 'Y'
    7, 0x61, 0x71, 0x59, 0x4D, 0x47, 0x43, 0x00, // 'Z'
];
