//! Glyph store
//!
//! Each font is a flat byte table of glyph records laid out as
//! `[width][width column bytes]`, plus an index from printable ASCII code
//! point to the record's offset. Column bytes follow the display RAM
//! layout: one byte per column, bit 0 at the top.
//!
//! Fonts are sparse. A character without a record in the selected font has
//! no glyph and is laid out as zero width.

mod bold;
mod cursive;
mod regular;

/// First printable code point (space)
pub const FIRST_CODE_POINT: u8 = 0x20;
/// Last printable code point (tilde)
pub const LAST_CODE_POINT: u8 = 0x7E;
/// Number of printable code points
pub const GLYPH_SLOTS: usize = (LAST_CODE_POINT - FIRST_CODE_POINT + 1) as usize;

/// Font selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FontTag {
    /// Proportional 5x7, full printable ASCII
    #[default]
    Regular = 0,
    /// Script letters used by the intro
    Cursive = 1,
    /// Emboldened digits and capitals
    Bold = 2,
}

impl FontTag {
    /// Select a font by its raw tag, falling back to [`FontTag::Regular`]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Cursive,
            2 => Self::Bold,
            _ => Self::Regular,
        }
    }

    /// The glyph table for this tag
    pub fn font(self) -> &'static Font {
        match self {
            Self::Regular => &REGULAR,
            Self::Cursive => &CURSIVE,
            Self::Bold => &BOLD,
        }
    }
}

/// A printable ASCII code point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CodePoint(u8);

impl CodePoint {
    /// Validate a character, `None` outside `0x20..=0x7E`
    pub const fn new(ch: char) -> Option<Self> {
        let code = ch as u32;
        if code >= FIRST_CODE_POINT as u32 && code <= LAST_CODE_POINT as u32 {
            Some(Self(code as u8))
        } else {
            None
        }
    }

    /// ASCII value
    pub const fn get(self) -> u8 {
        self.0
    }

    const fn slot(self) -> usize {
        (self.0 - FIRST_CODE_POINT) as usize
    }
}

/// A glyph's column bytes, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    columns: &'static [u8],
}

impl Glyph {
    /// Zero-width glyph used for undefined characters
    pub const BLANK: Self = Self { columns: &[] };

    /// Width in columns
    pub const fn width(&self) -> u8 {
        self.columns.len() as u8
    }

    /// Column bytes
    pub const fn columns(&self) -> &'static [u8] {
        self.columns
    }

    /// Whether the glyph draws nothing
    pub const fn is_blank(&self) -> bool {
        self.columns.is_empty()
    }
}

/// A compiled font
pub struct Font {
    tag: FontTag,
    data: &'static [u8],
    index: [Option<u16>; GLYPH_SLOTS],
}

/// Proportional font covering all printable ASCII
pub static REGULAR: Font = Font::build(FontTag::Regular, &regular::DATA, regular::CHARS);
/// Script font
pub static CURSIVE: Font = Font::build(FontTag::Cursive, &cursive::DATA, cursive::CHARS);
/// Bold font
pub static BOLD: Font = Font::build(FontTag::Bold, &bold::DATA, bold::CHARS);

impl Font {
    /// Index a record table whose glyphs appear in the order of `chars`
    ///
    /// Evaluated at compile time; a table whose widths disagree with its
    /// length fails the build.
    const fn build(tag: FontTag, data: &'static [u8], chars: &str) -> Self {
        let chars = chars.as_bytes();
        let mut index = [None; GLYPH_SLOTS];
        let mut offset = 0usize;
        let mut i = 0;

        while i < chars.len() {
            assert!(offset < data.len(), "font table ends before its last glyph");
            let code = chars[i];
            assert!(
                code >= FIRST_CODE_POINT && code <= LAST_CODE_POINT,
                "font character is not printable ASCII"
            );
            index[(code - FIRST_CODE_POINT) as usize] = Some(offset as u16);
            offset += 1 + data[offset] as usize;
            i += 1;
        }
        assert!(offset == data.len(), "font widths disagree with table length");

        Self { tag, data, index }
    }

    /// Font tag
    pub const fn tag(&self) -> FontTag {
        self.tag
    }

    /// Glyph for a validated code point, `None` if the font does not define it
    pub fn lookup(&self, code: CodePoint) -> Option<Glyph> {
        let offset = self.index[code.slot()]? as usize;
        let width = *self.data.get(offset)? as usize;
        let start = offset + 1;
        self.data
            .get(start..start + width)
            .map(|columns| Glyph { columns })
    }

    /// Glyph for a character, `None` if unprintable or undefined
    pub fn glyph(&self, ch: char) -> Option<Glyph> {
        CodePoint::new(ch).and_then(|code| self.lookup(code))
    }

    /// Glyph for a character, zero width if unprintable or undefined
    pub fn glyph_or_blank(&self, ch: char) -> Glyph {
        self.glyph(ch).unwrap_or(Glyph::BLANK)
    }

    /// Total width of `text` in columns
    pub fn text_width(&self, text: &str) -> u16 {
        text.chars()
            .map(|ch| self.glyph_or_blank(ch).width() as u16)
            .sum()
    }

    /// Defined glyphs in code point order
    pub fn glyphs(&self) -> impl Iterator<Item = (char, Glyph)> + '_ {
        (FIRST_CODE_POINT..=LAST_CODE_POINT)
            .map(char::from)
            .filter_map(move |ch| self.glyph(ch).map(|glyph| (ch, glyph)))
    }
}

/// Look up `ch` in the font selected by `tag`
pub fn lookup(ch: char, tag: FontTag) -> Option<Glyph> {
    tag.font().glyph(ch)
}
