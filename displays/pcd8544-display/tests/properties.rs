//! Bus-level properties of addressing, compositing and layout

use pcd8544_display::font::FontTag;
use pcd8544_display::{Cursor, DisplayError, Mode, Pcd8544, Transport, BANKS, COLUMNS};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Command(u8),
    Data(u8),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Transport for Recorder {
    fn transmit(&mut self, mode: Mode, byte: u8) -> Result<(), DisplayError> {
        self.ops.push(match mode {
            Mode::Command => Op::Command(byte),
            Mode::Data => Op::Data(byte),
        });
        Ok(())
    }
}

fn display() -> Pcd8544<Recorder> {
    Pcd8544::new(Recorder::default())
}

fn addr(x: u8, y: u8) -> [Op; 2] {
    [Op::Command(0x80 | x), Op::Command(0x40 | y)]
}

proptest! {
    #[test]
    fn set_address_in_range_emits_two_commands(x in 0..COLUMNS, y in 0..BANKS) {
        let mut display = display();
        display.set_address(x, y).unwrap();
        prop_assert_eq!(display.transport().ops.as_slice(), &addr(x, y));
        prop_assert_eq!(display.cursor(), Cursor::new(x, y).unwrap());
    }

    #[test]
    fn set_address_out_of_range_emits_nothing(x in any::<u8>(), y in any::<u8>()) {
        prop_assume!(x >= COLUMNS || y >= BANKS);
        let mut display = display();
        display.set_address(x, y).unwrap();
        prop_assert!(display.transport().ops.is_empty());
        prop_assert_eq!(display.cursor(), Cursor::ORIGIN);
    }

    #[test]
    fn column_write_count_follows_boundary_crossing(
        byte in any::<u8>(),
        offset in 0u8..=7,
        x in 0..COLUMNS,
        y in 0..BANKS - 1,
    ) {
        let mut display = display();
        display.draw_shape(x, y, offset, &[byte]).unwrap();

        let shifted = byte << offset;
        let mut expected = addr(x, y).to_vec();
        if shifted != byte {
            expected.extend(addr(x, y + 1));
            expected.push(Op::Data(byte >> (8 - offset)));
            expected.extend(addr(x, y));
        }
        expected.push(Op::Data(shifted));
        prop_assert_eq!(&display.transport().ops, &expected);
    }

    #[test]
    fn offset_zero_round_trips(columns in prop::collection::vec(any::<u8>(), 0..40)) {
        let mut display = display();
        display.draw_shape(0, 0, 0, &columns).unwrap();

        let data: Vec<u8> = display
            .transport()
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Data(b) => Some(*b),
                Op::Command(_) => None,
            })
            .collect();
        prop_assert_eq!(data, columns);
        prop_assert_eq!(display.transport().ops.len(), 2 + data_len(&display));
    }

    #[test]
    fn text_advances_by_glyph_widths(
        text in "[AMailnors ]{0,8}",
        offset in 0u8..=7,
        y in 0..BANKS,
    ) {
        let font = FontTag::Cursive.font();
        let width = font.text_width(&text);
        prop_assume!(width <= 40);

        let mut display = display();
        display.draw_text(20, y, offset, &text, FontTag::Cursive).unwrap();
        prop_assert_eq!(display.cursor().x() as u16, 20 + width);
        prop_assert_eq!(display.cursor().y(), y);
    }
}

fn data_len(display: &Pcd8544<Recorder>) -> usize {
    display
        .transport()
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Data(_)))
        .count()
}

#[test]
fn clear_display_writes_whole_ram_once() {
    let mut display = display();
    display.clear_display().unwrap();

    let ops = &display.transport().ops;
    assert_eq!(&ops[..2], &addr(0, 0));
    assert_eq!(ops.len(), 2 + 504);
    assert!(ops[2..].iter().all(|op| *op == Op::Data(0x00)));
}

#[test]
fn empty_text_emits_only_the_address() {
    let mut display = display();
    display.draw_text(5, 5, 7, "", FontTag::Bold).unwrap();
    assert_eq!(display.transport().ops.as_slice(), &addr(5, 5));
}

#[test]
fn font_tables_are_well_formed() {
    for tag in [FontTag::Regular, FontTag::Cursive, FontTag::Bold] {
        let font = tag.font();
        assert_eq!(font.tag(), tag);
        for (ch, glyph) in font.glyphs() {
            assert!(glyph.width() > 0, "{:?} {:?}", tag, ch);
            assert_eq!(glyph.columns().len(), glyph.width() as usize);
        }
    }
}
