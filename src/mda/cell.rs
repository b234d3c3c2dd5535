//! Display cell
//!
//! A cell is the atomic display unit: one character byte plus one attribute
//! byte, packable into 16 bits. Cells are created and copied by value
//! everywhere; they have no independent lifecycle.

use serde::{Deserialize, Serialize};

use super::attribute::Attribute;

/// A single character cell: character code plus attribute byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The character code (codepage 437, not Unicode)
    pub chr: u8,
    /// The display attribute byte
    pub attr: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::BLANK
    }
}

impl Cell {
    /// A space with the normal attribute
    pub const BLANK: Cell = Cell {
        chr: b' ',
        attr: 0x07,
    };

    /// Create a cell from a character code and attribute
    pub const fn new(chr: u8, attr: Attribute) -> Self {
        Cell {
            chr,
            attr: attr.bits(),
        }
    }

    /// The packed 16-bit view: low byte = character, high byte = attribute.
    ///
    /// This is also the persistence byte order (character first).
    pub const fn packed(self) -> u16 {
        (self.attr as u16) << 8 | self.chr as u16
    }

    /// Reconstruct a cell from its packed 16-bit view
    pub const fn from_packed(packed: u16) -> Self {
        Cell {
            chr: (packed & 0xFF) as u8,
            attr: (packed >> 8) as u8,
        }
    }

    /// Replace the character, keeping the attribute
    pub fn set_chr(&mut self, chr: u8) {
        self.chr = chr;
    }

    /// Replace the attribute byte
    pub fn set_attr(&mut self, attr: Attribute) {
        self.attr = attr.bits();
    }

    /// OR attribute bits into the current attribute
    pub fn or_attr(&mut self, attr: Attribute) {
        self.attr |= attr.bits();
    }

    /// Switch to underline, keeping only the low intensity bits.
    ///
    /// MDA underline lives in bits 0-2 of the attribute; higher bits would
    /// turn the underline into reverse or blink.
    pub fn underline(&mut self) {
        self.attr = (self.attr & 0xF8) | Attribute::UNDERLINE.bits();
    }

    /// OR in the intensity bit
    pub fn bold(&mut self) {
        self.or_attr(Attribute::BOLD);
    }

    /// OR in the blink bit
    pub fn blink(&mut self) {
        self.or_attr(Attribute::BLINK);
    }

    /// Replace the attribute with reverse video
    pub fn reverse(&mut self) {
        self.set_attr(Attribute::REVERSE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_new() {
        let cell = Cell::new(b'A', Attribute::NORMAL);
        assert_eq!(cell.chr, b'A');
        assert_eq!(cell.attr, 0x07);
    }

    #[test]
    fn test_cell_packed_byte_order() {
        // Low byte character, high byte attribute
        let cell = Cell::new(b'A', Attribute::BLINK);
        assert_eq!(cell.packed(), 0x8041);
        assert_eq!(Cell::from_packed(0x8041), cell);
    }

    #[test]
    fn test_cell_packed_roundtrip() {
        let cell = Cell::new(0xB0, Attribute::NORMAL | Attribute::BOLD);
        assert_eq!(Cell::from_packed(cell.packed()), cell);
    }

    #[test]
    fn test_cell_underline_masks_high_bits() {
        let mut cell = Cell::new(b'x', Attribute::REVERSE | Attribute::BLINK);
        cell.underline();
        // High bits survive only above bit 2
        assert_eq!(cell.attr, (0xF0 & 0xF8) | 0x01);
    }

    #[test]
    fn test_cell_attribute_mutators() {
        let mut cell = Cell::new(b'A', Attribute::NORMAL);
        cell.bold();
        assert_eq!(cell.attr, 0x0F);
        cell.blink();
        assert_eq!(cell.attr, 0x8F);
        cell.reverse();
        assert_eq!(cell.attr, 0x70);
        cell.set_chr(b'B');
        assert_eq!(cell.chr, b'B');
        assert_eq!(cell.attr, 0x70);
    }

    #[test]
    fn test_blank() {
        assert_eq!(Cell::BLANK.chr, b' ');
        assert_eq!(Cell::BLANK.attr, 0x07);
        assert_eq!(Cell::default(), Cell::BLANK);
    }
}
