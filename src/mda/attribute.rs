//! MDA/Hercules text attributes
//!
//! A single byte of display attribute flags. Not all combinations are
//! visually distinct on real hardware; underline in particular only
//! renders on Hercules cards in text mode.

use serde::{Deserialize, Serialize};

/// One byte of MDA display attribute flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attribute {
    bits: u8,
}

impl Attribute {
    /// White on black, standard text
    pub const NORMAL: Attribute = Attribute { bits: 0x07 };
    /// Underlined text (Hercules only)
    pub const UNDERLINE: Attribute = Attribute { bits: 0x01 };
    /// Bright white (intensity bit; OR with NORMAL)
    pub const BOLD: Attribute = Attribute { bits: 0x08 };
    /// Blinking text
    pub const BLINK: Attribute = Attribute { bits: 0x80 };
    /// Black on white, reversed video
    pub const REVERSE: Attribute = Attribute { bits: 0x70 };
    /// Invisible text (foreground == background)
    pub const INVISIBLE: Attribute = Attribute { bits: 0x00 };

    /// Construct from a raw attribute byte
    pub const fn new(bits: u8) -> Self {
        Attribute { bits }
    }

    /// The raw attribute byte
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// Check whether all bits of `flag` are set
    pub fn contains(self, flag: Attribute) -> bool {
        self.bits & flag.bits == flag.bits
    }

    /// OR in another attribute's bits
    pub fn insert(&mut self, flag: Attribute) {
        self.bits |= flag.bits;
    }

    /// Clear another attribute's bits
    pub fn remove(&mut self, flag: Attribute) {
        self.bits &= !flag.bits;
    }
}

impl std::ops::BitOr for Attribute {
    type Output = Attribute;

    fn bitor(self, rhs: Attribute) -> Attribute {
        Attribute {
            bits: self.bits | rhs.bits,
        }
    }
}

impl From<u8> for Attribute {
    fn from(bits: u8) -> Self {
        Attribute { bits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_values() {
        assert_eq!(Attribute::NORMAL.bits(), 0x07);
        assert_eq!(Attribute::UNDERLINE.bits(), 0x01);
        assert_eq!(Attribute::BOLD.bits(), 0x08);
        assert_eq!(Attribute::BLINK.bits(), 0x80);
        assert_eq!(Attribute::REVERSE.bits(), 0x70);
        assert_eq!(Attribute::INVISIBLE.bits(), 0x00);
    }

    #[test]
    fn test_attribute_or() {
        let attr = Attribute::NORMAL | Attribute::BLINK;
        assert_eq!(attr.bits(), 0x87);
        assert!(attr.contains(Attribute::NORMAL));
        assert!(attr.contains(Attribute::BLINK));
        assert!(!attr.contains(Attribute::REVERSE));
    }

    #[test]
    fn test_attribute_insert_remove() {
        let mut attr = Attribute::NORMAL;
        attr.insert(Attribute::BOLD);
        assert_eq!(attr.bits(), 0x0F);
        attr.remove(Attribute::BOLD);
        assert_eq!(attr.bits(), 0x07);
    }
}
