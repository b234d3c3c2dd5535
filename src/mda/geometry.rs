//! Coordinate value types
//!
//! Points, dimensions, and rectangles over byte-sized coordinates. Each
//! type exposes both named fields and a packed fixed-width integer view.
//! Nothing here clips against the display: a rect may lie partly or wholly
//! outside the screen until the caller intersects it with the bounds.

use serde::{Deserialize, Serialize};

/// A display coordinate. Valid range is `x < COLUMNS`, `y < ROWS`, but
/// the type itself does not enforce it; primitives trust pre-clipped input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    pub const fn new(x: u8, y: u8) -> Self {
        Point { x, y }
    }

    /// Packed 16-bit view: low byte = y, high byte = x
    pub const fn packed(self) -> u16 {
        (self.x as u16) << 8 | self.y as u16
    }

    pub const fn from_packed(packed: u16) -> Self {
        Point {
            x: (packed >> 8) as u8,
            y: (packed & 0xFF) as u8,
        }
    }
}

/// A width/height pair. Zero width or height denotes an empty region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dim {
    pub w: u8,
    pub h: u8,
}

impl Dim {
    pub const fn new(w: u8, h: u8) -> Self {
        Dim { w, h }
    }

    /// Packed 16-bit view: low byte = w, high byte = h
    pub const fn packed(self) -> u16 {
        (self.h as u16) << 8 | self.w as u16
    }

    pub const fn from_packed(packed: u16) -> Self {
        Dim {
            w: (packed & 0xFF) as u8,
            h: (packed >> 8) as u8,
        }
    }

    pub const fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// An origin plus dimension. `x + w` and `y + h` must not overflow a byte;
/// with the 80x25 geometry every on-screen rect satisfies this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: u8,
    pub y: u8,
    pub w: u8,
    pub h: u8,
}

impl Rect {
    pub const fn new(x: u8, y: u8, w: u8, h: u8) -> Self {
        Rect { x, y, w, h }
    }

    /// Packed 32-bit view, field order x, y, w, h from the low byte up
    pub const fn packed(self) -> u32 {
        (self.h as u32) << 24 | (self.w as u32) << 16 | (self.y as u32) << 8 | self.x as u32
    }

    pub const fn from_packed(packed: u32) -> Self {
        Rect {
            x: (packed & 0xFF) as u8,
            y: (packed >> 8 & 0xFF) as u8,
            w: (packed >> 16 & 0xFF) as u8,
            h: (packed >> 24) as u8,
        }
    }

    /// A rect with zero width or height is degenerate; drawing and
    /// scrolling operations on it are no-ops.
    pub const fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Exclusive right edge
    pub const fn right(self) -> u16 {
        self.x as u16 + self.w as u16
    }

    /// Exclusive bottom edge
    pub const fn bottom(self) -> u16 {
        self.y as u16 + self.h as u16
    }

    /// Whether the point lies inside the rect
    pub fn contains(self, x: u8, y: u8) -> bool {
        x >= self.x && y >= self.y && (x as u16) < self.right() && (y as u16) < self.bottom()
    }

    /// Whether the two rects share any cell
    pub fn intersects(self, other: Rect) -> bool {
        !(self.x as u16 >= other.right()
            || other.x as u16 >= self.right()
            || self.y as u16 >= other.bottom()
            || other.y as u16 >= self.bottom())
    }

    /// The overlapping region of two rects.
    ///
    /// Non-overlapping input yields the defined empty rect
    /// `Rect::new(0, 0, 0, 0)`, never an unchecked result.
    pub fn intersection(self, other: Rect) -> Rect {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if left as u16 >= right || top as u16 >= bottom {
            return Rect::new(0, 0, 0, 0);
        }

        Rect::new(left, top, (right - left as u16) as u8, (bottom - top as u16) as u8)
    }

    /// The rect shrunk by one cell on every side, e.g. the interior of a
    /// drawn frame. Rects too small to have an interior yield a zero rect.
    pub fn inner(self) -> Rect {
        if self.w < 3 || self.h < 3 {
            return Rect::new(0, 0, 0, 0);
        }
        Rect::new(self.x + 1, self.y + 1, self.w - 2, self.h - 2)
    }
}
