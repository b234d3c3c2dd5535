//! The display buffer
//!
//! A fixed-size, row-major array of cells standing in for the memory-mapped
//! display surface. It is never resized or reallocated. All coordinate
//! arithmetic funnels through [`cell_index`], the single authoritative
//! mapping from `(x, y)` to a linear cell offset; no primitive computes
//! offsets its own way, which is what guarantees they all agree on cell
//! locations.

use super::cell::Cell;
use super::{CELL_COUNT, COLUMNS, ROWS};

/// Map a display coordinate to its linear cell offset.
///
/// Precondition: `x < COLUMNS` and `y < ROWS`. No bounds checking happens
/// here; out-of-range input produces an out-of-range index that the
/// buffer's checked indexing turns into a panic at the point of use.
#[inline]
pub const fn cell_index(x: u8, y: u8) -> usize {
    y as usize * COLUMNS + x as usize
}

/// The 80x25 display surface
#[derive(Debug, Clone)]
pub struct Buffer {
    cells: Box<[Cell; CELL_COUNT]>,
}

impl Default for Buffer {
    fn default() -> Self {
        Buffer::new()
    }
}

impl Buffer {
    /// Create a buffer cleared to blank cells
    pub fn new() -> Self {
        Buffer {
            cells: Box::new([Cell::BLANK; CELL_COUNT]),
        }
    }

    /// Read the cell at a coordinate. Panics on out-of-range input.
    pub fn cell(&self, x: u8, y: u8) -> Cell {
        self.cells[cell_index(x, y)]
    }

    /// Mutable access to the cell at a coordinate. Panics on out-of-range
    /// input.
    pub fn cell_mut(&mut self, x: u8, y: u8) -> &mut Cell {
        &mut self.cells[cell_index(x, y)]
    }

    /// Write one cell. Panics on out-of-range input.
    pub fn set(&mut self, x: u8, y: u8, cell: Cell) {
        self.cells[cell_index(x, y)] = cell;
    }

    /// One full display row
    pub fn row(&self, y: u8) -> &[Cell] {
        let start = cell_index(0, y);
        &self.cells[start..start + COLUMNS]
    }

    /// Mutable access to one full display row
    pub fn row_mut(&mut self, y: u8) -> &mut [Cell] {
        let start = cell_index(0, y);
        &mut self.cells[start..start + COLUMNS]
    }

    /// The whole surface as a flat row-major slice
    pub fn cells(&self) -> &[Cell] {
        &self.cells[..]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells[..]
    }

    /// Write `cell` into every position on the display
    pub fn fill_screen(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Clear the display to blank cells
    pub fn clear_screen(&mut self) {
        self.fill_screen(Cell::BLANK);
    }
}

/// Compile-time geometry sanity
const _: () = assert!(COLUMNS == 80 && ROWS == 25 && CELL_COUNT == 2000);
