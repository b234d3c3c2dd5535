//! Region transfer
//!
//! Scrolling shifts the content of a sub-rectangle by one row or column and
//! fills the vacated edge with a supplied blank cell. Source and destination
//! ranges overlap inside the same buffer, so each variant fixes its copy
//! direction by the overlap rule: destination before source in memory means
//! ascending addresses, destination after source means descending. Getting
//! the direction wrong silently duplicates one row/column across the region
//! instead of shifting it, which is why each variant spells its order out.

use super::buffer::{cell_index, Buffer};
use super::cell::Cell;
use super::geometry::Rect;
use super::COLUMNS;

impl Buffer {
    /// Shift the rect's content up one row and blank-fill the last row.
    ///
    /// Each row's destination precedes its source, so rows are processed
    /// top to bottom (ascending addresses).
    pub fn scroll_up(&mut self, rect: Rect, blank: Cell) {
        if rect.is_empty() {
            return;
        }
        let w = rect.w as usize;
        let y1 = (rect.bottom() - 1) as u8;
        let cells = self.cells_mut();
        for y in rect.y + 1..=y1 {
            let src = cell_index(rect.x, y);
            let dst = src - COLUMNS;
            for i in 0..w {
                cells[dst + i] = cells[src + i];
            }
        }
        let last = cell_index(rect.x, y1);
        cells[last..last + w].fill(blank);
    }

    /// Shift the rect's content down one row and blank-fill the first row.
    ///
    /// Destinations follow sources, so rows are processed bottom to top
    /// (descending addresses).
    pub fn scroll_down(&mut self, rect: Rect, blank: Cell) {
        if rect.is_empty() {
            return;
        }
        let w = rect.w as usize;
        let y1 = (rect.bottom() - 1) as u8;
        let cells = self.cells_mut();
        for y in (rect.y..y1).rev() {
            let src = cell_index(rect.x, y);
            let dst = src + COLUMNS;
            for i in 0..w {
                cells[dst + i] = cells[src + i];
            }
        }
        let first = cell_index(rect.x, rect.y);
        cells[first..first + w].fill(blank);
    }

    /// Shift each row's content one cell toward decreasing x and blank-fill
    /// the rightmost column.
    ///
    /// Within a row the data moves toward the row's own start, so cells are
    /// copied in ascending address order.
    pub fn scroll_left(&mut self, rect: Rect, blank: Cell) {
        if rect.is_empty() {
            return;
        }
        let w = rect.w as usize;
        let cells = self.cells_mut();
        for y in rect.y..rect.bottom() as u8 {
            let start = cell_index(rect.x, y);
            for i in 0..w - 1 {
                cells[start + i] = cells[start + i + 1];
            }
            cells[start + w - 1] = blank;
        }
    }

    /// Shift each row's content one cell toward increasing x and blank-fill
    /// the leftmost column.
    ///
    /// Destinations follow sources within the row, so cells are copied in
    /// descending address order to avoid overwriting unread source cells.
    pub fn scroll_right(&mut self, rect: Rect, blank: Cell) {
        if rect.is_empty() {
            return;
        }
        let w = rect.w as usize;
        let cells = self.cells_mut();
        for y in rect.y..rect.bottom() as u8 {
            let start = cell_index(rect.x, y);
            for i in (1..w).rev() {
                cells[start + i] = cells[start + i - 1];
            }
            cells[start] = blank;
        }
    }
}
