//! Drawing primitives
//!
//! Unbounded, allocation-free rasterization over the display buffer. Every
//! primitive trusts the caller to have clipped coordinates to the buffer
//! (or to the context bounds); the only failure mode is the precondition
//! panic from checked indexing.
//!
//! Line endpoints are inclusive. Horizontal runs with `p1.x < p0.x` (and
//! vertical runs with `p1.y < p0.y`) are swapped before drawing.

use super::buffer::{cell_index, Buffer};
use super::cell::Cell;
use super::geometry::{Point, Rect};
use super::COLUMNS;

impl Buffer {
    /// Write one cell at a point
    pub fn plot(&mut self, point: Point, cell: Cell) {
        self.set(point.x, point.y, cell);
    }

    /// Fill the inclusive horizontal run from `p0` to `p1` with `cell`.
    /// Both points must share a row; `p0.y` is the row used.
    pub fn draw_hline(&mut self, p0: Point, p1: Point, cell: Cell) {
        let (x0, x1) = if p1.x < p0.x { (p1.x, p0.x) } else { (p0.x, p1.x) };
        let start = cell_index(x0, p0.y);
        let end = cell_index(x1, p0.y);
        self.cells_mut()[start..=end].fill(cell);
    }

    /// Fill the inclusive vertical run from `p0` to `p1` with `cell`,
    /// advancing one full row stride per step. `p0.x` is the column used.
    pub fn draw_vline(&mut self, p0: Point, p1: Point, cell: Cell) {
        let (y0, y1) = if p1.y < p0.y { (p1.y, p0.y) } else { (p0.y, p1.y) };
        for y in y0..=y1 {
            self.set(p0.x, y, cell);
        }
    }

    /// Horizontal run with end caps: `cells[0]` starts the run, `cells[1]`
    /// fills the interior, `cells[2]` ends it.
    ///
    /// A run of length 1 writes only `cells[2]` (the end cap wins when the
    /// caps coincide); a run of length 2 writes both caps and no interior.
    pub fn draw_hline_caps(&mut self, p0: Point, p1: Point, cells: [Cell; 3]) {
        let (x0, x1) = if p1.x < p0.x { (p1.x, p0.x) } else { (p0.x, p1.x) };
        if x1 > x0 {
            self.set(x0, p0.y, cells[0]);
            for x in x0 + 1..x1 {
                self.set(x, p0.y, cells[1]);
            }
        }
        self.set(x1, p0.y, cells[2]);
    }

    /// Vertical run with end caps; same tie-break as [`Buffer::draw_hline_caps`].
    pub fn draw_vline_caps(&mut self, p0: Point, p1: Point, cells: [Cell; 3]) {
        let (y0, y1) = if p1.y < p0.y { (p1.y, p0.y) } else { (p0.y, p1.y) };
        if y1 > y0 {
            self.set(p0.x, y0, cells[0]);
            for y in y0 + 1..y1 {
                self.set(p0.x, y, cells[1]);
            }
        }
        self.set(p0.x, y1, cells[2]);
    }

    /// Draw the four-sided outline of a rect: top row, bottom row, and the
    /// left/right single cells on every interior row.
    ///
    /// Degenerate sizes are tolerated: `h == 1` collapses to a single
    /// horizontal run, `w == 1` to a vertical one, and an empty rect is a
    /// no-op.
    pub fn draw_rect(&mut self, rect: Rect, cell: Cell) {
        if rect.is_empty() {
            return;
        }
        let x1 = (rect.right() - 1) as u8;
        let y1 = (rect.bottom() - 1) as u8;

        self.draw_hline(Point::new(rect.x, rect.y), Point::new(x1, rect.y), cell);
        if rect.h < 2 {
            return;
        }
        for y in rect.y + 1..y1 {
            self.set(rect.x, y, cell);
            self.set(x1, y, cell);
        }
        self.draw_hline(Point::new(rect.x, y1), Point::new(x1, y1), cell);
    }

    /// Draw a frame with distinct corner, edge, and side cells.
    ///
    /// Cell order: top-left, top, top-right, left, right, bottom-left,
    /// bottom, bottom-right. Single-row or single-column rects degrade the
    /// way capped lines do.
    pub fn draw_border(&mut self, rect: Rect, cells: [Cell; 8]) {
        if rect.is_empty() {
            return;
        }
        let x1 = (rect.right() - 1) as u8;
        let y1 = (rect.bottom() - 1) as u8;
        let top = Point::new(rect.x, rect.y);

        self.draw_hline_caps(top, Point::new(x1, rect.y), [cells[0], cells[1], cells[2]]);
        if rect.h < 2 {
            return;
        }
        for y in rect.y + 1..y1 {
            self.set(rect.x, y, cells[3]);
            self.set(x1, y, cells[4]);
        }
        self.draw_hline_caps(
            Point::new(rect.x, y1),
            Point::new(x1, y1),
            [cells[5], cells[6], cells[7]],
        );
    }

    /// Write `cell` into every position of the rect, row by row
    pub fn fill_rect(&mut self, rect: Rect, cell: Cell) {
        if rect.is_empty() {
            return;
        }
        let w = rect.w as usize;
        for y in rect.y..rect.bottom() as u8 {
            let start = cell_index(rect.x, y);
            self.cells_mut()[start..start + w].fill(cell);
        }
    }

    /// Copy the block at `from` onto `to`. Only `to`'s dimensions are used;
    /// the two rects are the same size by contract.
    ///
    /// Source and destination live in the same buffer and may overlap, so
    /// the copy direction follows the overlap rule: when the destination
    /// precedes the source in memory, copy in ascending address order;
    /// when it follows, copy descending. The per-cell address delta is
    /// constant for a block copy, so linear order is safe in both cases.
    pub fn blit(&mut self, to: Rect, from: Rect) {
        if to.is_empty() {
            return;
        }
        let w = to.w as usize;
        let h = to.h as usize;
        let dst = cell_index(to.x, to.y);
        let src = cell_index(from.x, from.y);
        let cells = self.cells_mut();

        if dst <= src {
            for row in 0..h {
                let d = dst + row * COLUMNS;
                let s = src + row * COLUMNS;
                for i in 0..w {
                    cells[d + i] = cells[s + i];
                }
            }
        } else {
            for row in (0..h).rev() {
                let d = dst + row * COLUMNS;
                let s = src + row * COLUMNS;
                for i in (0..w).rev() {
                    cells[d + i] = cells[s + i];
                }
            }
        }
    }
}
