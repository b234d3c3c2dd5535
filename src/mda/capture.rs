//! Binary persistence
//!
//! Saves and restores rectangular regions as a raw sequence of 2-byte cells
//! (character byte first, then attribute byte), row-major, with no header,
//! versioning, or compression. The format is positionless: it stores only
//! the region's content, never its origin, so a capture may be restored at
//! a different position than where it was taken.
//!
//! Stream lifecycle belongs to the caller: open before, close after, on
//! every exit path. These functions make exactly one attempt each.

use std::io::{ErrorKind, Read, Write};

use super::buffer::{cell_index, Buffer};
use super::cell::Cell;
use super::error::{Error, Result};
use super::geometry::Rect;
use super::{BUFFER_BYTES, CELL_BYTES, CELL_COUNT};

fn encode_row(cells: &[Cell], out: &mut Vec<u8>) {
    out.clear();
    for cell in cells {
        out.push(cell.chr);
        out.push(cell.attr);
    }
}

fn decode_row(bytes: &[u8], cells: &mut [Cell]) {
    for (cell, pair) in cells.iter_mut().zip(bytes.chunks_exact(CELL_BYTES)) {
        cell.chr = pair[0];
        cell.attr = pair[1];
    }
}

impl Buffer {
    /// Write `rect.h` rows of `rect.w` cells each to the stream.
    pub fn save_rect(&self, mut stream: impl Write, rect: Rect) -> Result<()> {
        let w = rect.w as usize;
        let mut row_bytes = Vec::with_capacity(w * CELL_BYTES);
        for y in rect.y..rect.bottom() as u8 {
            let start = cell_index(rect.x, y);
            encode_row(&self.cells()[start..start + w], &mut row_bytes);
            stream.write_all(&row_bytes)?;
        }
        Ok(())
    }

    /// Read `rect.h` rows of `rect.w` cells from the stream into the
    /// buffer at `rect`'s position.
    ///
    /// A stream that ends early yields [`Error::TruncatedCapture`]; cells
    /// already read stay written, the rest of the region is untouched.
    pub fn load_rect(&mut self, mut stream: impl Read, rect: Rect) -> Result<()> {
        let w = rect.w as usize;
        let expected = w * rect.h as usize;
        let mut row_bytes = vec![0u8; w * CELL_BYTES];
        for (row, y) in (rect.y..rect.bottom() as u8).enumerate() {
            stream.read_exact(&mut row_bytes).map_err(|e| {
                if e.kind() == ErrorKind::UnexpectedEof {
                    Error::TruncatedCapture {
                        expected,
                        got: row * w,
                    }
                } else {
                    Error::Io(e)
                }
            })?;
            let start = cell_index(rect.x, y);
            decode_row(&row_bytes, &mut self.cells_mut()[start..start + w]);
        }
        Ok(())
    }

    /// Write the entire display as one contiguous block.
    pub fn save_screen(&self, mut stream: impl Write) -> Result<()> {
        let mut bytes = Vec::with_capacity(BUFFER_BYTES);
        encode_row(self.cells(), &mut bytes);
        stream.write_all(&bytes)?;
        Ok(())
    }

    /// Restore the entire display from one contiguous block.
    pub fn load_screen(&mut self, mut stream: impl Read) -> Result<()> {
        let mut bytes = vec![0u8; BUFFER_BYTES];
        stream.read_exact(&mut bytes).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                Error::TruncatedCapture {
                    expected: CELL_COUNT,
                    got: 0,
                }
            } else {
                Error::Io(e)
            }
        })?;
        decode_row(&bytes, self.cells_mut());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mda::Attribute;
    use proptest::prelude::*;
    use std::io::Cursor;

    fn cell(chr: u8) -> Cell {
        Cell::new(chr, Attribute::NORMAL)
    }

    #[test]
    fn test_save_rect_layout() {
        let mut buf = Buffer::new();
        buf.set(2, 1, Cell::new(b'A', Attribute::BOLD));
        buf.set(3, 1, Cell::new(b'B', Attribute::BLINK));
        buf.set(2, 2, Cell::new(b'C', Attribute::NORMAL));
        buf.set(3, 2, Cell::new(b'D', Attribute::REVERSE));

        let mut out = Vec::new();
        buf.save_rect(&mut out, Rect::new(2, 1, 2, 2)).unwrap();

        // Row-major, character byte then attribute byte, no header
        assert_eq!(
            out,
            vec![b'A', 0x08, b'B', 0x80, b'C', 0x07, b'D', 0x70]
        );
    }

    #[test]
    fn test_save_load_rect_roundtrip_is_identity() {
        let mut buf = Buffer::new();
        buf.fill_rect(Rect::new(5, 2, 10, 4), cell(b'*'));
        buf.set(7, 3, Cell::new(b'!', Attribute::REVERSE));
        let before: Vec<Cell> = buf.cells().to_vec();

        let r = Rect::new(5, 2, 10, 4);
        let mut out = Vec::new();
        buf.save_rect(&mut out, r).unwrap();
        buf.load_rect(Cursor::new(out), r).unwrap();

        assert_eq!(buf.cells(), &before[..]);
    }

    #[test]
    fn test_load_rect_at_different_origin() {
        let mut buf = Buffer::new();
        let src = Rect::new(5, 2, 4, 2);
        buf.fill_rect(src, cell(b'@'));

        let mut out = Vec::new();
        buf.save_rect(&mut out, src).unwrap();

        // The format is positionless: restore elsewhere
        let dst = Rect::new(40, 20, 4, 2);
        buf.load_rect(Cursor::new(out), dst).unwrap();
        for y in 20..22 {
            for x in 40..44 {
                assert_eq!(buf.cell(x, y), cell(b'@'));
            }
        }
    }

    #[test]
    fn test_load_rect_truncated_stream() {
        let mut buf = Buffer::new();
        let r = Rect::new(0, 0, 4, 3);
        // Only one of three rows available
        let bytes = vec![b'x', 0x07].repeat(4);

        let err = buf.load_rect(Cursor::new(bytes), r).unwrap_err();
        match err {
            Error::TruncatedCapture { expected, got } => {
                assert_eq!(expected, 12);
                assert_eq!(got, 4);
            }
            other => panic!("expected TruncatedCapture, got {other:?}"),
        }
        // The row that did arrive was written
        assert_eq!(buf.cell(0, 0), cell(b'x'));
        assert_eq!(buf.cell(0, 1), Cell::BLANK);
    }

    #[test]
    fn test_save_load_screen_roundtrip() {
        let mut buf = Buffer::new();
        buf.fill_screen(cell(b'*'));
        buf.set(79, 24, Cell::new(b'$', Attribute::BLINK));
        let before: Vec<Cell> = buf.cells().to_vec();

        let mut out = Vec::new();
        buf.save_screen(&mut out).unwrap();
        assert_eq!(out.len(), BUFFER_BYTES);

        buf.clear_screen();
        buf.load_screen(Cursor::new(out)).unwrap();
        assert_eq!(buf.cells(), &before[..]);
    }

    #[test]
    fn test_load_screen_truncated() {
        let mut buf = Buffer::new();
        let err = buf.load_screen(Cursor::new(vec![0u8; 100])).unwrap_err();
        assert!(matches!(err, Error::TruncatedCapture { .. }));
    }

    proptest! {
        #[test]
        fn prop_rect_roundtrip(
            x in 0u8..70,
            y in 0u8..20,
            w in 1u8..10,
            h in 1u8..5,
            chr in 0u8..=255,
            attr in 0u8..=255,
        ) {
            let mut buf = Buffer::new();
            let r = Rect::new(x, y, w, h);
            buf.fill_rect(r, Cell { chr, attr });
            let before: Vec<Cell> = buf.cells().to_vec();

            let mut out = Vec::new();
            buf.save_rect(&mut out, r).unwrap();
            prop_assert_eq!(out.len(), w as usize * h as usize * CELL_BYTES);
            buf.load_rect(Cursor::new(out), r).unwrap();
            prop_assert_eq!(buf.cells(), &before[..]);
        }
    }
}
