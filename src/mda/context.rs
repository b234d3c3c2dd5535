//! Drawing context
//!
//! Aggregates the current drawing bounds, default attribute, blank cell,
//! tab sizes, and the video/cursor state discovered from the platform at
//! startup. The context is the primitives' natural caller: it holds the
//! bounds a caller clips against before invoking the unbounded primitives.
//! There is no hidden process-wide instance; every operation that needs
//! one takes it explicitly.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::attribute::Attribute;
use super::cell::Cell;
use super::geometry::Rect;
use super::{DEFAULT_HTAB, DEFAULT_VTAB, ROWS};
use crate::video::{CursorShape, CursorState, VideoService, VideoState};

/// The drawing context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Current drawing bounds; primitives expect coordinates pre-clipped
    /// against this
    pub bounds: Rect,
    /// Default attribute for newly built cells
    pub attributes: Attribute,
    /// Cell used when blank-filling vacated regions
    pub blank: Cell,
    /// Horizontal tab size
    pub htab: u8,
    /// Vertical tab size
    pub vtab: u8,
    /// Video state reported by the platform at startup
    pub video: VideoState,
    /// Cursor state reported by the platform at startup
    pub cursor: CursorState,
}

impl Context {
    /// Build a context by interrogating the platform video service: program
    /// the text mode, read back geometry, and capture the cursor shape.
    pub fn initialize(service: &mut dyn VideoService) -> Self {
        service.set_video_mode();
        let video = service.video_state();
        let cursor = service.cursor_state(video.page);
        tracing::debug!(
            columns = video.columns,
            page = video.page,
            "initialized display context"
        );
        Context {
            bounds: Rect::new(0, 0, video.columns, ROWS as u8),
            attributes: Attribute::NORMAL,
            blank: Cell::BLANK,
            htab: DEFAULT_HTAB,
            vtab: DEFAULT_VTAB,
            video,
            cursor,
        }
    }

    /// Replace the drawing bounds
    pub fn set_bounds(&mut self, x: u8, y: u8, w: u8, h: u8) {
        self.bounds = Rect::new(x, y, w, h);
    }

    /// Replace the default attribute, updating the blank cell to match
    pub fn set_attributes(&mut self, attributes: Attribute) {
        self.attributes = attributes;
        self.blank = Cell::new(b' ', attributes);
    }

    /// Build a cell from a character and the context's default attribute
    pub fn make_cell(&self, chr: u8) -> Cell {
        Cell::new(chr, self.attributes)
    }

    /// Clip a rect against the context bounds. Non-overlapping input
    /// yields the defined empty rect.
    pub fn clip(&self, rect: Rect) -> Rect {
        self.bounds.intersection(rect)
    }

    /// Write a human-readable report of the context state
    pub fn dump(&self, mut stream: impl Write) -> io::Result<()> {
        writeln!(stream, "=== MDA Context ===")?;
        writeln!(stream, "Attributes: 0x{:02X}", self.attributes.bits())?;
        writeln!(
            stream,
            "Bounds: x={} y={} w={} h={}",
            self.bounds.x, self.bounds.y, self.bounds.w, self.bounds.h
        )?;
        writeln!(stream, "Tab sizes: htab={} vtab={}", self.htab, self.vtab)?;
        writeln!(
            stream,
            "Video: columns={} mode={} page={}",
            self.video.columns, self.video.mode, self.video.page
        )?;
        writeln!(
            stream,
            "Cursor: ({},{}) scan {}-{}",
            self.cursor.column, self.cursor.row, self.cursor.start_scan, self.cursor.end_scan
        )?;
        let shape = match self.cursor.shape() {
            CursorShape::Hidden => "hidden".to_string(),
            CursorShape::Underline => format!("underline (line {})", self.cursor.end_scan),
            CursorShape::Block => format!(
                "block ({}-{})",
                self.cursor.start_scan, self.cursor.end_scan
            ),
        };
        writeln!(stream, "Cursor shape: {shape}")?;
        writeln!(stream, "=== End MDA Context ===")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::StubVideo;

    #[test]
    fn test_initialize_from_service() {
        let mut video = StubVideo::new();
        let ctx = Context::initialize(&mut video);

        assert_eq!(ctx.bounds, Rect::new(0, 0, 80, 25));
        assert_eq!(ctx.attributes, Attribute::NORMAL);
        assert_eq!(ctx.blank, Cell::BLANK);
        assert_eq!(ctx.htab, DEFAULT_HTAB);
        assert_eq!(ctx.vtab, DEFAULT_VTAB);
        assert_eq!(ctx.video.columns, 80);
        assert_eq!(ctx.cursor.start_scan, 11);
    }

    #[test]
    fn test_set_bounds() {
        let mut video = StubVideo::new();
        let mut ctx = Context::initialize(&mut video);
        ctx.set_bounds(5, 2, 35, 7);
        assert_eq!(ctx.bounds, Rect::new(5, 2, 35, 7));
    }

    #[test]
    fn test_set_attributes_updates_blank() {
        let mut video = StubVideo::new();
        let mut ctx = Context::initialize(&mut video);
        ctx.set_attributes(Attribute::REVERSE);
        assert_eq!(ctx.blank, Cell::new(b' ', Attribute::REVERSE));
        assert_eq!(ctx.make_cell(b'A'), Cell::new(b'A', Attribute::REVERSE));
    }

    #[test]
    fn test_clip() {
        let mut video = StubVideo::new();
        let ctx = Context::initialize(&mut video);
        // Partly off-screen rect is clipped to the bounds
        assert_eq!(
            ctx.clip(Rect::new(70, 20, 20, 20)),
            Rect::new(70, 20, 10, 5)
        );
        // Fully off-screen rect clips to the defined empty rect
        assert!(ctx.clip(Rect::new(90, 30, 5, 5)).is_empty());
    }

    #[test]
    fn test_dump() {
        let mut video = StubVideo::new();
        let ctx = Context::initialize(&mut video);
        let mut out = Vec::new();
        ctx.dump(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Attributes: 0x07"));
        assert!(text.contains("Bounds: x=0 y=0 w=80 h=25"));
        assert!(text.contains("block (11-12)"));
    }
}
