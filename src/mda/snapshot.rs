//! Deterministic snapshot generation
//!
//! Snapshots capture the display buffer and context in a serializable form
//! for testing and debugging. Given the same sequence of drawing
//! operations, the toolkit must produce identical snapshots. This is a
//! diagnostic view; the binary persistence format lives in `capture`.

use serde::{Deserialize, Serialize};

use super::buffer::Buffer;
use super::context::Context;
use super::{COLUMNS, ROWS};

/// A complete snapshot of the display state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Display geometry
    pub columns: usize,
    pub rows: usize,
    /// Character codes, row-major
    pub chars: Vec<Vec<u8>>,
    /// Attribute bytes, row-major
    pub attrs: Vec<Vec<u8>>,
    /// The drawing context at capture time
    pub context: Context,
}

impl Snapshot {
    /// Capture the current buffer and context state
    pub fn capture(buffer: &Buffer, context: &Context) -> Self {
        let mut chars = Vec::with_capacity(ROWS);
        let mut attrs = Vec::with_capacity(ROWS);
        for y in 0..ROWS as u8 {
            let row = buffer.row(y);
            chars.push(row.iter().map(|c| c.chr).collect());
            attrs.push(row.iter().map(|c| c.attr).collect());
        }
        Snapshot {
            columns: COLUMNS,
            rows: ROWS,
            chars,
            attrs,
            context: context.clone(),
        }
    }

    /// Convert the snapshot to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a snapshot from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// A plain-text rendering of the screen, one line per row. Printable
    /// ASCII renders as itself, everything else as `.`.
    pub fn to_text(&self) -> String {
        let mut result = String::new();
        for row in &self.chars {
            for &chr in row {
                if (0x20..0x7F).contains(&chr) {
                    result.push(chr as char);
                } else {
                    result.push('.');
                }
            }
            while result.ends_with(' ') {
                result.pop();
            }
            result.push('\n');
        }
        result
    }

    /// Compare screen content (characters and attributes), ignoring the
    /// context
    pub fn content_equals(&self, other: &Snapshot) -> bool {
        self.columns == other.columns
            && self.rows == other.rows
            && self.chars == other.chars
            && self.attrs == other.attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mda::{Attribute, Cell, Point, Rect};
    use crate::video::StubVideo;

    fn context() -> Context {
        Context::initialize(&mut StubVideo::new())
    }

    #[test]
    fn test_capture_geometry() {
        let buf = Buffer::new();
        let snapshot = Snapshot::capture(&buf, &context());
        assert_eq!(snapshot.columns, 80);
        assert_eq!(snapshot.rows, 25);
        assert_eq!(snapshot.chars.len(), 25);
        assert_eq!(snapshot.chars[0].len(), 80);
    }

    #[test]
    fn test_to_text() {
        let mut buf = Buffer::new();
        buf.plot(Point::new(0, 0), Cell::new(b'H', Attribute::NORMAL));
        buf.plot(Point::new(1, 0), Cell::new(b'i', Attribute::NORMAL));
        let snapshot = Snapshot::capture(&buf, &context());
        let text = snapshot.to_text();
        assert!(text.starts_with("Hi\n"));
    }

    #[test]
    fn test_to_text_nonprintable() {
        let mut buf = Buffer::new();
        buf.plot(Point::new(0, 0), Cell::new(0x01, Attribute::NORMAL));
        let snapshot = Snapshot::capture(&buf, &context());
        assert!(snapshot.to_text().starts_with('.'));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut buf = Buffer::new();
        buf.fill_rect(Rect::new(3, 3, 5, 2), Cell::new(b'#', Attribute::BOLD));
        let snapshot = Snapshot::capture(&buf, &context());

        let json = snapshot.to_json().unwrap();
        let restored = Snapshot::from_json(&json).unwrap();
        assert!(snapshot.content_equals(&restored));
        assert_eq!(snapshot.context, restored.context);
    }

    #[test]
    fn test_content_equals_detects_attr_change() {
        let mut buf = Buffer::new();
        let ctx = context();
        let a = Snapshot::capture(&buf, &ctx);
        buf.cell_mut(0, 0).bold();
        let b = Snapshot::capture(&buf, &ctx);
        assert!(!a.content_equals(&b));
    }
}
