//! Platform video service boundary
//!
//! The context discovers screen geometry and cursor shape at startup
//! through this trait instead of talking to firmware directly. Real
//! hardware backends live outside this crate; [`StubVideo`] is the
//! in-memory implementation used by the demo binary and tests.

use serde::{Deserialize, Serialize};

/// Video state reported by the platform at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoState {
    /// Number of character columns in the active mode
    pub columns: u8,
    /// Current video mode number
    pub mode: u8,
    /// Active display page
    pub page: u8,
}

/// Cursor position and shape for one display page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorState {
    pub row: u8,
    pub column: u8,
    /// First scan line of the cursor glyph
    pub start_scan: u8,
    /// Last scan line of the cursor glyph
    pub end_scan: u8,
}

impl CursorState {
    /// Classify the cursor shape from its scan lines
    pub fn shape(&self) -> CursorShape {
        if self.start_scan == 0 && self.end_scan == 0 {
            CursorShape::Hidden
        } else if self.start_scan == self.end_scan {
            CursorShape::Underline
        } else {
            CursorShape::Block
        }
    }
}

/// Cursor shape classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    Hidden,
    Underline,
    Block,
}

/// The platform video service: mode programming, geometry discovery, and
/// cursor control. One implementation per platform.
pub trait VideoService {
    /// Program the 80x25 monochrome text mode
    fn set_video_mode(&mut self);

    /// Current mode, column count, and active page
    fn video_state(&self) -> VideoState;

    /// Cursor position and shape on the given page
    fn cursor_state(&self, page: u8) -> CursorState;

    /// Move the cursor on the given page
    fn set_cursor_position(&mut self, column: u8, row: u8, page: u8);

    /// Write a character with an attribute at the cursor, repeated `count`
    /// times, without moving the cursor
    fn write_char_with_attribute(&mut self, chr: u8, attr: u8, count: u16, page: u8);

    /// Teletype-style write of a raw character at the cursor
    fn write_raw_char(&mut self, chr: u8, page: u8);
}

/// In-memory video service with fixed 80x25 geometry. Tracks cursor
/// position and remembers the last teletype write so tests can observe
/// the calls a context makes.
#[derive(Debug, Clone)]
pub struct StubVideo {
    video: VideoState,
    cursor: CursorState,
    last_write: Option<(u8, u8, u16)>,
}

impl Default for StubVideo {
    fn default() -> Self {
        StubVideo::new()
    }
}

impl StubVideo {
    pub fn new() -> Self {
        StubVideo {
            video: VideoState {
                columns: 80,
                mode: 0x07,
                page: 0,
            },
            cursor: CursorState {
                row: 0,
                column: 0,
                // Standard MDA underline cursor scan lines
                start_scan: 11,
                end_scan: 12,
            },
            last_write: None,
        }
    }

    /// The last `write_char_with_attribute` call, if any
    pub fn last_write(&self) -> Option<(u8, u8, u16)> {
        self.last_write
    }
}

impl VideoService for StubVideo {
    fn set_video_mode(&mut self) {
        self.video.mode = 0x07;
        self.video.columns = 80;
    }

    fn video_state(&self) -> VideoState {
        self.video
    }

    fn cursor_state(&self, _page: u8) -> CursorState {
        self.cursor
    }

    fn set_cursor_position(&mut self, column: u8, row: u8, _page: u8) {
        self.cursor.column = column;
        self.cursor.row = row;
    }

    fn write_char_with_attribute(&mut self, chr: u8, attr: u8, count: u16, _page: u8) {
        self.last_write = Some((chr, attr, count));
    }

    fn write_raw_char(&mut self, chr: u8, _page: u8) {
        self.last_write = Some((chr, 0, 1));
        self.cursor.column = self.cursor.column.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_geometry() {
        let mut video = StubVideo::new();
        video.set_video_mode();
        let state = video.video_state();
        assert_eq!(state.columns, 80);
        assert_eq!(state.mode, 0x07);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_stub_cursor_tracking() {
        let mut video = StubVideo::new();
        video.set_cursor_position(10, 5, 0);
        let cursor = video.cursor_state(0);
        assert_eq!(cursor.column, 10);
        assert_eq!(cursor.row, 5);
    }

    #[test]
    fn test_cursor_shape_classification() {
        let mut c = CursorState::default();
        assert_eq!(c.shape(), CursorShape::Hidden);
        c.start_scan = 12;
        c.end_scan = 12;
        assert_eq!(c.shape(), CursorShape::Underline);
        c.start_scan = 0;
        c.end_scan = 12;
        assert_eq!(c.shape(), CursorShape::Block);
    }

    #[test]
    fn test_stub_records_writes() {
        let mut video = StubVideo::new();
        video.write_char_with_attribute(b'*', 0x07, 5, 0);
        assert_eq!(video.last_write(), Some((b'*', 0x07, 5)));
    }
}
