//! MDA Core Module
//!
//! The buffer-addressing and drawing-primitive engine. This module contains:
//! - Cell representation (character + attribute byte)
//! - Point/Dim/Rect coordinate value types
//! - The display buffer with its single authoritative addressing function
//! - Drawing primitives (plot, lines, rectangles, blit)
//! - Region transfer (overlap-safe scrolling)
//! - Binary persistence of rectangular regions
//! - The drawing context aggregate
//!
//! Primitives are unbounded: they trust the caller to supply in-range
//! coordinates (pre-clipped against the context bounds if one is in use).
//! Out-of-range input halts with a panic rather than corrupting the buffer.

mod attribute;
mod buffer;
mod capture;
mod cell;
mod context;
mod error;
mod geometry;
mod primitives;
mod scroll;
mod snapshot;

pub use attribute::Attribute;
pub use buffer::{cell_index, Buffer};
pub use cell::Cell;
pub use context::Context;
pub use error::{Error, Result};
pub use geometry::{Dim, Point, Rect};
pub use snapshot::Snapshot;

/// Number of character columns on the display.
pub const COLUMNS: usize = 80;
/// Number of character rows on the display.
pub const ROWS: usize = 25;
/// Bytes per cell: one character byte plus one attribute byte.
pub const CELL_BYTES: usize = 2;
/// Bytes separating the start of one row from the next.
pub const ROW_BYTES: usize = COLUMNS * CELL_BYTES;
/// Total number of cells on the display.
pub const CELL_COUNT: usize = COLUMNS * ROWS;
/// Total size of the display buffer in bytes.
pub const BUFFER_BYTES: usize = CELL_COUNT * CELL_BYTES;
/// Default horizontal tab size.
pub const DEFAULT_HTAB: u8 = 4;
/// Default vertical tab size.
pub const DEFAULT_VTAB: u8 = 2;
