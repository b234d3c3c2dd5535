//! MDA Display Toolkit
//!
//! A toolkit for rendering and manipulating text on a fixed-size, directly
//! addressable monochrome character-cell display (80 columns x 25 rows,
//! two bytes per cell). This crate provides:
//!
//! - `mda`: cell and attribute value types, buffer addressing, drawing
//!   primitives, region scrolling, and binary persistence
//! - `video`: the platform video service boundary (screen geometry and
//!   cursor discovery at startup)
//!
//! The core is deterministic and single-threaded: the buffer is plain
//! mutable state, every operation is blocking and immediate, and there is
//! no retry policy anywhere. Callers that need concurrency must serialize
//! access externally.

pub mod mda;
pub mod video;
