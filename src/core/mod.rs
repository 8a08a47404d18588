//! Editor Core Module
//!
//! Platform-independent buffer state. This module contains:
//! - Lines with their tab-expanded render form
//! - The document (ordered lines, dirty count, filename)
//! - Cursor state and movement
//! - Viewport scrolling
//!
//! Nothing here touches the terminal or the filesystem: given the same
//! sequence of edits and moves, the core always ends in the same state.

mod cursor;
mod document;
mod line;
pub mod render;
mod viewport;

pub use cursor::{Cursor, Direction};
pub use document::Document;
pub use line::Line;
pub use render::TAB_STOP;
pub use viewport::Viewport;
