//! Viewport and scrolling
//!
//! The viewport is the window of the document currently on screen. Its
//! offsets only move when the cursor would otherwise leave the window, and
//! then only as far as needed to bring it back.

use super::cursor::Cursor;
use super::document::Document;

/// Visible window into the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line
    pub row_offset: usize,
    /// First visible render column
    pub col_offset: usize,
    /// Visible text rows
    rows: usize,
    /// Visible columns
    cols: usize,
    /// Render column of the cursor as of the last scroll
    rx: usize,
}

impl Viewport {
    /// Create a viewport of the given text area size. Both dimensions are at
    /// least one.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            rows: rows.max(1),
            cols: cols.max(1),
            rx: 0,
        }
    }

    /// Visible text rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Visible columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cursor render column computed by the last [`Viewport::scroll`]
    pub fn rx(&self) -> usize {
        self.rx
    }

    /// Recompute the cursor render column and adjust offsets so the cursor
    /// is inside the window. Returns the render column.
    pub fn scroll(&mut self, doc: &Document, cursor: &Cursor) -> usize {
        self.rx = doc
            .line(cursor.row)
            .map_or(0, |line| line.cx_to_rx(cursor.col));

        if cursor.row < self.row_offset {
            self.row_offset = cursor.row;
        }
        if cursor.row >= self.row_offset + self.rows {
            self.row_offset = cursor.row + 1 - self.rows;
        }

        if self.rx < self.col_offset {
            self.col_offset = self.rx;
        }
        if self.rx >= self.col_offset + self.cols {
            self.col_offset = self.rx + 1 - self.cols;
        }

        self.rx
    }

    /// Screen position of the cursor relative to the window's top-left
    pub fn cursor_screen_position(&self, cursor: &Cursor) -> (usize, usize) {
        (
            cursor.row.saturating_sub(self.row_offset),
            self.rx.saturating_sub(self.col_offset),
        )
    }
}
