//! Editor line representation
//!
//! A line owns its raw bytes and the tab-expanded render form derived from
//! them. Both are private: every mutation goes through a method that rebuilds
//! the render form, so it can never be observed stale.

use super::render::{column_to_render_column, expand_tabs};

/// A single line of text, without its line terminator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    /// Raw bytes of the line
    content: Vec<u8>,
    /// Tab-expanded display bytes
    render: Vec<u8>,
}

impl Line {
    /// Create a line from raw bytes
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        let content = content.into();
        let render = expand_tabs(&content);
        Self { content, render }
    }

    /// Raw bytes of the line
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Tab-expanded bytes of the line
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Number of bytes in the line
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the line has no content
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Display width of the line
    pub fn render_len(&self) -> usize {
        self.render.len()
    }

    /// Render column at which logical column `col` is drawn
    pub fn cx_to_rx(&self, col: usize) -> usize {
        column_to_render_column(&self.content, col)
    }

    /// Insert a byte at `col`, clamped to the end of the line
    pub fn insert(&mut self, col: usize, byte: u8) {
        let col = col.min(self.content.len());
        self.content.insert(col, byte);
        self.update();
    }

    /// Remove the byte at `col`, clamped to the last byte.
    ///
    /// Returns `None` when the line is empty.
    pub fn remove(&mut self, col: usize) -> Option<u8> {
        if self.content.is_empty() {
            return None;
        }
        let col = col.min(self.content.len() - 1);
        let removed = self.content.remove(col);
        self.update();
        Some(removed)
    }

    /// Append bytes to the end of the line
    pub fn append(&mut self, text: &[u8]) {
        self.content.extend_from_slice(text);
        self.update();
    }

    /// Cut the line at `col`, returning everything from `col` onward
    pub fn split_off(&mut self, col: usize) -> Vec<u8> {
        let col = col.min(self.content.len());
        let tail = self.content.split_off(col);
        self.update();
        tail
    }

    fn update(&mut self) {
        self.render = expand_tabs(&self.content);
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes())
    }
}
