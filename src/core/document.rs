//! Document model
//!
//! The document is the ordered list of lines being edited, plus the
//! bookkeeping that ties it to a file: how many edits have happened since the
//! last load/save, and where it should be written.
//!
//! Indices passed to the mutating operations are never trusted: a line index
//! past the end makes the call a no-op, and a column index is clamped into
//! the line. Editing is therefore total over every reachable cursor state.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use super::line::Line;

/// An ordered collection of lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
    /// Mutations since the document last matched disk
    dirty: usize,
    /// Target path, if one has been chosen
    filename: Option<PathBuf>,
}

impl Document {
    /// Create an empty, unnamed document
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a clean document from lines of text
    pub fn from_lines<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let mut doc = Self::new();
        for line in lines {
            doc.insert_line(doc.len(), line.as_ref());
        }
        doc.mark_clean();
        doc
    }

    /// Read lines from `reader` into a clean document.
    ///
    /// Lines are split on `\n`; trailing `\n` and `\r` bytes are stripped, and
    /// the last line does not need a terminator.
    pub fn from_reader<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut doc = Self::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            while matches!(buf.last(), Some(b'\n' | b'\r')) {
                buf.pop();
            }
            doc.insert_line(doc.len(), &buf);
        }

        doc.mark_clean();
        Ok(doc)
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by index
    pub fn line(&self, at: usize) -> Option<&Line> {
        self.lines.get(at)
    }

    /// Iterate over all lines in order
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Length of line `at`, or 0 if it does not exist
    pub fn line_len(&self, at: usize) -> usize {
        self.lines.get(at).map_or(0, Line::len)
    }

    /// Number of mutations since the last load or save
    pub fn dirty(&self) -> usize {
        self.dirty
    }

    /// Check if there are unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty != 0
    }

    /// Record that the document now matches disk
    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    /// Path the document is associated with
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Associate the document with a path
    pub fn set_filename(&mut self, path: impl Into<PathBuf>) {
        self.filename = Some(path.into());
    }

    /// Insert a new line at `at`, shifting later lines down
    pub fn insert_line(&mut self, at: usize, text: &[u8]) {
        if at > self.lines.len() {
            return;
        }
        self.lines.insert(at, Line::new(text));
        self.touch();
    }

    /// Remove line `at`, shifting later lines up
    pub fn delete_line(&mut self, at: usize) {
        if at >= self.lines.len() {
            return;
        }
        self.lines.remove(at);
        self.touch();
    }

    /// Append `text` to the end of line `at`
    pub fn append_text(&mut self, at: usize, text: &[u8]) {
        if let Some(line) = self.lines.get_mut(at) {
            line.append(text);
            self.touch();
        }
    }

    /// Insert `ch` into line `at` at `col` (clamped to the line length)
    pub fn insert_char(&mut self, at: usize, col: usize, ch: u8) {
        if let Some(line) = self.lines.get_mut(at) {
            line.insert(col, ch);
            self.touch();
        }
    }

    /// Remove the byte at `col` (clamped to the last byte) from line `at`
    pub fn delete_char(&mut self, at: usize, col: usize) {
        let removed = self
            .lines
            .get_mut(at)
            .and_then(|line| line.remove(col))
            .is_some();
        if removed {
            self.touch();
        }
    }

    /// Split line `at` at `col`, moving the tail into a new line below
    pub fn split_line(&mut self, at: usize, col: usize) {
        let Some(line) = self.lines.get_mut(at) else {
            return;
        };
        let tail = line.split_off(col);
        self.touch();
        self.insert_line(at + 1, &tail);
    }

    /// Merge line `at` onto the end of line `at - 1`.
    ///
    /// Returns the previous line's length before the merge, or `None` if
    /// there is no such pair of lines.
    pub fn join_with_previous(&mut self, at: usize) -> Option<usize> {
        if at == 0 || at >= self.lines.len() {
            return None;
        }
        let line = self.lines.remove(at);
        self.touch();
        let prev_len = self.lines[at - 1].len();
        self.append_text(at - 1, line.content());
        Some(prev_len)
    }

    /// Every line followed by `\n`, as one byte buffer
    pub fn serialize(&self) -> Vec<u8> {
        let total = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut buf = Vec::with_capacity(total);
        for line in &self.lines {
            buf.extend_from_slice(line.content());
            buf.push(b'\n');
        }
        buf
    }

    fn touch(&mut self) {
        self.dirty = self.dirty.saturating_add(1);
    }
}
