//! Editing engine
//!
//! [`Editor`] owns the document, the cursor, and the viewport, and applies one
//! [`Command`] at a time. Each command either fully applies or leaves the
//! document untouched; after every command the viewport is scrolled so the
//! cursor is on screen.

mod command;
mod prompt;
mod status;

use std::path::PathBuf;

pub use command::Command;
pub use prompt::{Prompt, PromptState};
pub use status::StatusMessage;

use crate::core::{Cursor, Direction, Document, Viewport};
use crate::storage;

/// Confirming quits required for a dirty document
pub const DEFAULT_QUIT_TIMES: u32 = 3;

/// What the caller should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading input
    Continue,
    /// Leave the input loop
    Quit,
    /// The document needs a filename before it can be saved
    PromptFilename,
}

/// Editor state: document, cursor, viewport, and status line
#[derive(Debug)]
pub struct Editor {
    document: Document,
    cursor: Cursor,
    viewport: Viewport,
    status: StatusMessage,
    quit_times: u32,
    quit_remaining: u32,
}

impl Editor {
    /// Create an editor over `document` with a text area of `rows` x `cols`
    pub fn new(document: Document, rows: usize, cols: usize) -> Self {
        Self {
            document,
            cursor: Cursor::default(),
            viewport: Viewport::new(rows, cols),
            status: StatusMessage::default(),
            quit_times: DEFAULT_QUIT_TIMES,
            quit_remaining: DEFAULT_QUIT_TIMES,
        }
    }

    /// Set how many extra quits a dirty document needs
    pub fn with_quit_times(mut self, quit_times: u32) -> Self {
        self.quit_times = quit_times;
        self.quit_remaining = quit_times;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    /// Replace the status message
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = StatusMessage::new(text);
    }

    /// Place the cursor, clamped to the document
    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.cursor.clamp_to(&self.document);
        self.scroll();
    }

    /// Apply one command
    pub fn handle(&mut self, command: Command) -> Flow {
        if command == Command::Quit {
            let flow = self.request_quit();
            self.scroll();
            return flow;
        }

        let flow = match command {
            Command::Insert(ch) => {
                self.insert_char(ch);
                Flow::Continue
            },
            Command::Newline => {
                self.insert_newline();
                Flow::Continue
            },
            Command::DeleteBackward => {
                self.delete_backward();
                Flow::Continue
            },
            Command::DeleteForward => {
                self.delete_forward();
                Flow::Continue
            },
            Command::Move(direction) => {
                self.cursor.step(direction, &self.document);
                Flow::Continue
            },
            Command::PageUp => {
                self.page_up();
                Flow::Continue
            },
            Command::PageDown => {
                self.page_down();
                Flow::Continue
            },
            Command::Home => {
                self.cursor.home();
                Flow::Continue
            },
            Command::End => {
                self.cursor.end(&self.document);
                Flow::Continue
            },
            Command::Save => self.save(),
            Command::Quit | Command::Noop => Flow::Continue,
        };

        if command.is_edit() {
            tracing::trace!(dirty = self.document.dirty(), "{:?}", command);
        }

        self.quit_remaining = self.quit_times;
        self.scroll();
        flow
    }

    /// Insert `ch` at the cursor, creating a line if the cursor is below all
    /// content
    pub fn insert_char(&mut self, ch: u8) {
        if self.cursor.row == self.document.len() {
            self.document.insert_line(self.document.len(), b"");
        }
        self.document
            .insert_char(self.cursor.row, self.cursor.col, ch);
        self.cursor.col += 1;
    }

    /// Break the line at the cursor
    pub fn insert_newline(&mut self) {
        if self.cursor.col == 0 {
            self.document.insert_line(self.cursor.row, b"");
        } else {
            self.document.split_line(self.cursor.row, self.cursor.col);
        }
        self.cursor.row += 1;
        self.cursor.col = 0;
    }

    /// Delete the byte before the cursor, joining lines at column 0
    pub fn delete_backward(&mut self) {
        if self.cursor.row >= self.document.len() || self.cursor.is_at_start() {
            return;
        }

        if self.cursor.col > 0 {
            self.document
                .delete_char(self.cursor.row, self.cursor.col - 1);
            self.cursor.col -= 1;
        } else if let Some(prev_len) = self.document.join_with_previous(self.cursor.row) {
            self.cursor.row -= 1;
            self.cursor.col = prev_len;
        }
    }

    /// Delete the byte under the cursor, joining the next line at line end.
    ///
    /// At the end of the document this is a no-op and the cursor stays put.
    pub fn delete_forward(&mut self) {
        if self.cursor.is_at_end(&self.document) {
            return;
        }
        self.cursor.step(Direction::Right, &self.document);
        self.delete_backward();
    }

    fn page_up(&mut self) {
        self.cursor.row = self.viewport.row_offset;
        for _ in 0..self.viewport.rows() {
            self.cursor.step(Direction::Up, &self.document);
        }
    }

    fn page_down(&mut self) {
        let bottom = self.viewport.row_offset + self.viewport.rows() - 1;
        self.cursor.row = bottom.min(self.document.len());
        for _ in 0..self.viewport.rows() {
            self.cursor.step(Direction::Down, &self.document);
        }
    }

    fn request_quit(&mut self) -> Flow {
        if self.document.is_dirty() && self.quit_remaining > 0 {
            self.set_status(format!(
                "WARNING!!! File has unsaved changes. Press Ctrl-X {} more times to quit.",
                self.quit_remaining
            ));
            tracing::debug!("Quit refused, {} confirmations left", self.quit_remaining);
            self.quit_remaining -= 1;
            return Flow::Continue;
        }
        Flow::Quit
    }

    /// Save to the document's filename, or ask for one
    pub fn save(&mut self) -> Flow {
        let Some(path) = self.document.filename().map(|p| p.to_path_buf()) else {
            return Flow::PromptFilename;
        };

        match storage::save(&mut self.document, &path) {
            Ok(written) => self.set_status(format!("{} bytes written to disk", written)),
            Err(e) => {
                tracing::warn!("Save failed: {}", e);
                self.set_status(format!("Can't save! I/O error: {}", e.io_error()));
            },
        }
        Flow::Continue
    }

    /// Name the document and save it
    pub fn save_as(&mut self, path: impl Into<PathBuf>) {
        self.document.set_filename(path);
        self.save();
    }

    /// Note that a filename prompt was cancelled
    pub fn abort_save(&mut self) {
        self.set_status("Save aborted");
    }

    /// Recompute the viewport for the current cursor
    pub fn scroll(&mut self) -> usize {
        self.viewport.scroll(&self.document, &self.cursor)
    }
}
