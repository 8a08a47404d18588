//! Screen composition
//!
//! Builds a complete frame of terminal output from the editor state: the
//! visible text rows, an inverted status bar, and the message bar, followed by
//! the cursor placement. The whole frame is assembled in memory and written
//! with a single call to avoid flicker.
//!
//! Composition is pure: the same editor state and clock always produce the
//! same bytes.

use std::io::Write;
use std::time::{Duration, Instant};

use crate::editor::Editor;

/// Rows taken by the status bar and the message bar
pub const BAR_ROWS: usize = 2;

/// Longest filename shown in the status bar
const MAX_NAME_LEN: usize = 20;

const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
const CURSOR_HOME: &[u8] = b"\x1b[H";
const CLEAR_LINE: &[u8] = b"\x1b[K";
const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
const INVERT: &[u8] = b"\x1b[7m";
const RESET_STYLE: &[u8] = b"\x1b[m";

/// Bytes that clear the screen and home the cursor
pub fn clear_screen() -> Vec<u8> {
    [CLEAR_SCREEN, CURSOR_HOME].concat()
}

/// Composes frames for a fixed terminal width
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Message bar timeout
    message_timeout: Duration,
    /// Text shown centered on an empty document
    welcome: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl Renderer {
    /// Create a renderer that hides status messages after `message_timeout`
    pub fn new(message_timeout: Duration) -> Self {
        Self {
            message_timeout,
            welcome: format!("CText editor -- version {}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Compose a full frame for `editor` as of `now`
    pub fn compose(&self, editor: &Editor, now: Instant) -> Vec<u8> {
        let mut frame = Vec::new();
        frame.extend_from_slice(HIDE_CURSOR);
        frame.extend_from_slice(CURSOR_HOME);

        self.draw_rows(&mut frame, editor);
        self.draw_status_bar(&mut frame, editor);
        self.draw_message_bar(&mut frame, editor, now);

        let (row, col) = editor.viewport().cursor_screen_position(&editor.cursor());
        // Writes into a Vec cannot fail
        let _ = write!(frame, "\x1b[{};{}H", row + 1, col + 1);

        frame.extend_from_slice(SHOW_CURSOR);
        frame
    }

    fn draw_rows(&self, frame: &mut Vec<u8>, editor: &Editor) {
        let doc = editor.document();
        let viewport = editor.viewport();
        let cols = viewport.cols();

        for y in 0..viewport.rows() {
            let file_row = y + viewport.row_offset;
            match doc.line(file_row) {
                Some(line) => {
                    let render = line.render();
                    let start = viewport.col_offset.min(render.len());
                    let end = (start + cols).min(render.len());
                    frame.extend_from_slice(&render[start..end]);
                },
                None if doc.is_empty() && y == viewport.rows() / 3 => {
                    self.draw_welcome(frame, cols);
                },
                None => frame.push(b'~'),
            }
            frame.extend_from_slice(CLEAR_LINE);
            frame.extend_from_slice(b"\r\n");
        }
    }

    fn draw_welcome(&self, frame: &mut Vec<u8>, cols: usize) {
        let welcome = &self.welcome.as_bytes()[..self.welcome.len().min(cols)];
        let mut padding = (cols - welcome.len()) / 2;
        if padding > 0 {
            frame.push(b'~');
            padding -= 1;
        }
        frame.extend(std::iter::repeat(b' ').take(padding));
        frame.extend_from_slice(welcome);
    }

    fn draw_status_bar(&self, frame: &mut Vec<u8>, editor: &Editor) {
        let doc = editor.document();
        let cols = editor.viewport().cols();

        let name = doc
            .filename()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "[No Name]".to_string());
        let name: String = name.chars().take(MAX_NAME_LEN).collect();
        let modified = if doc.is_dirty() { "(modified)" } else { "" };

        let left = format!("{} - {} lines {}", name, doc.len(), modified);
        let right = format!("{}/{}", editor.cursor().row + 1, doc.len());

        let left = &left.as_bytes()[..left.len().min(cols)];
        frame.extend_from_slice(INVERT);
        frame.extend_from_slice(left);

        let mut len = left.len();
        while len < cols {
            if cols - len == right.len() {
                frame.extend_from_slice(right.as_bytes());
                break;
            }
            frame.push(b' ');
            len += 1;
        }

        frame.extend_from_slice(RESET_STYLE);
        frame.extend_from_slice(b"\r\n");
    }

    fn draw_message_bar(&self, frame: &mut Vec<u8>, editor: &Editor, now: Instant) {
        frame.extend_from_slice(CLEAR_LINE);
        let status = editor.status();
        if status.is_visible(now, self.message_timeout) {
            let text = status.text().as_bytes();
            let len = text.len().min(editor.viewport().cols());
            frame.extend_from_slice(&text[..len]);
        }
    }
}
