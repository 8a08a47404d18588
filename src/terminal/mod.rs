//! Terminal handling
//!
//! Puts the controlling terminal into raw mode for the lifetime of a guard and
//! reports the window size. Reads in raw mode return after at most 100ms even
//! when no key was pressed, so the input loop never blocks indefinitely.

use std::io::{self, Read, Write};
use std::os::fd::AsFd;
use std::os::unix::io::AsRawFd;

use nix::libc;
use nix::sys::termios::{self, SetArg, SpecialCharacterIndices, Termios};

/// Error type for terminal operations
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("Failed to get terminal attributes: {0}")]
    GetAttr(#[source] nix::Error),

    #[error("Failed to set terminal attributes: {0}")]
    SetAttr(#[source] nix::Error),

    #[error("Failed to determine window size")]
    WindowSize,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for terminal operations
pub type TerminalResult<T> = Result<T, TerminalError>;

/// Terminal size in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub rows: u16,
    pub cols: u16,
}

impl WindowSize {
    /// Create a new window size
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(24, 80)
    }
}

/// Raw mode guard. The original terminal attributes are restored on drop.
pub struct RawMode {
    original: Termios,
}

impl RawMode {
    /// Switch stdin's terminal into raw mode
    pub fn enable() -> TerminalResult<Self> {
        let stdin = io::stdin();
        let original = termios::tcgetattr(stdin.as_fd()).map_err(TerminalError::GetAttr)?;

        let mut raw = original.clone();
        raw.input_flags &= !(termios::InputFlags::IXON
            | termios::InputFlags::ICRNL
            | termios::InputFlags::ISTRIP
            | termios::InputFlags::BRKINT);
        raw.output_flags &= !termios::OutputFlags::OPOST;
        raw.control_flags |= termios::ControlFlags::CS8;
        raw.local_flags &= !(termios::LocalFlags::ECHO
            | termios::LocalFlags::ICANON
            | termios::LocalFlags::ISIG
            | termios::LocalFlags::IEXTEN);
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 0;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 1;

        termios::tcsetattr(stdin.as_fd(), SetArg::TCSAFLUSH, &raw)
            .map_err(TerminalError::SetAttr)?;

        tracing::debug!("Raw mode enabled");
        Ok(Self { original })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let stdin = io::stdin();
        if let Err(e) = termios::tcsetattr(stdin.as_fd(), SetArg::TCSAFLUSH, &self.original) {
            tracing::warn!("Failed to restore terminal attributes: {}", e);
        } else {
            tracing::debug!("Raw mode disabled");
        }
    }
}

/// Query the terminal size of stdout.
///
/// Falls back to moving the cursor to the bottom-right corner and asking the
/// terminal where it ended up when the ioctl is unavailable.
pub fn window_size() -> TerminalResult<WindowSize> {
    // SAFETY: TIOCGWINSZ fills a winsize struct; ws is a valid zeroed struct
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(io::stdout().as_raw_fd(), libc::TIOCGWINSZ as _, &mut ws) };

    if result != -1 && ws.ws_col != 0 {
        return Ok(WindowSize::new(ws.ws_row, ws.ws_col));
    }

    tracing::debug!("TIOCGWINSZ unavailable, querying cursor position");
    let mut stdout = io::stdout();
    stdout.write_all(b"\x1b[999C\x1b[999B")?;
    query_cursor_position(&mut io::stdin(), &mut stdout)
}

/// Ask the terminal for the cursor position (`ESC [ 6 n`) and parse the
/// `ESC [ rows ; cols R` report.
pub fn query_cursor_position<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
) -> TerminalResult<WindowSize> {
    output.write_all(b"\x1b[6n")?;
    output.flush()?;

    let mut report = Vec::with_capacity(32);
    let mut byte = [0u8; 1];
    while report.len() < 32 {
        if input.read(&mut byte)? != 1 {
            break;
        }
        if byte[0] == b'R' {
            break;
        }
        report.push(byte[0]);
    }

    parse_cursor_report(&report).ok_or(TerminalError::WindowSize)
}

/// Parse `ESC [ rows ; cols` (the trailing `R` already stripped)
fn parse_cursor_report(report: &[u8]) -> Option<WindowSize> {
    let body = report.strip_prefix(b"\x1b[")?;
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(';')?;
    Some(WindowSize::new(rows.parse().ok()?, cols.parse().ok()?))
}
