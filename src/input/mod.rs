//! Key Decoding Module
//!
//! Turns the raw byte stream coming from a terminal in raw mode into discrete
//! key events. Most keys arrive as a single byte; cursor and navigation keys
//! arrive as escape sequences:
//!
//! - `ESC [ A` .. `ESC [ D`: arrow keys
//! - `ESC [ H` / `ESC [ F`, `ESC O H` / `ESC O F`: Home / End
//! - `ESC [ n ~`: Home (1, 7), Delete (3), End (4, 8), PageUp (5), PageDown (6)
//!
//! The terminal read timeout means a lone ESC press shows up as ESC followed by
//! nothing; any sequence that is cut short or unknown decodes to
//! [`Key::Escape`].

use std::io::{self, Read};

const ESC: u8 = 0x1b;
const BACKSPACE: u8 = 0x7f;

/// A decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A plain byte: printable ASCII, tab, or any byte >= 0x80
    Char(u8),
    /// Ctrl plus a lowercase letter (`Ctrl(b's')` for Ctrl-S)
    Ctrl(u8),
    /// Carriage return
    Enter,
    /// DEL (0x7f), sent by the backspace key
    Backspace,
    /// Forward delete
    Delete,
    /// Lone escape or an unrecognized sequence
    Escape,

    // Cursor keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    /// Decode a key that arrives as a single byte
    pub fn from_byte(byte: u8) -> Key {
        match byte {
            b'\r' => Key::Enter,
            b'\t' => Key::Char(b'\t'),
            BACKSPACE => Key::Backspace,
            ESC => Key::Escape,
            0x01..=0x1a => Key::Ctrl(b'a' + byte - 1),
            _ => Key::Char(byte),
        }
    }
}

/// Reads key presses from a byte source
#[derive(Debug)]
pub struct KeyReader<R> {
    source: R,
}

impl<R: Read> KeyReader<R> {
    /// Wrap a byte source
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Read the next key.
    ///
    /// Returns `Ok(None)` if no byte was available before the source timed
    /// out (or reached end of input).
    pub fn read_key(&mut self) -> io::Result<Option<Key>> {
        let Some(byte) = self.read_byte()? else {
            return Ok(None);
        };

        if byte != ESC {
            return Ok(Some(Key::from_byte(byte)));
        }

        Ok(Some(self.read_escape()?))
    }

    /// Decode the remainder of an escape sequence after ESC
    fn read_escape(&mut self) -> io::Result<Key> {
        let Some(first) = self.read_byte()? else {
            return Ok(Key::Escape);
        };
        let Some(second) = self.read_byte()? else {
            return Ok(Key::Escape);
        };

        let key = match (first, second) {
            (b'[', b'0'..=b'9') => {
                let Some(b'~') = self.read_byte()? else {
                    return Ok(Key::Escape);
                };
                match second {
                    b'1' | b'7' => Key::Home,
                    b'3' => Key::Delete,
                    b'4' | b'8' => Key::End,
                    b'5' => Key::PageUp,
                    b'6' => Key::PageDown,
                    _ => Key::Escape,
                }
            },
            (b'[', b'A') => Key::Up,
            (b'[', b'B') => Key::Down,
            (b'[', b'C') => Key::Right,
            (b'[', b'D') => Key::Left,
            (b'[' | b'O', b'H') => Key::Home,
            (b'[' | b'O', b'F') => Key::End,
            _ => Key::Escape,
        };

        Ok(key)
    }

    /// Read one byte, treating timeouts and end of input as "nothing yet"
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.source.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => return Ok(None),
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> Vec<Key> {
        let mut reader = KeyReader::new(bytes);
        let mut keys = Vec::new();
        while let Some(key) = reader.read_key().unwrap() {
            keys.push(key);
        }
        keys
    }

    #[test]
    fn test_single_bytes() {
        assert_eq!(
            decode(b"a\t\r\x7f"),
            vec![Key::Char(b'a'), Key::Char(b'\t'), Key::Enter, Key::Backspace]
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            decode(b"\x18\x13\x08"),
            vec![Key::Ctrl(b'x'), Key::Ctrl(b's'), Key::Ctrl(b'h')]
        );
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            decode(b"\x1b[A\x1b[B\x1b[C\x1b[D"),
            vec![Key::Up, Key::Down, Key::Right, Key::Left]
        );
    }

    #[test]
    fn test_tilde_sequences() {
        assert_eq!(
            decode(b"\x1b[1~\x1b[3~\x1b[4~\x1b[5~\x1b[6~\x1b[7~\x1b[8~"),
            vec![
                Key::Home,
                Key::Delete,
                Key::End,
                Key::PageUp,
                Key::PageDown,
                Key::Home,
                Key::End
            ]
        );
    }

    #[test]
    fn test_home_end_variants() {
        assert_eq!(
            decode(b"\x1b[H\x1b[F\x1bOH\x1bOF"),
            vec![Key::Home, Key::End, Key::Home, Key::End]
        );
    }

    #[test]
    fn test_lone_escape() {
        assert_eq!(decode(b"\x1b"), vec![Key::Escape]);
        assert_eq!(decode(b"\x1b["), vec![Key::Escape]);
    }

    #[test]
    fn test_unknown_sequence() {
        // The unknown sequence is consumed as a whole
        assert_eq!(decode(b"\x1b[Zx"), vec![Key::Escape, Key::Char(b'x')]);
        assert_eq!(decode(b"\x1b[2~"), vec![Key::Escape]);
    }

    #[test]
    fn test_empty_source() {
        let mut reader = KeyReader::new(&b""[..]);
        assert_eq!(reader.read_key().unwrap(), None);
    }
}
