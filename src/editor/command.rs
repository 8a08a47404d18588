//! Key bindings
//!
//! Maps decoded keys onto the logical actions the editor understands.

use crate::core::Direction;
use crate::input::Key;

/// A logical editor action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Insert a byte at the cursor
    Insert(u8),
    /// Split the line at the cursor
    Newline,
    /// Delete the byte before the cursor (backspace)
    DeleteBackward,
    /// Delete the byte under the cursor
    DeleteForward,
    /// Move the cursor one step
    Move(Direction),
    PageUp,
    PageDown,
    Home,
    End,
    Save,
    Quit,
    /// Inert key; still counts as "some other action" for the quit guard
    Noop,
}

impl Command {
    /// Check if the command can change document content
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Command::Insert(_) | Command::Newline | Command::DeleteBackward | Command::DeleteForward
        )
    }
}

impl From<Key> for Command {
    fn from(key: Key) -> Self {
        match key {
            Key::Enter => Command::Newline,
            Key::Ctrl(b'x') => Command::Quit,
            Key::Ctrl(b's') => Command::Save,
            Key::Backspace | Key::Ctrl(b'h') => Command::DeleteBackward,
            Key::Delete => Command::DeleteForward,
            Key::Up => Command::Move(Direction::Up),
            Key::Down => Command::Move(Direction::Down),
            Key::Left => Command::Move(Direction::Left),
            Key::Right => Command::Move(Direction::Right),
            Key::PageUp => Command::PageUp,
            Key::PageDown => Command::PageDown,
            Key::Home => Command::Home,
            Key::End => Command::End,
            Key::Char(b) if b == b'\t' || b.is_ascii_graphic() || b == b' ' => Command::Insert(b),
            // Ctrl-L, Escape, other control keys and non-ASCII bytes
            Key::Char(_) | Key::Ctrl(_) | Key::Escape => Command::Noop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_inserts() {
        assert_eq!(Command::from(Key::Char(b'a')), Command::Insert(b'a'));
        assert_eq!(Command::from(Key::Char(b' ')), Command::Insert(b' '));
        assert_eq!(Command::from(Key::Char(b'\t')), Command::Insert(b'\t'));
        assert_eq!(Command::from(Key::Char(b'~')), Command::Insert(b'~'));
    }

    #[test]
    fn test_inert_keys() {
        assert_eq!(Command::from(Key::Ctrl(b'l')), Command::Noop);
        assert_eq!(Command::from(Key::Escape), Command::Noop);
        assert_eq!(Command::from(Key::Char(0)), Command::Noop);
        assert_eq!(Command::from(Key::Char(0xe9)), Command::Noop);
    }

    #[test]
    fn test_bindings() {
        assert_eq!(Command::from(Key::Ctrl(b'x')), Command::Quit);
        assert_eq!(Command::from(Key::Ctrl(b's')), Command::Save);
        assert_eq!(Command::from(Key::Ctrl(b'h')), Command::DeleteBackward);
        assert_eq!(Command::from(Key::Backspace), Command::DeleteBackward);
        assert_eq!(Command::from(Key::Delete), Command::DeleteForward);
        assert_eq!(Command::from(Key::Enter), Command::Newline);
        assert_eq!(Command::from(Key::Up), Command::Move(Direction::Up));
    }

    #[test]
    fn test_is_edit() {
        assert!(Command::Insert(b'a').is_edit());
        assert!(Command::DeleteForward.is_edit());
        assert!(!Command::Move(Direction::Left).is_edit());
        assert!(!Command::Save.is_edit());
    }
}
