//! Cursor state management
//!
//! The cursor is a logical position in the document: `row` indexes lines and
//! `col` indexes bytes of that line's content (not its render form). The row
//! one past the last line is a legal resting place, used for an empty
//! document and for typing below all content.

use super::document::Document;

/// Direction of a single cursor step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Logical cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Line index (0-indexed, may equal the line count)
    pub row: usize,
    /// Byte index into the line content (0-indexed)
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at the given position
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move one step, wrapping across line ends horizontally
    pub fn step(&mut self, direction: Direction, doc: &Document) {
        let on_line = self.row < doc.len();

        match direction {
            Direction::Up => {
                self.row = self.row.saturating_sub(1);
            },
            Direction::Down => {
                if on_line {
                    self.row += 1;
                }
            },
            Direction::Left => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = doc.line_len(self.row);
                }
            },
            Direction::Right => {
                if on_line {
                    if self.col < doc.line_len(self.row) {
                        self.col += 1;
                    } else {
                        self.row += 1;
                        self.col = 0;
                    }
                }
            },
        }

        self.clamp_to(doc);
    }

    /// Move to the start of the line
    pub fn home(&mut self) {
        self.col = 0;
    }

    /// Move to the end of the line, if on a real line
    pub fn end(&mut self, doc: &Document) {
        if self.row < doc.len() {
            self.col = doc.line_len(self.row);
        }
    }

    /// Clamp into valid bounds for `doc`
    pub fn clamp_to(&mut self, doc: &Document) {
        self.row = self.row.min(doc.len());
        self.col = self.col.min(doc.line_len(self.row));
    }

    /// Check if the cursor is at the very start of the document
    pub fn is_at_start(&self) -> bool {
        self.row == 0 && self.col == 0
    }

    /// Check if no character follows the cursor anywhere in `doc`
    pub fn is_at_end(&self, doc: &Document) -> bool {
        match doc.len() {
            0 => true,
            n => self.row >= n || (self.row == n - 1 && self.col >= doc.line_len(self.row)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::from_lines(["hello world", "hi", "", "goodbye"])
    }

    #[test]
    fn test_cursor_default() {
        let cursor = Cursor::default();
        assert_eq!(cursor.row, 0);
        assert_eq!(cursor.col, 0);
        assert!(cursor.is_at_start());
    }

    #[test]
    fn test_vertical_move_clamps_column() {
        let doc = doc();
        let mut cursor = Cursor::new(0, 10);

        cursor.step(Direction::Down, &doc);
        assert_eq!(cursor, Cursor::new(1, 2));

        cursor.step(Direction::Down, &doc);
        assert_eq!(cursor, Cursor::new(2, 0));
    }

    #[test]
    fn test_down_is_bounded_by_line_count() {
        let doc = doc();
        let mut cursor = Cursor::new(0, 0);
        for _ in 0..10 {
            cursor.step(Direction::Down, &doc);
        }
        // One past the last line is allowed, no further
        assert_eq!(cursor.row, 4);
    }

    #[test]
    fn test_up_stops_at_top() {
        let doc = doc();
        let mut cursor = Cursor::new(1, 1);
        cursor.step(Direction::Up, &doc);
        cursor.step(Direction::Up, &doc);
        assert_eq!(cursor, Cursor::new(0, 1));
    }

    #[test]
    fn test_left_wraps_to_previous_line_end() {
        let doc = doc();
        let mut cursor = Cursor::new(1, 0);
        cursor.step(Direction::Left, &doc);
        assert_eq!(cursor, Cursor::new(0, 11));

        let mut cursor = Cursor::new(0, 0);
        cursor.step(Direction::Left, &doc);
        assert_eq!(cursor, Cursor::new(0, 0));
    }

    #[test]
    fn test_right_wraps_to_next_line_start() {
        let doc = doc();
        let mut cursor = Cursor::new(1, 2);
        cursor.step(Direction::Right, &doc);
        assert_eq!(cursor, Cursor::new(2, 0));
    }

    #[test]
    fn test_right_past_last_line_is_noop() {
        let doc = doc();
        let mut cursor = Cursor::new(4, 0);
        cursor.step(Direction::Right, &doc);
        assert_eq!(cursor, Cursor::new(4, 0));
    }

    #[test]
    fn test_home_end() {
        let doc = doc();
        let mut cursor = Cursor::new(3, 3);
        cursor.end(&doc);
        assert_eq!(cursor.col, 7);
        cursor.home();
        assert_eq!(cursor.col, 0);

        let mut below = Cursor::new(4, 0);
        below.end(&doc);
        assert_eq!(below.col, 0);
    }

    #[test]
    fn test_is_at_end() {
        let doc = doc();
        assert!(Cursor::new(3, 7).is_at_end(&doc));
        assert!(Cursor::new(4, 0).is_at_end(&doc));
        assert!(!Cursor::new(3, 6).is_at_end(&doc));
        assert!(!Cursor::new(2, 0).is_at_end(&doc));
        assert!(Cursor::new(0, 0).is_at_end(&Document::new()));
    }
}
