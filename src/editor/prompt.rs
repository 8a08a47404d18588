//! Single-line input prompt
//!
//! Used to ask for a filename on the first save. The prompt only collects
//! printable ASCII; Enter accepts a non-empty answer and Escape cancels.

use crate::input::Key;

/// Outcome of feeding a key to a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptState {
    /// Still collecting input
    Editing,
    /// Enter pressed with a non-empty answer
    Accepted(String),
    /// Escape pressed
    Cancelled,
}

/// A line of user input with a label
#[derive(Debug, Clone)]
pub struct Prompt {
    label: String,
    input: String,
}

impl Prompt {
    /// Create an empty prompt shown as `label` followed by the input
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            input: String::new(),
        }
    }

    /// Current input
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Text to show in the message bar
    pub fn display(&self) -> String {
        format!("{}{}", self.label, self.input)
    }

    /// Feed one key to the prompt
    pub fn feed(&mut self, key: Key) -> PromptState {
        match key {
            Key::Escape => PromptState::Cancelled,
            Key::Enter if !self.input.is_empty() => {
                PromptState::Accepted(std::mem::take(&mut self.input))
            },
            Key::Backspace | Key::Delete | Key::Ctrl(b'h') => {
                self.input.pop();
                PromptState::Editing
            },
            Key::Char(b) if b == b' ' || b.is_ascii_graphic() => {
                self.input.push(char::from(b));
                PromptState::Editing
            },
            _ => PromptState::Editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(prompt: &mut Prompt, text: &str) {
        for b in text.bytes() {
            assert_eq!(prompt.feed(Key::Char(b)), PromptState::Editing);
        }
    }

    #[test]
    fn test_prompt_accept() {
        let mut prompt = Prompt::new("Save as: ");
        type_str(&mut prompt, "notes.txt");
        assert_eq!(prompt.display(), "Save as: notes.txt");
        assert_eq!(
            prompt.feed(Key::Enter),
            PromptState::Accepted("notes.txt".to_string())
        );
    }

    #[test]
    fn test_prompt_enter_on_empty_is_ignored() {
        let mut prompt = Prompt::new("Save as: ");
        assert_eq!(prompt.feed(Key::Enter), PromptState::Editing);
    }

    #[test]
    fn test_prompt_cancel() {
        let mut prompt = Prompt::new("Save as: ");
        type_str(&mut prompt, "abc");
        assert_eq!(prompt.feed(Key::Escape), PromptState::Cancelled);
    }

    #[test]
    fn test_prompt_backspace() {
        let mut prompt = Prompt::new("> ");
        type_str(&mut prompt, "ab");
        prompt.feed(Key::Backspace);
        assert_eq!(prompt.input(), "a");
        prompt.feed(Key::Ctrl(b'h'));
        prompt.feed(Key::Delete);
        assert_eq!(prompt.input(), "");
    }

    #[test]
    fn test_prompt_ignores_control_and_tab() {
        let mut prompt = Prompt::new("> ");
        prompt.feed(Key::Char(b'\t'));
        prompt.feed(Key::Ctrl(b'a'));
        prompt.feed(Key::Up);
        prompt.feed(Key::Char(0xff));
        assert_eq!(prompt.input(), "");
    }
}
