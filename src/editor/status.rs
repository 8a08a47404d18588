//! Transient status messages

use std::time::{Duration, Instant};

/// A message shown in the message bar until it expires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    set_at: Instant,
}

impl StatusMessage {
    /// Create a message stamped with the current time
    pub fn new(text: impl Into<String>) -> Self {
        Self::at(text, Instant::now())
    }

    /// Create a message stamped with `set_at`
    pub fn at(text: impl Into<String>, set_at: Instant) -> Self {
        Self {
            text: text.into(),
            set_at,
        }
    }

    /// Message text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the message should still be displayed at `now`
    pub fn is_visible(&self, now: Instant, timeout: Duration) -> bool {
        !self.text.is_empty() && now.saturating_duration_since(self.set_at) < timeout
    }
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_expires() {
        let start = Instant::now();
        let msg = StatusMessage::at("saved", start);
        let timeout = Duration::from_secs(5);

        assert!(msg.is_visible(start, timeout));
        assert!(msg.is_visible(start + Duration::from_secs(4), timeout));
        assert!(!msg.is_visible(start + Duration::from_secs(5), timeout));
    }

    #[test]
    fn test_empty_message_hidden() {
        let msg = StatusMessage::default();
        assert!(!msg.is_visible(Instant::now(), Duration::from_secs(5)));
    }
}
