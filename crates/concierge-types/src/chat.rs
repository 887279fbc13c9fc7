//! Chat message and conversation state types.
//!
//! The conversation log is an append-only list of `Message` values whose
//! insertion order is the display order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Visitor,
    Assistant,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::Visitor => write!(f, "visitor"),
            Sender::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single entry in the conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn visitor(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Visitor,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn is_visitor(&self) -> bool {
        self.sender == Sender::Visitor
    }
}

/// Everything the chat view needs to draw itself.
///
/// Published as a whole on every change so a view can redraw and scroll to
/// the newest entry without tracking deltas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    pub log: Vec<Message>,
    /// True strictly while a question is in flight.
    pub pending: bool,
    /// Text currently typed into the question box.
    pub draft: String,
}

impl ConversationState {
    /// Newest entry, if any.
    pub fn last(&self) -> Option<&Message> {
        self.log.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_display_matches_wire_name() {
        for sender in [Sender::Visitor, Sender::Assistant] {
            let json = serde_json::to_string(&sender).unwrap();
            assert_eq!(json, format!("\"{sender}\""));
        }
    }

    #[test]
    fn test_message_serializes_sender_lowercase() {
        let msg = Message::assistant("hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"sender\":\"assistant\""));
        assert!(json.contains("\"text\":\"hi\""));
    }

    #[test]
    fn test_constructors_set_sender() {
        assert!(Message::visitor("q").is_visitor());
        assert!(!Message::assistant("a").is_visitor());
    }

    #[test]
    fn test_default_state_is_idle_and_empty() {
        let state = ConversationState::default();
        assert!(state.log.is_empty());
        assert!(!state.pending);
        assert!(state.last().is_none());
    }
}
