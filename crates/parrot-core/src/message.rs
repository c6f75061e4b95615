//! Incoming message and update types.

use serde::{Deserialize, Serialize};

/// A text message received from a user.
///
/// This is the only entity the bot works with. It lives for the duration
/// of a single request and is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Numeric identifier of the sender.
    pub user_id: u64,
    /// Display name of the sender (first and last name).
    pub full_name: String,
    /// Username of the sender, if they have one.
    pub username: Option<String>,
    /// IETF language tag of the sender's client, if known.
    pub language_code: Option<String>,
    /// Raw text body.
    pub text: String,
    /// Conversation the reply goes to.
    pub chat_id: i64,
}

impl IncomingMessage {
    /// Creates a message with the required fields; optional fields start unset.
    pub fn new(
        user_id: u64,
        full_name: impl Into<String>,
        text: impl Into<String>,
        chat_id: i64,
    ) -> Self {
        Self {
            user_id,
            full_name: full_name.into(),
            username: None,
            language_code: None,
            text: text.into(),
            chat_id,
        }
    }

    /// Sets the sender's username.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the sender's language code.
    pub fn with_language_code(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = Some(language_code.into());
        self
    }
}

/// One event delivered by the platform, after conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    /// Platform-assigned, monotonically increasing update id.
    pub update_id: u32,
    /// The text message carried by the update, if any.
    ///
    /// `None` for edits, callback queries, media without text and other
    /// events the bot does not answer.
    pub message: Option<IncomingMessage>,
}

impl Update {
    /// Creates an update carrying a text message.
    pub fn message(update_id: u32, message: IncomingMessage) -> Self {
        Self {
            update_id,
            message: Some(message),
        }
    }

    /// Creates an update the bot will skip.
    pub fn skipped(update_id: u32) -> Self {
        Self {
            update_id,
            message: None,
        }
    }

    /// Offset that confirms this update when polling for the next batch.
    ///
    /// `None` when the id does not fit the platform's signed 32-bit offset.
    pub fn next_offset(&self) -> Option<i32> {
        i32::try_from(self.update_id)
            .ok()
            .and_then(|id| id.checked_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_builder() {
        let msg = IncomingMessage::new(7, "Grace Hopper", "hi", -100)
            .with_username("grace")
            .with_language_code("en");

        assert_eq!(msg.user_id, 7);
        assert_eq!(msg.full_name, "Grace Hopper");
        assert_eq!(msg.username.as_deref(), Some("grace"));
        assert_eq!(msg.language_code.as_deref(), Some("en"));
        assert_eq!(msg.text, "hi");
        assert_eq!(msg.chat_id, -100);
    }

    #[test]
    fn test_message_defaults_unset() {
        let msg = IncomingMessage::new(1, "A", "b", 1);
        assert!(msg.username.is_none());
        assert!(msg.language_code.is_none());
    }

    #[test]
    fn test_update_next_offset() {
        let update = Update::skipped(41);
        assert_eq!(update.next_offset(), Some(42));
        assert!(update.message.is_none());
    }

    #[test]
    fn test_update_next_offset_out_of_range() {
        assert_eq!(Update::skipped(i32::MAX as u32 - 1).next_offset(), Some(i32::MAX));
        assert_eq!(Update::skipped(i32::MAX as u32).next_offset(), None);
        assert_eq!(Update::skipped(u32::MAX).next_offset(), None);
    }
}
