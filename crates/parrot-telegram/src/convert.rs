//! Conversion from teloxide types to Parrot's core types.

use parrot_core::{IncomingMessage, Update};
use serde::de::Error as _;
use serde_json::Value;
use teloxide::types::{Message, UpdateKind};

/// Update payload keys defined by the Bot API.
const KNOWN_UPDATE_KINDS: &[&str] = &[
    "message",
    "edited_message",
    "channel_post",
    "edited_channel_post",
    "message_reaction",
    "message_reaction_count",
    "inline_query",
    "chosen_inline_result",
    "callback_query",
    "shipping_query",
    "pre_checkout_query",
    "poll",
    "poll_answer",
    "my_chat_member",
    "chat_member",
    "chat_join_request",
    "chat_boost",
    "removed_chat_boost",
];

/// Converts a text message sent by a user.
///
/// Returns `None` for messages without text (stickers, photos without a
/// caption, service messages) and for messages with no sender, such as
/// channel posts.
pub fn incoming_message(msg: &Message) -> Option<IncomingMessage> {
    let text = msg.text()?;
    let user = msg.from.as_ref()?;

    Some(IncomingMessage {
        user_id: user.id.0,
        full_name: user.full_name(),
        username: user.username.clone(),
        language_code: user.language_code.clone(),
        text: text.to_string(),
        chat_id: msg.chat.id.0,
    })
}

/// Converts a platform update. Only new messages carry a message.
pub fn convert_update(update: &teloxide::types::Update) -> Update {
    let message = match &update.kind {
        UpdateKind::Message(msg) => incoming_message(msg),
        _ => None,
    };

    Update {
        update_id: update.id.0,
        message,
    }
}

/// Parses a raw JSON update as sent to a webhook.
///
/// teloxide turns a malformed payload into `UpdateKind::Error` instead of
/// failing, so a known update kind that did not deserialize is rejected
/// here. Update kinds this version does not know are still accepted.
pub fn parse_update(body: &[u8]) -> serde_json::Result<teloxide::types::Update> {
    let raw: Value = serde_json::from_slice(body)?;
    let update: teloxide::types::Update = serde_json::from_value(raw.clone())?;

    if let UpdateKind::Error(_) = update.kind {
        if let Some(kind) = KNOWN_UPDATE_KINDS
            .iter()
            .find(|kind| raw.get(**kind).is_some())
        {
            return Err(serde_json::Error::custom(format!("malformed `{kind}` payload")));
        }
    }

    Ok(update)
}
