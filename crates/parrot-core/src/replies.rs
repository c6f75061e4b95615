//! Reply texts for each command.

use crate::message::IncomingMessage;

/// Placeholder rendered for optional user fields that are absent.
pub const NOT_SET: &str = "Not set";

/// Reply to `/echo` without an argument.
pub const ECHO_USAGE: &str = "Please provide text to echo. Usage: /echo <your text>";

/// Reply to `/help`.
pub const HELP_TEXT: &str = "Available commands:\n\
    /start - Start the bot\n\
    /help - Show this help message\n\
    /echo <text> - Echo your message\n\
    /info - Get your user information";

/// Greeting for `/start`, addressed to the sender.
pub fn start_text(message: &IncomingMessage) -> String {
    format!(
        "Hello, {}! 👋\n\
        I'm a simple bot built on Parrot.\n\
        Try these commands:\n\
        /start - Start the bot\n\
        /help - Show available commands\n\
        /echo <text> - Echo your message\n\
        /info - Get your user info",
        message.full_name
    )
}

/// Reply to `/echo <text>`.
pub fn echo_text(text: &str) -> String {
    format!("Echo: {}", text)
}

/// Reply to `/info` describing the sender.
pub fn info_text(message: &IncomingMessage) -> String {
    let username = message
        .username
        .as_deref()
        .map(|name| format!("@{}", name))
        .unwrap_or_else(|| NOT_SET.to_string());
    let language = message.language_code.as_deref().unwrap_or(NOT_SET);

    format!(
        "Your information:\n\
        👤 Name: {}\n\
        🆔 ID: {}\n\
        👤 Username: {}\n\
        🌐 Language: {}",
        message.full_name, message.user_id, username, language
    )
}

/// Reply to anything that is not a known command.
pub fn fallback_text(text: &str) -> String {
    format!("You said: {}", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_commands() {
        for command in ["/start", "/help", "/echo", "/info"] {
            assert!(HELP_TEXT.contains(command), "missing {}", command);
        }
        assert!(!HELP_TEXT.starts_with('\n'));
    }

    #[test]
    fn test_start_text_greets_sender() {
        let msg = IncomingMessage::new(1, "Ada Lovelace", "/start", 1);
        let text = start_text(&msg);
        assert!(text.starts_with("Hello, Ada Lovelace!"));
        for command in ["/start", "/help", "/echo", "/info"] {
            assert!(text.contains(command), "missing {}", command);
        }
    }

    #[test]
    fn test_info_text_with_all_fields() {
        let msg = IncomingMessage::new(99, "Alan Turing", "/info", 1)
            .with_username("alan")
            .with_language_code("en-GB");
        let text = info_text(&msg);
        assert!(text.contains("Name: Alan Turing"));
        assert!(text.contains("ID: 99"));
        assert!(text.contains("Username: @alan"));
        assert!(text.contains("Language: en-GB"));
        assert!(!text.contains(NOT_SET));
    }

    #[test]
    fn test_info_text_placeholders() {
        let msg = IncomingMessage::new(5, "Nobody", "/info", 1);
        let text = info_text(&msg);
        assert!(text.contains("Username: Not set"));
        assert!(text.contains("Language: Not set"));
        assert!(!text.contains("@"));
    }

    #[test]
    fn test_echo_and_fallback() {
        assert_eq!(echo_text("hi"), "Echo: hi");
        assert_eq!(fallback_text("banana"), "You said: banana");
    }
}
