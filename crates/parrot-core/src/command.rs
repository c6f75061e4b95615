//! Command token parsing.
//!
//! A command is the first whitespace-delimited word of a message when it
//! starts with `/`. In group chats clients append the bot's username, so
//! `/echo@parrot_bot` is the same command as `/echo` for that bot.

/// The leading command word of a message, split into name and mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandToken<'a> {
    /// Command name without the leading `/`.
    pub name: &'a str,
    /// Bot username after `@`, if the command was addressed to a bot.
    pub mention: Option<&'a str>,
}

impl CommandToken<'_> {
    /// Returns true if this token invokes `command` on the given bot.
    ///
    /// Command names compare case-sensitively. A mention must equal
    /// `bot_username` (ignoring case); when the bot's username is unknown
    /// any mention is accepted.
    pub fn matches(&self, command: &str, bot_username: Option<&str>) -> bool {
        if self.name != command {
            return false;
        }
        match (self.mention, bot_username) {
            (Some(mention), Some(username)) => mention.eq_ignore_ascii_case(username),
            _ => true,
        }
    }
}

/// Parses the command token at the start of `text`.
///
/// Returns `None` when the text does not start with `/` or the command name
/// is empty.
pub fn parse_command(text: &str) -> Option<CommandToken<'_>> {
    let word = text.split_whitespace().next()?;
    let body = word.strip_prefix('/')?;

    let (name, mention) = match body.split_once('@') {
        Some((name, mention)) => (name, Some(mention)),
        None => (body, None),
    };

    if name.is_empty() {
        return None;
    }

    Some(CommandToken { name, mention })
}

/// Returns the text after the first space character, if it is non-empty.
///
/// Only the first space is consumed, so the argument keeps any further
/// spacing verbatim.
pub fn command_argument(text: &str) -> Option<&str> {
    text.split_once(' ')
        .map(|(_, rest)| rest)
        .filter(|rest| !rest.is_empty())
}
