//! Parsed command type.

use crate::chan::ChannelExt;
use crate::prefix::nick_of;

/// One protocol line split into its structural parts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Sender annotation without its leading marker, if present.
    pub prefix: Option<String>,
    /// The verb token (`PING`, `PRIVMSG`, `KICK`, ...).
    pub action: String,
    /// Free-text trailing argument, possibly empty.
    pub argument: String,
    /// Positional tokens between the verb and the trailing argument.
    pub optional_arguments: Vec<String>,
}

impl ParsedCommand {
    /// Parse a single line. See [`crate::message::parse`].
    pub fn parse(line: &str) -> Self {
        super::parse(line)
    }

    /// Nickname of the sender, taken from the prefix.
    pub fn sender_nick(&self) -> Option<&str> {
        self.prefix.as_deref().map(nick_of)
    }

    /// First positional argument, usually the message target.
    pub fn target(&self) -> Option<&str> {
        self.optional_arguments.first().map(String::as_str)
    }

    /// Get the positional argument at `index`.
    pub fn optional_argument(&self, index: usize) -> Option<&str> {
        self.optional_arguments.get(index).map(String::as_str)
    }

    /// Whether this command was addressed to a channel rather than a user.
    pub fn is_channel_message(&self) -> bool {
        self.target().is_some_and(|t| t.is_channel_name())
    }
}

impl From<&str> for ParsedCommand {
    fn from(line: &str) -> Self {
        Self::parse(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_nick() {
        let cmd = ParsedCommand::parse(":alice!a@host PRIVMSG bot :hi");
        assert_eq!(cmd.sender_nick(), Some("alice"));
        assert!(!cmd.is_channel_message());
    }

    #[test]
    fn test_sender_nick_absent_without_prefix() {
        let cmd = ParsedCommand::parse("PING :x");
        assert_eq!(cmd.sender_nick(), None);
        assert_eq!(cmd.target(), None);
    }

    #[test]
    fn test_channel_target() {
        let cmd = ParsedCommand::from(":alice!a@host PRIVMSG #rust :hi");
        assert_eq!(cmd.target(), Some("#rust"));
        assert!(cmd.is_channel_message());
    }

    #[test]
    fn test_optional_argument_out_of_range() {
        let cmd = ParsedCommand::parse(":op!o@h KICK #rust");
        assert_eq!(cmd.optional_argument(0), None);
        assert_eq!(cmd.argument, "#rust");
        assert_eq!(cmd.optional_argument(1), None);
    }
}
