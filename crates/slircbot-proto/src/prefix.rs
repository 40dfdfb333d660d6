//! Sender prefix helpers.
//!
//! A server-originated line may start with `:nick!user@host` (a user) or
//! `:irc.example.net` (a server). Only the nickname part is needed to
//! address replies.

/// Character introducing the sender prefix at the start of a line.
pub const PREFIX_MARKER: char = ':';

/// Separator between the nickname and the rest of a user prefix.
pub const NICK_SEPARATOR: char = '!';

/// Extract the sender identity: everything before the first `!`.
///
/// Server prefixes carry no separator and are returned whole.
pub fn nick_of(prefix: &str) -> &str {
    prefix
        .split_once(NICK_SEPARATOR)
        .map_or(prefix, |(nick, _)| nick)
}
