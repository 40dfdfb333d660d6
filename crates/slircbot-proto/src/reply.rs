//! Reply composition.
//!
//! Handlers answer with a [`Reply`]. A [`Reply::Tokens`] value is already a
//! complete, routed command and is sent as-is; a [`Reply::Text`] value is
//! only the message body and gets addressed back to wherever the triggering
//! command came from.

use crate::error::ComposeError;
use crate::message::ParsedCommand;

/// Protocol line terminator.
pub const CRLF: &str = "\r\n";

/// A handler's answer to one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Message body; routed back to the origin on composition.
    ///
    /// May hold two lines separated by `\r\n` or `\n`, each of which is addressed
    /// individually.
    Text(String),
    /// Complete command tokens, joined with single spaces.
    Tokens(Vec<String>),
}

impl Reply {
    /// A reply that produces no output.
    pub fn none() -> Self {
        Reply::Text(String::new())
    }

    /// Create a plain text reply.
    pub fn text(body: impl Into<String>) -> Self {
        Reply::Text(body.into())
    }

    /// Create a token list reply.
    pub fn tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Reply::Tokens(tokens.into_iter().map(Into::into).collect())
    }

    /// Whether composing this reply would produce nothing to send.
    pub fn is_empty(&self) -> bool {
        match self {
            Reply::Text(body) => body_of(body).is_empty(),
            Reply::Tokens(tokens) => tokens.is_empty(),
        }
    }
}

/// Text body without its final line terminator (`\r\n` or bare `\n`).
fn body_of(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}

/// Work out where a text reply to `origin` should go.
///
/// Channel messages are answered in the channel; anything else (a direct
/// message to the bot) is answered to the sender's nickname.
pub fn reply_target(origin: &ParsedCommand) -> Option<&str> {
    match origin.target() {
        Some(target) if origin.is_channel_message() => Some(target),
        target => origin.sender_nick().filter(|nick| !nick.is_empty()).or(target),
    }
}

/// Routing prefix placed before every line of a text reply.
pub fn routing_prefix(target: &str) -> String {
    format!("PRIVMSG {target} :")
}

/// Turn a reply into wire text terminated by `\r\n`.
///
/// Returns `Ok(None)` for an empty reply, meaning nothing should be sent.
pub fn compose(reply: &Reply, origin: &ParsedCommand) -> Result<Option<String>, ComposeError> {
    if reply.is_empty() {
        return Ok(None);
    }

    match reply {
        Reply::Tokens(tokens) => Ok(Some(format!("{}{CRLF}", tokens.join(" ")))),
        Reply::Text(text) => {
            // A bare `\n` ends a line too; each line is addressed on its own.
            let body = body_of(text);
            let lines: Vec<&str> = body
                .split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line))
                .collect();
            if lines.len() > 2 {
                return Err(ComposeError::TooManyLines { lines: lines.len() });
            }

            let target = reply_target(origin).ok_or(ComposeError::NoTarget)?;
            let prefix = routing_prefix(target);

            let mut out = String::with_capacity(body.len() + lines.len() * (prefix.len() + 2));
            for line in lines {
                out.push_str(&prefix);
                out.push_str(line);
                out.push_str(CRLF);
            }
            Ok(Some(out))
        }
    }
}
