//! Line parser.
//!
//! A trailing argument is introduced by `:`. Without the marker, a single
//! remaining token is taken as the argument; two or more remaining tokens
//! are all positional and the argument stays empty. `KICK #chan nick` thus
//! yields both names as positional arguments.

use crate::prefix::PREFIX_MARKER;

use super::types::ParsedCommand;

/// Character introducing the free-text trailing argument.
pub const ARGUMENT_MARKER: char = ':';

/// Split the next space-delimited token off `s`.
fn next_token(s: &str) -> (&str, &str) {
    let s = s.trim_start_matches(' ');
    match s.find(' ') {
        Some(end) => (&s[..end], &s[end + 1..]),
        None => (s, ""),
    }
}

/// Parse one line into a [`ParsedCommand`]. Never fails.
///
/// A trailing `\r\n` or `\n` is ignored.
pub fn parse(line: &str) -> ParsedCommand {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let mut rest = line;
    let prefix = match rest.strip_prefix(PREFIX_MARKER) {
        Some(stripped) => {
            let (prefix, tail) = next_token(stripped);
            rest = tail;
            Some(prefix.to_owned())
        }
        None => None,
    };

    let (action, tail) = next_token(rest);
    rest = tail;

    let mut middle = Vec::new();
    let mut trailing = None;
    loop {
        let remaining = rest.trim_start_matches(' ');
        if remaining.is_empty() {
            break;
        }
        if let Some(text) = remaining.strip_prefix(ARGUMENT_MARKER) {
            trailing = Some(text);
            break;
        }
        let (token, tail) = next_token(remaining);
        middle.push(token.to_owned());
        rest = tail;
    }

    let (optional_arguments, argument) = match trailing {
        Some(text) => (middle, text.to_owned()),
        None if middle.len() == 1 => (Vec::new(), middle.remove(0)),
        None => (middle, String::new()),
    };

    ParsedCommand {
        prefix,
        action: action.to_owned(),
        argument,
        optional_arguments,
    }
}
