//! Parsed protocol commands.
//!
//! Wire grammar, one command per line:
//!
//! ```text
//! [:<prefix> ]<ACTION> [<optarg1> <optarg2> ...] [:]<argument>
//! ```
//!
//! Parsing is total: a malformed line degrades to empty fields instead of
//! an error, so one bad line can never stop the session.

mod parse;
mod types;

pub use parse::{parse, ARGUMENT_MARKER};
pub use types::ParsedCommand;
