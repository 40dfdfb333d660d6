//! # slircbot-proto
//!
//! Protocol plumbing for the slircbot IRC client: everything between raw
//! socket bytes and the commands the session acts on, and back.
//!
//! - [`line`]: accumulate bytes and yield complete lines (tokio codec)
//! - [`message`]: split a line into prefix, action, positional arguments
//!   and trailing argument
//! - [`reply`]: turn a handler [`Reply`] into correctly addressed wire text
//!
//! ```rust
//! use slircbot_proto::{compose, ParsedCommand, Reply};
//!
//! let origin = ParsedCommand::parse(":nick!user@host PRIVMSG #chan :!hello world");
//! assert_eq!(origin.argument, "!hello world");
//!
//! let wire = compose(&Reply::text("Hello!"), &origin).unwrap();
//! assert_eq!(wire.as_deref(), Some("PRIVMSG #chan :Hello!\r\n"));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod chan;
pub mod command;
pub mod error;
#[cfg(feature = "tokio")]
pub mod line;
pub mod message;
pub mod prefix;
pub mod reply;

pub use self::chan::ChannelExt;
pub use self::error::{ComposeError, ProtocolError};
#[cfg(feature = "tokio")]
pub use self::line::LineCodec;
pub use self::message::ParsedCommand;
pub use self::reply::{compose, Reply, CRLF};
