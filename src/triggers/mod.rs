//! User command triggers.
//!
//! A user message starting with the trigger marker followed by a configured
//! trigger name (`!help`, `!echo ...`) is handed to the handler unit
//! registered under that name. Resolution failures become an in-channel
//! error reply, never a session failure.

mod builtin;
mod dispatch;
mod registry;

pub use dispatch::{Dispatcher, Resolved};
pub use registry::{HandlerUnit, Registry};

use slircbot_proto::{ParsedCommand, Reply};
use thiserror::Error;

/// Trait implemented by all trigger handlers.
///
/// Handlers are pure and synchronous: they see the parsed command and
/// return a reply, which may be empty to stay silent.
pub trait TriggerHandler: Send + Sync {
    fn handle(&self, cmd: &ParsedCommand) -> Reply;
}

impl<F> TriggerHandler for F
where
    F: Fn(&ParsedCommand) -> Reply + Send + Sync,
{
    fn handle(&self, cmd: &ParsedCommand) -> Reply {
        self(cmd)
    }
}

/// Soft failures while resolving a trigger.
///
/// The `Display` text is sent back to whoever issued the command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No handler unit is registered under the trigger name.
    #[error("Command {0} does not exist")]
    HandlerMissing(String),

    /// The unit exists but has no entry point named after the trigger.
    #[error("Command {0} is not valid")]
    HandlerMalformed(String),
}

impl DispatchError {
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::HandlerMissing(_) => "handler_missing",
            Self::HandlerMalformed(_) => "handler_malformed",
        }
    }

    /// Trigger the error refers to.
    pub fn trigger(&self) -> &str {
        match self {
            Self::HandlerMissing(name) | Self::HandlerMalformed(name) => name,
        }
    }
}
