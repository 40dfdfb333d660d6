//! Trigger resolution and dispatch.
//!
//! Triggers are tried in configured order and the first one whose name
//! follows the marker at the start of the message wins. A message like
//! `!helpme` therefore selects `help` when `help` is configured before
//! `helpme`. Resolution stops at that first match even when its unit
//! fails to load.

use slircbot_proto::{ParsedCommand, Reply};
use tracing::{debug, warn};

use super::{DispatchError, Registry, TriggerHandler};
use crate::config::Config;

/// A trigger matched and resolved to its entry point.
pub struct Resolved<'a> {
    /// Configured trigger name that matched.
    pub trigger: &'a str,
    /// Entry point of the unit registered under that name.
    pub handler: &'a dyn TriggerHandler,
}

/// Matches user messages against the configured triggers and runs the
/// selected handler.
pub struct Dispatcher {
    registry: Registry,
    triggers: Vec<String>,
    marker: char,
}

impl Dispatcher {
    /// Dispatcher trying `triggers` in order after `marker`.
    pub fn new(registry: Registry, triggers: Vec<String>, marker: char) -> Self {
        Self {
            registry,
            triggers,
            marker,
        }
    }

    /// Dispatcher over the builtin units and the configured trigger order.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Registry::builtin(config),
            config.triggers.clone(),
            config.trigger_marker,
        )
    }

    /// Whether `argument` is a candidate for dispatch at all.
    pub fn is_triggered(&self, argument: &str) -> bool {
        argument.starts_with(self.marker)
    }

    /// First configured trigger that `argument` starts with, marker included.
    pub fn match_trigger(&self, argument: &str) -> Option<&str> {
        let rest = argument.strip_prefix(self.marker)?;
        self.triggers
            .iter()
            .map(String::as_str)
            .find(|name| rest.starts_with(name))
    }

    /// Resolve `argument` to a handler.
    ///
    /// `Ok(None)` means no configured trigger matched.
    pub fn resolve(&self, argument: &str) -> Result<Option<Resolved<'_>>, DispatchError> {
        let Some(trigger) = self.match_trigger(argument) else {
            return Ok(None);
        };
        let handler = self.registry.lookup(trigger)?;
        Ok(Some(Resolved { trigger, handler }))
    }

    /// Run the handler selected by `cmd.argument`.
    ///
    /// Resolution failures are turned into a text reply naming the trigger.
    pub fn dispatch(&self, cmd: &ParsedCommand) -> Option<Reply> {
        match self.resolve(&cmd.argument) {
            Ok(Some(resolved)) => {
                debug!(trigger = %resolved.trigger, sender = ?cmd.sender_nick(), "dispatching trigger");
                Some(resolved.handler.handle(cmd))
            }
            Ok(None) => None,
            Err(e) => {
                warn!(trigger = %e.trigger(), error_code = e.error_code(), "trigger resolution failed");
                Some(Reply::text(e.to_string()))
            }
        }
    }
}
