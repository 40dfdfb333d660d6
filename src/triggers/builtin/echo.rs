use slircbot_proto::{ParsedCommand, Reply};

use super::trigger_text;
use crate::triggers::TriggerHandler;

/// Repeats whatever follows the trigger. Silent when there is nothing.
pub struct EchoHandler {
    marker: char,
    trigger: String,
}

impl EchoHandler {
    pub fn new(marker: char, trigger: impl Into<String>) -> Self {
        Self {
            marker,
            trigger: trigger.into(),
        }
    }
}

impl TriggerHandler for EchoHandler {
    fn handle(&self, cmd: &ParsedCommand) -> Reply {
        let text = trigger_text(cmd, self.marker, &self.trigger);
        if text.is_empty() {
            Reply::none()
        } else {
            Reply::text(text)
        }
    }
}
