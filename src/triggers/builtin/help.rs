use slircbot_proto::{ParsedCommand, Reply, CRLF};

use crate::triggers::TriggerHandler;

/// Lists the configured triggers. Answers with two lines.
pub struct HelpHandler {
    marker: char,
    triggers: Vec<String>,
}

impl HelpHandler {
    pub fn new(marker: char, triggers: Vec<String>) -> Self {
        Self { marker, triggers }
    }
}

impl TriggerHandler for HelpHandler {
    fn handle(&self, _cmd: &ParsedCommand) -> Reply {
        let listed: Vec<String> = self
            .triggers
            .iter()
            .map(|t| format!("{}{t}", self.marker))
            .collect();
        Reply::text(format!(
            "Available commands: {}{CRLF}Usage: {}<command> [arguments]",
            listed.join(", "),
            self.marker
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slircbot_proto::compose;

    #[test]
    fn test_help_lists_triggers_on_two_routed_lines() {
        let handler = HelpHandler::new('!', vec!["help".into(), "echo".into()]);
        let origin = ParsedCommand::parse(":a!b@c PRIVMSG #x :!help");

        let wire = compose(&handler.handle(&origin), &origin).unwrap().unwrap();
        assert_eq!(
            wire,
            "PRIVMSG #x :Available commands: !help, !echo\r\n\
             PRIVMSG #x :Usage: !<command> [arguments]\r\n"
        );
    }
}
