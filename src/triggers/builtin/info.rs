//! Small informational handlers.

use chrono::{DateTime, Utc};
use slircbot_proto::command::NOTICE;
use slircbot_proto::{ParsedCommand, Reply};

use crate::triggers::TriggerHandler;

/// Current UTC time.
pub struct TimeHandler;

impl TimeHandler {
    fn format(now: DateTime<Utc>) -> String {
        format!("Current time: {}", now.format("%Y-%m-%d %H:%M:%S UTC"))
    }
}

impl TriggerHandler for TimeHandler {
    fn handle(&self, _cmd: &ParsedCommand) -> Reply {
        Reply::text(Self::format(Utc::now()))
    }
}

/// Version, sent as a NOTICE straight to the sender.
pub struct VersionHandler;

impl TriggerHandler for VersionHandler {
    fn handle(&self, cmd: &ParsedCommand) -> Reply {
        match cmd.sender_nick().filter(|nick| !nick.is_empty()) {
            Some(nick) => Reply::tokens([
                NOTICE.to_string(),
                nick.to_string(),
                format!(":slircbot {}", env!("CARGO_PKG_VERSION")),
            ]),
            None => Reply::none(),
        }
    }
}

/// Who the bot is and who runs it.
pub struct AboutHandler {
    text: String,
}

impl AboutHandler {
    pub fn new(nick: &str, owner: &str) -> Self {
        Self {
            text: format!("I am {nick}, a slircbot instance run by {owner}"),
        }
    }
}

impl TriggerHandler for AboutHandler {
    fn handle(&self, _cmd: &ParsedCommand) -> Reply {
        Reply::text(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_format() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            TimeHandler::format(now),
            "Current time: 2024-01-02 03:04:05 UTC"
        );
    }

    #[test]
    fn test_version_is_notice_to_sender() {
        let cmd = ParsedCommand::parse(":alice!a@h PRIVMSG #x :!version");
        match VersionHandler.handle(&cmd) {
            Reply::Tokens(tokens) => {
                assert_eq!(tokens[0], "NOTICE");
                assert_eq!(tokens[1], "alice");
                assert!(tokens[2].starts_with(":slircbot "));
            }
            other => panic!("expected token reply, got {other:?}"),
        }
    }

    #[test]
    fn test_version_without_sender_is_silent() {
        let cmd = ParsedCommand::parse("PRIVMSG #x :!version");
        assert!(VersionHandler.handle(&cmd).is_empty());
    }

    #[test]
    fn test_about_names_owner() {
        let reply = AboutHandler::new("slircbot", "case").handle(&ParsedCommand::default());
        assert_eq!(
            reply,
            Reply::text("I am slircbot, a slircbot instance run by case")
        );
    }
}
