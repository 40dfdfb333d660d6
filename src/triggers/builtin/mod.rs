//! Builtin handler units.

mod echo;
mod help;
mod info;

pub use echo::EchoHandler;
pub use help::HelpHandler;
pub use info::{AboutHandler, TimeHandler, VersionHandler};

use slircbot_proto::ParsedCommand;

use super::Registry;
use crate::config::Config;

/// Register every builtin unit.
pub(super) fn register_all(registry: &mut Registry, config: &Config) {
    let marker = config.trigger_marker;

    registry.register_handler("help", HelpHandler::new(marker, config.triggers.clone()));
    registry.register_handler("echo", EchoHandler::new(marker, "echo"));
    registry.register_handler("time", TimeHandler);
    registry.register_handler("version", VersionHandler);
    registry.register_handler(
        "about",
        AboutHandler::new(&config.identity.nick, &config.identity.owner),
    );
}

/// Text following `<marker><trigger>` in the command argument, trimmed.
pub(crate) fn trigger_text<'a>(cmd: &'a ParsedCommand, marker: char, trigger: &str) -> &'a str {
    cmd.argument
        .strip_prefix(marker)
        .and_then(|rest| rest.strip_prefix(trigger))
        .unwrap_or("")
        .trim()
}
