//! What the session does with one parsed command.
//!
//! Four actions are recognised; everything else is ignored:
//!
//! | action    | condition                               | effect                     |
//! |-----------|-----------------------------------------|----------------------------|
//! | `PING`    | always                                  | answer `PONG :<payload>`   |
//! | `PRIVMSG` | argument starts with the trigger marker | dispatch to the trigger    |
//! | `KICK`    | kicked nick is our own                  | forget the channel         |
//! | `QUIT`    | reason contains `Ping timeout: `        | forget every channel       |

use slircbot_proto::command::{KICK, PING, PONG, PRIVMSG, QUIT};
use slircbot_proto::{ParsedCommand, Reply};
use tracing::info;

use super::state::SessionState;
use crate::triggers::Dispatcher;

/// Disconnect reason meaning the server dropped us.
pub const PING_TIMEOUT_REASON: &str = "Ping timeout: ";

/// React to one command, returning the reply to send, if any.
pub fn react(
    cmd: &ParsedCommand,
    nick: &str,
    state: &mut SessionState,
    dispatcher: &Dispatcher,
) -> Option<Reply> {
    match cmd.action.as_str() {
        PING => Some(Reply::tokens([PONG.to_string(), format!(":{}", cmd.argument)])),
        PRIVMSG if dispatcher.is_triggered(&cmd.argument) => dispatcher.dispatch(cmd),
        KICK => {
            if let (Some(channel), Some(kicked)) = (cmd.optional_argument(0), cmd.optional_argument(1))
                && kicked.eq_ignore_ascii_case(nick)
                && state.part(channel)
            {
                info!(channel = %channel, by = ?cmd.sender_nick(), reason = %cmd.argument, "kicked from channel");
            }
            None
        }
        QUIT if cmd.argument.contains(PING_TIMEOUT_REASON) => {
            info!(reason = %cmd.argument, "server reported ping timeout");
            state.clear();
            None
        }
        _ => None,
    }
}
