//! Action verbs and the outbound lines the client sends on its own.

use crate::reply::CRLF;

/// Keepalive challenge from the server.
pub const PING: &str = "PING";
/// Keepalive answer.
pub const PONG: &str = "PONG";
/// Message to a channel or user.
pub const PRIVMSG: &str = "PRIVMSG";
/// Notice to a channel or user.
pub const NOTICE: &str = "NOTICE";
/// Someone was removed from a channel.
pub const KICK: &str = "KICK";
/// A session ended.
pub const QUIT: &str = "QUIT";
/// Nickname registration.
pub const NICK: &str = "NICK";
/// User registration.
pub const USER: &str = "USER";
/// Channel join request.
pub const JOIN: &str = "JOIN";

/// `NICK <nick>`
pub fn nick_line(nick: &str) -> String {
    format!("{NICK} {nick}{CRLF}")
}

/// `USER <nick> <nick> <nick> :<real name>`
pub fn user_line(nick: &str, real_name: &str) -> String {
    format!("{USER} {nick} {nick} {nick} :{real_name}{CRLF}")
}

/// `JOIN <#a,#b,...>`
pub fn join_line<S: AsRef<str>>(channels: &[S]) -> String {
    let list: Vec<&str> = channels.iter().map(AsRef::as_ref).collect();
    format!("{JOIN} {}{CRLF}", list.join(","))
}

/// `QUIT`
pub fn quit_line() -> String {
    format!("{QUIT}{CRLF}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_lines() {
        assert_eq!(nick_line("slircbot"), "NICK slircbot\r\n");
        assert_eq!(
            user_line("slircbot", "Straylight Bot"),
            "USER slircbot slircbot slircbot :Straylight Bot\r\n"
        );
    }

    #[test]
    fn test_join_line() {
        assert_eq!(join_line(&["#a", "#b"]), "JOIN #a,#b\r\n");
        assert_eq!(join_line(&["#solo".to_string()]), "JOIN #solo\r\n");
    }

    #[test]
    fn test_quit_line() {
        assert_eq!(quit_line(), "QUIT\r\n");
    }
}
