//! Channel names.
//!
//! The bot only needs two things from a channel name: telling it apart
//! from a nickname when choosing where to reply, and comparing it with
//! the server's spelling when it is kicked.

/// Characters a channel name may start with (RFC 2812 Section 1.3).
pub const CHANNEL_PREFIXES: [char; 4] = ['#', '&', '+', '!'];

/// Longest channel name accepted, prefix included.
pub const MAX_CHANNEL_LEN: usize = 50;

/// Channel-name checks on string types.
pub trait ChannelExt {
    /// Whether this is a well-formed channel name: a known prefix, at most
    /// [`MAX_CHANNEL_LEN`] characters, no space, comma or control character.
    fn is_channel_name(&self) -> bool;

    /// Whether this names the same channel as `other`, ignoring ASCII case.
    fn same_channel(&self, other: &str) -> bool;
}

impl ChannelExt for str {
    fn is_channel_name(&self) -> bool {
        let Some(rest) = self.strip_prefix(CHANNEL_PREFIXES) else {
            return false;
        };
        self.chars().count() <= MAX_CHANNEL_LEN
            && !rest.chars().any(|c| c == ' ' || c == ',' || c.is_control())
    }

    fn same_channel(&self, other: &str) -> bool {
        self.eq_ignore_ascii_case(other)
    }
}

impl ChannelExt for String {
    fn is_channel_name(&self) -> bool {
        self.as_str().is_channel_name()
    }

    fn same_channel(&self, other: &str) -> bool {
        self.as_str().same_channel(other)
    }
}
