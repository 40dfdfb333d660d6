//! Channel membership state.
//!
//! The session lives exactly as long as this set is non-empty.

use slircbot_proto::ChannelExt;

/// Channels the session is currently in, in join order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    channels: Vec<String>,
}

impl SessionState {
    /// Initial membership, duplicates (ignoring ASCII case) dropped.
    pub fn new<I, S>(channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self::default();
        for channel in channels {
            let channel = channel.into();
            if !state.contains(&channel) {
                state.channels.push(channel);
            }
        }
        state
    }

    /// Joined channels, in join order.
    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    /// Whether `channel` is joined, ignoring ASCII case.
    pub fn contains(&self, channel: &str) -> bool {
        self.channels.iter().any(|c| c.same_channel(channel))
    }

    /// Forget one channel. Returns whether it was joined.
    pub fn part(&mut self, channel: &str) -> bool {
        let before = self.channels.len();
        self.channels.retain(|c| !c.same_channel(channel));
        self.channels.len() != before
    }

    /// Forget every channel.
    pub fn clear(&mut self) {
        self.channels.clear();
    }

    /// No channel left; the session ends.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Number of joined channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }
}
