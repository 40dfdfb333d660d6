//! Line-based codec for tokio.
//!
//! Accumulates raw bytes and yields one `\n`-terminated line at a time,
//! keeping any remainder buffered for the next call. The terminator is not
//! part of the yielded line; a preceding `\r` is left for the parser.

use bytes::{Buf, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, warn};

use crate::error;

/// Maximum accepted line length in bytes, terminator excluded.
pub const MAX_LINE_LEN: usize = 8191;

/// Append `data` to `buffer` and take the first complete line, if any.
///
/// Only the first terminator is consumed. Call [`take_line`] to drain any
/// further lines already queued in `buffer`.
pub fn feed(buffer: &mut BytesMut, data: &[u8]) -> Option<String> {
    buffer.extend_from_slice(data);
    take_line(buffer)
}

/// Split the first complete line off the front of `buffer`.
pub fn take_line(buffer: &mut BytesMut) -> Option<String> {
    let pos = buffer.iter().position(|b| *b == b'\n')?;
    let mut line = buffer.split_to(pos + 1);
    line.truncate(pos);
    Some(String::from_utf8_lossy(&line).into_owned())
}

/// Line-based codec that handles newline-terminated messages.
///
/// Lines longer than the configured limit are dropped up to their next
/// terminator instead of failing the stream. Invalid UTF-8 is decoded
/// lossily.
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length
    max_len: usize,
    /// Skipping the tail of an oversized line
    discarding: bool,
}

impl LineCodec {
    /// Create a codec with the default [`MAX_LINE_LEN`] limit.
    pub fn new() -> Self {
        Self::with_max_len(MAX_LINE_LEN)
    }

    /// Create a new codec with custom max line length.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
            discarding: false,
        }
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = error::ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        loop {
            let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') else {
                if src.len() > self.max_len {
                    if !self.discarding {
                        warn!(limit = self.max_len, "discarding oversized line");
                    }
                    self.discarding = true;
                    src.clear();
                    self.next_index = 0;
                } else {
                    self.next_index = src.len();
                }
                return Ok(None);
            };

            let end = self.next_index + offset;
            self.next_index = 0;

            if self.discarding {
                src.advance(end + 1);
                self.discarding = false;
                continue;
            }

            if end > self.max_len {
                warn!(actual = end, limit = self.max_len, "discarding oversized line");
                src.advance(end + 1);
                continue;
            }

            return Ok(take_line(src));
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        match self.decode(src)? {
            Some(line) => Ok(Some(line)),
            None => {
                if !src.is_empty() {
                    debug!(bytes = src.len(), "dropping unterminated tail at end of stream");
                    src.clear();
                }
                self.next_index = 0;
                self.discarding = false;
                Ok(None)
            }
        }
    }
}

impl Encoder<String> for LineCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, msg: String, dst: &mut BytesMut) -> error::Result<()> {
        dst.extend_from_slice(msg.as_bytes());
        Ok(())
    }
}
