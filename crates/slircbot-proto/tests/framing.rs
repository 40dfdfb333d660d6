//! Property tests for the line framer.
//!
//! However the byte stream is fragmented across reads, the framer must
//! yield exactly the lines obtained by splitting the whole input on `\n`.

#![cfg(feature = "tokio")]

use bytes::BytesMut;
use proptest::prelude::*;
use slircbot_proto::line::{feed, take_line};
use slircbot_proto::LineCodec;
use tokio_util::codec::Decoder;

/// Reference framing: every `\n`-terminated segment of the input.
fn reference_lines(input: &[u8]) -> Vec<String> {
    let mut parts: Vec<&[u8]> = input.split(|b| *b == b'\n').collect();
    // The final segment is unterminated and stays buffered.
    parts.pop();
    parts
        .into_iter()
        .map(|p| String::from_utf8_lossy(p).into_owned())
        .collect()
}

/// Split `input` into chunks at the given (sorted, deduplicated) cut points.
fn fragment(input: &[u8], cuts: &[usize]) -> Vec<Vec<u8>> {
    let mut points: Vec<usize> = cuts.iter().map(|c| c % (input.len() + 1)).collect();
    points.sort_unstable();
    points.dedup();

    let mut chunks = Vec::new();
    let mut start = 0;
    for point in points {
        chunks.push(input[start..point].to_vec());
        start = point;
    }
    chunks.push(input[start..].to_vec());
    chunks
}

fn stream_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            4 => Just(b'\n'),
            2 => Just(b'\r'),
            20 => 0x20u8..0x7f,
            1 => any::<u8>(),
        ],
        0..400,
    )
}

proptest! {
    #[test]
    fn feed_is_independent_of_fragmentation(
        input in stream_strategy(),
        cuts in prop::collection::vec(any::<usize>(), 0..20),
    ) {
        let mut buffer = BytesMut::new();
        let mut lines = Vec::new();

        for chunk in fragment(&input, &cuts) {
            if let Some(line) = feed(&mut buffer, &chunk) {
                lines.push(line);
                while let Some(line) = take_line(&mut buffer) {
                    lines.push(line);
                }
            }
        }

        prop_assert_eq!(lines, reference_lines(&input));
    }

    #[test]
    fn codec_is_independent_of_fragmentation(
        input in stream_strategy(),
        cuts in prop::collection::vec(any::<usize>(), 0..20),
    ) {
        let mut codec = LineCodec::new();
        let mut buffer = BytesMut::new();
        let mut lines = Vec::new();

        for chunk in fragment(&input, &cuts) {
            buffer.extend_from_slice(&chunk);
            while let Some(line) = codec.decode(&mut buffer).unwrap() {
                lines.push(line);
            }
        }

        prop_assert_eq!(lines, reference_lines(&input));
    }
}

#[test]
fn test_lines_queued_in_one_read_are_all_drained() {
    let mut codec = LineCodec::new();
    let mut buffer = BytesMut::from(":s PING :a\r\n:s PING :b\r\n\r\npartial");

    let mut lines = Vec::new();
    while let Some(line) = codec.decode(&mut buffer).unwrap() {
        lines.push(line);
    }

    assert_eq!(lines, vec![":s PING :a\r", ":s PING :b\r", "\r"]);
    assert_eq!(&buffer[..], b"partial");
}
