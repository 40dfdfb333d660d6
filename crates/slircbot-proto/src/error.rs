//! Error types for the slircbot protocol library.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Errors raised by the line codec.
///
/// Content problems (oversized lines, invalid UTF-8) are absorbed by the
/// codec itself; only the underlying stream can fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while turning a handler reply into wire text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// The reply glued three or more protocol lines together.
    ///
    /// Only a single internal line break can be routed; anything beyond
    /// that would leave later lines unaddressed.
    #[error("reply spans {lines} lines, at most 2 can be routed")]
    TooManyLines {
        /// Number of lines the reply body contained.
        lines: usize,
    },

    /// Neither a channel nor a sender could be found to address the reply.
    #[error("no reply target in originating command")]
    NoTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err: ProtocolError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe").into();
        assert_eq!(err.to_string(), "io error: broken pipe");
    }

    #[test]
    fn test_compose_error_display() {
        let err = ComposeError::TooManyLines { lines: 3 };
        assert_eq!(err.to_string(), "reply spans 3 lines, at most 2 can be routed");
    }
}
