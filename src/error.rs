use thiserror::Error;

/// Errors raised when raw input cannot be turned into a header value.
///
/// Problems *inside* a header value are never errors; they are reported as
/// [`Issues`](crate::Issues).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// The input is not valid UTF-8.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    NotUtf8 {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
    /// The input exceeds the configured maximum size.
    #[error("input is {len} bytes, exceeding the maximum of {max} bytes")]
    TooLarge {
        /// Actual input length in bytes.
        len: usize,
        /// Configured limit in bytes.
        max: usize,
    },
    /// A response head could not be split into a status line and fields.
    #[error("malformed response head at line {line}: {reason}")]
    MalformedResponse {
        /// 1-based line number of the offending line.
        line: usize,
        /// Human-readable description of the problem.
        reason: &'static str,
    },
}
