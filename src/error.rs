//! Error types for truncator construction and per-call overrides.

/// Largest accepted maximum length: 2^53 - 1, the IEEE-754 safe integer limit.
pub const MAX_SAFE_LENGTH: u64 = (1 << 53) - 1;

/// Errors raised while validating truncator configuration.
///
/// Every variant is a caller mistake; a failing call produces no output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TruncateError {
    /// The maximum length is outside the safe integer range.
    #[error("maximum length {maximum_length} is not a safe integer (limit {limit})", limit = MAX_SAFE_LENGTH)]
    UnsafeLength { maximum_length: usize },

    /// The ellipsis position string matched none of the accepted spellings.
    #[error("`{0}` is not a valid ellipsis position")]
    InvalidEllipsisPosition(String),

    /// The ellipsis mark alone is longer than the maximum length.
    #[error("ellipsis mark also overflows: mark length {ellipsis_length} exceeds maximum length {maximum_length}")]
    EllipsisOverflow {
        ellipsis_length: usize,
        maximum_length: usize,
    },
}

/// Result type alias for truncation operations.
pub type Result<T, E = TruncateError> = std::result::Result<T, E>;

/// Validate a maximum length against the ellipsis mark length.
///
/// Returns the number of characters left for kept content once the mark is
/// placed.
pub(crate) fn check_length(maximum_length: usize, ellipsis_length: usize) -> Result<usize> {
    if maximum_length as u64 > MAX_SAFE_LENGTH {
        return Err(TruncateError::UnsafeLength { maximum_length });
    }
    if ellipsis_length > maximum_length {
        return Err(TruncateError::EllipsisOverflow {
            ellipsis_length,
            maximum_length,
        });
    }
    Ok(maximum_length - ellipsis_length)
}
