//! String truncation with an ellipsis mark.
//!
//! Truncates a string to a maximum length in characters, inserting an
//! ellipsis mark at the start, middle or end. Never cuts through an escape
//! sequence, emoji, URL or word: the string is dissected into atomic
//! segments and only whole segments are kept.

use std::borrow::Cow;

use crate::config::TruncatorOptions;
use crate::dissect::StringDissector;
use crate::error::{Result, check_length};
use crate::types::{EllipsisPosition, Segment};

// =============================================================================
// Budget
// =============================================================================

/// Characters that may be kept on each side of the ellipsis mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Budget {
    pub left: usize,
    pub right: usize,
}

impl Budget {
    /// Split `total` kept characters according to `position`.
    ///
    /// `Middle` gives both sides `total / 2`; on an odd total the remaining
    /// character is given to neither side.
    pub const fn split(position: EllipsisPosition, total: usize) -> Self {
        match position {
            EllipsisPosition::Start => Self { left: 0, right: total },
            EllipsisPosition::Middle => {
                let half = total / 2;
                Self { left: half, right: half }
            }
            EllipsisPosition::End => Self { left: total, right: 0 },
        }
    }
}

/// Count how many leading lengths fit in `budget`, stopping at the first that
/// does not. Returns the count and the length used.
fn fill(lengths: impl Iterator<Item = usize>, budget: usize) -> (usize, usize) {
    let mut count = 0;
    let mut used = 0;

    for len in lengths {
        if used + len > budget {
            break;
        }
        used += len;
        count += 1;
    }

    (count, used)
}

// =============================================================================
// Truncator
// =============================================================================

/// String truncator, safe with escape sequences, emoji, URLs and words.
///
/// Configuration is validated once at construction and never changes, so a
/// `Truncator` can be shared across threads and called concurrently.
///
/// ```
/// use string_overflow::{EllipsisPosition, Truncator, TruncatorOptions};
///
/// let truncator = Truncator::with_options(
///     7,
///     TruncatorOptions::default()
///         .with_ellipsis_position(EllipsisPosition::Middle)
///         .with_safe_words(false),
/// )?;
/// assert_eq!(truncator.truncate("abcdefghij"), "ab...ij");
/// # Ok::<(), string_overflow::TruncateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncator {
    maximum_length: usize,
    result_length_maximum: usize,
    ellipsis_mark: String,
    ellipsis_length: usize,
    ellipsis_position: EllipsisPosition,
    dissector: StringDissector,
}

impl Truncator {
    /// Create a truncator with default options.
    ///
    /// # Errors
    ///
    /// Fails if `maximum_length` is shorter than the default `"..."` mark or
    /// is not a safe integer.
    pub fn new(maximum_length: usize) -> Result<Self> {
        Self::with_options(maximum_length, TruncatorOptions::default())
    }

    /// Create a truncator.
    ///
    /// # Errors
    ///
    /// Returns [`TruncateError::EllipsisOverflow`] if the ellipsis mark is
    /// longer than `maximum_length`, and [`TruncateError::UnsafeLength`] if
    /// `maximum_length` exceeds [`MAX_SAFE_LENGTH`].
    ///
    /// [`TruncateError::EllipsisOverflow`]: crate::TruncateError::EllipsisOverflow
    /// [`TruncateError::UnsafeLength`]: crate::TruncateError::UnsafeLength
    /// [`MAX_SAFE_LENGTH`]: crate::MAX_SAFE_LENGTH
    pub fn with_options(maximum_length: usize, options: TruncatorOptions) -> Result<Self> {
        let ellipsis_length = options.ellipsis_mark.chars().count();
        let result_length_maximum = check_length(maximum_length, ellipsis_length)?;
        let dissector = StringDissector::new(options.dissector);

        tracing::debug!(
            maximum_length,
            ellipsis_length,
            ellipsis_position = %options.ellipsis_position,
            safe_urls = dissector.safe_urls(),
            safe_words = dissector.safe_words(),
            "truncator: configured"
        );

        Ok(Self {
            maximum_length,
            result_length_maximum,
            ellipsis_mark: options.ellipsis_mark,
            ellipsis_length,
            ellipsis_position: options.ellipsis_position,
            dissector,
        })
    }

    /// Truncate `item` to the configured maximum length.
    ///
    /// Returns `item` borrowed when it already fits.
    pub fn truncate<'a>(&self, item: &'a str) -> Cow<'a, str> {
        self.truncate_within(item, self.maximum_length, self.result_length_maximum)
    }

    /// Truncate `item` to `maximum_length` for this call only.
    ///
    /// # Errors
    ///
    /// Fails like [`Truncator::with_options`] when the override cannot hold
    /// the ellipsis mark.
    pub fn truncate_to<'a>(&self, item: &'a str, maximum_length: usize) -> Result<Cow<'a, str>> {
        let result_length_maximum = check_length(maximum_length, self.ellipsis_length)?;
        Ok(self.truncate_within(item, maximum_length, result_length_maximum))
    }

    /// Truncate once with a transient truncator.
    ///
    /// # Errors
    ///
    /// Fails like [`Truncator::with_options`].
    pub fn truncate_once<'a>(
        item: &'a str,
        maximum_length: usize,
        options: TruncatorOptions,
    ) -> Result<Cow<'a, str>> {
        Ok(Self::with_options(maximum_length, options)?.truncate(item))
    }

    pub fn maximum_length(&self) -> usize {
        self.maximum_length
    }

    /// Characters available for kept content (maximum length minus mark).
    pub fn result_length_maximum(&self) -> usize {
        self.result_length_maximum
    }

    pub fn ellipsis_mark(&self) -> &str {
        &self.ellipsis_mark
    }

    pub fn ellipsis_position(&self) -> EllipsisPosition {
        self.ellipsis_position
    }

    pub fn safe_urls(&self) -> bool {
        self.dissector.safe_urls()
    }

    pub fn safe_words(&self) -> bool {
        self.dissector.safe_words()
    }

    fn truncate_within<'a>(
        &self,
        item: &'a str,
        maximum_length: usize,
        result_length_maximum: usize,
    ) -> Cow<'a, str> {
        // Byte length bounds char count, so this skips counting for most inputs.
        if item.len() <= maximum_length || item.chars().count() <= maximum_length {
            tracing::trace!(maximum_length, "truncator: item fits");
            return Cow::Borrowed(item);
        }

        let budget = Budget::split(self.ellipsis_position, result_length_maximum);
        let segments = self.dissector.dissect(item);
        let lengths: Vec<usize> = segments.iter().map(Segment::len).collect();

        let (left_count, left_used) = fill(lengths.iter().copied(), budget.left);
        let (right_count, right_used) = fill(lengths.iter().rev().copied(), budget.right);
        // Kept lengths sum below the item length, so the groups never overlap.
        debug_assert!(left_count + right_count <= segments.len());

        tracing::trace!(
            segments = segments.len(),
            left_budget = budget.left,
            right_budget = budget.right,
            left_used,
            right_used,
            "truncator: truncating"
        );

        let left = &segments[..left_count];
        let right = &segments[segments.len() - right_count..];

        let capacity = left.iter().chain(right).map(|s| s.value.len()).sum::<usize>()
            + self.ellipsis_mark.len();
        let mut result = String::with_capacity(capacity);
        for segment in left {
            result.push_str(segment.value);
        }
        result.push_str(&self.ellipsis_mark);
        for segment in right {
            result.push_str(segment.value);
        }

        Cow::Owned(result)
    }
}

/// Truncate `item` to `maximum_length` characters.
///
/// One-shot form of [`Truncator`]: builds a transient truncator and applies
/// it once.
///
/// # Errors
///
/// Fails like [`Truncator::with_options`].
pub fn truncate(
    item: &str,
    maximum_length: usize,
    options: TruncatorOptions,
) -> Result<Cow<'_, str>> {
    Truncator::truncate_once(item, maximum_length, options)
}
