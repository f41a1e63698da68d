//! # string-overflow
//!
//! Truncate strings to a maximum length without breaking atomic units.
//!
//! The input is dissected into segments that must never be cut: ANSI escape
//! sequences, emoji (including ZWJ sequences, flags and keycaps), URLs and
//! words. Truncation then keeps whole segments only, on one or both sides of
//! an ellipsis mark, so the result never exceeds the maximum length.
//!
//! ```text
//! item ──▶ Truncator::truncate ──fits?──▶ item (borrowed)
//!                 │
//!                 ▼ overflow
//!          StringDissector::dissect ──▶ [segments] ──▶ budget fill ──▶ left + mark + right
//! ```
//!
//! Lengths are counted in characters (Unicode scalar values), not bytes and
//! not terminal cells. On astral-plane text such as most emoji, results differ
//! from implementations that count UTF-16 code units.
//!
//! ## Modules
//!
//! - [`types`] - Segment, SegmentKind, EllipsisPosition
//! - [`dissect`] - Ordered matcher chain splitting strings into segments
//! - [`truncator`] - Budget split and greedy segment fill
//! - [`config`] - Options, defaults and TOML loading
//! - [`error`] - Validation errors

pub mod config;
pub mod dissect;
pub mod error;
pub mod truncator;
pub mod types;

pub use config::{ConfigError, DEFAULT_ELLIPSIS_MARK, TruncatorConfig, TruncatorOptions};
pub use dissect::{DissectorOptions, MatcherSet, StringDissector, dissect};
pub use error::{MAX_SAFE_LENGTH, Result, TruncateError};
pub use truncator::{Budget, Truncator, truncate};
pub use types::{EllipsisPosition, Segment, SegmentKind};
