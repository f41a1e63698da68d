//! Truncator configuration.
//!
//! [`TruncatorOptions`] carries the optional settings with their defaults;
//! [`TruncatorConfig`] adds the maximum length and can be loaded from TOML:
//!
//! ```toml
//! maximum_length = 80
//! ellipsis_mark = "…"
//! ellipsis_position = "middle"
//! safe_urls = true
//! safe_words = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::dissect::DissectorOptions;
use crate::error::TruncateError;
use crate::truncator::Truncator;
use crate::types::EllipsisPosition;

/// Default ellipsis mark.
pub const DEFAULT_ELLIPSIS_MARK: &str = "...";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file '{path}': {source}")]
    IoError {
        /// Path to the configuration file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the configuration file as TOML.
    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        /// Path to the configuration file that could not be parsed.
        path: PathBuf,
        /// The underlying TOML parse error.
        source: toml::de::Error,
    },

    /// Failed to parse in-memory TOML.
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Parsed values are rejected by the truncator.
    #[error("invalid truncator config: {0}")]
    Invalid(#[from] TruncateError),
}

// =============================================================================
// Options
// =============================================================================

/// Optional truncator settings.
///
/// Missing keys take their defaults: mark `"..."`, position `End`, URL and
/// word safety on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TruncatorOptions {
    /// Inserted where content was removed.
    pub ellipsis_mark: String,

    /// Where the mark goes.
    pub ellipsis_position: EllipsisPosition,

    /// Which atomic units are protected from splitting.
    #[serde(flatten)]
    pub dissector: DissectorOptions,
}

impl Default for TruncatorOptions {
    fn default() -> Self {
        Self {
            ellipsis_mark: DEFAULT_ELLIPSIS_MARK.to_string(),
            ellipsis_position: EllipsisPosition::default(),
            dissector: DissectorOptions::default(),
        }
    }
}

impl TruncatorOptions {
    pub fn with_ellipsis_mark(mut self, mark: impl Into<String>) -> Self {
        self.ellipsis_mark = mark.into();
        self
    }

    pub fn with_ellipsis_position(mut self, position: EllipsisPosition) -> Self {
        self.ellipsis_position = position;
        self
    }

    pub fn with_safe_urls(mut self, safe_urls: bool) -> Self {
        self.dissector.safe_urls = safe_urls;
        self
    }

    pub fn with_safe_words(mut self, safe_words: bool) -> Self {
        self.dissector.safe_words = safe_words;
        self
    }
}

// =============================================================================
// Config
// =============================================================================

/// Complete truncator configuration: maximum length plus options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TruncatorConfig {
    /// Maximum result length in characters.
    pub maximum_length: usize,

    #[serde(flatten)]
    pub options: TruncatorOptions,
}

impl TruncatorConfig {
    pub fn new(maximum_length: usize, options: TruncatorOptions) -> Self {
        Self {
            maximum_length,
            options,
        }
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the string is not valid TOML or a
    /// value has the wrong type (negative length, unknown position...).
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IoError`] if the file cannot be read.
    /// Returns [`ConfigError::ParseError`] if the file is not valid TOML.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build a truncator from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the ellipsis mark overflows the
    /// maximum length or the length is not a safe integer.
    pub fn build(self) -> Result<Truncator, ConfigError> {
        Ok(Truncator::with_options(self.maximum_length, self.options)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = TruncatorOptions::default();
        assert_eq!(options.ellipsis_mark, "...");
        assert_eq!(options.ellipsis_position, EllipsisPosition::End);
        assert!(options.dissector.safe_urls);
        assert!(options.dissector.safe_words);
    }

    #[test]
    fn builder_setters() {
        let options = TruncatorOptions::default()
            .with_ellipsis_mark("…")
            .with_ellipsis_position(EllipsisPosition::Start)
            .with_safe_urls(false)
            .with_safe_words(false);
        assert_eq!(options.ellipsis_mark, "…");
        assert_eq!(options.ellipsis_position, EllipsisPosition::Start);
        assert!(!options.dissector.safe_urls);
        assert!(!options.dissector.safe_words);
    }

    #[test]
    fn parse_minimal_toml() {
        let config = TruncatorConfig::from_toml_str("maximum_length = 20").unwrap();
        assert_eq!(config.maximum_length, 20);
        assert_eq!(config.options, TruncatorOptions::default());
    }

    #[test]
    fn parse_full_toml() {
        let toml = r#"
maximum_length = 12
ellipsis_mark = "~"
ellipsis_position = "center"
safe_urls = false
safe_words = true
"#;
        let config = TruncatorConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.maximum_length, 12);
        assert_eq!(config.options.ellipsis_mark, "~");
        assert_eq!(config.options.ellipsis_position, EllipsisPosition::Middle);
        assert!(!config.options.dissector.safe_urls);
        assert!(config.options.dissector.safe_words);
    }

    #[test]
    fn parse_missing_length() {
        let result = TruncatorConfig::from_toml_str(r#"ellipsis_mark = "..""#);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn parse_wrong_types() {
        for toml in [
            "maximum_length = -1",
            "maximum_length = 1.5",
            r#"maximum_length = "10""#,
            "maximum_length = 10\nsafe_urls = \"yes\"",
            "maximum_length = 10\nellipsis_mark = 3",
        ] {
            let result = TruncatorConfig::from_toml_str(toml);
            assert!(matches!(result, Err(ConfigError::Toml(_))), "{toml}");
        }
    }

    #[test]
    fn parse_invalid_position() {
        let toml = "maximum_length = 10\nellipsis_position = \"top\"";
        let err = TruncatorConfig::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("`top` is not a valid ellipsis position"));
    }

    #[test]
    fn build_rejects_overflowing_mark() {
        let config = TruncatorConfig::new(2, TruncatorOptions::default());
        let result = config.build();
        assert!(matches!(
            result,
            Err(ConfigError::Invalid(TruncateError::EllipsisOverflow { .. }))
        ));
    }

    #[test]
    fn build_truncates() {
        let toml = "maximum_length = 8\nellipsis_position = \"start\"\nsafe_words = false";
        let truncator = TruncatorConfig::from_toml_str(toml).unwrap().build().unwrap();
        assert_eq!(truncator.truncate("abcdefghij"), "...fghij");
    }

    #[test]
    fn load_from_path() {
        use std::io::Write;
        let dir = std::env::temp_dir();
        let path = dir.join(format!("string_overflow_config_{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "maximum_length = 16").unwrap();
        writeln!(file, r#"ellipsis_mark = "…""#).unwrap();
        drop(file);

        let config = TruncatorConfig::load_from(&path).unwrap();
        assert_eq!(config.maximum_length, 16);
        assert_eq!(config.options.ellipsis_mark, "…");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_invalid_toml() {
        use std::io::Write;
        let dir = std::env::temp_dir();
        let path = dir.join(format!("string_overflow_invalid_config_{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, r#"maximum_length = ["#).unwrap();
        drop(file);

        let result = TruncatorConfig::load_from(&path);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_from_nonexistent_file() {
        let result = TruncatorConfig::load_from("/nonexistent/path/truncator.toml");
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }
}
