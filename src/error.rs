//! Error types for the Anglicise library.
//!
//! All fallible operations return [`Result`], an alias over [`AngliciseError`].
//! Conversion errors are values, never panics: a single unparseable numeral or
//! unmapped unit is skipped by the caller and the rest of the input still
//! converts.
//!
//! # Examples
//!
//! ```
//! use anglicise::error::{AngliciseError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(AngliciseError::parse("unreadable numeral"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Anglicise operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides convenient constructor methods for the common variants.
#[derive(Error, Debug)]
pub enum AngliciseError {
    /// A numeral inside a matched unit phrase could not be parsed.
    /// The detector drops the match and continues.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A matched unit string has no entry in the conversion tables.
    /// The caller skips the span and keeps converting.
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),

    /// A matched word has no entry in the replacement tables.
    #[error("Unsupported word: {0}")]
    UnsupportedWord(String),

    /// A loaded configuration violates a documented invariant
    /// (e.g. precision outside [0, 10]). The core never silently
    /// repairs an invalid config.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Regex compilation errors from user-supplied exclusion patterns.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// JSON serialization/deserialization errors (config merge).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with AngliciseError.
pub type Result<T> = std::result::Result<T, AngliciseError>;

impl AngliciseError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        AngliciseError::Parse(msg.into())
    }

    /// Create a new unsupported-unit error.
    pub fn unsupported_unit<S: Into<String>>(msg: S) -> Self {
        AngliciseError::UnsupportedUnit(msg.into())
    }

    /// Create a new unsupported-word error.
    pub fn unsupported_word<S: Into<String>>(msg: S) -> Self {
        AngliciseError::UnsupportedWord(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        AngliciseError::InvalidConfig(msg.into())
    }
}
