//! # Error Types
//!
//! The chord pipeline itself (tokenizing, transposing, column splitting and
//! rendering) never fails: malformed annotations degrade into plain text.
//! Errors only arise at the edges where a song record or a render config is
//! read from an external source.
//!
//! ## Error Types
//! - `MetadataError` - Invalid YAML frontmatter in a song file
//! - `RecordError` - Invalid JSON song record
//! - `ConfigError` - Invalid YAML render options

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SongError {
    /// Invalid frontmatter.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::SongError;
    /// let err = SongError::MetadataError("tempo: invalid type".to_string());
    /// assert_eq!(err.to_string(), "Invalid metadata: tempo: invalid type");
    /// ```
    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    /// A JSON song record that could not be decoded.
    #[error("Invalid song record: {0}")]
    RecordError(String),

    /// Render options that could not be decoded.
    #[error("Invalid render options: {0}")]
    ConfigError(String),
}
