//! Error types for the merge crate.

use std::path::PathBuf;

/// Errors raised while loading merge configuration. The merge itself is
/// total and never fails.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The policy document could not be parsed.
    #[error("invalid merge configuration: {0}")]
    Config(String),

    /// The policy file could not be read.
    #[error("failed to read merge configuration {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<toml::de::Error> for MergeError {
    fn from(e: toml::de::Error) -> Self {
        MergeError::Config(e.to_string())
    }
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
