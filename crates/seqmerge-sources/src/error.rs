use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a sequence.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("file not found: {0:?}")]
    NotFound(PathBuf),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for source results.
pub type SourceResult<T> = Result<T, SourceError>;
