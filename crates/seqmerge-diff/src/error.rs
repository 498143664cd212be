//! Error types for the diff crate.

/// Errors that can occur during diff operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// The search exhausted `original_len + target_len` edits without
    /// reaching the end of both sequences. Only possible when element
    /// comparison is not reflexive or not deterministic.
    #[error("no edit script found between sequences of length {original_len} and {target_len}")]
    NoSolution {
        original_len: usize,
        target_len: usize,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
