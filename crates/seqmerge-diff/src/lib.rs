//! Diff engine for seqmerge.
//!
//! Computes the shortest edit script between two [`Sequence`]s with the
//! forward, quadratic-space variant of Myers' O(ND) algorithm: every
//! intermediate frontier is kept so the path can be replayed backwards.
//!
//! # Key Types
//!
//! - [`MyersDiff`] / [`DiffEngine`] -- The engine and the seam it implements
//! - [`diff`] -- Convenience entry point using [`MyersDiff`]
//! - [`DiffError`] -- The fatal no-solution condition
//!
//! [`Sequence`]: seqmerge_types::Sequence

pub mod engine;
pub mod error;
mod frontier;
mod snake;

pub use engine::{diff, DiffEngine, MyersDiff};
pub use error::{DiffError, DiffResult};
