//! Foundation types for seqmerge.
//!
//! This crate provides the vocabulary shared by the diff and merge engines.
//! Every other seqmerge crate depends on `seqmerge-types`.
//!
//! # Key Types
//!
//! - [`Sequence`] — Read-only, randomly indexable run of comparable elements
//! - [`Operation`] — One entry of an edit script, referring back to its sequence
//! - [`OperationKind`] — Equal / Delete / Insert (plus the `Unknown` sentinel)
//! - [`ScriptStats`] — Per-kind counts over an edit script

pub mod operation;
pub mod script;
pub mod sequence;

pub use operation::{Operation, OperationKind};
pub use script::{apply, ScriptStats};
pub use sequence::Sequence;
