//! Merge engine for seqmerge.
//!
//! Reconciles two edit scripts computed against the same original into one
//! script. Entries are paired by list position; same-kind pairs are settled
//! by a per-kind [`ResolveStrategy`], differing kinds by fixed priority.
//!
//! # Key Types
//!
//! - [`MergeEngine`] -- Positional merge of two operation lists
//! - [`ConflictPolicy`] / [`ResolveStrategy`] / [`ResolveAction`] -- The decision table
//! - [`MergeConfig`] -- TOML-loadable policy configuration

pub mod config;
pub mod engine;
pub mod error;
pub mod strategy;

pub use config::MergeConfig;
pub use engine::{merge, MergeEngine};
pub use error::{MergeError, MergeResult};
pub use strategy::{ConflictPolicy, ResolveAction, ResolveStrategy};
