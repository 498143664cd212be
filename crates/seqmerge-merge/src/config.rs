use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use seqmerge_types::OperationKind;

use crate::engine::MergeEngine;
use crate::error::{MergeError, MergeResult};
use crate::strategy::{ConflictPolicy, ResolveAction, ResolveStrategy};

/// File-level configuration of the merge policy.
///
/// ```toml
/// [default]
/// action = "accept-first"
/// mark_as_conflict = false
///
/// [overrides.insert]
/// action = "accept-all"
/// mark_as_conflict = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Strategy for kinds without an override.
    pub default: ResolveStrategy,
    /// Per-kind strategies, keyed by lower-case kind name.
    pub overrides: BTreeMap<OperationKind, ResolveStrategy>,
}

impl Default for MergeConfig {
    /// Keep the first script on every conflict except competing inserts,
    /// which are both kept and flagged.
    fn default() -> Self {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            OperationKind::Insert,
            ResolveStrategy::new(ResolveAction::AcceptAll, true),
        );
        Self {
            default: ResolveStrategy::accept_first(),
            overrides,
        }
    }
}

impl MergeConfig {
    /// Parse a TOML policy document. Missing tables fall back to
    /// [`MergeConfig::default`].
    pub fn from_toml_str(s: &str) -> MergeResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML policy file.
    pub fn load(path: impl AsRef<Path>) -> MergeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MergeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Render as a TOML document.
    pub fn to_toml_string(&self) -> MergeResult<String> {
        toml::to_string(self).map_err(|e| MergeError::Config(e.to_string()))
    }

    pub fn policy(&self) -> ConflictPolicy {
        self.overrides
            .iter()
            .fold(ConflictPolicy::new(self.default), |policy, (kind, strategy)| {
                policy.with_override(*kind, *strategy)
            })
    }

    pub fn into_engine(self) -> MergeEngine {
        MergeEngine::new(self.policy())
    }
}
