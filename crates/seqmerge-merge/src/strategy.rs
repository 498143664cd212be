use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use seqmerge_types::OperationKind;

// ---------------------------------------------------------------------------
// Strategy types
// ---------------------------------------------------------------------------

/// What to keep when both scripts carry the same kind at the same position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolveAction {
    /// Keep neither operation.
    Ignore,
    /// Keep both, first then second.
    AcceptAll,
    /// Keep only the first script's operation.
    AcceptFirst,
    /// Keep only the second script's operation.
    AcceptSecond,
}

/// An action plus whether both operations get their conflict flag set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolveStrategy {
    pub action: ResolveAction,
    #[serde(default)]
    pub mark_as_conflict: bool,
}

impl ResolveStrategy {
    pub const fn new(action: ResolveAction, mark_as_conflict: bool) -> Self {
        Self {
            action,
            mark_as_conflict,
        }
    }

    /// Keep the first operation silently.
    pub const fn accept_first() -> Self {
        Self::new(ResolveAction::AcceptFirst, false)
    }
}

impl Default for ResolveStrategy {
    fn default() -> Self {
        Self::accept_first()
    }
}

// ---------------------------------------------------------------------------
// ConflictPolicy
// ---------------------------------------------------------------------------

/// Per-kind decision table with a default fallback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConflictPolicy {
    default: ResolveStrategy,
    overrides: BTreeMap<OperationKind, ResolveStrategy>,
}

impl ConflictPolicy {
    /// A policy that applies `default` to every kind.
    pub fn new(default: ResolveStrategy) -> Self {
        Self {
            default,
            overrides: BTreeMap::new(),
        }
    }

    /// Use `strategy` for conflicts between operations of `kind`.
    pub fn with_override(mut self, kind: OperationKind, strategy: ResolveStrategy) -> Self {
        self.overrides.insert(kind, strategy);
        self
    }

    /// Replace or add the strategy for `kind`, returning the previous one.
    pub fn set_override(
        &mut self,
        kind: OperationKind,
        strategy: ResolveStrategy,
    ) -> Option<ResolveStrategy> {
        self.overrides.insert(kind, strategy)
    }

    /// The strategy for `kind`: its override if present, else the default.
    pub fn strategy_for(&self, kind: OperationKind) -> ResolveStrategy {
        self.overrides.get(&kind).copied().unwrap_or(self.default)
    }

    pub fn default_strategy(&self) -> ResolveStrategy {
        self.default
    }

    pub fn overrides(&self) -> &BTreeMap<OperationKind, ResolveStrategy> {
        &self.overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default() {
        let policy = ConflictPolicy::new(ResolveStrategy::new(ResolveAction::Ignore, true));
        assert_eq!(
            policy.strategy_for(OperationKind::Insert),
            ResolveStrategy::new(ResolveAction::Ignore, true)
        );
    }

    #[test]
    fn override_wins_for_its_kind_only() {
        let all = ResolveStrategy::new(ResolveAction::AcceptAll, true);
        let policy = ConflictPolicy::default().with_override(OperationKind::Insert, all);
        assert_eq!(policy.strategy_for(OperationKind::Insert), all);
        assert_eq!(
            policy.strategy_for(OperationKind::Delete),
            ResolveStrategy::accept_first()
        );
    }

    #[test]
    fn set_override_returns_previous() {
        let mut policy = ConflictPolicy::default();
        let second = ResolveStrategy::new(ResolveAction::AcceptSecond, false);
        assert_eq!(policy.set_override(OperationKind::Equal, second), None);
        assert_eq!(
            policy.set_override(OperationKind::Equal, ResolveStrategy::accept_first()),
            Some(second)
        );
        assert_eq!(policy.overrides().len(), 1);
    }
}
