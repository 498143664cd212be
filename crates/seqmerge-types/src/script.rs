//! Helpers over whole edit scripts.

use crate::operation::{Operation, OperationKind};
use crate::sequence::Sequence;

/// Elements produced by running an edit script.
///
/// `Equal` and `Insert` contribute the element they refer to; `Delete` and
/// `Unknown` contribute nothing. Applied to the script returned by a diff of
/// `a` against `b`, this reproduces `b`.
pub fn apply<'s, S: Sequence + ?Sized>(ops: &[Operation<'s, S>]) -> Vec<&'s S::Item> {
    ops.iter()
        .filter(|op| matches!(op.kind(), OperationKind::Equal | OperationKind::Insert))
        .filter_map(|op| op.element())
        .collect()
}

/// Per-kind counts over an edit script.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScriptStats {
    pub equal: usize,
    pub inserted: usize,
    pub deleted: usize,
    pub unknown: usize,
    /// Operations carrying the conflict flag, regardless of kind.
    pub conflicts: usize,
}

impl ScriptStats {
    /// Count the operations of `ops`.
    pub fn of<S: ?Sized>(ops: &[Operation<'_, S>]) -> Self {
        let mut stats = Self::default();
        for op in ops {
            match op.kind() {
                OperationKind::Equal => stats.equal += 1,
                OperationKind::Insert => stats.inserted += 1,
                OperationKind::Delete => stats.deleted += 1,
                OperationKind::Unknown => stats.unknown += 1,
            }
            if op.is_conflict() {
                stats.conflicts += 1;
            }
        }
        stats
    }

    /// Number of insertions plus deletions.
    pub fn edits(&self) -> usize {
        self.inserted + self.deleted
    }
}
