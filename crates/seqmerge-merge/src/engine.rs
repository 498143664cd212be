//! Positional merge of two edit scripts.
//!
//! The two scripts are walked in lock-step by list index, not by the
//! position their operations refer to in the shared original. Scripts of
//! different lengths can therefore pair unrelated operations; callers that
//! need true three-way alignment must diff against a common base themselves.

use seqmerge_types::Operation;
use tracing::{debug, trace};

use crate::strategy::{ConflictPolicy, ResolveAction};

/// Merges two operation lists under a [`ConflictPolicy`].
#[derive(Clone, Debug, Default)]
pub struct MergeEngine {
    policy: ConflictPolicy,
}

impl MergeEngine {
    pub fn new(policy: ConflictPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ConflictPolicy {
        &self.policy
    }

    /// Merge `first` and `second` into one script.
    ///
    /// For every index up to the longer list's length:
    ///
    /// - an entry present in only one list is taken as is;
    /// - entries of different kinds keep the higher-priority one
    ///   (`Insert` > `Delete` > `Equal`);
    /// - entries of the same kind are a conflict: the kind's strategy sets
    ///   the conflict flag of *both* inputs in place, then its action picks
    ///   which of them to keep.
    ///
    /// If either list is empty the other is returned unchanged.
    pub fn merge<'s, S: ?Sized>(
        &self,
        first: &mut [Operation<'s, S>],
        second: &mut [Operation<'s, S>],
    ) -> Vec<Operation<'s, S>> {
        if first.is_empty() || second.is_empty() {
            debug!(
                first = first.len(),
                second = second.len(),
                "one script is empty, taking the other"
            );
            return if first.is_empty() {
                second.to_vec()
            } else {
                first.to_vec()
            };
        }

        let len = first.len().max(second.len());
        let mut merged = Vec::with_capacity(len);
        let mut conflicts = 0usize;

        for i in 0..len {
            match (first.get_mut(i), second.get_mut(i)) {
                (Some(a), None) => merged.push(*a),
                (None, Some(b)) => merged.push(*b),
                (None, None) => {}
                (Some(a), Some(b)) if a.kind() != b.kind() => {
                    let winner = if a.kind().priority() > b.kind().priority() {
                        *a
                    } else {
                        *b
                    };
                    merged.push(winner);
                }
                (Some(a), Some(b)) => {
                    let strategy = self.policy.strategy_for(a.kind());
                    a.set_conflict(strategy.mark_as_conflict);
                    b.set_conflict(strategy.mark_as_conflict);
                    if strategy.mark_as_conflict {
                        conflicts += 1;
                    }
                    trace!(index = i, kind = %a.kind(), action = ?strategy.action, "same-kind pair");

                    match strategy.action {
                        ResolveAction::AcceptAll => {
                            merged.push(*a);
                            merged.push(*b);
                        }
                        ResolveAction::AcceptFirst => merged.push(*a),
                        ResolveAction::AcceptSecond => merged.push(*b),
                        ResolveAction::Ignore => {}
                    }
                }
            }
        }

        debug!(
            first = first.len(),
            second = second.len(),
            merged = merged.len(),
            conflicts,
            "scripts merged"
        );
        merged
    }
}

/// Merge two scripts under `policy`. See [`MergeEngine::merge`].
pub fn merge<'s, S: ?Sized>(
    first: &mut [Operation<'s, S>],
    second: &mut [Operation<'s, S>],
    policy: &ConflictPolicy,
) -> Vec<Operation<'s, S>> {
    MergeEngine::new(policy.clone()).merge(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::ResolveStrategy;
    use seqmerge_diff::diff;
    use seqmerge_sources::StringSource;
    use seqmerge_types::{apply, OperationKind};

    fn strategy(action: ResolveAction, mark: bool) -> ResolveStrategy {
        ResolveStrategy::new(action, mark)
    }

    fn same_kind_pair<'s>(
        kind: OperationKind,
        a: &'s Vec<u8>,
        b: &'s Vec<u8>,
    ) -> (Vec<Operation<'s, Vec<u8>>>, Vec<Operation<'s, Vec<u8>>>) {
        (
            (0..a.len()).map(|i| Operation::new(kind, i, a)).collect(),
            (0..b.len()).map(|i| Operation::new(kind, i, b)).collect(),
        )
    }

    #[test]
    fn two_targets_merge_in_order() {
        let source = StringSource::new("ABCABBA");
        let target1 = StringSource::new("CBABAC");
        let target2 = StringSource::new("ABCABBAD");

        let mut ops1 = diff(&source, &target1).unwrap();
        let mut ops2 = diff(&source, &target2).unwrap();

        let policy = ConflictPolicy::new(strategy(ResolveAction::AcceptFirst, false))
            .with_override(OperationKind::Insert, strategy(ResolveAction::AcceptAll, true));
        let merged = MergeEngine::new(policy).merge(&mut ops1, &mut ops2);

        let expected = vec![
            Operation::new(OperationKind::Delete, 0, &source),
            Operation::new(OperationKind::Delete, 1, &source),
            Operation::new(OperationKind::Equal, 2, &source),
            Operation::new(OperationKind::Insert, 1, &target1),
            Operation::new(OperationKind::Equal, 3, &source),
            Operation::new(OperationKind::Equal, 4, &source),
            Operation::new(OperationKind::Delete, 5, &source),
            Operation::new(OperationKind::Insert, 7, &target2),
            Operation::new(OperationKind::Insert, 5, &target1),
        ];
        assert_eq!(merged, expected);

        let text: String = apply(&merged).into_iter().collect();
        assert_eq!(text, "CBABDC");
    }

    #[test]
    fn same_position_inserts_conflict() {
        let source = StringSource::new("ABC");
        let target1 = StringSource::new("ABD");
        let target2 = StringSource::new("ABR");

        let mut ops1 = diff(&source, &target1).unwrap();
        let mut ops2 = diff(&source, &target2).unwrap();

        let policy = ConflictPolicy::new(strategy(ResolveAction::AcceptFirst, true))
            .with_override(OperationKind::Equal, strategy(ResolveAction::AcceptFirst, false))
            .with_override(OperationKind::Delete, strategy(ResolveAction::AcceptFirst, false));
        let merged = MergeEngine::new(policy).merge(&mut ops1, &mut ops2);

        assert_eq!(
            merged,
            vec![
                Operation::new(OperationKind::Equal, 0, &source),
                Operation::new(OperationKind::Equal, 1, &source),
                Operation::new(OperationKind::Delete, 2, &source),
                Operation::new(OperationKind::Insert, 2, &target1).with_conflict(true),
            ]
        );
        // The discarded side is marked too.
        assert!(ops2[3].is_conflict());
        assert!(!ops2[0].is_conflict());
    }

    #[test]
    fn empty_side_returns_other_unchanged() {
        let a = b"xyz".to_vec();
        let mut ops: Vec<_> = (0..3).map(|i| Operation::new(OperationKind::Equal, i, &a)).collect();
        let mut none: Vec<Operation<'_, Vec<u8>>> = Vec::new();
        let engine = MergeEngine::default();

        assert_eq!(engine.merge(&mut ops, &mut none), ops);
        assert_eq!(engine.merge(&mut none, &mut ops), ops);
        assert!(engine.merge(&mut none.clone(), &mut none).is_empty());
    }

    #[test]
    fn marking_touches_both_inputs() {
        let a = b"abcd".to_vec();
        let b = b"wxyz".to_vec();
        let (mut first, mut second) = same_kind_pair(OperationKind::Delete, &a, &b);
        let policy = ConflictPolicy::default()
            .with_override(OperationKind::Delete, strategy(ResolveAction::AcceptFirst, true));

        let merged = merge(&mut first, &mut second, &policy);

        assert!(first.iter().all(|op| op.is_conflict()));
        assert!(second.iter().all(|op| op.is_conflict()));
        assert_eq!(merged, first);
    }

    #[test]
    fn accept_second_keeps_second() {
        let a = b"ab".to_vec();
        let b = b"cd".to_vec();
        let (mut first, mut second) = same_kind_pair(OperationKind::Insert, &a, &b);
        let policy = ConflictPolicy::new(strategy(ResolveAction::AcceptSecond, false));

        let merged = merge(&mut first, &mut second, &policy);
        assert_eq!(merged, second);
        assert!(merged.iter().all(|op| !op.is_conflict()));
    }

    #[test]
    fn accept_all_keeps_first_then_second() {
        let a = b"ab".to_vec();
        let b = b"cd".to_vec();
        let (mut first, mut second) = same_kind_pair(OperationKind::Insert, &a, &b);
        let policy = ConflictPolicy::new(strategy(ResolveAction::AcceptAll, true));

        let merged = merge(&mut first, &mut second, &policy);
        assert_eq!(
            merged,
            vec![first[0], second[0], first[1], second[1]]
        );
        assert!(merged.iter().all(|op| op.is_conflict()));
    }

    #[test]
    fn ignore_drops_both() {
        let a = b"ab".to_vec();
        let b = b"cd".to_vec();
        let (mut first, mut second) = same_kind_pair(OperationKind::Equal, &a, &b);
        let policy = ConflictPolicy::new(strategy(ResolveAction::Ignore, true));

        assert!(merge(&mut first, &mut second, &policy).is_empty());
        assert!(first[0].is_conflict() && second[1].is_conflict());
    }

    #[test]
    fn differing_kinds_use_fixed_priority() {
        let a = b"aaa".to_vec();
        let b = b"bbb".to_vec();
        let mut first = vec![
            Operation::new(OperationKind::Equal, 0, &a),
            Operation::new(OperationKind::Insert, 1, &a),
            Operation::new(OperationKind::Delete, 2, &a),
        ];
        let mut second = vec![
            Operation::new(OperationKind::Delete, 0, &b),
            Operation::new(OperationKind::Equal, 1, &b),
            Operation::new(OperationKind::Insert, 2, &b),
        ];
        // Even an Ignore policy cannot touch differing-kind pairs.
        let policy = ConflictPolicy::new(strategy(ResolveAction::Ignore, true));

        let merged = merge(&mut first, &mut second, &policy);
        assert_eq!(merged, vec![second[0], first[1], second[2]]);
        assert!(merged.iter().all(|op| !op.is_conflict()));
    }

    #[test]
    fn longer_tail_is_copied() {
        let a = b"a".to_vec();
        let b = b"bbb".to_vec();
        let mut first = vec![Operation::new(OperationKind::Equal, 0, &a)];
        let mut second: Vec<_> = (0..3).map(|i| Operation::new(OperationKind::Insert, i, &b)).collect();

        let merged = MergeEngine::default().merge(&mut first, &mut second);
        assert_eq!(merged, second);
    }
}
