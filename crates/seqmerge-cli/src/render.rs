//! Rendering of a merged edit script.

use std::fmt::Display;

use serde::Serialize;
use seqmerge_types::{Operation, OperationKind, ScriptStats, Sequence};

/// Placed before every element that came from a conflict-marked operation.
pub const CONFLICT_MARKER: &str = "[conflict]>";

/// Which input sequence an operation refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Input {
    Source,
    First,
    Second,
    Other,
}

/// The three sequences a merge was computed from.
pub struct Inputs<'s, S: ?Sized> {
    pub source: &'s S,
    pub first: &'s S,
    pub second: &'s S,
}

impl<S: ?Sized> Inputs<'_, S> {
    pub fn origin(&self, op: &Operation<'_, S>) -> Input {
        if op.refers_to(self.source) {
            Input::Source
        } else if op.refers_to(self.first) {
            Input::First
        } else if op.refers_to(self.second) {
            Input::Second
        } else {
            Input::Other
        }
    }
}

/// Concatenate the elements the script keeps, prefixing conflict-marked
/// ones with `marker`.
pub fn render_text<S>(ops: &[Operation<'_, S>], marker: &str) -> String
where
    S: Sequence + ?Sized,
    S::Item: Display,
{
    let mut out = String::new();
    for op in ops {
        if !matches!(op.kind(), OperationKind::Equal | OperationKind::Insert) {
            continue;
        }
        if op.is_conflict() {
            out.push_str(marker);
        }
        if let Some(element) = op.element() {
            out.push_str(&element.to_string());
        }
    }
    out
}

#[derive(Debug, Serialize)]
pub struct OperationRecord {
    pub kind: OperationKind,
    pub index: usize,
    pub input: Input,
    pub conflict: bool,
    pub element: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MergeReport {
    pub operations: Vec<OperationRecord>,
    pub equal: usize,
    pub inserted: usize,
    pub deleted: usize,
    pub conflicts: usize,
    pub result: String,
}

impl MergeReport {
    pub fn build<S>(ops: &[Operation<'_, S>], inputs: &Inputs<'_, S>) -> Self
    where
        S: Sequence + ?Sized,
        S::Item: Display,
    {
        let operations = ops
            .iter()
            .map(|op| OperationRecord {
                kind: op.kind(),
                index: op.index(),
                input: inputs.origin(op),
                conflict: op.is_conflict(),
                element: op
                    .element()
                    .map(|e| e.to_string().trim_end_matches('\n').to_string()),
            })
            .collect();
        let stats = ScriptStats::of(ops);

        Self {
            operations,
            equal: stats.equal,
            inserted: stats.inserted,
            deleted: stats.deleted,
            conflicts: stats.conflicts,
            result: render_text(ops, CONFLICT_MARKER),
        }
    }
}
