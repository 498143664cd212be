use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sequence::Sequence;

/// The kind of an edit-script entry.
///
/// The numeric discriminants double as the fixed priority the merge engine
/// uses when two scripts disagree on the kind at the same position:
/// `Insert` beats `Delete`, which beats `Equal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum OperationKind {
    /// Sentinel for "no operation". Never produced by the diff engine.
    Unknown = -1,
    /// The element is kept from the original.
    Equal = 0,
    /// The element of the original is removed.
    Delete = 1,
    /// An element of the derived sequence is added.
    Insert = 2,
}

impl OperationKind {
    /// Numeric priority used for conflict arbitration.
    pub fn priority(self) -> i8 {
        self as i8
    }

    /// Returns `true` for `Insert` and `Delete`.
    pub fn is_edit(self) -> bool {
        matches!(self, OperationKind::Insert | OperationKind::Delete)
    }

    /// Lower-case name, as used in policy files and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Unknown => "unknown",
            OperationKind::Equal => "equal",
            OperationKind::Delete => "delete",
            OperationKind::Insert => "insert",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry of an edit script.
///
/// `kind`, `index` and `source` are fixed at construction. `index` is a
/// position in `source`: the original for `Equal`/`Delete`, the derived
/// sequence for `Insert`. The conflict flag is the only mutable part and is
/// set by the merge engine.
///
/// Two operations are equal when kind, index and conflict flag match and
/// both refer to the *same* sequence instance (by address, not content).
pub struct Operation<'s, S: ?Sized> {
    kind: OperationKind,
    index: usize,
    source: &'s S,
    conflict: bool,
}

impl<'s, S: ?Sized> Operation<'s, S> {
    /// Create a non-conflicting operation.
    pub fn new(kind: OperationKind, index: usize, source: &'s S) -> Self {
        Self {
            kind,
            index,
            source,
            conflict: false,
        }
    }

    /// Same operation with the conflict flag set to `conflict`.
    pub fn with_conflict(mut self, conflict: bool) -> Self {
        self.conflict = conflict;
        self
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The sequence `index` refers to.
    pub fn source(&self) -> &'s S {
        self.source
    }

    pub fn is_conflict(&self) -> bool {
        self.conflict
    }

    pub fn set_conflict(&mut self, conflict: bool) {
        self.conflict = conflict;
    }

    /// Returns `true` if this operation refers to exactly `sequence`.
    pub fn refers_to(&self, sequence: &S) -> bool {
        std::ptr::eq(self.source, sequence)
    }
}

impl<'s, S: Sequence + ?Sized> Operation<'s, S> {
    /// The element this operation refers to.
    pub fn element(&self) -> Option<&'s S::Item> {
        self.source.get(self.index)
    }
}

impl<S: ?Sized> Clone for Operation<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Operation<'_, S> {}

impl<S: ?Sized> PartialEq for Operation<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.index == other.index
            && self.conflict == other.conflict
            && std::ptr::eq(self.source, other.source)
    }
}

impl<S: ?Sized> Eq for Operation<'_, S> {}

impl<S: ?Sized> fmt::Debug for Operation<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("kind", &self.kind)
            .field("index", &self.index)
            .field("source", &(self.source as *const S))
            .field("conflict", &self.conflict)
            .finish()
    }
}

impl<S: ?Sized> fmt::Display for Operation<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conflict {
            f.write_str("! ")?;
        }
        write!(f, "{} @{}", self.kind, self.index)
    }
}
