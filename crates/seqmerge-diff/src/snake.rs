//! Path reconstruction units.
//!
//! A snake is one edit move (right = delete, down = insert) followed by as
//! many diagonal moves as the sequences allow. Backtracking replays the
//! search decision at each recorded frontier to recover one snake per `d`.

use seqmerge_types::{OperationKind, Sequence};

use crate::frontier::Frontier;

/// A point of the edit graph. `y` is `-1` for the virtual start above the
/// origin that the `d = 0` snake begins from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Point {
    pub(crate) x: isize,
    pub(crate) y: isize,
}

impl Point {
    pub(crate) fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Diagonal `k = x - y`.
    pub(crate) fn diagonal(self) -> isize {
        self.x - self.y
    }

    /// `true` once neither coordinate is past the origin.
    pub(crate) fn at_start(self) -> bool {
        self.x <= 0 && self.y <= 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Snake {
    /// `Insert` or `Delete` for the leading edit; `Equal` for the `d = 0`
    /// snake, which has no edit.
    pub(crate) kind: OperationKind,
    pub(crate) start: Point,
    pub(crate) end: Point,
    /// Number of matching (diagonal) steps after the edit.
    pub(crate) diagonals: usize,
    pub(crate) d: usize,
}

/// Decide whether the `d`-path ending on diagonal `k` arrived by moving down.
///
/// Down is forced on the lowest diagonal, right on the highest; in between
/// the neighbour that reached further wins, ties going right.
pub(crate) fn moves_down(v: &Frontier, k: isize, d: isize) -> bool {
    k == -d || (k != d && v.get(k - 1) < v.get(k + 1))
}

/// Count equal elements from `(x, y)` along the diagonal.
pub(crate) fn follow_diagonal<S: Sequence + ?Sized>(
    original: &S,
    target: &S,
    x: isize,
    y: isize,
) -> usize {
    let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
        return 0;
    };
    (0..)
        .take_while(|step| match (original.get(x + step), target.get(y + step)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        })
        .count()
}

impl Snake {
    /// Rebuild the snake of edit number `d` that ends on diagonal `k`,
    /// using the frontier recorded after searching `d`.
    pub(crate) fn trace<S: Sequence + ?Sized>(
        v: &Frontier,
        k: isize,
        d: usize,
        original: &S,
        target: &S,
    ) -> Self {
        let down = moves_down(v, k, d as isize);

        let x_start = if down { v.get(k + 1) } else { v.get(k - 1) };
        let y_start = x_start - if down { k + 1 } else { k - 1 };
        let x_mid = if down { x_start } else { x_start + 1 };
        let y_mid = x_mid - k;

        let diagonals = follow_diagonal(original, target, x_mid, y_mid);
        let step = diagonals as isize;

        let kind = if y_start < 0 {
            OperationKind::Equal
        } else if down {
            OperationKind::Insert
        } else {
            OperationKind::Delete
        };

        Self {
            kind,
            start: Point::new(x_start, y_start),
            end: Point::new(x_mid + step, y_mid + step),
            diagonals,
            d,
        }
    }
}
