//! Shortest edit script search.
//!
//! Myers, "An O(ND) Difference Algorithm and Its Variations" (1986). The
//! forward search records one [`Frontier`] snapshot per edit count `d`; the
//! snapshots are then replayed from `(n, m)` back to the origin to recover
//! the snakes of the path, which are finally flattened into operations.

use seqmerge_types::{Operation, OperationKind, Sequence};
use tracing::{debug, trace};

use crate::error::{DiffError, DiffResult};
use crate::frontier::Frontier;
use crate::snake::{follow_diagonal, moves_down, Point, Snake};

/// Computes an edit script turning one sequence into another.
pub trait DiffEngine {
    /// Operations that turn `original` into `target`, in original order with
    /// insertions interleaved at their position.
    ///
    /// `Equal` and `Delete` refer to `original`; `Insert` refers to `target`.
    fn diff<'s, S: Sequence + ?Sized>(
        &self,
        original: &'s S,
        target: &'s S,
    ) -> DiffResult<Vec<Operation<'s, S>>>;
}

/// The quadratic-space Myers engine. Stateless; every call owns its own
/// frontier history.
#[derive(Clone, Copy, Debug, Default)]
pub struct MyersDiff;

impl MyersDiff {
    pub fn new() -> Self {
        Self
    }
}

/// Diff `original` against `target` with [`MyersDiff`].
pub fn diff<'s, S: Sequence + ?Sized>(
    original: &'s S,
    target: &'s S,
) -> DiffResult<Vec<Operation<'s, S>>> {
    MyersDiff.diff(original, target)
}

impl DiffEngine for MyersDiff {
    fn diff<'s, S: Sequence + ?Sized>(
        &self,
        original: &'s S,
        target: &'s S,
    ) -> DiffResult<Vec<Operation<'s, S>>> {
        match (original.is_empty(), target.is_empty()) {
            (true, true) => return Ok(Vec::new()),
            (true, false) => return Ok(uniform(OperationKind::Insert, target)),
            (false, true) => return Ok(uniform(OperationKind::Delete, original)),
            (false, false) => {}
        }

        let history = search(original, target)?;
        let snakes = backtrack(&history, original, target);
        Ok(snakes_to_operations(&snakes, original, target))
    }
}

/// One `kind` operation per element of `source`, in order.
fn uniform<'s, S: Sequence + ?Sized>(kind: OperationKind, source: &'s S) -> Vec<Operation<'s, S>> {
    (0..source.len())
        .map(|i| Operation::new(kind, i, source))
        .collect()
}

/// Run the forward search and return the frontier recorded after each `d`.
///
/// The last snapshot belongs to the `d` whose path reached `(n, m)`.
fn search<S: Sequence + ?Sized>(original: &S, target: &S) -> DiffResult<Vec<Frontier>> {
    let n = original.len() as isize;
    let m = target.len() as isize;
    let max = n + m;

    let mut v = Frontier::new(max as usize);
    v.set(1, 0);
    let mut history = Vec::new();

    for d in 0..=max {
        let mut solved = false;

        for k in (-d..=d).step_by(2) {
            let down = moves_down(&v, k, d);
            let x_start = if down { v.get(k + 1) } else { v.get(k - 1) };
            let x = if down { x_start } else { x_start + 1 };
            let y = x - k;

            let step = follow_diagonal(original, target, x, y) as isize;
            let (x, y) = (x + step, y + step);
            v.set(k, x);

            if x >= n && y >= m {
                solved = true;
                break;
            }
        }

        history.push(v.snapshot(d as usize));
        if solved {
            debug!(d, original_len = n, target_len = m, "shortest edit script found");
            return Ok(history);
        }
    }

    Err(DiffError::NoSolution {
        original_len: original.len(),
        target_len: target.len(),
    })
}

/// Walk from `(n, m)` back to the origin, one snake per recorded `d`.
///
/// Returns the snakes in start-to-end order.
fn backtrack<S: Sequence + ?Sized>(history: &[Frontier], original: &S, target: &S) -> Vec<Snake> {
    let mut point = Point::new(original.len() as isize, target.len() as isize);
    let mut snakes = Vec::with_capacity(history.len());

    for (d, v) in history.iter().enumerate().rev() {
        if point.at_start() {
            break;
        }
        let snake = Snake::trace(v, point.diagonal(), d, original, target);
        trace!(
            d = snake.d,
            kind = %snake.kind,
            start = ?snake.start,
            end = ?snake.end,
            diagonals = snake.diagonals,
            "snake"
        );
        point = snake.start;
        snakes.push(snake);
    }

    snakes.reverse();
    snakes
}

fn coord(value: isize) -> usize {
    usize::try_from(value).unwrap_or(0)
}

/// Flatten snakes into operations: the leading edit (if any), then one
/// `Equal` per diagonal step.
fn snakes_to_operations<'s, S: Sequence + ?Sized>(
    snakes: &[Snake],
    original: &'s S,
    target: &'s S,
) -> Vec<Operation<'s, S>> {
    let mut ops = Vec::new();

    for snake in snakes {
        match snake.kind {
            OperationKind::Delete => {
                ops.push(Operation::new(OperationKind::Delete, coord(snake.start.x), original));
            }
            OperationKind::Insert => {
                ops.push(Operation::new(OperationKind::Insert, coord(snake.start.y), target));
            }
            OperationKind::Equal | OperationKind::Unknown => {}
        }

        // A delete consumed the element at start.x; matches begin after it.
        let first = coord(snake.start.x) + usize::from(snake.kind == OperationKind::Delete);
        ops.extend(
            (0..snake.diagonals).map(|i| Operation::new(OperationKind::Equal, first + i, original)),
        );
    }

    ops
}
