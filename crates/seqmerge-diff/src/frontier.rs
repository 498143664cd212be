//! The per-`d` frontier of the edit graph (Myers' `V` array).
//!
//! For a number of edits `d`, `V[k]` is the furthest x-coordinate reached on
//! diagonal `k = x - y` by a path with exactly `d` non-diagonal moves. The
//! diagonal index is signed, so the cells are stored densely with an implicit
//! offset of `max`.

/// Furthest-reaching x-coordinates, indexed by diagonal `k` in `[-max, max]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Frontier {
    cells: Vec<isize>,
    max: isize,
}

impl Frontier {
    /// A zeroed frontier covering diagonals `[-max, max]`.
    pub(crate) fn new(max: usize) -> Self {
        Self {
            cells: vec![0; 2 * max + 1],
            max: max as isize,
        }
    }

    /// The recorded x-coordinate on diagonal `k`.
    ///
    /// Diagonals outside the covered range read as 0, the value of a
    /// diagonal nothing has reached yet.
    pub(crate) fn get(&self, k: isize) -> isize {
        self.slot(k)
            .and_then(|i| self.cells.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Record `x` as the furthest point on diagonal `k`.
    ///
    /// Writes outside the covered range are dropped; the search never
    /// produces one because `|k| <= d <= max`.
    pub(crate) fn set(&mut self, k: isize, x: isize) {
        if let Some(cell) = self.slot(k).and_then(|i| self.cells.get_mut(i)) {
            *cell = x;
        }
    }

    /// A copy trimmed to diagonals `[-d, d]`, the only ones a `d`-path can
    /// end on.
    ///
    /// `d == 0` keeps `[-1, 1]` so the first backtracking step can still read
    /// the seeded `V[1]`.
    pub(crate) fn snapshot(&self, d: usize) -> Self {
        let d = d.max(1) as isize;
        let mut copy = Self::new(d as usize);
        if d <= self.max {
            let from = (self.max - d) as usize;
            let len = copy.cells.len();
            copy.cells.copy_from_slice(&self.cells[from..from + len]);
        }
        copy
    }

    fn slot(&self, k: isize) -> Option<usize> {
        usize::try_from(k + self.max).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_diagonals_are_addressable() {
        let mut v = Frontier::new(3);
        v.set(-3, 7);
        v.set(3, 9);
        assert_eq!(v.get(-3), 7);
        assert_eq!(v.get(3), 9);
        assert_eq!(v.get(0), 0);
    }

    #[test]
    fn out_of_range_reads_zero_and_writes_are_dropped() {
        let mut v = Frontier::new(1);
        v.set(5, 4);
        v.set(-5, 4);
        assert_eq!(v.get(5), 0);
        assert_eq!(v.get(-5), 0);
    }

    #[test]
    fn snapshot_keeps_centre_window() {
        let mut v = Frontier::new(4);
        for k in -4..=4 {
            v.set(k, k * 10);
        }
        let s = v.snapshot(2);
        assert_eq!(s, {
            let mut expected = Frontier::new(2);
            for k in -2..=2 {
                expected.set(k, k * 10);
            }
            expected
        });
        assert_eq!(s.get(3), 0);
    }

    #[test]
    fn snapshot_of_zero_keeps_neighbours() {
        let mut v = Frontier::new(2);
        v.set(1, 0);
        v.set(0, 5);
        let s = v.snapshot(0);
        assert_eq!(s.get(0), 5);
        assert_eq!(s.get(1), 0);
        assert_eq!(s.get(-1), 0);
    }
}
