/// A read-only, randomly indexable run of comparable elements.
///
/// This is the only thing the diff engine needs from its inputs. Concrete
/// providers (characters of a string, lines of a file) live in
/// `seqmerge-sources`; plain slices and vectors implement it directly.
///
/// Element equality must be reflexive and deterministic. The diff engine
/// relies on it to terminate with a solution.
pub trait Sequence {
    /// The element type compared by the diff engine.
    type Item: Ord;

    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    /// The element at `index`, or `None` if `index` is out of range.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Ord> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T: Ord> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}
