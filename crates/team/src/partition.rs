//! Contiguous partitioning of an index range
//!
//! A [`Partition`] splits `[0, len)` into at most `parts` disjoint, contiguous,
//! in-order ranges of equal length (the last one may be shorter). The split is
//! described by its chunk length so callers can hand it straight to
//! `slice::chunks` / `slice::chunks_mut`.

use std::ops::Range;

/// Split of `[0, len)` into contiguous chunks of `chunk_len` elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    len: usize,
    chunk_len: usize,
}

impl Partition {
    /// Split `len` elements into at most `parts` contiguous ranges
    ///
    /// `parts == 0` is treated as one part.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recip_team::Partition;
    ///
    /// let partition = Partition::contiguous(10, 4);
    /// assert_eq!(partition.chunk_len(), 3);
    /// let ranges: Vec<_> = partition.ranges().collect();
    /// assert_eq!(ranges, vec![0..3, 3..6, 6..9, 9..10]);
    /// ```
    pub fn contiguous(len: usize, parts: usize) -> Self {
        let parts = parts.max(1);
        Self {
            len,
            chunk_len: len.div_ceil(parts).max(1),
        }
    }

    /// Elements per chunk (never zero)
    #[inline]
    pub fn chunk_len(&self) -> usize {
        self.chunk_len
    }

    /// Number of non-empty ranges
    #[inline]
    pub fn count(&self) -> usize {
        self.len.div_ceil(self.chunk_len)
    }

    /// The ranges in index order
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> {
        let Self { len, chunk_len } = *self;
        (0..len)
            .step_by(chunk_len)
            .map(move |start| start..(start + chunk_len).min(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let partition = Partition::contiguous(8, 2);
        assert_eq!(partition.chunk_len(), 4);
        assert_eq!(partition.count(), 2);
        assert_eq!(partition.ranges().collect::<Vec<_>>(), vec![0..4, 4..8]);
    }

    #[test]
    fn test_uneven_split_uses_fewer_parts() {
        // ceil(9 / 4) = 3, which covers 9 elements in 3 ranges
        let partition = Partition::contiguous(9, 4);
        assert_eq!(partition.count(), 3);
        assert_eq!(partition.ranges().collect::<Vec<_>>(), vec![0..3, 3..6, 6..9]);
    }

    #[test]
    fn test_more_parts_than_elements() {
        let partition = Partition::contiguous(3, 8);
        assert_eq!(partition.chunk_len(), 1);
        assert_eq!(partition.count(), 3);
    }

    #[test]
    fn test_empty_range() {
        let partition = Partition::contiguous(0, 4);
        assert_eq!(partition.count(), 0);
        assert_eq!(partition.ranges().count(), 0);
    }

    #[test]
    fn test_zero_parts_is_one_part() {
        let partition = Partition::contiguous(5, 0);
        assert_eq!(partition.ranges().collect::<Vec<_>>(), vec![0..5]);
    }
}
