//! Sets of integers stored as sorted, non-overlapping inclusive ranges

use num_traits::PrimInt;

/// Union of inclusive ranges with overlapping and touching ranges merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointRangeSet<T> {
    ranges: Vec<(T, T)>,
}

impl<T: PrimInt> Default for DisjointRangeSet<T> {
    fn default() -> Self {
        Self { ranges: Vec::new() }
    }
}

impl<T: PrimInt> DisjointRangeSet<T> {
    /// Build from arbitrary `(start, end)` pairs; empty ranges (end < start) are dropped
    pub fn from_ranges<I: IntoIterator<Item = (T, T)>>(ranges: I) -> Self {
        let mut sorted: Vec<(T, T)> = ranges.into_iter().filter(|&(lo, hi)| lo <= hi).collect();
        sorted.sort_unstable_by_key(|&(lo, _)| lo);

        let mut merged: Vec<(T, T)> = Vec::with_capacity(sorted.len());
        for (lo, hi) in sorted {
            match merged.last_mut() {
                // Touching ranges merge too; an end at T::max_value() absorbs everything after it
                Some(last) if last.1.checked_add(&T::one()).is_none_or(|next| lo <= next) => {
                    last.1 = last.1.max(hi);
                }
                _ => merged.push((lo, hi)),
            }
        }

        Self { ranges: merged }
    }

    /// Merged ranges in ascending order
    pub fn ranges(&self) -> &[(T, T)] {
        &self.ranges
    }

    /// Whether `value` lies in some range
    pub fn contains(&self, value: T) -> bool {
        let index = self.ranges.partition_point(|&(lo, _)| lo <= value);
        index
            .checked_sub(1)
            .and_then(|i| self.ranges.get(i))
            .is_some_and(|&(_, hi)| value <= hi)
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Add another set's ranges
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_ranges(self.ranges.iter().chain(other.ranges.iter()).copied())
    }
}

impl<T: PrimInt> FromIterator<(T, T)> for DisjointRangeSet<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        Self::from_ranges(iter)
    }
}
