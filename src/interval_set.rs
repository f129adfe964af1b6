//! Sorted, non-overlapping, non-adjacent integer interval sets.
//!
//! This is the storage representation for successor sets described in
//! section 4.2 of Nuutila's thesis: a set of SCC ids is kept as a sorted
//! run of `[low, high]` ranges instead of one bit/entry per member, which
//! keeps typical successor sets to a handful of intervals instead of
//! thousands of individual ids.
//!
//! An [`IntervalSet`] has two lifecycle phases:
//!
//! - *building*, represented by [`BuildingIntervalSet`], which borrows a
//!   shared [`IntervalArena`] and mutates one of its two scratch buffers in
//!   place;
//! - *completed*, an immutable [`IntervalSet`] produced by
//!   [`BuildingIntervalSet::complete`], which owns an exactly-sized,
//!   independent allocation.
//!
//! Only one [`BuildingIntervalSet`] is ever alive at a time during a
//! closure computation — the driver finishes and completes one SCC's
//! successor set before starting the next — so the arena's two scratch
//! buffers never need to serve more than one builder concurrently.

/// A contiguous, inclusive range of non-negative integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Smallest member.
    pub low: usize,
    /// Largest member.
    pub high: usize,
}

/// A completed, immutable interval set.
///
/// Satisfies two invariants for the lifetime of the value: intervals are
/// sorted ascending by `low`, and any two consecutive intervals are
/// neither overlapping nor adjacent (`intervals[i].high + 1 < intervals[i+1].low`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSet {
    intervals: Box<[Interval]>,
}

impl IntervalSet {
    /// `true` iff `id` is a member of the set. `O(log k)` in the number of
    /// intervals `k`.
    pub fn find(&self, id: usize) -> bool {
        binary_search(&self.intervals, id).is_none()
    }

    /// Total number of distinct members across all intervals.
    pub fn size(&self) -> usize {
        self.intervals
            .iter()
            .map(|iv| iv.high - iv.low + 1)
            .sum()
    }

    /// The underlying sorted, non-adjacent interval runs.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Ascending iterator over member integers.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.intervals)
    }

    /// Descending iterator over member integers.
    pub fn rev_iter(&self) -> RevIter<'_> {
        RevIter::new(&self.intervals)
    }

    /// Debug-time validation of the sortedness/non-adjacency/non-empty-run
    /// invariants. Returns `false` on any violation; a `false` result
    /// indicates a bug in the driver, never a caller mistake.
    pub fn check(&self) -> bool {
        self.intervals.iter().all(|iv| iv.low <= iv.high)
            && self
                .intervals
                .windows(2)
                .all(|w| w[0].high + 1 < w[1].low)
    }
}

/// Binary search over a sorted, non-adjacent interval slice.
///
/// Returns `None` if `id` is covered by some interval. Otherwise returns
/// `Some((min, max))` where `max` is the index of the last interval with
/// `high < id` (as an `isize`, `-1` if none) and `min` is the index of the
/// first interval with `low > id` (equal to `intervals.len()` if none) —
/// the same `(min, max)` pair the original C binary search leaves behind
/// for `insert` to act on.
fn binary_search(intervals: &[Interval], id: usize) -> Option<(isize, usize)> {
    let mut min: isize = 0;
    let mut max: isize = intervals.len() as isize - 1;
    while min <= max {
        let mid = ((min + max) / 2) as usize;
        let elem = intervals[mid];
        if id < elem.low {
            max = mid as isize - 1;
        } else if id > elem.high {
            min = mid as isize + 1;
        } else {
            return None;
        }
    }
    Some((max, min as usize))
}

/// Ascending lazy iterator over an interval set's members.
pub struct Iter<'a> {
    intervals: &'a [Interval],
    interval_index: usize,
    value: Option<usize>,
}

impl<'a> Iter<'a> {
    fn new(intervals: &'a [Interval]) -> Self {
        let value = intervals.first().map(|iv| iv.low);
        Self {
            intervals,
            interval_index: 0,
            value,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let v = self.value?;
        let limit = self.intervals[self.interval_index].high;
        self.value = if v < limit {
            Some(v + 1)
        } else if self.interval_index + 1 < self.intervals.len() {
            self.interval_index += 1;
            Some(self.intervals[self.interval_index].low)
        } else {
            None
        };
        Some(v)
    }
}

/// Descending lazy iterator over an interval set's members.
pub struct RevIter<'a> {
    intervals: &'a [Interval],
    interval_index: usize,
    value: Option<usize>,
}

impl<'a> RevIter<'a> {
    fn new(intervals: &'a [Interval]) -> Self {
        let interval_index = intervals.len().wrapping_sub(1);
        let value = intervals.last().map(|iv| iv.high);
        Self {
            intervals,
            interval_index,
            value,
        }
    }
}

impl<'a> Iterator for RevIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let v = self.value?;
        let limit = self.intervals[self.interval_index].low;
        self.value = if v > limit {
            Some(v - 1)
        } else if self.interval_index > 0 {
            self.interval_index -= 1;
            Some(self.intervals[self.interval_index].high)
        } else {
            None
        };
        Some(v)
    }
}

/// Owns the two scratch buffers shared by every [`BuildingIntervalSet`]
/// produced while one closure computation is in flight.
///
/// Sized `⌈n/2⌉ + 1` per buffer: the bound comes
/// from the fact that a successor set over at most `n` SCC ids can never
/// need more runs than half its member count plus one.
pub(crate) struct IntervalArena {
    from: Vec<Interval>,
    to: Vec<Interval>,
}

impl IntervalArena {
    pub(crate) fn new(max_ids: usize) -> Self {
        let cap = max_ids / 2 + 1;
        Self {
            from: Vec::with_capacity(cap),
            to: Vec::with_capacity(cap),
        }
    }

    /// Starts building a fresh interval set, reusing scratch storage from
    /// a previously completed set.
    pub(crate) fn build(&mut self) -> BuildingIntervalSet<'_> {
        self.from.clear();
        BuildingIntervalSet { arena: self }
    }
}

/// The single interval set currently under construction.
///
/// Borrows the arena mutably: the borrow checker enforces the "only one
/// set building at a time" rule for free, where the original C code relied
/// on programmer discipline around the `interval_table_from`/`_to` globals.
pub(crate) struct BuildingIntervalSet<'a> {
    arena: &'a mut IntervalArena,
}

impl<'a> BuildingIntervalSet<'a> {
    /// See [`IntervalSet::find`].
    pub(crate) fn find(&self, id: usize) -> bool {
        binary_search(&self.arena.from, id).is_none()
    }

    /// Inserts `id`. Returns `true` iff `id` was already a member.
    pub(crate) fn insert(&mut self, id: usize) -> bool {
        let v = &mut self.arena.from;
        if v.is_empty() {
            v.push(Interval { low: id, high: id });
            return false;
        }
        let (max, min) = match binary_search(v, id) {
            None => return true,
            Some(bounds) => bounds,
        };
        if max < 0 {
            if id + 1 == v[0].low {
                v[0].low -= 1;
            } else {
                v.insert(0, Interval { low: id, high: id });
            }
        } else if min == v.len() {
            let last = v.len() - 1;
            if id == v[last].high + 1 {
                v[last].high += 1;
            } else {
                v.push(Interval { low: id, high: id });
            }
        } else {
            let max = max as usize;
            if id == v[max].high + 1 {
                if id + 1 == v[min].low {
                    v[max].high = v[min].high;
                    v.remove(min);
                } else {
                    v[max].high += 1;
                }
            } else if id + 1 == v[min].low {
                v[min].low -= 1;
            } else {
                v.insert(min, Interval { low: id, high: id });
            }
        }
        false
    }

    /// Merges `other` into `self` via a linear two-way merge over both
    /// interval sequences, greedily extending runs that touch or overlap
    /// in either input. Runs in time
    /// linear in the number of intervals of `self` and `other`.
    pub(crate) fn union_with(&mut self, other: &IntervalSet) {
        let b = other.intervals();
        if b.is_empty() {
            return;
        }
        if self.arena.from.is_empty() {
            self.arena.from.extend_from_slice(b);
            return;
        }

        let mut result = std::mem::take(&mut self.arena.to);
        result.clear();
        result.reserve(self.arena.from.len() + b.len());

        let a = &self.arena.from;
        let (mut i, mut j) = (0usize, 0usize);
        while i < a.len() && j < b.len() {
            let ra = a[i];
            let rb = b[j];
            if ra.high + 1 < rb.low {
                result.push(ra);
                i += 1;
            } else if rb.high + 1 < ra.low {
                result.push(rb);
                j += 1;
            } else {
                let low = ra.low.min(rb.low);
                let mut high = ra.high.max(rb.high);
                i += 1;
                j += 1;
                loop {
                    let mut extended = false;
                    while i < a.len() && a[i].low <= high + 1 {
                        high = high.max(a[i].high);
                        i += 1;
                        extended = true;
                    }
                    while j < b.len() && b[j].low <= high + 1 {
                        high = high.max(b[j].high);
                        j += 1;
                        extended = true;
                    }
                    if !extended {
                        break;
                    }
                }
                result.push(Interval { low, high });
            }
        }
        result.extend_from_slice(&a[i..]);
        result.extend_from_slice(&b[j..]);

        // Swap roles: the merged `result` becomes the new `from` (and thus
        // the active building set's storage); the stale `from` becomes the
        // next `to` scratch buffer.
        let mut old_from = std::mem::replace(&mut self.arena.from, result);
        old_from.clear();
        self.arena.to = old_from;
    }

    /// Freezes the current contents into a freshly allocated, exactly
    /// sized [`IntervalSet`]. After this call the scratch buffers are free
    /// to be reused by the next [`IntervalArena::build`].
    pub(crate) fn complete(self) -> IntervalSet {
        let intervals = self.arena.from.as_slice().to_vec().into_boxed_slice();
        debug_assert!(
            IntervalSet {
                intervals: intervals.clone()
            }
            .check(),
            "completed interval set violates sortedness/adjacency invariant"
        );
        IntervalSet { intervals }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(runs: &[(usize, usize)]) -> IntervalSet {
        IntervalSet {
            intervals: runs
                .iter()
                .map(|&(low, high)| Interval { low, high })
                .collect(),
        }
    }

    #[test]
    fn find_on_empty_set_is_false() {
        let s = completed(&[]);
        assert!(!s.find(0));
    }

    #[test]
    fn find_respects_run_boundaries() {
        let s = completed(&[(0, 2), (5, 8), (12, 12)]);
        for id in [0, 1, 2, 5, 6, 7, 8, 12] {
            assert!(s.find(id), "{id} should be found");
        }
        for id in [3, 4, 9, 10, 11, 13] {
            assert!(!s.find(id), "{id} should not be found");
        }
    }

    #[test]
    fn insert_extends_and_merges_runs() {
        let mut arena = IntervalArena::new(32);
        let mut b = arena.build();
        assert!(!b.insert(5));
        assert!(!b.insert(7));
        assert_eq!(b.arena.from, vec![Interval { low: 5, high: 5 }, Interval { low: 7, high: 7 }]);
        // bridging 6 must merge the two singleton runs into one.
        assert!(!b.insert(6));
        assert_eq!(b.arena.from, vec![Interval { low: 5, high: 7 }]);
        // re-inserting an existing member reports "already present".
        assert!(b.insert(6));
        // extending downward and upward.
        assert!(!b.insert(4));
        assert!(!b.insert(8));
        assert_eq!(b.arena.from, vec![Interval { low: 4, high: 8 }]);
    }

    #[test]
    fn union_merges_two_sorted_sequences() {
        let mut arena = IntervalArena::new(64);
        let mut b = arena.build();
        for id in [0, 1, 2, 10, 11] {
            b.insert(id);
        }
        let other = completed(&[(2, 4), (20, 20)]);
        b.union_with(&other);
        let result = b.complete();
        assert_eq!(
            result.intervals().to_vec(),
            vec![
                Interval { low: 0, high: 4 },
                Interval { low: 10, high: 11 },
                Interval { low: 20, high: 20 },
            ]
        );
    }

    #[test]
    fn union_with_empty_other_is_noop() {
        let mut arena = IntervalArena::new(16);
        let mut b = arena.build();
        b.insert(3);
        let empty = completed(&[]);
        b.union_with(&empty);
        assert_eq!(b.complete().intervals().to_vec(), vec![Interval { low: 3, high: 3 }]);
    }

    #[test]
    fn iter_yields_every_member_ascending() {
        let s = completed(&[(0, 2), (5, 6)]);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0, 1, 2, 5, 6]);
    }

    #[test]
    fn rev_iter_yields_every_member_descending() {
        let s = completed(&[(0, 2), (5, 6)]);
        assert_eq!(s.rev_iter().collect::<Vec<_>>(), vec![6, 5, 2, 1, 0]);
    }

    #[test]
    fn size_counts_all_members() {
        let s = completed(&[(0, 2), (5, 8), (12, 12)]);
        assert_eq!(s.size(), 3 + 4 + 1);
    }

    #[test]
    fn check_detects_adjacent_runs_that_should_have_merged() {
        let bad = IntervalSet {
            intervals: vec![Interval { low: 0, high: 2 }, Interval { low: 3, high: 5 }]
                .into_boxed_slice(),
        };
        assert!(!bad.check());
        let good = completed(&[(0, 2), (4, 5)]);
        assert!(good.check());
    }
}
