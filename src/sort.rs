//! In-place heap sort
//!
//! Builds a max-heap over the whole slice, then repeatedly swaps the root
//! into the last unsorted slot and sifts the new root down over the
//! shrinking prefix. O(n log n) time, O(1) extra space, not stable.

use std::cmp::Ordering;

use crate::heap::{heapify, sift_down, ByKey, FnOrder, HeapOrder, MaxOrder, Reversed};

/// Sort `seq` ascending.
///
/// ```
/// let mut data = [5, 3, 8, 1, 9, 2];
/// binheap::heap_sort(&mut data);
/// assert_eq!(data, [1, 2, 3, 5, 8, 9]);
/// ```
pub fn heap_sort<T: Ord>(seq: &mut [T]) {
    sort_with(seq, &MaxOrder);
}

/// Sort `seq` ascending according to `compare`.
pub fn heap_sort_by<T, F>(seq: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    // FnOrder puts the least element on top; the sort needs the greatest.
    sort_with(seq, &Reversed(FnOrder(compare)));
}

/// Sort `seq` ascending by the key `f` extracts.
pub fn heap_sort_by_key<T, K, F>(seq: &mut [T], f: F)
where
    F: Fn(&T) -> K,
    K: Ord,
{
    sort_with(seq, &ByKey::new(f, MaxOrder));
}

/// Heap sort driven by an arbitrary strategy.
///
/// Elements the strategy places at the root end up at the back, so a max
/// ordering yields ascending output and a min ordering descending output.
pub fn sort_with<T, O>(seq: &mut [T], order: &O)
where
    O: HeapOrder<T> + ?Sized,
{
    let n = seq.len();
    if n < 2 {
        return;
    }

    heapify(seq, n, order);
    for i in (1..n).rev() {
        seq.swap(0, i);
        sift_down(seq, 0, i - 1, order);
    }
}

/// Method-style access to the heap sort family.
pub trait HeapSort<T> {
    fn heap_sort(&mut self)
    where
        T: Ord;
    fn heap_sort_by<F>(&mut self, compare: F)
    where
        F: Fn(&T, &T) -> Ordering;
    fn heap_sort_by_key<F, K>(&mut self, f: F)
    where
        F: Fn(&T) -> K,
        K: Ord;
}

impl<T> HeapSort<T> for [T] {
    fn heap_sort(&mut self)
    where
        T: Ord,
    {
        heap_sort(self);
    }

    fn heap_sort_by<F>(&mut self, compare: F)
    where
        F: Fn(&T, &T) -> Ordering,
    {
        heap_sort_by(self, compare);
    }

    fn heap_sort_by_key<F, K>(&mut self, f: F)
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        heap_sort_by_key(self, f);
    }
}
