//! Sift and heapify routines
//!
//! All routines work in place on a caller-owned slice and never allocate.
//! Index preconditions are asserted: an out-of-range index is a bug in the
//! caller, not a recoverable condition.

use super::order::HeapOrder;
use super::{left, parent};

/// Push `seq[first]` down until the subtree rooted at `first` is a heap.
///
/// Both subtrees of `first` must already satisfy the invariant. Only indices
/// in `first..=last` are visited. An empty range (`first > last`) is a no-op.
///
/// # Panics
///
/// Panics if `last` is outside `seq` for a non-empty range.
pub fn sift_down<T, O>(seq: &mut [T], first: usize, last: usize, order: &O)
where
    O: HeapOrder<T> + ?Sized,
{
    if first > last {
        return;
    }
    assert!(
        last < seq.len(),
        "sift_down range end {} out of bounds for length {}",
        last,
        seq.len()
    );

    let mut cur = first;
    let mut child = left(cur);
    while child <= last {
        // Two children: pick whichever may sit above the other.
        if child < last && !order.precedes(&seq[child], &seq[child + 1]) {
            child += 1;
        }
        if order.precedes(&seq[cur], &seq[child]) {
            return;
        }
        seq.swap(cur, child);
        cur = child;
        child = left(cur);
    }
}

/// Pull `seq[index]` up toward the root until its parent may sit above it.
///
/// Only the path from the root to `index` may be out of order.
///
/// # Panics
///
/// Panics if `index` is outside `seq`.
pub fn sift_up<T, O>(seq: &mut [T], mut index: usize, order: &O)
where
    O: HeapOrder<T> + ?Sized,
{
    assert!(
        index < seq.len(),
        "sift_up index {} out of bounds for length {}",
        index,
        seq.len()
    );

    while index > 0 {
        let p = parent(index);
        if order.precedes(&seq[p], &seq[index]) {
            return;
        }
        seq.swap(p, index);
        index = p;
    }
}

/// Turn the first `count` elements of `seq` into a heap (Floyd's method).
///
/// Leaves are already heaps, so only the internal nodes `count/2 - 1 ..= 0`
/// are sifted, bottom-up. Runs in O(count).
///
/// # Panics
///
/// Panics if `count > seq.len()`.
pub fn heapify<T, O>(seq: &mut [T], count: usize, order: &O)
where
    O: HeapOrder<T> + ?Sized,
{
    assert!(
        count <= seq.len(),
        "heapify count {} exceeds length {}",
        count,
        seq.len()
    );

    for i in (0..count / 2).rev() {
        sift_down(seq, i, count - 1, order);
    }
}

/// Check the invariant over the first `count` elements.
///
/// # Panics
///
/// Panics if `count > seq.len()`.
pub fn is_heap<T, O>(seq: &[T], count: usize, order: &O) -> bool
where
    O: HeapOrder<T> + ?Sized,
{
    assert!(
        count <= seq.len(),
        "is_heap count {} exceeds length {}",
        count,
        seq.len()
    );

    (1..count).all(|i| order.precedes(&seq[parent(i)], &seq[i]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap::{MaxOrder, MinOrder};

    #[test]
    fn test_sift_down_empty_range_is_noop() {
        let mut data = [3, 1, 2];
        sift_down(&mut data, 2, 1, &MinOrder);
        assert_eq!(data, [3, 1, 2]);
    }

    #[test]
    fn test_sift_down_single_left_child() {
        // left(0) == last, no right child to look at
        let mut data = [9, 4];
        sift_down(&mut data, 0, 1, &MinOrder);
        assert_eq!(data, [4, 9]);
    }

    #[test]
    fn test_sift_down_respects_last() {
        let mut data = [9, 5, 7, 1];
        // index 3 is outside the range and must not be touched
        sift_down(&mut data, 0, 2, &MinOrder);
        assert_eq!(data, [5, 9, 7, 1]);
    }

    #[test]
    fn test_sift_down_descends_multiple_levels() {
        let mut data = [10, 2, 3, 4, 5, 6, 7];
        sift_down(&mut data, 0, 6, &MinOrder);
        assert!(is_heap(&data, 7, &MinOrder));
        assert_eq!(data[0], 2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_sift_down_out_of_bounds_panics() {
        let mut data = [1, 2, 3];
        sift_down(&mut data, 0, 3, &MinOrder);
    }

    #[test]
    fn test_sift_up_to_root() {
        let mut data = [2, 4, 3, 8, 1];
        sift_up(&mut data, 4, &MinOrder);
        assert_eq!(data[0], 1);
        assert!(is_heap(&data, 5, &MinOrder));
    }

    #[test]
    fn test_sift_up_stops_on_equal_parent() {
        let mut data = [1, 5, 5];
        sift_up(&mut data, 2, &MinOrder);
        assert_eq!(data, [1, 5, 5]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_sift_up_out_of_bounds_panics() {
        let mut data = [1, 2];
        sift_up(&mut data, 2, &MinOrder);
    }

    #[test]
    fn test_heapify_prefix_only() {
        let mut data = [5, 3, 8, 1, 0, 0];
        heapify(&mut data, 4, &MaxOrder);
        assert!(is_heap(&data, 4, &MaxOrder));
        assert_eq!(data[0], 8);
        assert_eq!(&data[4..], &[0, 0]);
    }

    #[test]
    fn test_heapify_trivial_sizes() {
        let mut empty: [i32; 0] = [];
        heapify(&mut empty, 0, &MinOrder);
        let mut one = [7];
        heapify(&mut one, 1, &MinOrder);
        assert_eq!(one, [7]);
    }

    #[test]
    fn test_is_heap_detects_violation() {
        assert!(is_heap(&[1, 2, 3, 4], 4, &MinOrder));
        assert!(!is_heap(&[1, 2, 3, 0], 4, &MinOrder));
        assert!(is_heap(&[1, 2, 3, 0], 3, &MinOrder));
    }
}
