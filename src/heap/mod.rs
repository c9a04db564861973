//! Binary heap engine
//!
//! A complete binary tree stored breadth-first in a flat slice:
//!
//! ```text
//!                 0
//!          1             2
//!      3       4      5      6
//!    7   8   9  10  11  12
//! ```
//!
//! - `parent(i) = (i - 1) / 2` for `i > 0`
//! - `left(i)   = 2i + 1`
//! - `right(i)  = 2i + 2`
//!
//! Invariant: for every in-range child `c` of `i`, `order.precedes(seq[i], seq[c])`.
//! The engine is shared by [`crate::sort`] (max ordering) and
//! [`crate::queue`] (min ordering by priority).

pub mod engine;
pub mod order;

pub use engine::{heapify, is_heap, sift_down, sift_up};
pub use order::{ByKey, FnOrder, HeapOrder, MaxOrder, MinOrder, Reversed};

/// Index of the parent of `i`.
///
/// ```
/// use binheap::heap::parent;
/// assert_eq!(parent(1), 0);
/// assert_eq!(parent(2), 0);
/// assert_eq!(parent(5), 2);
/// assert_eq!(parent(6), 2);
/// ```
///
/// # Panics
///
/// The root has no parent; `parent(0)` panics.
#[inline]
pub fn parent(i: usize) -> usize {
    assert!(i > 0, "root has no parent");
    (i - 1) / 2
}

/// Index of the left child of `i`.
#[inline]
pub fn left(i: usize) -> usize {
    2 * i + 1
}

/// Index of the right child of `i`.
#[inline]
pub fn right(i: usize) -> usize {
    2 * i + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_child_roundtrip() {
        for i in 0..1000 {
            assert_eq!(parent(left(i)), i);
            assert_eq!(parent(right(i)), i);
        }
    }

    #[test]
    fn test_siblings_share_parent() {
        assert_eq!(parent(1), parent(2));
        assert_eq!(parent(2), 0);
        assert_eq!(parent(4), 1);
        assert_eq!(parent(10), 4);
        assert_eq!(parent(9), 4);
    }

    #[test]
    #[should_panic(expected = "root has no parent")]
    fn test_parent_of_root_panics() {
        parent(0);
    }
}
