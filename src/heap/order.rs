//! Ordering strategies for the heap engine
//!
//! A strategy answers one question: may `a` sit above `b` in the tree?
//! The engine never compares elements any other way, so the same sift
//! routines serve min-heaps, max-heaps and keyed heaps.

use std::cmp::Ordering;

/// Parent/child relation enforced by the heap engine.
pub trait HeapOrder<T: ?Sized> {
    /// Returns `true` when `a` is allowed to be the parent of `b`.
    ///
    /// Must be reflexive for equal elements (`precedes(x, x)` is `true`),
    /// otherwise sift-up would swap equal keys forever.
    fn precedes(&self, a: &T, b: &T) -> bool;
}

/// Smallest element at the root (`a <= b`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: Ord + ?Sized> HeapOrder<T> for MinOrder {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a <= b
    }
}

/// Largest element at the root (`a >= b`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> HeapOrder<T> for MaxOrder {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a >= b
    }
}

/// Orders elements by an extracted key under an inner strategy.
///
/// ```
/// use binheap::heap::{ByKey, HeapOrder, MinOrder};
///
/// let order = ByKey::new(|pair: &(u32, &str)| pair.0, MinOrder);
/// assert!(order.precedes(&(1, "low"), &(9, "high")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F, O> {
    key: F,
    inner: O,
}

impl<F, O> ByKey<F, O> {
    pub fn new(key: F, inner: O) -> Self {
        Self { key, inner }
    }
}

impl<T, K, F, O> HeapOrder<T> for ByKey<F, O>
where
    F: Fn(&T) -> K,
    O: HeapOrder<K>,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self.inner.precedes(&(self.key)(a), &(self.key)(b))
    }
}

/// Adapts a std-style comparator; elements that compare `Less` rise to the
/// root.
#[derive(Debug, Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<T, F> HeapOrder<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b) != Ordering::Greater
    }
}

/// Flips the inner strategy, turning a min-heap into a max-heap and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<O>(pub O);

impl<T: ?Sized, O: HeapOrder<T>> HeapOrder<T> for Reversed<O> {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self.0.precedes(b, a)
    }
}

impl<T: ?Sized, O: HeapOrder<T> + ?Sized> HeapOrder<T> for &O {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        (**self).precedes(a, b)
    }
}
