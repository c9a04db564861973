//! Bounded priority queue
//!
//! A fixed-capacity binary heap of `(priority, payload)` nodes. By default the
//! lowest priority is dequeued first; any [`HeapOrder`] over the priority
//! type can be supplied instead.
//!
//! ```
//! use binheap::PriorityQueue;
//!
//! let mut queue = PriorityQueue::with_capacity(3);
//! queue.enqueue(5, "a").unwrap();
//! queue.enqueue(2, "b").unwrap();
//! queue.enqueue(8, "c").unwrap();
//!
//! assert_eq!(queue.dequeue(), Ok("b"));
//! assert_eq!(queue.dequeue(), Ok("a"));
//! assert_eq!(queue.dequeue(), Ok("c"));
//! assert!(queue.dequeue().is_err());
//! ```

use std::iter::FusedIterator;

use tracing::{debug, warn};

use crate::error::{QueueError, QueueResult};
use crate::heap::{heapify, is_heap, sift_down, sift_up, HeapOrder, MinOrder};

/// Upper bound on slots reserved up front; the rest grow on demand.
const PREALLOC_LIMIT: usize = 1024;

/// A queued payload together with its priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapNode<P, T> {
    pub priority: P,
    pub payload: T,
}

impl<P, T> HeapNode<P, T> {
    pub fn new(priority: P, payload: T) -> Self {
        Self { priority, payload }
    }

    pub fn into_parts(self) -> (P, T) {
        (self.priority, self.payload)
    }
}

/// Orders nodes by priority only; payloads are never compared.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByPriority<O>(pub O);

impl<P, T, O: HeapOrder<P>> HeapOrder<HeapNode<P, T>> for ByPriority<O> {
    #[inline]
    fn precedes(&self, a: &HeapNode<P, T>, b: &HeapNode<P, T>) -> bool {
        self.0.precedes(&a.priority, &b.priority)
    }
}

/// Fixed-capacity heap-backed priority queue.
#[derive(Debug, Clone)]
pub struct PriorityQueue<P, T, O = MinOrder> {
    /// Heap slots; `heap.len()` is the logical count.
    heap: Vec<HeapNode<P, T>>,
    capacity: usize,
    order: ByPriority<O>,
}

impl<P: Ord, T> PriorityQueue<P, T> {
    /// Create an empty min-priority queue that accepts `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, MinOrder)
    }

    /// Build a full min-priority queue from parallel arrays in O(n).
    ///
    /// The resulting capacity equals the number of pairs.
    pub fn from_parts(priorities: Vec<P>, payloads: Vec<T>) -> QueueResult<Self> {
        Self::from_parts_with_order(priorities, payloads, MinOrder)
    }
}

impl<P, T, O: HeapOrder<P>> PriorityQueue<P, T, O> {
    /// Create an empty queue ordered by `order`.
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            heap: Vec::with_capacity(capacity.min(PREALLOC_LIMIT)),
            capacity,
            order: ByPriority(order),
        }
    }

    /// Bulk constructor ordered by `order`.
    ///
    /// Fails without building anything when the arrays differ in length.
    pub fn from_parts_with_order(
        priorities: Vec<P>,
        payloads: Vec<T>,
        order: O,
    ) -> QueueResult<Self> {
        if priorities.len() != payloads.len() {
            warn!(
                priorities = priorities.len(),
                payloads = payloads.len(),
                "rejecting bulk construction with mismatched input"
            );
            return Err(QueueError::LengthMismatch {
                priorities: priorities.len(),
                payloads: payloads.len(),
            });
        }

        let mut heap: Vec<HeapNode<P, T>> = priorities
            .into_iter()
            .zip(payloads)
            .map(|(priority, payload)| HeapNode::new(priority, payload))
            .collect();
        let count = heap.len();
        let order = ByPriority(order);
        heapify(&mut heap, count, &order);
        debug!(count, "built priority queue from parts");

        Ok(Self {
            heap,
            capacity: count,
            order,
        })
    }

    /// Insert `payload` with `priority`.
    ///
    /// On a full queue nothing changes and [`QueueError::Full`] is returned.
    pub fn enqueue(&mut self, priority: P, payload: T) -> QueueResult<()> {
        if self.is_full() {
            warn!(capacity = self.capacity, "queue full, unable to enqueue");
            return Err(QueueError::Full {
                capacity: self.capacity,
            });
        }

        self.heap.push(HeapNode::new(priority, payload));
        let tail = self.heap.len() - 1;
        sift_up(&mut self.heap, tail, &self.order);
        debug_assert!(self.check_invariant());
        Ok(())
    }

    /// Remove and return the payload with the highest-ranked priority.
    pub fn dequeue(&mut self) -> QueueResult<T> {
        self.pop_node().map(|node| node.payload)
    }

    /// Remove and return the root node, priority included.
    pub fn pop_node(&mut self) -> QueueResult<HeapNode<P, T>> {
        if self.heap.is_empty() {
            debug!("dequeue on empty queue");
            return Err(QueueError::Empty);
        }

        // swap_remove moves the former last node into the root slot.
        let root = self.heap.swap_remove(0);
        if let Some(last) = self.heap.len().checked_sub(1) {
            sift_down(&mut self.heap, 0, last, &self.order);
        }
        debug_assert!(self.check_invariant());
        Ok(root)
    }

    /// The node that the next dequeue would return.
    pub fn peek(&self) -> Option<&HeapNode<P, T>> {
        self.heap.first()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() == self.capacity
    }

    /// Drop every entry, keeping the capacity.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Dequeue everything, yielding nodes in priority order.
    ///
    /// Dropping the iterator early still empties the queue.
    pub fn drain(&mut self) -> Drain<'_, P, T, O> {
        Drain { queue: self }
    }

    /// Consume the queue into its nodes, in priority order.
    pub fn into_sorted_vec(mut self) -> Vec<HeapNode<P, T>> {
        let mut nodes = Vec::with_capacity(self.len());
        nodes.extend(self.drain());
        nodes
    }

    fn check_invariant(&self) -> bool {
        is_heap(&self.heap, self.heap.len(), &self.order)
    }
}

/// Draining iterator returned by [`PriorityQueue::drain`].
#[derive(Debug)]
pub struct Drain<'a, P, T, O> {
    queue: &'a mut PriorityQueue<P, T, O>,
}

impl<P, T, O: HeapOrder<P>> Iterator for Drain<'_, P, T, O> {
    type Item = HeapNode<P, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.queue.is_empty() {
            return None;
        }
        self.queue.pop_node().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.queue.len();
        (n, Some(n))
    }
}

impl<P, T, O: HeapOrder<P>> ExactSizeIterator for Drain<'_, P, T, O> {}

impl<P, T, O: HeapOrder<P>> FusedIterator for Drain<'_, P, T, O> {}

impl<P, T, O> Drop for Drain<'_, P, T, O> {
    fn drop(&mut self) {
        self.queue.heap.clear();
    }
}
