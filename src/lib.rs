//! binheap - array-backed binary heaps
//!
//! One heap engine, two consumers:
//!
//! - **Heap sort**: in-place, O(n log n), O(1) extra space.
//! - **Bounded priority queue**: fixed capacity, O(log n) enqueue/dequeue,
//!   O(n) bulk construction.
//!
//! # Example
//!
//! ```rust
//! use binheap::{heap_sort, PriorityQueue};
//!
//! let mut data = [5, 3, 8, 1, 9, 2];
//! heap_sort(&mut data);
//! assert_eq!(data, [1, 2, 3, 5, 8, 9]);
//!
//! let priorities = vec![1, 2, 10, 5, 30, 7, 9, 100];
//! let mut queue = PriorityQueue::from_parts(priorities.clone(), priorities).unwrap();
//! let mut drained = Vec::new();
//! while let Ok(payload) = queue.dequeue() {
//!     drained.push(payload);
//! }
//! assert_eq!(drained, vec![1, 2, 5, 7, 9, 10, 30, 100]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────┐
//! │  heap_sort   │   │  PriorityQueue   │
//! │  (MaxOrder)  │   │  (ByPriority)    │
//! └──────┬───────┘   └────────┬─────────┘
//!        │                    │
//!        ▼                    ▼
//! ┌─────────────────────────────────────┐
//! │ heap engine: sift_down / sift_up /  │
//! │ heapify over &mut [T] + HeapOrder   │
//! └─────────────────────────────────────┘
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod heap;
pub mod queue;
pub mod samples;
pub mod sort;

// Re-export commonly used types
pub use config::{BinheapConfig, ConfigError, ConfigResult};
pub use error::{QueueError, QueueResult};
pub use heap::{HeapOrder, MaxOrder, MinOrder};
pub use queue::{HeapNode, PriorityQueue};
pub use sort::{heap_sort, heap_sort_by, heap_sort_by_key, HeapSort};
