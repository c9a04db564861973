//! Priority queue errors

use thiserror::Error;

/// Recoverable failures reported by [`crate::queue::PriorityQueue`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("queue is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("queue is empty")]
    Empty,

    #[error("priority/payload length mismatch: {priorities} priorities, {payloads} payloads")]
    LengthMismatch { priorities: usize, payloads: usize },
}

/// Result type for queue operations.
pub type QueueResult<T> = Result<T, QueueError>;
