use thiserror::Error;

use crate::seam::Segment;

/// Error types for the checked `try_*` operations of a `Deque`
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DequeError {
    /// Operation needs at least one element
    #[error("Empty deque: {operation} requires at least one element")]
    EmptyDeque {
        /// Name of the operation that was attempted
        operation: &'static str,
    },
    /// Index is beyond the current deque length
    #[error("Index out of bounds: index {index} is beyond deque length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the deque
        length: usize,
    },
    /// A position resolves outside the range the operation accepts
    #[error("Cursor out of range: logical index {index} is not valid for a deque of length {length}")]
    CursorOutOfRange {
        /// Logical index the position resolves to (-1 is the before-begin sentinel)
        index: isize,
        /// Current length of the deque
        length: usize,
    },
    /// Growing a segment failed to allocate
    #[error("Allocation failed: cannot reserve {additional} more elements in the {segment} segment")]
    AllocationFailed {
        /// Segment that was asked to grow
        segment: Segment,
        /// Number of additional elements requested
        additional: usize,
    },
}
