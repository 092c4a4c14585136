//! Error type for heap operations

use thiserror::Error;

/// Error type for heap operations
///
/// Absence is not an error: `peek` and `pop` on an empty heap return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// A construction argument was rejected (initial capacity below 1)
    #[error("invalid argument: initial capacity must be at least 1")]
    InvalidArgument,
    /// Growing the backing array would exceed the addressable capacity
    #[error("cannot grow heap storage to {requested} elements")]
    AllocationFailure {
        /// The capacity that was asked for
        requested: usize,
    },
    /// The element is not present in the heap
    #[error("element is not present in the heap")]
    NotFound,
    /// The heap was mutated outside the cursor while the cursor was active
    #[error("heap was modified outside the cursor")]
    ConcurrentModification,
    /// `Cursor::remove` was called without a preceding successful `next`
    #[error("cursor remove called without a preceding next")]
    IllegalIteratorState,
}
