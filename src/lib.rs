//! Indexed Binary Heaps for Rust
//!
//! This crate provides an array-backed binary min-heap with priority-queue
//! semantics: insertion, peek, extract-min, removal of arbitrary elements,
//! and an indexed `decrease_key`.
//!
//! # Features
//!
//! - **[`MinHeap`]**: Binary min-heap; O(log n) push/pop, O(1) peek, O(n) lookup by equality
//! - **[`MinPriorityQueue`]**: The same heap plus an element-to-slot table; O(1) `contains`,
//!   O(log n) `remove` and `decrease_key`
//! - **Pluggable ordering**: natural `Ord` order by default, or any comparator fixed at
//!   construction time
//! - **[`Cursor`]**: Iteration that may remove the current element, visits every element
//!   exactly once, and fails fast if the heap is mutated behind its back
//! - **[`pathfinding`]**: Dijkstra and A* search driven by `decrease_key`
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::MinPriorityQueue;
//!
//! let mut queue = MinPriorityQueue::with_comparator(|a: &(char, u32), b: &(char, u32)| a.1.cmp(&b.1));
//! queue.push(('a', 5)).unwrap();
//! queue.push(('b', 3)).unwrap();
//! assert_eq!(queue.peek(), Some(&('b', 3)));
//! ```
//!
//! # Concurrency
//!
//! Heaps are single-writer structures with no internal locking. Share them
//! across threads only behind external synchronization.

pub mod array_heap;
pub mod cursor;
pub mod error;
pub mod index;
pub mod pathfinding;
pub mod traits;

// Re-export the main types for convenience
pub use array_heap::{ArrayHeap, MinHeap, MinPriorityQueue, DEFAULT_INITIAL_CAPACITY};
pub use cursor::Cursor;
pub use error::HeapError;
pub use index::{HashIndex, LinearIndex, SlotIndex};
pub use traits::{Compare, DecreaseKeyHeap, Heap, Natural};
