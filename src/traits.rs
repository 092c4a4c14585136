//! Common traits for heap data structures
//!
//! This module provides the ordering abstraction and a two-tier trait hierarchy:
//!
//! - [`Compare`]: A three-way ordering bound once at construction time
//! - [`Heap`]: Base trait for min-heaps of self-ordered elements
//! - [`DecreaseKeyHeap`]: Extended trait adding identity-keyed `decrease_key`
//!
//! Unlike `std::collections::BinaryHeap`, these heaps are min-heaps, and the
//! ordering does not have to be the element's `Ord` implementation.

use std::cmp::Ordering;

use crate::error::HeapError;

/// A three-way ordering over `T`
///
/// Implemented by [`Natural`] for every `T: Ord`, and by every closure
/// `Fn(&T, &T) -> Ordering`, so a comparator can be written inline:
///
/// ```rust
/// use indexed_heaps::{Heap, MinHeap};
///
/// // Largest first
/// let mut heap = MinHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// heap.push(1).unwrap();
/// heap.push(7).unwrap();
/// assert_eq!(heap.peek(), Some(&7));
/// ```
///
/// The comparator should be a pure function; the heap calls it only to
/// order two live elements.
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`; `Ordering::Less` means `a` is served first
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural ordering of `T: Ord`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Base trait for min-heap data structures
///
/// Elements order themselves (through the heap's [`Compare`]), so there is
/// no separate priority value:
/// - `push` inserts an element
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// # Example
///
/// ```rust
/// use indexed_heaps::{Heap, MinHeap};
///
/// let mut heap = MinHeap::new();
/// heap.push(3).unwrap();
/// heap.push(1).unwrap();
/// heap.push(2).unwrap();
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Errors
    /// Returns `HeapError::AllocationFailure` if the backing storage cannot grow.
    ///
    /// # Time Complexity
    /// O(log n), plus amortized growth.
    fn push(&mut self, item: T) -> Result<(), HeapError>;

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;

    /// Removes one element equal to `item`, returning it
    fn remove(&mut self, item: &T) -> Option<T>;

    /// Returns true if an element equal to `item` is present
    fn contains(&self, item: &T) -> bool;

    /// Removes every element
    fn clear(&mut self);
}

/// Extended heap trait with `decrease_key` support
///
/// Elements are located by identity (`Eq + Hash`), while ordering comes from
/// the comparator, so a caller can hand in a replacement element that is
/// equal to the stored one but orders earlier.
///
/// # Example
///
/// ```rust
/// use indexed_heaps::{DecreaseKeyHeap, Heap, MinPriorityQueue};
///
/// #[derive(Clone, Debug)]
/// struct Job { id: u32, due: u32 }
/// impl PartialEq for Job { fn eq(&self, o: &Self) -> bool { self.id == o.id } }
/// impl Eq for Job {}
/// impl std::hash::Hash for Job {
///     fn hash<H: std::hash::Hasher>(&self, h: &mut H) { self.id.hash(h) }
/// }
///
/// let mut queue = MinPriorityQueue::with_comparator(|a: &Job, b: &Job| a.due.cmp(&b.due));
/// queue.push(Job { id: 1, due: 50 }).unwrap();
/// queue.push(Job { id: 2, due: 20 }).unwrap();
/// queue.decrease_key(Job { id: 1, due: 5 }).unwrap();
/// assert_eq!(queue.peek().map(|j| j.id), Some(1));
/// ```
pub trait DecreaseKeyHeap<T>: Heap<T> {
    /// Replaces the stored element equal to `item` with `item` and restores order
    ///
    /// # Errors
    /// Returns `HeapError::NotFound` if no equal element is present.
    ///
    /// # Time Complexity
    /// O(log n)
    fn decrease_key(&mut self, item: T) -> Result<(), HeapError>;
}
