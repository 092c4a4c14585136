//! Removal-tolerant, fail-fast iteration
//!
//! [`ArrayHeap::iter`] borrows the heap, so the borrow checker already rules
//! out mutation during iteration. A [`Cursor`] is the detached alternative:
//! it holds only its position, and the heap is passed in at every step. That
//! lets the caller remove the current element through the cursor while the
//! traversal is running.
//!
//! # Protocol
//!
//! - The cursor snapshots the heap's mutation version when created. If the heap
//!   is mutated through any path other than [`Cursor::remove`], the next cursor
//!   operation fails with [`HeapError::ConcurrentModification`].
//! - Elements are visited in storage order, which is not sorted order.
//! - Removing the current element moves the last element into its slot. If
//!   that element settles behind the cursor it would be skipped, so it is
//!   queued and surfaced after the slot traversal ends. Every element present
//!   when the cursor was created is visited exactly once.
//!
//! A cursor must only be used with the heap that created it.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::MinHeap;
//!
//! let mut heap: MinHeap<i32> = (1..=10).collect();
//! let mut cursor = heap.cursor();
//! while let Some(&value) = cursor.next(&heap).unwrap() {
//!     if value % 2 == 0 {
//!         cursor.remove(&mut heap).unwrap();
//!     }
//! }
//! assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5, 7, 9]);
//! ```

use std::collections::VecDeque;
use std::mem;

use crate::array_heap::ArrayHeap;
use crate::error::HeapError;
use crate::index::SlotIndex;
use crate::traits::Compare;

/// What the last successful `next` handed out
#[derive(Debug, Clone)]
enum Returned<T> {
    Nothing,
    /// An element read straight from this slot
    Slot(usize),
    /// An element surfaced from the deferred queue
    Deferred(T),
}

/// A detached cursor over an [`ArrayHeap`]
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    /// Next slot to visit
    next_slot: usize,
    last: Returned<T>,
    /// Elements displaced behind the cursor, still to be visited
    deferred: VecDeque<T>,
    expected_version: u64,
}

impl<T> Cursor<T> {
    pub(crate) fn new(version: u64) -> Self {
        Self {
            next_slot: 0,
            last: Returned::Nothing,
            deferred: VecDeque::new(),
            expected_version: version,
        }
    }

    /// Returns true if `next` would yield another element
    pub fn has_next<C, I>(&self, heap: &ArrayHeap<T, C, I>) -> bool {
        self.next_slot < heap.data.len() || !self.deferred.is_empty()
    }

    fn check<C, I>(&self, heap: &ArrayHeap<T, C, I>) -> Result<(), HeapError> {
        if heap.version == self.expected_version {
            Ok(())
        } else {
            Err(HeapError::ConcurrentModification)
        }
    }

    /// Advances the cursor, returning the next unvisited element
    ///
    /// Returns `Ok(None)` once every element has been visited.
    ///
    /// # Errors
    /// `HeapError::ConcurrentModification` if the heap changed since the
    /// cursor was created or last removed an element.
    pub fn next<'h, C, I>(&mut self, heap: &'h ArrayHeap<T, C, I>) -> Result<Option<&'h T>, HeapError>
    where
        C: Compare<T>,
        I: SlotIndex<T>,
    {
        self.check(heap)?;
        if self.next_slot < heap.data.len() {
            let slot = self.next_slot;
            self.next_slot += 1;
            self.last = Returned::Slot(slot);
            return Ok(Some(&heap.data[slot]));
        }

        self.last = Returned::Nothing;
        while let Some(element) = self.deferred.pop_front() {
            if let Some(slot) = heap.position(&element) {
                self.last = Returned::Deferred(element);
                return Ok(Some(&heap.data[slot]));
            }
        }
        Ok(None)
    }
}

impl<T: Clone> Cursor<T> {
    /// Removes the element most recently returned by `next`
    ///
    /// # Errors
    /// `HeapError::ConcurrentModification` if the heap changed behind the
    /// cursor's back; `HeapError::IllegalIteratorState` if there is no
    /// element to remove (no `next` yet, or it was already removed).
    pub fn remove<C, I>(&mut self, heap: &mut ArrayHeap<T, C, I>) -> Result<T, HeapError>
    where
        C: Compare<T>,
        I: SlotIndex<T>,
    {
        self.check(heap)?;
        let removed = match mem::replace(&mut self.last, Returned::Nothing) {
            Returned::Nothing => return Err(HeapError::IllegalIteratorState),
            Returned::Slot(slot) => {
                let (removed, settled) = heap.remove_at(slot);
                match settled {
                    // The tail element rose past the cursor; visit it later
                    Some(settled_at) if settled_at < slot => {
                        self.deferred.push_back(heap.data[settled_at].clone());
                    }
                    // The slot now holds an unvisited element
                    _ => self.next_slot = slot,
                }
                removed
            }
            Returned::Deferred(element) => {
                let slot = heap.position(&element).ok_or(HeapError::NotFound)?;
                heap.remove_at(slot).0
            }
        };
        self.expected_version = heap.version;
        Ok(removed)
    }
}
