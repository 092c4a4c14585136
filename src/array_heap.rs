//! Array-backed binary min-heap
//!
//! [`ArrayHeap`] stores its elements in a dense array laid out as an implicit
//! binary tree: the parent of slot `i` is `(i - 1) / 2` and its children are
//! `2i + 1` and `2i + 2`. Two variants are exposed as type aliases:
//!
//! - [`MinHeap`]: no auxiliary table; `contains`/`remove` scan the array
//! - [`MinPriorityQueue`]: an element-to-slot table makes `contains`/`remove`
//!   O(1) lookups and enables [`decrease_key`](ArrayHeap::decrease_key)
//!
//! # Time Complexity
//!
//! | Operation      | `MinHeap`  | `MinPriorityQueue` |
//! |----------------|------------|--------------------|
//! | `push`         | O(log n)   | O(log n)           |
//! | `pop`          | O(log n)   | O(log n)           |
//! | `peek`         | O(1)       | O(1)               |
//! | `contains`     | O(n)       | O(1)               |
//! | `remove`       | O(n)       | O(log n)           |
//! | `decrease_key` | -          | O(log n)           |
//!
//! # Concurrency
//!
//! The heap performs no locking. All access must be exclusive; the mutation
//! version only detects a [`Cursor`] outliving a mutation on the same thread.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! for value in [100, 19, 36, 17, 3, 25, 1, 2, 7] {
//!     heap.push(value).unwrap();
//! }
//! assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 7, 17, 19, 25, 36, 100]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::mem;

use crate::cursor::Cursor;
use crate::error::HeapError;
use crate::index::{HashIndex, LinearIndex, SlotIndex};
use crate::traits::{Compare, DecreaseKeyHeap, Heap, Natural};

/// Capacity used by the constructors that do not take one
pub const DEFAULT_INITIAL_CAPACITY: usize = 12;

/// Array-backed min-heap with a pluggable comparator and slot index
///
/// Most code uses one of the aliases [`MinHeap`] or [`MinPriorityQueue`].
pub struct ArrayHeap<T, C = Natural, I = LinearIndex> {
    /// Live elements, heap-ordered; `data.len()` is the heap size
    pub(crate) data: Vec<T>,
    /// Logical capacity of the backing array
    capacity: usize,
    comparator: C,
    pub(crate) index: I,
    /// Bumped on every structural change
    pub(crate) version: u64,
}

/// A binary min-heap that locates elements by equality scan
pub type MinHeap<T, C = Natural> = ArrayHeap<T, C, LinearIndex>;

/// A binary min-heap with an element-to-slot table and `decrease_key`
///
/// Elements must be unique under `Eq`; see [`HashIndex`].
pub type MinPriorityQueue<T, C = Natural> = ArrayHeap<T, C, HashIndex<T>>;

#[inline]
fn parent_of(slot: usize) -> usize {
    (slot - 1) / 2
}

#[inline]
fn left_child_of(slot: usize) -> usize {
    2 * slot + 1
}

impl<T: Ord, I: SlotIndex<T>> ArrayHeap<T, Natural, I> {
    /// Creates an empty heap ordered by `T`'s `Ord`
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Creates an empty heap ordered by `T`'s `Ord`, with room for `capacity` elements
    ///
    /// # Errors
    /// `HeapError::InvalidArgument` if `capacity < 1`;
    /// `HeapError::AllocationFailure` if the storage cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T, C: Compare<T>, I: SlotIndex<T>> ArrayHeap<T, C, I> {
    /// Creates an empty heap ordered by `comparator`
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            data: Vec::with_capacity(DEFAULT_INITIAL_CAPACITY),
            capacity: DEFAULT_INITIAL_CAPACITY,
            comparator,
            index: I::default(),
            version: 0,
        }
    }

    /// Creates an empty heap ordered by `comparator`, with room for `capacity` elements
    ///
    /// # Errors
    /// `HeapError::InvalidArgument` if `capacity < 1`;
    /// `HeapError::AllocationFailure` if the storage cannot be allocated.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Result<Self, HeapError> {
        if capacity < 1 {
            return Err(HeapError::InvalidArgument);
        }
        if capacity > Self::max_capacity() {
            return Err(HeapError::AllocationFailure {
                requested: capacity,
            });
        }
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| HeapError::AllocationFailure {
                requested: capacity,
            })?;
        let mut index = I::default();
        index.reserve(capacity);
        Ok(Self {
            data,
            capacity,
            comparator,
            index,
            version: 0,
        })
    }

    /// Builds a heap from arbitrary elements, ordered by `comparator`
    ///
    /// # Time Complexity
    /// O(n) (bottom-up heapify)
    pub fn from_vec_with_comparator(data: Vec<T>, comparator: C) -> Self {
        let capacity = data.capacity().max(1);
        let mut heap = Self {
            data,
            capacity,
            comparator,
            index: I::default(),
            version: 0,
        };
        heap.heapify();
        heap
    }

    /// Copies another heap, adopting its comparator
    ///
    /// The source may use a different slot index, so a [`MinHeap`] can be
    /// turned into a [`MinPriorityQueue`] and back.
    pub fn from_heap<J>(other: &ArrayHeap<T, C, J>) -> Self
    where
        T: Clone,
        C: Clone,
    {
        let mut data = Vec::with_capacity(other.capacity);
        data.extend_from_slice(&other.data);
        let mut heap = Self {
            data,
            capacity: other.capacity,
            comparator: other.comparator.clone(),
            index: I::default(),
            version: 0,
        };
        heap.index.reserve(heap.data.len());
        for (slot, element) in heap.data.iter().enumerate() {
            heap.index.record(element, slot);
        }
        heap
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the logical capacity of the backing array
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the comparator this heap was built with
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts an element (offer)
    ///
    /// # Errors
    /// `HeapError::AllocationFailure` if the storage is full and cannot grow.
    pub fn push(&mut self, item: T) -> Result<(), HeapError> {
        let slot = self.data.len();
        if slot >= self.capacity {
            let needed = slot.checked_add(1).ok_or(HeapError::AllocationFailure {
                requested: usize::MAX,
            })?;
            self.grow(needed)?;
        }
        self.version = self.version.wrapping_add(1);
        self.data.push(item);
        self.index.record(&self.data[slot], slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the minimum element (poll)
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        Some(self.remove_at(0).0)
    }

    /// Returns the slot currently holding an element equal to `item`
    pub fn position(&self, item: &T) -> Option<usize> {
        self.index.locate(&self.data, item)
    }

    /// Returns true if an element equal to `item` is present
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Removes one element equal to `item`, returning it
    ///
    /// Returns `None`, leaving the heap untouched, if no such element exists.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let slot = self.position(item)?;
        Some(self.remove_at(slot).0)
    }

    /// Removes every element; capacity is kept
    pub fn clear(&mut self) {
        self.version = self.version.wrapping_add(1);
        self.data.clear();
        self.index.clear();
    }

    /// Keeps only the elements for which `keep` returns true
    ///
    /// # Time Complexity
    /// O(n) (the survivors are re-heapified)
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.data.len();
        self.data.retain(|element| keep(element));
        if self.data.len() != before {
            self.version = self.version.wrapping_add(1);
            self.heapify();
        }
    }

    /// Ensures room for at least `additional` more elements
    ///
    /// # Errors
    /// `HeapError::AllocationFailure` if the storage cannot grow.
    pub fn reserve(&mut self, additional: usize) -> Result<(), HeapError> {
        let needed = self
            .data
            .len()
            .checked_add(additional)
            .ok_or(HeapError::AllocationFailure {
                requested: usize::MAX,
            })?;
        if needed > self.capacity {
            self.grow(needed)?;
        }
        Ok(())
    }

    /// Shrinks the backing array to fit the live elements (at least one slot)
    pub fn shrink_to_fit(&mut self) {
        self.capacity = self.data.len().max(1);
        self.data.shrink_to(self.capacity);
    }

    /// Returns the elements in storage order (not sorted)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns a copy of the elements in storage order (not sorted)
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Iterates over the elements in storage order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns a cursor that may remove elements while iterating
    ///
    /// See [`Cursor`] for the protocol.
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self.version)
    }

    /// Consumes the heap, returning its elements in storage order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(element) = self.pop() {
            sorted.push(element);
        }
        sorted
    }

    /// Returns true if every parent orders at or before its children
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|slot| {
            self.comparator
                .compare(&self.data[parent_of(slot)], &self.data[slot])
                != Ordering::Greater
        })
    }

    // ------------------------------------------------------------------------
    // Storage growth
    // ------------------------------------------------------------------------

    /// Largest element count the backing array can address
    fn max_capacity() -> usize {
        isize::MAX as usize / mem::size_of::<T>().max(1)
    }

    /// Grows the backing array to hold at least `min_capacity` elements
    ///
    /// Small arrays roughly double, large ones grow by half.
    fn grow(&mut self, min_capacity: usize) -> Result<(), HeapError> {
        let old_capacity = self.capacity;
        let max_capacity = Self::max_capacity();
        if min_capacity > max_capacity {
            tracing::warn!(
                requested = min_capacity,
                max_capacity,
                "heap growth exceeds addressable capacity"
            );
            return Err(HeapError::AllocationFailure {
                requested: min_capacity,
            });
        }
        let proposed = if old_capacity < 64 {
            old_capacity.saturating_add(1).saturating_mul(2)
        } else {
            (old_capacity / 2).saturating_mul(3)
        };
        let new_capacity = proposed.min(max_capacity).max(min_capacity);

        let additional = new_capacity - self.data.len();
        if let Err(err) = self.data.try_reserve_exact(additional) {
            tracing::warn!(requested = new_capacity, error = %err, "heap growth failed");
            return Err(HeapError::AllocationFailure {
                requested: new_capacity,
            });
        }
        self.index.reserve(new_capacity.saturating_sub(old_capacity));
        tracing::debug!(old_capacity, new_capacity, "grew heap storage");
        self.capacity = new_capacity;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Percolation
    // ------------------------------------------------------------------------

    /// Swaps two slots, keeping the slot index in step
    #[inline]
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.index.record(&self.data[a], a);
        self.index.record(&self.data[b], b);
    }

    #[inline]
    fn orders_before(&self, a: usize, b: usize) -> bool {
        self.comparator.compare(&self.data[a], &self.data[b]) == Ordering::Less
    }

    /// Moves the element at `slot` toward the root; returns its final slot
    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = parent_of(slot);
            if self.orders_before(slot, parent) {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
        slot
    }

    /// Moves the element at `slot` toward the leaves; returns its final slot
    fn sift_down(&mut self, mut slot: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = left_child_of(slot);
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && !self.orders_before(left, right) {
                right
            } else {
                left
            };
            if self.orders_before(child, slot) {
                self.swap_slots(slot, child);
                slot = child;
            } else {
                break;
            }
        }
        slot
    }

    /// Restores order around `slot` after its element was replaced
    ///
    /// Only one direction can be violated; down is tried first.
    fn restore(&mut self, slot: usize) -> usize {
        let settled = self.sift_down(slot);
        if settled == slot {
            self.sift_up(slot)
        } else {
            settled
        }
    }

    fn heapify(&mut self) {
        self.index.clear();
        self.index.reserve(self.data.len());
        for (slot, element) in self.data.iter().enumerate() {
            self.index.record(element, slot);
        }
        for slot in (0..self.data.len() / 2).rev() {
            self.sift_down(slot);
        }
    }

    /// Removes the element at `slot`
    ///
    /// The last element fills the hole and is re-settled. Returns the removed
    /// element and, if an element was moved into the hole, the slot where it
    /// came to rest.
    pub(crate) fn remove_at(&mut self, slot: usize) -> (T, Option<usize>) {
        debug_assert!(slot < self.data.len(), "remove_at out of bounds");
        self.version = self.version.wrapping_add(1);
        let last = self.data.len() - 1;
        let removed = self.data.swap_remove(slot);
        self.index.forget(&removed);
        if slot == last {
            return (removed, None);
        }
        self.index.record(&self.data[slot], slot);
        let settled = self.restore(slot);
        (removed, Some(settled))
    }
}

impl<T, C> ArrayHeap<T, C, HashIndex<T>>
where
    T: Hash + Eq + Clone,
    C: Compare<T>,
{
    /// Replaces the stored element equal to `item` with `item` and restores order
    ///
    /// The lookup uses `item`'s identity (`Eq + Hash`), the placement uses the
    /// comparator, so `item` is typically the same key with an earlier priority.
    /// Later priorities are re-settled correctly as well.
    ///
    /// # Errors
    /// `HeapError::NotFound` if no equal element is present.
    pub fn decrease_key(&mut self, item: T) -> Result<(), HeapError> {
        let slot = self
            .index
            .locate(&self.data, &item)
            .ok_or(HeapError::NotFound)?;
        self.version = self.version.wrapping_add(1);
        let previous = mem::replace(&mut self.data[slot], item);
        self.index.forget(&previous);
        self.index.record(&self.data[slot], slot);
        self.restore(slot);
        Ok(())
    }
}

impl<T, C: Compare<T>, I: SlotIndex<T>> Heap<T> for ArrayHeap<T, C, I> {
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn push(&mut self, item: T) -> Result<(), HeapError> {
        self.push(item)
    }

    fn peek(&self) -> Option<&T> {
        self.peek()
    }

    fn pop(&mut self) -> Option<T> {
        self.pop()
    }

    fn remove(&mut self, item: &T) -> Option<T> {
        self.remove(item)
    }

    fn contains(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn clear(&mut self) {
        self.clear()
    }
}

impl<T, C> DecreaseKeyHeap<T> for ArrayHeap<T, C, HashIndex<T>>
where
    T: Hash + Eq + Clone,
    C: Compare<T>,
{
    fn decrease_key(&mut self, item: T) -> Result<(), HeapError> {
        self.decrease_key(item)
    }
}

impl<T, C: Compare<T> + Default, I: SlotIndex<T>> Default for ArrayHeap<T, C, I> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Clone, C: Clone, I: Clone> Clone for ArrayHeap<T, C, I> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
            comparator: self.comparator.clone(),
            index: self.index.clone(),
            version: 0,
        }
    }
}

impl<T: fmt::Debug, C, I> fmt::Debug for ArrayHeap<T, C, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayHeap")
            .field("elements", &self.data)
            .field("capacity", &self.capacity)
            .field("version", &self.version)
            .finish()
    }
}

impl<T: Ord, I: SlotIndex<T>> From<Vec<T>> for ArrayHeap<T, Natural, I> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_with_comparator(data, Natural)
    }
}

impl<T: Ord, I: SlotIndex<T>> FromIterator<T> for ArrayHeap<T, Natural, I> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, C, I> IntoIterator for ArrayHeap<T, C, I> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C, I> IntoIterator for &'a ArrayHeap<T, C, I> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
