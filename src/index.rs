//! Pluggable slot indexes for element lookup
//!
//! An [`ArrayHeap`](crate::ArrayHeap) keeps its elements in a dense array.
//! Finding an element by identity (for `contains`, `remove`, `decrease_key`)
//! is delegated to a [`SlotIndex`]:
//!
//! - [`LinearIndex`]: No auxiliary table; lookups scan the array for equality
//! - [`HashIndex`]: An `FxHashMap` from element to slot, kept in lockstep with
//!   every element move
//!
//! # Design
//!
//! The heap only ever moves an element through one placement primitive, which
//! writes the array slot and calls [`SlotIndex::record`] in the same step. No
//! other code path touches the table, so the two structures cannot drift.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Trait for element-to-slot lookup strategies
pub trait SlotIndex<T>: Default {
    /// Notes that `element` now lives at `slot`
    fn record(&mut self, element: &T, slot: usize);

    /// Drops `element` from the table; it is no longer in the heap
    fn forget(&mut self, element: &T);

    /// Returns the slot of an element equal to `element`, if it is live
    fn locate(&self, elements: &[T], element: &T) -> Option<usize>;

    /// Drops every entry
    fn clear(&mut self);

    /// Hint that `additional` more elements are about to be recorded
    fn reserve(&mut self, _additional: usize) {}
}

// ============================================================================
// LinearIndex
// ============================================================================

/// No auxiliary table: lookups are an O(n) equality scan
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearIndex;

impl<T: PartialEq> SlotIndex<T> for LinearIndex {
    #[inline]
    fn record(&mut self, _element: &T, _slot: usize) {}

    #[inline]
    fn forget(&mut self, _element: &T) {}

    fn locate(&self, elements: &[T], element: &T) -> Option<usize> {
        elements.iter().position(|e| e == element)
    }

    #[inline]
    fn clear(&mut self) {}
}

// ============================================================================
// HashIndex
// ============================================================================

/// Element-to-slot table backed by `FxHashMap`
///
/// Lookups are O(1). Elements must be unique under `Eq`: if two equal
/// elements are live at once, the table remembers only the most recently
/// moved one, and `decrease_key` on that value is ambiguous.
#[derive(Debug, Clone)]
pub struct HashIndex<T> {
    slots: FxHashMap<T, usize>,
}

impl<T> Default for HashIndex<T> {
    fn default() -> Self {
        Self {
            slots: FxHashMap::default(),
        }
    }
}

impl<T> HashIndex<T> {
    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T: Hash + Eq + Clone> SlotIndex<T> for HashIndex<T> {
    #[inline]
    fn record(&mut self, element: &T, slot: usize) {
        match self.slots.get_mut(element) {
            Some(entry) => *entry = slot,
            None => {
                self.slots.insert(element.clone(), slot);
            }
        }
    }

    #[inline]
    fn forget(&mut self, element: &T) {
        self.slots.remove(element);
    }

    fn locate(&self, elements: &[T], element: &T) -> Option<usize> {
        // A stale entry (out of bounds, or pointing at a different element) is a miss
        self.slots
            .get(element)
            .copied()
            .filter(|&slot| elements.get(slot).is_some_and(|e| e == element))
    }

    fn clear(&mut self) {
        self.slots.clear();
    }

    fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
    }
}
