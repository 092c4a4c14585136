//! Generic comprehensive tests for all Heap implementations
//!
//! These tests work with any Heap implementation and stress the trait interface
//! with various edge cases and complex scenarios.

use indexed_heaps::{Heap, MinHeap, MinPriorityQueue};

// Test helpers that work with any Heap implementation

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<i32> + Default>() {
    let mut heap = H::default();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.remove(&1), None);
    assert!(!heap.contains(&1));
}

/// Test basic insert and pop operations
fn test_basic_operations<H: Heap<i32> + Default>() {
    let mut heap = H::default();

    heap.push(5).unwrap();
    heap.push(1).unwrap();
    heap.push(10).unwrap();
    heap.push(3).unwrap();

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Some(&1));

    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.pop(), Some(3));
    assert_eq!(heap.pop(), Some(5));
    assert_eq!(heap.pop(), Some(10));
    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
}

/// Test the reference extraction sequence
fn test_extraction_order<H: Heap<i32> + Default>() {
    let mut heap = H::default();
    let numbers = [100, 19, 36, 17, 3, 25, 1, 2, 7];
    for value in numbers {
        heap.push(value).unwrap();
    }
    for value in numbers {
        assert!(heap.contains(&value));
    }

    let mut drained = Vec::new();
    while let Some(value) = heap.pop() {
        drained.push(value);
    }
    assert_eq!(drained, vec![1, 2, 3, 7, 17, 19, 25, 36, 100]);
}

/// Test removing arbitrary elements
fn test_remove_arbitrary<H: Heap<i32> + Default>() {
    let mut heap = H::default();
    for value in [40, 10, 30, 20, 50, 60, 5] {
        heap.push(value).unwrap();
    }

    assert_eq!(heap.remove(&30), Some(30));
    assert_eq!(heap.remove(&30), None);
    assert_eq!(heap.remove(&5), Some(5));
    assert_eq!(heap.len(), 5);
    assert!(!heap.contains(&30));

    assert_eq!(heap.pop(), Some(10));
    assert_eq!(heap.pop(), Some(20));
    assert_eq!(heap.pop(), Some(40));
    assert_eq!(heap.pop(), Some(50));
    assert_eq!(heap.pop(), Some(60));
}

/// Test growth past the default capacity
fn test_growth<H: Heap<i32> + Default>() {
    let mut heap = H::default();
    for value in (0..1000).rev() {
        heap.push(value).unwrap();
    }
    assert_eq!(heap.len(), 1000);
    for value in 0..1000 {
        assert_eq!(heap.pop(), Some(value));
    }
    assert!(heap.is_empty());
}

/// Test clear followed by reuse
fn test_clear_and_reuse<H: Heap<i32> + Default>() {
    let mut heap = H::default();
    for value in 0..20 {
        heap.push(value).unwrap();
    }
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), None);

    heap.push(7).unwrap();
    heap.push(3).unwrap();
    assert_eq!(heap.pop(), Some(3));
    assert_eq!(heap.pop(), Some(7));
}

/// Test alternating insert and pop
fn test_alternating_ops<H: Heap<i32> + Default>() {
    let mut heap = H::default();
    for i in 0..200 {
        heap.push(i * 2).unwrap();
        heap.push(i * 2 + 1).unwrap();
        assert_eq!(heap.pop(), Some(i));
    }
    assert_eq!(heap.len(), 200);
    assert_eq!(heap.peek(), Some(&200));
}

#[test]
fn test_empty_heap_all() {
    test_empty_heap::<MinHeap<i32>>();
    test_empty_heap::<MinPriorityQueue<i32>>();
}

#[test]
fn test_basic_operations_all() {
    test_basic_operations::<MinHeap<i32>>();
    test_basic_operations::<MinPriorityQueue<i32>>();
}

#[test]
fn test_extraction_order_all() {
    test_extraction_order::<MinHeap<i32>>();
    test_extraction_order::<MinPriorityQueue<i32>>();
}

#[test]
fn test_remove_arbitrary_all() {
    test_remove_arbitrary::<MinHeap<i32>>();
    test_remove_arbitrary::<MinPriorityQueue<i32>>();
}

#[test]
fn test_growth_all() {
    test_growth::<MinHeap<i32>>();
    test_growth::<MinPriorityQueue<i32>>();
}

#[test]
fn test_clear_and_reuse_all() {
    test_clear_and_reuse::<MinHeap<i32>>();
    test_clear_and_reuse::<MinPriorityQueue<i32>>();
}

#[test]
fn test_alternating_ops_all() {
    test_alternating_ops::<MinHeap<i32>>();
    test_alternating_ops::<MinPriorityQueue<i32>>();
}
