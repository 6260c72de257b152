//! Big-O complexity checks for heap operations
//!
//! Empirically verifies that push, pop and pop_and_push stay within
//! O(log n) per element using the `big-o-test` crate.
//!
//! ## Testing Strategy
//!
//! We use `test_algorithm` to measure batch operations, so O(log n)
//! per-element operations appear as O(n log n) for n operations. Inputs
//! are chosen to hit the worst case for the heap's direction: ascending
//! priorities make every max-heap push sift all the way to the root.
//!
//! Note: These are empirical tests, not formal proofs. They detect significant
//! deviations from expected behavior but may not catch subtle issues with
//! specific input patterns.

use big_o_test::{test_algorithm, BigOAlgorithmComplexity};
use prioqueue::binary::BinaryHeap;
use prioqueue::order::{MaxFirst, MinFirst, Order};
use prioqueue::Item;

use ctor::ctor;
use parking_lot::RwLock;
use std::sync::Arc;

/// Sets up the ENV, affecting the Rust's test runner
#[ctor]
fn setup_env() {
    // timing measurements are unreliable when tests run in parallel
    std::env::set_var("RUST_TEST_THREADS", "1");
}

/// Priority of the `i`-th element in an order that the heap `O` has to
/// sift as far as possible
fn worst_case_prio<O: Order>(i: u32) -> f32 {
    if O::precedes(1.0, 0.0) {
        i as f32
    } else {
        -(i as f32)
    }
}

fn fill<O: Order>(heap: &mut BinaryHeap<O>, n: u32) {
    for i in 0..n {
        heap.push(i, worst_case_prio::<O>(i));
    }
}

/// Test that n pushes has O(n log n) batch complexity
fn test_push_batch_complexity<O: Order>(heap_name: &str) {
    let heap = Arc::new(RwLock::new(BinaryHeap::<O>::new()));

    test_algorithm(
        &format!("{} push batch", heap_name),
        3,
        || {
            *heap.write() = BinaryHeap::new();
        },
        1000,
        || {
            fill(&mut heap.write(), 1000);
            42
        },
        2000,
        || {
            fill(&mut heap.write(), 2000);
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}

/// Test that n pops has O(n log n) batch complexity
fn test_pop_batch_complexity<O: Order>(heap_name: &str) {
    let heap = Arc::new(RwLock::new(BinaryHeap::<O>::new()));

    test_algorithm(
        &format!("{} pop batch", heap_name),
        3,
        || {
            *heap.write() = BinaryHeap::new();
        },
        1000,
        || {
            let mut h = heap.write();
            fill(&mut h, 1000);
            for _ in 0..1000 {
                assert!(
                    h.pop().is_some(),
                    "pop() must succeed after pushing elements"
                );
            }
            42
        },
        2000,
        || {
            let mut h = heap.write();
            fill(&mut h, 2000);
            for _ in 0..2000 {
                assert!(
                    h.pop().is_some(),
                    "pop() must succeed after pushing elements"
                );
            }
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}

/// Test that n root replacements has O(n log n) batch complexity
///
/// Each replacement is the least urgent element so far, which makes it
/// sink to the bottom level.
fn test_pop_and_push_batch_complexity<O: Order>(heap_name: &str) {
    let heap = Arc::new(RwLock::new(BinaryHeap::<O>::new()));

    let replace_all = |h: &mut BinaryHeap<O>, n: u32| {
        fill(h, n);
        for i in 0..n {
            let sink_to_bottom = worst_case_prio::<O>(i) - 1.0e6 * worst_case_prio::<O>(1);
            assert!(h.pop_and_push(Item::new(n + i, sink_to_bottom)).is_some());
        }
        assert_eq!(h.len(), n as usize);
    };

    test_algorithm(
        &format!("{} pop_and_push batch", heap_name),
        3,
        || {
            *heap.write() = BinaryHeap::new();
        },
        1000,
        || {
            replace_all(&mut heap.write(), 1000);
            42
        },
        2000,
        || {
            replace_all(&mut heap.write(), 2000);
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}

// ============================================================================
// Max Heap Tests
// ============================================================================

#[test]
fn test_max_heap_push() {
    test_push_batch_complexity::<MaxFirst>("MaxHeap");
}

#[test]
fn test_max_heap_pop() {
    test_pop_batch_complexity::<MaxFirst>("MaxHeap");
}

#[test]
fn test_max_heap_pop_and_push() {
    test_pop_and_push_batch_complexity::<MaxFirst>("MaxHeap");
}

// ============================================================================
// Min Heap Tests
// ============================================================================

#[test]
fn test_min_heap_push() {
    test_push_batch_complexity::<MinFirst>("MinHeap");
}

#[test]
fn test_min_heap_pop() {
    test_pop_batch_complexity::<MinFirst>("MinHeap");
}

#[test]
fn test_min_heap_pop_and_push() {
    test_pop_and_push_batch_complexity::<MinFirst>("MinHeap");
}
