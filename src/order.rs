//! Ordering direction for [`BinaryHeap`](crate::binary::BinaryHeap)
//!
//! Max-first and min-first heaps run the same sift-up and sift-down code.
//! The only thing that differs is the predicate deciding whether a parent
//! may stay above its child, and that predicate lives here.

use std::cmp::Ordering;

/// The order relation a heap maintains between a parent and its children
pub trait Order {
    /// Short label used in test and benchmark names
    const NAME: &'static str;

    /// Returns true if an element with priority `a` must not be dequeued
    /// after one with priority `b`
    ///
    /// Ties return true, so sift loops stop on equal priorities.
    fn precedes(a: f32, b: f32) -> bool;

    /// Total order over priorities where `Greater` means `a` is dequeued first
    ///
    /// Agrees with [`precedes`](Order::precedes) for every non-NaN pair,
    /// including `-0.0` against `0.0`, and places NaN via [`f32::total_cmp`].
    fn rank(a: f32, b: f32) -> Ordering;
}

/// Highest priority is dequeued first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaxFirst;

/// Lowest priority is dequeued first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinFirst;

impl Order for MaxFirst {
    const NAME: &'static str = "max";

    #[inline]
    fn precedes(a: f32, b: f32) -> bool {
        a >= b
    }

    fn rank(a: f32, b: f32) -> Ordering {
        a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
    }
}

impl Order for MinFirst {
    const NAME: &'static str = "min";

    #[inline]
    fn precedes(a: f32, b: f32) -> bool {
        a <= b
    }

    fn rank(a: f32, b: f32) -> Ordering {
        b.partial_cmp(&a).unwrap_or_else(|| b.total_cmp(&a))
    }
}
