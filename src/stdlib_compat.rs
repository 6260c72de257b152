//! Reference heap built on `std::collections::BinaryHeap`
//!
//! [`StdHeap`] yields the same order as [`BinaryHeap`](crate::binary::BinaryHeap)
//! with the same [`Order`], but does all the heap work through the standard
//! library. It serves as the baseline in benchmarks and as an oracle in
//! differential tests.
//!
//! # Differences from the array heaps
//!
//! - Priorities are compared with [`Order::rank`], so NaN has a defined
//!   position instead of an unspecified one.
//! - The storage layout is not exposed.
//!
//! # Example
//!
//! ```rust
//! use prioqueue::order::MinFirst;
//! use prioqueue::stdlib_compat::StdHeap;
//! use prioqueue::PriorityQueue;
//!
//! let mut heap: StdHeap<MinFirst> = StdHeap::new();
//! heap.push(1, 5.0);
//! heap.push(2, 3.0);
//! heap.push(3, 7.0);
//! assert_eq!(heap.peek().map(|item| item.id), Some(2));
//! assert_eq!(heap.pop().map(|item| item.id), Some(2));
//! ```

use std::cmp::Ordering;
use std::collections;
use std::marker::PhantomData;
use std::mem;

use crate::item::Item;
use crate::order::Order;
use crate::traits::PriorityQueue;

/// An [`Item`] that compares by priority in the direction given by `O`
///
/// `std::collections::BinaryHeap` pops its greatest element, so the
/// wrapper ranks an item greater when `O` wants it dequeued first.
struct Ranked<O: Order> {
    item: Item,
    _order: PhantomData<O>,
}

impl<O: Order> Ranked<O> {
    fn new(item: Item) -> Self {
        Self {
            item,
            _order: PhantomData,
        }
    }
}

impl<O: Order> Ord for Ranked<O> {
    fn cmp(&self, other: &Self) -> Ordering {
        O::rank(self.item.prio, other.item.prio)
    }
}

impl<O: Order> PartialOrd for Ranked<O> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<O: Order> PartialEq for Ranked<O> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<O: Order> Eq for Ranked<O> {}

/// Priority queue backed by `std::collections::BinaryHeap`
pub struct StdHeap<O: Order> {
    heap: collections::BinaryHeap<Ranked<O>>,
}

impl<O: Order> StdHeap<O> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            heap: collections::BinaryHeap::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` elements
    ///
    /// A hint too large to allocate is ignored.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut heap = Self::new();
        if heap.heap.try_reserve_exact(capacity).is_err() {
            heap.heap = collections::BinaryHeap::new();
        }
        heap
    }

    /// Inserts `item`
    pub fn push_item(&mut self, item: Item) {
        self.heap.push(Ranked::new(item));
    }
}

impl<O: Order> PriorityQueue for StdHeap<O> {
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, id: u32, prio: f32) {
        self.push_item(Item { id, prio });
    }

    fn peek(&self) -> Option<Item> {
        self.heap.peek().map(|ranked| ranked.item)
    }

    fn pop(&mut self) -> Option<Item> {
        self.heap.pop().map(|ranked| ranked.item)
    }

    fn pop_and_push(&mut self, item: Item) -> Option<Item> {
        // The guard re-sifts the new top when it drops.
        if let Some(mut top) = self.heap.peek_mut() {
            return Some(mem::replace(&mut top.item, item));
        }
        self.push_item(item);
        None
    }

    fn reset(&mut self) {
        self.heap.clear();
    }
}

impl<O: Order> Default for StdHeap<O> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{MaxFirst, MinFirst};

    #[test]
    fn test_direction_follows_order() {
        let mut max: StdHeap<MaxFirst> = StdHeap::new();
        let mut min: StdHeap<MinFirst> = StdHeap::new();
        for (id, prio) in [(1, 2.0), (2, 9.0), (3, -4.0)] {
            max.push(id, prio);
            min.push(id, prio);
        }

        assert_eq!(max.pop(), Some(Item::new(2, 9.0)));
        assert_eq!(min.pop(), Some(Item::new(3, -4.0)));
    }

    #[test]
    fn test_pop_and_push() {
        let mut heap: StdHeap<MaxFirst> = StdHeap::with_capacity(4);
        assert_eq!(heap.pop_and_push(Item::new(1, 1.0)), None);
        heap.push(2, 5.0);

        assert_eq!(heap.pop_and_push(Item::new(3, 0.5)), Some(Item::new(2, 5.0)));
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.pop(), Some(Item::new(1, 1.0)));
        assert_eq!(heap.pop(), Some(Item::new(3, 0.5)));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_oversized_capacity_hint_is_ignored() {
        let mut heap: StdHeap<MinFirst> = StdHeap::with_capacity(usize::MAX);
        heap.push(1, 3.0);
        heap.push(2, 1.0);
        assert_eq!(heap.pop(), Some(Item::new(2, 1.0)));
        assert_eq!(heap.pop(), Some(Item::new(1, 3.0)));
        assert_eq!(heap.pop(), None);
    }
}
