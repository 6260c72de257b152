//! Common interface for the priority queues in this crate
//!
//! [`PriorityQueue`] is implemented by [`MaxHeap`](crate::MaxHeap),
//! [`MinHeap`](crate::MinHeap) and the [`StdHeap`](crate::stdlib_compat::StdHeap)
//! reference heap, so generic code (tests, benchmarks, callers that pick the
//! direction at a higher level) can be written once for all of them.

use crate::item::Item;

/// Queue of [`Item`]s ordered by priority
///
/// # Example
///
/// ```rust
/// use prioqueue::{MaxHeap, PriorityQueue};
///
/// fn drain<Q: PriorityQueue>(queue: &mut Q) -> Vec<u32> {
///     let mut ids = Vec::new();
///     while let Some(item) = queue.pop() {
///         ids.push(item.id);
///     }
///     ids
/// }
///
/// let mut heap = MaxHeap::new();
/// heap.push(1, 0.5);
/// heap.push(2, 0.9);
/// assert_eq!(drain(&mut heap), vec![2, 1]);
/// ```
pub trait PriorityQueue {
    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element with the given id and priority
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, id: u32, prio: f32);

    /// Returns the element that would be dequeued next, without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<Item>;

    /// Removes and returns the element that comes first in the queue's order
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<Item>;

    /// Replaces the first element with `item` and returns the element it displaced
    ///
    /// Equivalent to `pop` followed by `push`, as far as the queue's
    /// contents are concerned. On an empty queue this is a plain push and
    /// returns `None`.
    fn pop_and_push(&mut self, item: Item) -> Option<Item>;

    /// Removes every element, keeping allocated storage for reuse
    fn reset(&mut self);
}
