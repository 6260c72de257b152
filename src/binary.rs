//! Array-backed binary heap
//!
//! The heap is a complete binary tree stored level by level in a `Vec`.
//! The root sits at index 0, the children of index `i` are at `2i + 1` and
//! `2i + 2`, and the parent of index `i > 0` is at `(i - 1) / 2`.
//!
//! One implementation serves both directions. [`MaxHeap`] and [`MinHeap`]
//! are aliases of [`BinaryHeap`] with the [`Order`] fixed to
//! [`MaxFirst`] or [`MinFirst`].
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `push`         | O(log n)   |
//! | `pop`          | O(log n)   |
//! | `pop_and_push` | O(log n)   |
//! | `peek`         | O(1)       |
//! | `reset`        | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use prioqueue::MaxHeap;
//!
//! let mut heap = MaxHeap::with_capacity(3);
//! heap.push(1, 0.3);
//! heap.push(2, 0.9);
//! heap.push(3, 0.5);
//!
//! assert_eq!(heap.peek().map(|item| item.id), Some(2));
//! assert_eq!(heap.pop().map(|item| item.id), Some(2));
//! assert_eq!(heap.pop().map(|item| item.id), Some(3));
//! assert_eq!(heap.pop().map(|item| item.id), Some(1));
//! assert_eq!(heap.pop(), None);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::mem;

use crate::item::Item;
use crate::order::{MaxFirst, MinFirst, Order};
use crate::traits::PriorityQueue;

/// Binary heap of [`Item`]s ordered by `O`
///
/// The root is always an element that no other queued element must be
/// dequeued before. Elements with equal priority come out in no particular
/// order.
pub struct BinaryHeap<O: Order> {
    items: Vec<Item>,
    _order: PhantomData<O>,
}

/// Heap that dequeues the highest priority first
pub type MaxHeap = BinaryHeap<MaxFirst>;

/// Heap that dequeues the lowest priority first
pub type MinHeap = BinaryHeap<MinFirst>;

impl<O: Order> BinaryHeap<O> {
    /// Creates an empty heap without allocating
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _order: PhantomData,
        }
    }

    /// Creates an empty heap with room for `capacity` elements
    ///
    /// The capacity is only a hint to avoid reallocations while the heap
    /// grows; `0` means no preallocation. The heap still grows past it.
    /// A hint too large to allocate is ignored.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut heap = Self::new();
        if heap.items.try_reserve_exact(capacity).is_err() {
            heap.items = Vec::new();
        }
        heap
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns the root element without removing it
    pub fn peek(&self) -> Option<Item> {
        self.items.first().copied()
    }

    /// Inserts an element with the given id and priority
    ///
    /// Ids are not checked for uniqueness.
    pub fn push(&mut self, id: u32, prio: f32) {
        self.push_item(Item { id, prio });
    }

    /// Inserts `item`
    pub fn push_item(&mut self, item: Item) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the root element
    pub fn pop(&mut self) -> Option<Item> {
        let last = self.items.pop()?;
        if self.items.is_empty() {
            return Some(last);
        }

        let root = mem::replace(&mut self.items[0], last);
        self.sift_down(0);
        Some(root)
    }

    /// Overwrites the root with `item` and returns the old root
    ///
    /// Leaves the heap with the same contents as `pop` followed by
    /// `push_item(item)`, but sifts only once and never resizes the
    /// backing storage. On an empty heap `item` is simply inserted and
    /// `None` is returned.
    pub fn pop_and_push(&mut self, item: Item) -> Option<Item> {
        let Some(root) = self.items.first_mut() else {
            self.items.push(item);
            return None;
        };

        let old = mem::replace(root, item);
        self.sift_down(0);
        Some(old)
    }

    /// Removes every element
    ///
    /// The backing storage is kept, so refilling the heap up to its
    /// previous size does not allocate. Drop the heap to release memory.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Returns the elements in heap order
    ///
    /// Only index 0 has a defined meaning (it is the element `peek`
    /// returns). The rest of the order is an implementation detail.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Consumes the heap, returning its elements in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<Item> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Move the element at `index` up until its parent precedes it
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if O::precedes(self.items[parent].prio, self.items[index].prio) {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    /// Move the element at `index` down until it precedes both children
    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let mut child = 2 * index + 1;
            if child >= len {
                break;
            }

            // Pick whichever child must come out first.
            let right = child + 1;
            if right < len && !O::precedes(self.items[child].prio, self.items[right].prio) {
                child = right;
            }

            if O::precedes(self.items[index].prio, self.items[child].prio) {
                break;
            }
            self.items.swap(index, child);
            index = child;
        }
    }
}

impl<O: Order> PriorityQueue for BinaryHeap<O> {
    fn len(&self) -> usize {
        self.len()
    }

    fn push(&mut self, id: u32, prio: f32) {
        self.push(id, prio)
    }

    fn peek(&self) -> Option<Item> {
        self.peek()
    }

    fn pop(&mut self) -> Option<Item> {
        self.pop()
    }

    fn pop_and_push(&mut self, item: Item) -> Option<Item> {
        self.pop_and_push(item)
    }

    fn reset(&mut self) {
        self.reset()
    }
}

impl<O: Order> Default for BinaryHeap<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Order> Clone for BinaryHeap<O> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            _order: PhantomData,
        }
    }
}

impl<O: Order> fmt::Debug for BinaryHeap<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("order", &O::NAME)
            .field("items", &self.items)
            .finish()
    }
}

impl<O: Order> Extend<Item> for BinaryHeap<O> {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.items.reserve(iter.size_hint().0);
        for item in iter {
            self.push_item(item);
        }
    }
}

impl<O: Order> FromIterator<Item> for BinaryHeap<O> {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
