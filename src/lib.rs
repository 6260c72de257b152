//! Binary Heap Priority Queues for Rust
//!
//! This crate provides array-backed binary heaps over `(id, priority)` pairs
//! for callers that repeatedly insert elements and extract the best one,
//! such as graph searches and event schedulers.
//!
//! # Features
//!
//! - **[`MaxHeap`]**: dequeues the highest priority first
//! - **[`MinHeap`]**: dequeues the lowest priority first
//! - **`pop_and_push`**: replaces the best element with a single sift-down
//! - **`reset`**: empties a heap while keeping its storage for reuse
//! - **[`StdHeap`](stdlib_compat::StdHeap)**: the same interface on top of
//!   `std::collections::BinaryHeap`, used as a baseline
//!
//! Both heaps share one implementation, [`BinaryHeap`], parameterized by an
//! [`Order`](order::Order). Ids are opaque and their uniqueness is up to the
//! caller. Priorities are `f32`; NaN priorities leave the order unspecified.
//! There is no `decrease_key`: to change the priority of a queued element,
//! pop it and push it again.
//!
//! # Example
//!
//! ```rust
//! use prioqueue::MinHeap;
//!
//! let mut queue = MinHeap::with_capacity(4);
//! queue.push(1, 2.5);
//! queue.push(2, 0.5);
//! queue.push(3, 1.5);
//!
//! let item = queue.pop().unwrap();
//! assert_eq!((item.id, item.prio), (2, 0.5));
//! assert_eq!(queue.len(), 2);
//! ```
//!
//! # Cargo features
//!
//! - `serde`: derives `Serialize` and `Deserialize` for [`Item`].

pub mod binary;
pub mod item;
pub mod order;
pub mod stdlib_compat;
pub mod traits;

pub use binary::{BinaryHeap, MaxHeap, MinHeap};
pub use item::Item;
pub use traits::PriorityQueue;
