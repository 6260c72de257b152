//! Basic usage of a max-first queue
//!
//! Pushes ten pseudo-random priorities and prints them in the order the
//! queue hands them back, highest first.
//!
//! ## Running
//!
//! ```bash
//! cargo run --example basic
//! ```

use prioqueue::{Item, MaxHeap};

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next_f32(&mut self) -> f32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 40) as f32 / (1u64 << 24) as f32
    }
}

fn main() {
    // Knowing the size up front avoids reallocations while pushing. Pass 0
    // when the size is unknown and the queue will grow as needed.
    let n = 10;
    let mut rng = Lcg::new(42);

    let mut queue = MaxHeap::with_capacity(n);
    for i in 0..n {
        // Ids must be unique among queued elements; the queue does not check.
        let id = i as u32;
        queue.push(id, rng.next_f32());
    }
    eprintln!("pushed {} items (capacity {})", queue.len(), queue.capacity());

    // Replace the current best with a middling priority in one step.
    if let Some(best) = queue.pop_and_push(Item::new(n as u32, 0.5)) {
        println!("{:.2} (id {}) replaced", best.prio, best.id);
    }

    while let Some(item) = queue.pop() {
        println!("{:.2} (id {})", item.prio, item.id);
    }
}
