//! Ordering disciplines for pending work.
//!
//! A [`WorkQueue`] decides which queued [`WorkItem`] a worker receives next.
//! The pool picks one implementation through its type parameter and keeps it
//! for its whole lifetime:
//!
//! - [`FifoQueue`]: strict insertion order (default)
//! - [`PriorityQueue`]: highest [`Priority`](crate::core::Priority) first
//!
//! Queues do no locking of their own. Every call is made while the pool's
//! mutex is held, which also guards the stop flag and the running counter.
//!
//! # Custom Queues
//!
//! ```rust
//! use rust_task_pool::core::WorkItem;
//! use rust_task_pool::queue::WorkQueue;
//!
//! /// Newest-first ordering
//! #[derive(Default)]
//! struct LifoQueue {
//!     items: Vec<WorkItem>,
//! }
//!
//! impl WorkQueue for LifoQueue {
//!     const ORDERING: &'static str = "lifo";
//!
//!     fn push(&mut self, item: WorkItem) {
//!         self.items.push(item);
//!     }
//!
//!     fn pop(&mut self) -> Option<WorkItem> {
//!         self.items.pop()
//!     }
//!
//!     fn len(&self) -> usize {
//!         self.items.len()
//!     }
//! }
//! ```

mod fifo;
mod priority;

pub use fifo::FifoQueue;
pub use priority::PriorityQueue;

use crate::core::WorkItem;

/// Container of pending work with a fixed dequeue order.
pub trait WorkQueue: Default + Send + 'static {
    /// Short name of the ordering policy, used in logs
    const ORDERING: &'static str;

    /// Insert an item. Never blocks and never fails.
    fn push(&mut self, item: WorkItem);

    /// Remove the next item according to the ordering policy.
    ///
    /// The pool only calls this after observing `!is_empty()` under its lock.
    fn pop(&mut self) -> Option<WorkItem>;

    /// Number of queued items
    fn len(&self) -> usize;

    /// Whether the queue holds no items
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
