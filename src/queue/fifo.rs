//! Insertion-order queue.

use super::WorkQueue;
use crate::core::WorkItem;
use std::collections::VecDeque;

/// Strict FIFO queue: items are dequeued in the order they were pushed.
///
/// Item priorities are ignored.
#[derive(Debug, Default)]
pub struct FifoQueue {
    items: VecDeque<WorkItem>,
}

impl FifoQueue {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new queue with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }
}

impl WorkQueue for FifoQueue {
    const ORDERING: &'static str = "fifo";

    fn push(&mut self, item: WorkItem) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<WorkItem> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
