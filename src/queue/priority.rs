//! Priority-ordered queue.

use super::WorkQueue;
use crate::core::{Priority, WorkItem};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry: a work item plus its insertion sequence
struct Entry {
    priority: Priority,
    sequence: u64,
    item: WorkItem,
}

/// Higher priority comes first; if equal, earlier sequence (FIFO)
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.priority.cmp(&other.priority) {
            // Reverse the comparison because BinaryHeap is a max-heap
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            other => other,
        }
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl Eq for Entry {}

/// Priority queue: the item with the highest [`Priority`] is dequeued first.
///
/// Items of equal priority come out in insertion order. This tie-break is a
/// property of this type only; code written against [`WorkQueue`] must not
/// rely on it.
#[derive(Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<Entry>,
    sequence: u64,
}

impl PriorityQueue {
    /// Creates a new empty priority queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new priority queue with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            sequence: 0,
        }
    }

    /// Priority of the item that would be dequeued next
    pub fn peek_priority(&self) -> Option<Priority> {
        self.heap.peek().map(|entry| entry.priority)
    }
}

impl std::fmt::Debug for PriorityQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.heap.len())
            .field("next_priority", &self.peek_priority())
            .finish()
    }
}

impl WorkQueue for PriorityQueue {
    const ORDERING: &'static str = "priority";

    fn push(&mut self, item: WorkItem) {
        let sequence = self.sequence;
        self.sequence = self.sequence.wrapping_add(1);
        self.heap.push(Entry {
            priority: item.priority(),
            sequence,
            item,
        });
    }

    fn pop(&mut self) -> Option<WorkItem> {
        self.heap.pop().map(|entry| entry.item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, priority: i8) -> WorkItem {
        WorkItem::new(id, Priority::new(priority), Box::new(|| {}))
    }

    #[test]
    fn test_priority_ordering() {
        let mut queue = PriorityQueue::new();
        queue.push(item(0, 1));
        queue.push(item(1, 8));
        queue.push(item(2, 5));
        queue.push(item(3, 10));

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.peek_priority(), Some(Priority::new(10)));

        assert_eq!(queue.pop().unwrap().priority(), Priority::new(10));
        assert_eq!(queue.pop().unwrap().priority(), Priority::new(8));
        assert_eq!(queue.pop().unwrap().priority(), Priority::new(5));
        assert_eq!(queue.pop().unwrap().priority(), Priority::new(1));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_negative_priorities() {
        let mut queue = PriorityQueue::new();
        queue.push(item(0, -1));
        queue.push(item(1, i8::MIN));
        queue.push(item(2, 0));

        let order: Vec<u64> = std::iter::from_fn(|| queue.pop()).map(|i| i.id()).collect();
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn test_fifo_within_priority() {
        let mut queue = PriorityQueue::with_capacity(8);
        for id in 0..5 {
            queue.push(item(id, 3));
        }
        queue.push(item(99, 7));

        assert_eq!(queue.pop().unwrap().id(), 99);
        for id in 0..5 {
            assert_eq!(queue.pop().unwrap().id(), id);
        }
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut queue = PriorityQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.peek_priority(), None);

        queue.push(item(1, 0));
        assert!(!queue.is_empty());
        assert_eq!(queue.len(), 1);

        queue.pop();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }
}
