//! Task priority levels
//!
//! Priorities only matter on a pool configured with
//! [`PriorityQueue`](crate::queue::PriorityQueue) ordering.

use std::fmt;

/// Signed task priority (higher value = dequeued first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Priority(i8);

impl Priority {
    /// Lowest representable priority
    pub const MIN: Priority = Priority(i8::MIN);
    /// Baseline priority, used by non-priority submissions
    pub const NORMAL: Priority = Priority(0);
    /// Highest representable priority
    pub const MAX: Priority = Priority(i8::MAX);

    /// Create a priority from its numeric value
    pub const fn new(value: i8) -> Self {
        Priority(value)
    }

    /// Get the numeric value of the priority
    pub const fn value(&self) -> i8 {
        self.0
    }
}

impl From<i8> for Priority {
    fn from(value: i8) -> Self {
        Priority(value)
    }
}

impl From<Priority> for i8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
