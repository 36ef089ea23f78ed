//! Convenient re-exports for common types and traits

pub use crate::core::{Priority, Result, TaskHandle, ThreadError};
pub use crate::pool::{PriorityThreadPool, ThreadPool, ThreadPoolConfig, WorkerStats};
pub use crate::queue::{FifoQueue, PriorityQueue, WorkQueue};
