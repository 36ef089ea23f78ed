//! Thread pool and worker implementations

mod shared;
pub mod thread_pool;
pub mod worker;

pub use thread_pool::{PriorityThreadPool, ThreadPool, ThreadPoolConfig};
pub use worker::WorkerStats;
