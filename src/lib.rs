//! # Rust Task Pool
//!
//! A fixed-size worker pool that runs closures concurrently and hands back a
//! typed handle for each result.
//!
//! ## Features
//!
//! - **Fixed Thread Pool**: Worker count chosen at construction, never resized
//! - **Ordering Policies**: FIFO or priority dispatch, selected per pool by type
//! - **Result Handles**: Every submission returns a [`TaskHandle`] that yields the
//!   value, or the panic that ended the task
//! - **Failure Isolation**: A panicking task never takes its worker down
//! - **Graceful Shutdown**: Dropping the pool joins every worker; queued work
//!   resolves as [`ThreadError::Abandoned`]
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_task_pool::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let pool = ThreadPool::with_threads(4)?;
//!
//! let handles: Vec<_> = (0..10u64)
//!     .map(|i| pool.submit(move || i * 2))
//!     .collect();
//!
//! for (i, handle) in handles.into_iter().enumerate() {
//!     assert_eq!(handle.wait()?, i as u64 * 2);
//! }
//!
//! // Dropping the pool shuts it down
//! # Ok(())
//! # }
//! ```
//!
//! ## Priority Scheduling
//!
//! ```rust
//! use rust_task_pool::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let pool = ThreadPool::with_priority(2)?;
//!
//! let report = pool.submit_priority(Priority::new(-5), || "report");
//! let alert = pool.submit_priority(Priority::new(100), || "alert");
//!
//! assert_eq!(alert.wait()?, "alert");
//! assert_eq!(report.wait()?, "report");
//! pool.shutdown()?;
//! # Ok(())
//! # }
//! ```
//!
//! `submit_priority` only exists on priority pools:
//!
//! ```compile_fail
//! use rust_task_pool::prelude::*;
//!
//! let pool = ThreadPool::with_threads(2).unwrap();
//! pool.submit_priority(Priority::new(1), || ());
//! ```
//!
//! ## Task Failures
//!
//! ```rust
//! use rust_task_pool::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let pool = ThreadPool::with_threads(2)?;
//!
//! let handle = pool.submit(|| -> u32 { panic!("corrupt record") });
//! match handle.wait() {
//!     Err(ThreadError::TaskPanicked { message, .. }) => assert_eq!(message, "corrupt record"),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//!
//! // The worker that ran it is still serving tasks
//! assert_eq!(pool.submit(|| 1).wait()?, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Worker Statistics
//!
//! ```rust
//! use rust_task_pool::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let pool = ThreadPool::with_threads(2)?;
//! # let handles: Vec<_> = (0..10).map(|i| pool.submit(move || i)).collect();
//! # for h in handles { h.wait()?; }
//! for (i, stat) in pool.get_stats().iter().enumerate() {
//!     println!("Worker {}: {} tasks executed", i, stat.get_tasks_executed());
//! }
//!
//! println!("Running now: {}", pool.running_task_count());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod pool;
pub mod prelude;
pub mod queue;
#[cfg(feature = "tracing")]
pub mod telemetry;

pub use crate::core::{Priority, Result, TaskHandle, ThreadError, WorkItem};
pub use pool::{PriorityThreadPool, ThreadPool, ThreadPoolConfig, WorkerStats};
pub use queue::{FifoQueue, PriorityQueue, WorkQueue};
