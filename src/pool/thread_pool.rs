//! Thread pool implementation

use crate::core::task::package;
use crate::core::{Priority, Result, TaskHandle, ThreadError};
use crate::pool::shared::Shared;
use crate::pool::worker::{Worker, WorkerOptions, WorkerStats};
use crate::queue::{FifoQueue, PriorityQueue, WorkQueue};
use std::sync::Arc;

/// Configuration for thread pool
#[derive(Debug, Clone)]
pub struct ThreadPoolConfig {
    /// Number of worker threads (must be greater than 0)
    pub num_threads: usize,
    /// Thread name prefix; workers are named `{prefix}-{id}`
    pub thread_name_prefix: String,
    /// Stack size for worker threads in bytes (None = platform default)
    pub stack_size: Option<usize>,
}

impl Default for ThreadPoolConfig {
    fn default() -> Self {
        Self {
            num_threads: num_cpus::get(),
            thread_name_prefix: "worker".to_string(),
            stack_size: None,
        }
    }
}

impl ThreadPoolConfig {
    /// Create a new configuration with specified number of threads
    ///
    /// Zero is kept as-is and rejected by [`validate`](Self::validate).
    #[must_use]
    pub fn new(num_threads: usize) -> Self {
        Self {
            num_threads,
            ..Default::default()
        }
    }

    /// Set thread name prefix
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_thread_name_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// Set the stack size of each worker thread in bytes
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = Some(size);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_threads == 0 {
            return Err(ThreadError::invalid_config(
                "num_threads",
                "Number of threads must be greater than 0",
            ));
        }
        if self.stack_size == Some(0) {
            return Err(ThreadError::invalid_config(
                "stack_size",
                "Stack size must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// A fixed-size pool of worker threads
///
/// The type parameter selects the dequeue order for the lifetime of the pool:
/// [`FifoQueue`] (the default) runs tasks in submission order, while
/// [`PriorityQueue`] runs the highest [`Priority`] first and unlocks
/// [`submit_priority`](ThreadPool::submit_priority).
///
/// # Shutdown
///
/// Dropping the pool (or calling [`shutdown`](Self::shutdown)) raises the stop
/// flag, wakes every worker and waits for each one to finish the task it is
/// currently running. Tasks still queued at that point are never executed;
/// their handles resolve with [`ThreadError::Abandoned`].
///
/// # Example
///
/// ```
/// use rust_task_pool::prelude::*;
///
/// # fn main() -> Result<()> {
/// let pool = ThreadPool::with_threads(4)?;
///
/// let handles: Vec<_> = (0..8u64).map(|i| pool.submit(move || i * i)).collect();
/// let total: u64 = handles
///     .into_iter()
///     .map(|h| h.wait())
///     .collect::<Result<Vec<_>>>()?
///     .into_iter()
///     .sum();
///
/// assert_eq!(total, 140);
/// # Ok(())
/// # }
/// ```
pub struct ThreadPool<Q: WorkQueue = FifoQueue> {
    config: ThreadPoolConfig,
    workers: Vec<Worker>,
    shared: Arc<Shared<Q>>,
}

/// Thread pool that dequeues by priority
pub type PriorityThreadPool = ThreadPool<PriorityQueue>;

impl<Q: WorkQueue> std::fmt::Debug for ThreadPool<Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadPool")
            .field("config", &self.config)
            .field("ordering", &Q::ORDERING)
            .field("workers", &self.workers.len())
            .finish()
    }
}

impl ThreadPool {
    /// Create a FIFO thread pool with one worker per CPU
    pub fn new() -> Result<Self> {
        Self::with_config(ThreadPoolConfig::default())
    }

    /// Create a FIFO thread pool with specified number of threads
    pub fn with_threads(num_threads: usize) -> Result<Self> {
        Self::with_config(ThreadPoolConfig::new(num_threads))
    }

    /// Create a FIFO thread pool with custom configuration
    pub fn with_config(config: ThreadPoolConfig) -> Result<Self> {
        Self::build(config)
    }
}

impl ThreadPool<PriorityQueue> {
    /// Create a priority-ordered thread pool with specified number of threads
    pub fn with_priority(num_threads: usize) -> Result<Self> {
        Self::with_priority_config(ThreadPoolConfig::new(num_threads))
    }

    /// Create a priority-ordered thread pool with custom configuration
    pub fn with_priority_config(config: ThreadPoolConfig) -> Result<Self> {
        Self::build(config)
    }

    /// Submit a closure with an explicit priority
    ///
    /// Higher values run first. Tasks of equal priority run in submission
    /// order. Tasks submitted through [`submit`](Self::submit) on this pool
    /// use [`Priority::NORMAL`].
    ///
    /// # Example
    ///
    /// ```
    /// use rust_task_pool::prelude::*;
    ///
    /// # fn main() -> Result<()> {
    /// let pool = ThreadPool::with_priority(2)?;
    /// let urgent = pool.submit_priority(Priority::new(10), || "urgent");
    /// let routine = pool.submit_priority(Priority::new(-1), || "routine");
    ///
    /// assert_eq!(urgent.wait()?, "urgent");
    /// assert_eq!(routine.wait()?, "routine");
    /// # Ok(())
    /// # }
    /// ```
    pub fn submit_priority<F, T>(&self, priority: impl Into<Priority>, f: F) -> TaskHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        self.enqueue(priority.into(), f)
    }
}

impl<Q: WorkQueue> ThreadPool<Q> {
    /// Validate the config and spawn every worker
    ///
    /// If a spawn fails, the workers already started are stopped and joined
    /// when the partially built pool is dropped.
    fn build(config: ThreadPoolConfig) -> Result<Self> {
        config.validate()?;

        let mut pool = Self {
            workers: Vec::with_capacity(config.num_threads),
            shared: Arc::new(Shared::new()),
            config,
        };

        for id in 0..pool.config.num_threads {
            let options = WorkerOptions {
                name: format!("{}-{}", pool.config.thread_name_prefix, id),
                stack_size: pool.config.stack_size,
            };
            let worker = Worker::spawn(id, options, Arc::clone(&pool.shared))?;
            pool.workers.push(worker);
        }

        #[cfg(feature = "tracing")]
        crate::telemetry::record_pool_start(pool.workers.len(), Q::ORDERING);

        Ok(pool)
    }

    /// Submit a closure and get a handle to its result
    ///
    /// Arguments are passed by capturing them in a `move` closure. The call
    /// returns as soon as the task is queued; it never waits for execution.
    /// A panic inside `f` is caught and delivered through the handle as
    /// [`ThreadError::TaskPanicked`].
    ///
    /// # Example
    ///
    /// ```
    /// use rust_task_pool::prelude::*;
    ///
    /// # fn main() -> Result<()> {
    /// let pool = ThreadPool::with_threads(2)?;
    ///
    /// let text = String::from("hello");
    /// let handle = pool.submit(move || text.len());
    /// assert_eq!(handle.wait()?, 5);
    ///
    /// let failing = pool.submit(|| -> u32 { panic!("bad input") });
    /// assert!(matches!(failing.wait(), Err(ThreadError::TaskPanicked { .. })));
    /// # Ok(())
    /// # }
    /// ```
    pub fn submit<F, T>(&self, f: F) -> TaskHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        self.enqueue(Priority::NORMAL, f)
    }

    fn enqueue<F, T>(&self, priority: Priority, f: F) -> TaskHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (item, handle) = package(priority, f);

        {
            let mut state = self.shared.state.lock();
            state.queue.push(item);

            #[cfg(feature = "tracing")]
            crate::telemetry::record_submission(handle.task_id(), state.queue.len());
        }

        self.shared.available.notify_one();
        handle
    }

    /// Get the number of worker threads
    pub fn thread_count(&self) -> usize {
        self.config.num_threads
    }

    /// Get the number of tasks currently executing
    ///
    /// A snapshot for monitoring only; it may be stale by the time it is read.
    pub fn running_task_count(&self) -> usize {
        self.shared.state.lock().running
    }

    /// Get the number of tasks waiting in the queue
    pub fn pending_task_count(&self) -> usize {
        self.shared.state.lock().queue.len()
    }

    /// Get the pool configuration
    pub fn config(&self) -> &ThreadPoolConfig {
        &self.config
    }

    /// Get statistics for all workers
    pub fn get_stats(&self) -> Vec<Arc<WorkerStats>> {
        self.workers.iter().map(|w| w.stats()).collect()
    }

    /// Get total tasks executed across all workers
    pub fn total_tasks_executed(&self) -> u64 {
        self.workers
            .iter()
            .map(|w| w.stats().get_tasks_executed())
            .sum()
    }

    /// Shut the pool down and wait for all workers to exit
    ///
    /// Equivalent to dropping the pool, but reports a worker that could not
    /// be joined.
    pub fn shutdown(mut self) -> Result<()> {
        self.stop_workers()
    }

    /// Stop and join every worker, then discard queued tasks
    ///
    /// Does nothing once the workers have been joined.
    fn stop_workers(&mut self) -> Result<()> {
        if self.workers.is_empty() {
            return Ok(());
        }

        self.shared.request_stop();

        #[cfg(feature = "tracing")]
        let stats = self.get_stats();

        let mut first_error = None;
        for worker in self.workers.drain(..) {
            if let Err(e) = worker.join() {
                first_error.get_or_insert(e);
            }
        }

        // Dropped outside the lock; each item's handle resolves as abandoned
        let abandoned = std::mem::take(&mut self.shared.state.lock().queue);
        #[cfg(feature = "tracing")]
        crate::telemetry::record_pool_shutdown(
            stats.iter().map(|s| s.get_tasks_executed()).sum(),
            abandoned.len(),
        );
        drop(abandoned);

        first_error.map_or(Ok(()), Err)
    }
}

impl<Q: WorkQueue> Drop for ThreadPool<Q> {
    fn drop(&mut self) {
        if let Err(e) = self.stop_workers() {
            #[cfg(feature = "tracing")]
            tracing::error!(error = %e, "failed to shut down thread pool during drop");
            #[cfg(not(feature = "tracing"))]
            eprintln!(
                "[THREAD_POOL ERROR] Failed to shutdown thread pool '{}' during drop: {}",
                self.config.thread_name_prefix, e
            );
        }
    }
}
