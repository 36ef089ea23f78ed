//! Worker thread implementation

use crate::core::task::panic_message;
use crate::core::{Result, ThreadError, WorkItem};
use crate::pool::shared::Shared;
use crate::queue::WorkQueue;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

#[cfg(feature = "tracing")]
use tracing::{debug, span, Level};

/// Statistics for a worker thread
#[derive(Debug, Default)]
pub struct WorkerStats {
    /// Total number of tasks executed (including ones that panicked)
    pub tasks_executed: AtomicU64,
    /// Total time spent executing tasks (microseconds)
    pub total_busy_time_us: AtomicU64,
}

impl WorkerStats {
    /// Create new worker statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one executed task and the time it took
    pub fn record_task(&self, microseconds: u64) {
        self.tasks_executed.fetch_add(1, Ordering::Relaxed);
        self.total_busy_time_us
            .fetch_add(microseconds, Ordering::Relaxed);
    }

    /// Get total tasks executed
    pub fn get_tasks_executed(&self) -> u64 {
        self.tasks_executed.load(Ordering::Relaxed)
    }

    /// Get total busy time in microseconds
    pub fn get_busy_time_us(&self) -> u64 {
        self.total_busy_time_us.load(Ordering::Relaxed)
    }

    /// Get average execution time per task in microseconds
    pub fn get_average_task_time_us(&self) -> f64 {
        let total = self.total_busy_time_us.load(Ordering::Relaxed);
        let count = self.tasks_executed.load(Ordering::Relaxed);
        if count > 0 {
            total as f64 / count as f64
        } else {
            0.0
        }
    }
}

/// Spawn options for a worker thread
#[derive(Debug, Clone)]
pub(crate) struct WorkerOptions {
    pub(crate) name: String,
    pub(crate) stack_size: Option<usize>,
}

/// A worker thread that executes items from the shared queue
#[derive(Debug)]
pub(crate) struct Worker {
    id: usize,
    thread: Option<thread::JoinHandle<()>>,
    stats: Arc<WorkerStats>,
}

impl Worker {
    /// Spawn a worker thread running the dispatch loop over `shared`
    pub(crate) fn spawn<Q: WorkQueue>(
        id: usize,
        options: WorkerOptions,
        shared: Arc<Shared<Q>>,
    ) -> Result<Self> {
        let stats = Arc::new(WorkerStats::new());
        let stats_clone = Arc::clone(&stats);

        let mut builder = thread::Builder::new().name(options.name);
        if let Some(size) = options.stack_size {
            builder = builder.stack_size(size);
        }

        let thread = builder
            .spawn(move || {
                Self::run(id, &shared, &stats_clone);
            })
            .map_err(|e| ThreadError::spawn_with_source(id, e.to_string(), e))?;

        Ok(Self {
            id,
            thread: Some(thread),
            stats,
        })
    }

    /// Get worker statistics
    pub fn stats(&self) -> Arc<WorkerStats> {
        Arc::clone(&self.stats)
    }

    /// Join the worker thread
    pub fn join(mut self) -> Result<()> {
        if let Some(thread) = self.thread.take() {
            thread
                .join()
                .map_err(|_| ThreadError::join(self.id, "Worker panicked"))?;
        }
        Ok(())
    }

    /// Main worker loop
    ///
    /// Idle workers sleep on the condition variable until an item is queued or
    /// the stop flag is raised. Items left in the queue when the flag is
    /// observed are not executed.
    fn run<Q: WorkQueue>(id: usize, shared: &Shared<Q>, stats: &WorkerStats) {
        #[cfg(feature = "tracing")]
        let worker_span = span!(Level::DEBUG, "worker", id = id);
        #[cfg(feature = "tracing")]
        let _guard = worker_span.enter();

        #[cfg(feature = "tracing")]
        debug!("worker started");

        // Whether this thread is counted in `running` from the previous item
        let mut busy = false;

        loop {
            let item = {
                let mut state = shared.state.lock();
                if std::mem::take(&mut busy) {
                    state.running -= 1;
                }

                while !state.stop && state.queue.is_empty() {
                    shared.available.wait(&mut state);
                }

                if state.stop {
                    break;
                }

                match state.queue.pop() {
                    Some(item) => {
                        state.running += 1;
                        busy = true;
                        item
                    }
                    None => continue,
                }
            };

            Self::execute(id, item, stats);
        }

        #[cfg(feature = "tracing")]
        debug!(
            tasks_executed = stats.get_tasks_executed(),
            "worker shutting down"
        );
    }

    /// Execute a single item outside the pool lock
    #[allow(unused_variables)]
    fn execute(id: usize, item: WorkItem, stats: &WorkerStats) {
        #[cfg(feature = "tracing")]
        crate::telemetry::record_worker_busy(id);

        #[cfg(feature = "tracing")]
        let task_span = span!(
            Level::DEBUG,
            "task_execution",
            task_id = item.id(),
            priority = item.priority().value()
        );
        #[cfg(feature = "tracing")]
        let _task_guard = task_span.enter();

        let task_id = item.id();
        let start = std::time::Instant::now();

        // The item catches panics from the task itself. Anything raised while
        // publishing its outcome (a destructor of an unclaimed result) lands here.
        if let Err(payload) = catch_unwind(AssertUnwindSafe(|| item.run())) {
            let message = panic_message(payload.as_ref());
            #[cfg(feature = "tracing")]
            crate::telemetry::record_panic(task_id, &message);
            // The payload's own destructor may panic as well
            std::mem::forget(payload);
        }

        let elapsed = start.elapsed();
        stats.record_task(elapsed.as_micros() as u64);

        #[cfg(feature = "tracing")]
        {
            crate::telemetry::record_completion(elapsed);
            crate::telemetry::record_worker_idle(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::package;
    use crate::core::Priority;
    use crate::queue::FifoQueue;

    fn options(id: usize) -> WorkerOptions {
        WorkerOptions {
            name: format!("test-worker-{}", id),
            stack_size: None,
        }
    }

    #[test]
    fn test_worker_creation() {
        let shared = Arc::new(Shared::<FifoQueue>::new());

        let worker =
            Worker::spawn(0, options(0), Arc::clone(&shared)).expect("Failed to spawn worker");

        shared.request_stop();
        worker.join().expect("Failed to join worker");

        // The worker released its reference on exit
        assert_eq!(Arc::strong_count(&shared), 1);
    }

    #[test]
    fn test_worker_task_execution() {
        let shared = Arc::new(Shared::<FifoQueue>::new());
        let worker =
            Worker::spawn(0, options(0), Arc::clone(&shared)).expect("Failed to spawn worker");
        let stats = worker.stats();

        let (item, handle) = package(Priority::NORMAL, || 2 + 2);
        shared.state.lock().queue.push(item);
        shared.available.notify_one();

        assert_eq!(handle.wait().unwrap(), 4);

        shared.request_stop();
        worker.join().expect("Failed to join worker");

        assert_eq!(stats.get_tasks_executed(), 1);
        assert_eq!(shared.state.lock().running, 0);
    }

    #[test]
    fn test_worker_survives_panicking_task() {
        let shared = Arc::new(Shared::<FifoQueue>::new());
        let worker =
            Worker::spawn(0, options(0), Arc::clone(&shared)).expect("Failed to spawn worker");
        let stats = worker.stats();

        let (bad, bad_handle) = package::<_, ()>(Priority::NORMAL, || {
            panic!("Intentional panic for testing");
        });
        let (good, good_handle) = package(Priority::NORMAL, || "still alive");
        {
            let mut state = shared.state.lock();
            state.queue.push(bad);
            state.queue.push(good);
        }
        shared.available.notify_one();

        assert!(matches!(
            bad_handle.wait(),
            Err(ThreadError::TaskPanicked { .. })
        ));
        assert_eq!(good_handle.wait().unwrap(), "still alive");

        shared.request_stop();
        worker.join().expect("Failed to join worker");
        assert_eq!(stats.get_tasks_executed(), 2);
    }

    #[test]
    fn test_worker_leaves_queue_on_stop() {
        let shared = Arc::new(Shared::<FifoQueue>::new());

        // Raise the flag before the worker ever sees the item
        let (item, _handle) = package(Priority::NORMAL, || ());
        {
            let mut state = shared.state.lock();
            state.stop = true;
            state.queue.push(item);
        }

        let worker =
            Worker::spawn(0, options(0), Arc::clone(&shared)).expect("Failed to spawn worker");
        worker.join().expect("Failed to join worker");

        assert_eq!(shared.state.lock().queue.len(), 1);
    }

    #[test]
    fn test_worker_stats_average() {
        let stats = WorkerStats::new();
        assert_eq!(stats.get_average_task_time_us(), 0.0);

        stats.record_task(100);
        stats.record_task(300);
        assert_eq!(stats.get_tasks_executed(), 2);
        assert_eq!(stats.get_busy_time_us(), 400);
        assert_eq!(stats.get_average_task_time_us(), 200.0);
    }
}
