//! Metrics recording functions for observability.
//!
//! These functions emit `tracing` events that can be consumed by a
//! subscriber or bridged to a metrics backend via tracing-opentelemetry.
//! Compiled only with the `tracing` feature.
//!
//! # Example
//!
//! ```rust,ignore
//! use rust_task_pool::prelude::*;
//! use tracing_subscriber::{fmt, prelude::*, EnvFilter};
//!
//! tracing_subscriber::registry()
//!     .with(fmt::layer())
//!     .with(EnvFilter::from_default_env()
//!         .add_directive("rust_task_pool=debug".parse().unwrap()))
//!     .init();
//!
//! let pool = ThreadPool::with_threads(4)?;
//! let handle = pool.submit(|| 1 + 1);
//! ```

use std::time::Duration;

/// Records a task submission event.
#[inline]
pub fn record_submission(task_id: u64, queue_depth: usize) {
    tracing::trace!(
        counter.tasks_submitted = 1,
        gauge.queue_depth = queue_depth as i64,
        task_id = task_id,
        "task submitted"
    );
}

/// Records task completion with timing.
///
/// Panicking tasks are reported separately by the submission boundary.
#[inline]
pub fn record_completion(duration: Duration) {
    tracing::trace!(
        counter.tasks_completed = 1,
        histogram.task_duration_ms = duration.as_millis() as u64,
        "task completed"
    );
}

/// Records a task panic caught at a worker's failure boundary.
#[inline]
pub fn record_panic(task_id: u64, message: &str) {
    tracing::warn!(
        counter.tasks_panicked = 1,
        task_id = task_id,
        panic_message = message,
        "task panicked"
    );
}

/// Records worker becoming busy.
#[inline]
pub fn record_worker_busy(worker_id: usize) {
    tracing::trace!(
        gauge.workers_busy = 1,
        worker_id = worker_id,
        "worker busy"
    );
}

/// Records worker becoming idle.
#[inline]
pub fn record_worker_idle(worker_id: usize) {
    tracing::trace!(
        gauge.workers_busy = -1i64,
        worker_id = worker_id,
        "worker idle"
    );
}

/// Records pool startup.
#[inline]
pub fn record_pool_start(num_workers: usize, ordering: &str) {
    tracing::info!(
        workers = num_workers,
        ordering = ordering,
        "thread pool started"
    );
}

/// Records pool shutdown.
#[inline]
pub fn record_pool_shutdown(tasks_executed: u64, tasks_abandoned: usize) {
    if tasks_abandoned > 0 {
        tracing::warn!(
            tasks_abandoned = tasks_abandoned,
            "thread pool shut down with queued tasks"
        );
    }
    tracing::info!(
        tasks_executed = tasks_executed,
        tasks_abandoned = tasks_abandoned,
        "thread pool shutdown complete"
    );
}
