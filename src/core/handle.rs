//! Result handles returned from task submission
//!
//! A [`TaskHandle`] is the consumer half of a single-write cell. The producer
//! half travels with the task into the pool and is written exactly once by the
//! worker that runs it. If the producer is dropped without writing (the task
//! was still queued when the pool shut down), the handle resolves with
//! [`ThreadError::Abandoned`] instead of blocking forever.

use crate::core::error::{Result, ThreadError};
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique task IDs
static TASK_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a new unique task ID
pub(crate) fn next_task_id() -> u64 {
    TASK_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Producer side of a result handle, owned by the queued task
pub(crate) struct Completion<T> {
    task_id: u64,
    sender: Sender<Result<T>>,
}

impl<T> Completion<T> {
    /// Publish the outcome of the task
    ///
    /// The submitter may have dropped its handle already; the outcome is then
    /// discarded.
    pub(crate) fn publish(self, outcome: Result<T>) {
        let _ = self.sender.send(outcome);
    }

    pub(crate) fn task_id(&self) -> u64 {
        self.task_id
    }
}

/// Handle to the eventual outcome of a submitted task
///
/// # Example
///
/// ```
/// use rust_task_pool::prelude::*;
///
/// # fn main() -> Result<()> {
/// let pool = ThreadPool::with_threads(2)?;
/// let handle = pool.submit(|| 6 * 7);
/// assert_eq!(handle.wait()?, 42);
/// # Ok(())
/// # }
/// ```
pub struct TaskHandle<T> {
    task_id: u64,
    receiver: Receiver<Result<T>>,
}

/// Create a connected completion/handle pair for a new task
pub(crate) fn pair<T>(task_id: u64) -> (Completion<T>, TaskHandle<T>) {
    let (sender, receiver) = crossbeam_channel::bounded(1);
    (
        Completion { task_id, sender },
        TaskHandle { task_id, receiver },
    )
}

impl<T> TaskHandle<T> {
    /// Get the unique task ID
    pub fn task_id(&self) -> u64 {
        self.task_id
    }

    /// Check whether the outcome has been published
    ///
    /// Returns false for an abandoned task; use [`try_wait`](Self::try_wait)
    /// to observe that case without blocking.
    pub fn is_ready(&self) -> bool {
        !self.receiver.is_empty()
    }

    /// Block until the task has run and return its outcome
    ///
    /// # Errors
    ///
    /// - `ThreadError::TaskPanicked` - The task body panicked
    /// - `ThreadError::Abandoned` - The pool shut down before the task ran
    pub fn wait(self) -> Result<T> {
        self.receiver
            .recv()
            .unwrap_or_else(|_| Err(ThreadError::abandoned(self.task_id)))
    }

    /// Return the outcome if it is available, or the handle back if not
    pub fn try_wait(self) -> std::result::Result<Result<T>, Self> {
        match self.receiver.try_recv() {
            Ok(outcome) => Ok(outcome),
            Err(TryRecvError::Disconnected) => Ok(Err(ThreadError::abandoned(self.task_id))),
            Err(TryRecvError::Empty) => Err(self),
        }
    }
}

impl<T> fmt::Debug for TaskHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("task_id", &self.task_id)
            .field("ready", &self.is_ready())
            .finish()
    }
}
