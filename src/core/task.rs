//! Work items and the submission boundary
//!
//! User closures are packaged into type-erased [`WorkItem`]s here. The typed
//! result travels through a [`TaskHandle`] created alongside the item, so the
//! queue only ever stores `Box<dyn FnOnce() + Send>`.

use crate::core::error::ThreadError;
use crate::core::handle::{self, Completion, TaskHandle};
use crate::core::priority::Priority;
use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Type-erased unit of work stored in the queue
pub type Thunk = Box<dyn FnOnce() + Send + 'static>;

/// A queued unit of work
///
/// Created at submission time and consumed by [`WorkItem::run`]. Dropping an
/// item without running it resolves its handle as abandoned.
pub struct WorkItem {
    id: u64,
    priority: Priority,
    thunk: Thunk,
}

impl WorkItem {
    /// Wrap a raw thunk with an id and priority
    pub fn new(id: u64, priority: Priority, thunk: Thunk) -> Self {
        Self {
            id,
            priority,
            thunk,
        }
    }

    /// Get the task ID
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the priority this item was submitted with
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Execute the item, consuming it
    pub fn run(self) {
        (self.thunk)()
    }
}

impl fmt::Debug for WorkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkItem")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Package a closure into a work item and the handle that will receive its result
pub(crate) fn package<F, T>(priority: Priority, f: F) -> (WorkItem, TaskHandle<T>)
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let id = handle::next_task_id();
    let (completion, handle) = handle::pair(id);

    #[cfg(feature = "tracing")]
    let span = tracing::Span::current();

    let thunk: Thunk = Box::new(move || {
        #[cfg(feature = "tracing")]
        let _guard = span.enter();
        run_guarded(completion, f);
    });

    (WorkItem::new(id, priority, thunk), handle)
}

/// Run `f` behind a panic boundary and publish the outcome
fn run_guarded<F, T>(completion: Completion<T>, f: F)
where
    F: FnOnce() -> T,
{
    let outcome = catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        #[cfg(feature = "tracing")]
        crate::telemetry::record_panic(completion.task_id(), &message);
        ThreadError::task_panicked(completion.task_id(), message)
    });
    completion.publish(outcome);
}

/// Extract a readable message from a panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
