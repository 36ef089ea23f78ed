//! State shared between the pool handle and its workers

use crate::queue::WorkQueue;
use parking_lot::{Condvar, Mutex};

/// Everything guarded by the pool's single mutex
#[derive(Debug, Default)]
pub(crate) struct State<Q> {
    /// Pending work
    pub(crate) queue: Q,
    /// Set once at shutdown, never cleared
    pub(crate) stop: bool,
    /// Workers that have dequeued an item and not yet returned to idle
    pub(crate) running: usize,
}

/// Mutex-guarded state plus the condition variable idle workers sleep on
#[derive(Debug, Default)]
pub(crate) struct Shared<Q> {
    pub(crate) state: Mutex<State<Q>>,
    /// Signalled on every push (one waiter) and at shutdown (all waiters).
    /// Waiters re-check `stop || !queue.is_empty()` after each wake.
    pub(crate) available: Condvar,
}

impl<Q: WorkQueue> Shared<Q> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Set the stop flag and wake every idle worker
    pub(crate) fn request_stop(&self) {
        self.state.lock().stop = true;
        self.available.notify_all();
    }
}
