//! Core types for the task pool

pub mod error;
pub mod handle;
pub mod priority;
pub mod task;

pub use error::{Result, ThreadError};
pub use handle::TaskHandle;
pub use priority::Priority;
pub use task::{Thunk, WorkItem};
