//! Error types for the task pool

/// Result type for task pool operations
pub type Result<T> = std::result::Result<T, ThreadError>;

/// Errors that can occur in the task pool
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ThreadError {
    /// Failed to spawn a worker thread with details
    #[error("Failed to spawn worker thread #{thread_id}: {message}")]
    SpawnError {
        /// ID of the thread that failed to spawn
        thread_id: usize,
        /// Error message
        message: String,
        /// Source IO error
        #[source]
        source: Option<std::io::Error>,
    },

    /// Failed to join a worker thread
    #[error("Failed to join worker thread #{thread_id}: {message}")]
    JoinError {
        /// ID of the thread that failed to join
        thread_id: usize,
        /// Error message
        message: String,
    },

    /// The task body panicked while executing on a worker
    #[error("Task panicked (task_id: {task_id}): {message}")]
    TaskPanicked {
        /// ID of the failed task
        task_id: u64,
        /// Panic message
        message: String,
    },

    /// The pool shut down before the task was dequeued
    #[error("Task abandoned (task_id: {task_id}): pool shut down before it ran")]
    Abandoned {
        /// ID of the abandoned task
        task_id: u64,
    },

    /// Invalid configuration with parameter
    #[error("Invalid configuration for '{parameter}': {message}")]
    InvalidConfig {
        /// Configuration parameter name
        parameter: String,
        /// Error message
        message: String,
    },
}

impl ThreadError {
    /// Create a spawn error
    pub fn spawn(thread_id: usize, message: impl Into<String>) -> Self {
        ThreadError::SpawnError {
            thread_id,
            message: message.into(),
            source: None,
        }
    }

    /// Create a spawn error with source
    pub fn spawn_with_source(
        thread_id: usize,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        ThreadError::SpawnError {
            thread_id,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a join error
    pub fn join(thread_id: usize, message: impl Into<String>) -> Self {
        ThreadError::JoinError {
            thread_id,
            message: message.into(),
        }
    }

    /// Create a task panicked error
    pub fn task_panicked(task_id: u64, message: impl Into<String>) -> Self {
        ThreadError::TaskPanicked {
            task_id,
            message: message.into(),
        }
    }

    /// Create an abandoned task error
    pub fn abandoned(task_id: u64) -> Self {
        ThreadError::Abandoned { task_id }
    }

    /// Create an invalid config error
    pub fn invalid_config(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        ThreadError::InvalidConfig {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error was raised by the task body itself
    pub fn is_task_failure(&self) -> bool {
        matches!(self, ThreadError::TaskPanicked { .. })
    }
}
