//! Tracing integration example
//!
//! This example demonstrates how to use the tracing feature for observability.
//!
//! Run with: `cargo run --example tracing_example`
//!
//! Set RUST_LOG environment variable to control log levels:
//! - `RUST_LOG=trace` - Show all trace events including metrics
//! - `RUST_LOG=debug` - Show worker and task spans
//! - `RUST_LOG=info` - Show pool start/shutdown
//! - `RUST_LOG=rust_task_pool=debug` - Show only this crate's debug logs

use rust_task_pool::prelude::*;
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_thread_names(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ThreadPoolConfig::new(3).with_thread_name_prefix("traced");
    let pool = ThreadPool::with_config(config)?;

    // The submitting span is re-entered on the worker while the task runs
    let request_span = tracing::info_span!("request", request_id = 7);
    let handles: Vec<_> = request_span.in_scope(|| {
        (0..6u64)
            .map(|id| {
                pool.submit(move || {
                    tracing::info!(task = id, "starting computation");
                    std::thread::sleep(Duration::from_millis(20 * id));
                    tracing::info!(task = id, "computation completed");
                    id * 100
                })
            })
            .collect()
    });

    let failing = pool.submit(|| -> u64 { panic!("malformed payload") });

    for handle in handles {
        let value = handle.wait()?;
        tracing::info!(value, "result received");
    }
    if let Err(e) = failing.wait() {
        tracing::warn!(error = %e, "task failed as expected");
    }

    pool.shutdown()?;
    Ok(())
}
