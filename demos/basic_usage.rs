//! Basic thread pool usage example
//!
//! Demonstrates pool creation, task submission, result handles and statistics.
//!
//! Run with: cargo run --example basic_usage

use rust_task_pool::prelude::*;
use std::thread;
use std::time::Duration;

fn fibonacci(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}

fn main() -> Result<()> {
    println!("=== Rust Task Pool - Basic Usage Example ===\n");

    // Create a thread pool with 4 worker threads
    let pool = ThreadPool::with_threads(4)?;
    println!("1. Started thread pool with {} threads", pool.thread_count());

    println!("\n2. Submitting tasks that return values:");
    let handles: Vec<_> = (20..30u64)
        .map(|n| pool.submit(move || (n, fibonacci(n))))
        .collect();
    println!("   Submitted {} tasks", handles.len());
    println!("   Running right now: {}", pool.running_task_count());

    for handle in handles {
        let (n, value) = handle.wait()?;
        println!("   fib({}) = {}", n, value);
    }

    println!("\n3. Tasks that panic are reported through their handle:");
    let risky: Vec<_> = (0..4)
        .map(|i| {
            pool.submit(move || {
                if i % 2 == 0 {
                    panic!("input {} rejected", i);
                }
                thread::sleep(Duration::from_millis(10));
                i * 10
            })
        })
        .collect();
    for handle in risky {
        match handle.wait() {
            Ok(value) => println!("   ok: {}", value),
            Err(e) => println!("   failed: {}", e),
        }
    }

    println!("\n4. Per-worker statistics:");
    for (i, stat) in pool.get_stats().iter().enumerate() {
        println!(
            "   Worker {}: {} executed, avg time: {:.2}μs",
            i,
            stat.get_tasks_executed(),
            stat.get_average_task_time_us()
        );
    }

    println!("\n5. Shutting down thread pool...");
    pool.shutdown()?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
