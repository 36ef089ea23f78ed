//! Priority scheduling example
//!
//! A single worker is held busy while tasks of mixed priority queue up, then
//! released so the backlog drains highest priority first.
//!
//! Run with: cargo run --example priority_scheduling

use rust_task_pool::prelude::*;
use std::sync::mpsc;

fn main() -> Result<()> {
    println!("=== Rust Task Pool - Priority Scheduling Example ===\n");

    let pool = ThreadPool::with_priority(1)?;

    let (started_tx, started_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let blocker = pool.submit(move || {
        let _ = started_tx.send(());
        let _ = release_rx.recv();
    });
    let _ = started_rx.recv();

    let jobs = [
        ("nightly report", Priority::new(-10)),
        ("user request", Priority::NORMAL),
        ("cache refresh", Priority::new(-1)),
        ("security alert", Priority::MAX),
        ("billing event", Priority::new(20)),
    ];

    let (order_tx, order_rx) = mpsc::channel();
    let handles: Vec<_> = jobs
        .into_iter()
        .map(|(name, priority)| {
            println!("   queued {:<15} priority {:>4}", name, priority);
            let order_tx = order_tx.clone();
            pool.submit_priority(priority, move || {
                let _ = order_tx.send(name);
            })
        })
        .collect();
    drop(order_tx);

    println!("\n   {} tasks pending, releasing worker\n", pool.pending_task_count());
    let _ = release_tx.send(());
    blocker.wait()?;
    for handle in handles {
        handle.wait()?;
    }

    println!("   completion order:");
    for name in order_rx {
        println!("     {}", name);
    }

    pool.shutdown()?;
    Ok(())
}
