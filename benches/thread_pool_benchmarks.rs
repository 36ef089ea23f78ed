use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::Rng;
use rust_task_pool::prelude::*;
use std::thread;
use std::time::Duration;

const TASKS: usize = 1_000;

fn fibonacci(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}

fn memory_work(size: usize) -> u64 {
    let data: Vec<u64> = (0..size as u64).collect();
    data.iter().sum()
}

fn threads() -> usize {
    num_cpus::get()
}

fn benchmark_thread_pool_creation(c: &mut Criterion) {
    c.bench_function("thread_pool_creation", |b| {
        b.iter(|| {
            let pool = ThreadPool::with_threads(4).expect("Failed to create pool");
            pool.shutdown().expect("Failed to shutdown pool");
        });
    });
}

fn benchmark_submission_overhead(c: &mut Criterion) {
    // Measures only the submission calls; results are collected in teardown
    c.bench_function("submission_overhead_1000", |b| {
        let pool = ThreadPool::with_threads(threads()).expect("Failed to create pool");
        b.iter_batched(
            || Vec::with_capacity(TASKS),
            |mut handles| {
                for i in 0..TASKS {
                    handles.push(pool.submit(move || i));
                }
                handles
            },
            BatchSize::SmallInput,
        );
    });
}

fn benchmark_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");

    group.bench_function("fifo_1000", |b| {
        let pool = ThreadPool::with_threads(threads()).expect("Failed to create pool");
        b.iter(|| {
            let handles: Vec<_> = (0..TASKS).map(|i| pool.submit(move || i)).collect();
            for handle in handles {
                black_box(handle.wait().expect("task failed"));
            }
        });
    });

    group.bench_function("priority_1000", |b| {
        let pool = ThreadPool::with_priority(threads()).expect("Failed to create pool");
        b.iter(|| {
            let handles: Vec<_> = (0..TASKS)
                .map(|i| pool.submit_priority((i % 16) as i8, move || i))
                .collect();
            for handle in handles {
                black_box(handle.wait().expect("task failed"));
            }
        });
    });

    group.finish();
}

fn benchmark_cpu_intensive(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_intensive");
    group.sample_size(10);

    let cpu_tasks = threads() * 20;
    group.bench_function("fibonacci_25", |b| {
        let pool = ThreadPool::with_threads(threads()).expect("Failed to create pool");
        b.iter(|| {
            let handles: Vec<_> = (0..cpu_tasks)
                .map(|_| pool.submit(|| fibonacci(black_box(25))))
                .collect();
            let total: u64 = handles.into_iter().map(|h| h.wait().unwrap()).sum();
            black_box(total);
        });
    });

    group.finish();
}

fn benchmark_mixed_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_workload");
    group.sample_size(10);

    group.bench_function("cpu_io_memory_500", |b| {
        let pool = ThreadPool::with_threads(threads()).expect("Failed to create pool");
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let handles: Vec<_> = (0..500)
                .map(|_| match rng.gen_range(0..3) {
                    0 => pool.submit(|| {
                        black_box(fibonacci(20));
                    }),
                    1 => {
                        let micros = rng.gen_range(100..1_000);
                        pool.submit(move || thread::sleep(Duration::from_micros(micros)))
                    }
                    _ => {
                        let size = rng.gen_range(1_000..10_000);
                        pool.submit(move || {
                            black_box(memory_work(size));
                        })
                    }
                })
                .collect();
            for handle in handles {
                handle.wait().expect("task failed");
            }
        });
    });

    group.finish();
}

fn benchmark_failure_handling(c: &mut Criterion) {
    // Silence the default hook so the report is readable
    std::panic::set_hook(Box::new(|_| {}));

    c.bench_function("failure_handling_1000", |b| {
        let pool = ThreadPool::with_threads(threads()).expect("Failed to create pool");
        b.iter(|| {
            let handles: Vec<_> = (0..TASKS)
                .map(|i| {
                    pool.submit(move || {
                        if i % 2 == 0 {
                            panic!("Test failure {}", i);
                        }
                        i
                    })
                })
                .collect();
            let failures = handles
                .into_iter()
                .map(|h| h.wait())
                .filter(|result| result.is_err())
                .count();
            assert_eq!(failures, TASKS / 2);
        });
    });

    let _ = std::panic::take_hook();
}

fn benchmark_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(10);

    let max_threads = threads() * 2;
    for num_threads in [1usize, 2, 4, 8, 16, 32] {
        if num_threads > max_threads {
            continue;
        }
        group.bench_with_input(
            BenchmarkId::from_parameter(num_threads),
            &num_threads,
            |b, &n| {
                let pool = ThreadPool::with_threads(n).expect("Failed to create pool");
                b.iter(|| {
                    let handles: Vec<_> = (0..500)
                        .map(|i| {
                            pool.submit(move || {
                                black_box(fibonacci(18));
                                i
                            })
                        })
                        .collect();
                    for handle in handles {
                        black_box(handle.wait().unwrap());
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_thread_pool_creation,
    benchmark_submission_overhead,
    benchmark_end_to_end,
    benchmark_cpu_intensive,
    benchmark_mixed_workload,
    benchmark_failure_handling,
    benchmark_scalability
);
criterion_main!(benches);
