use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stackqueue::{Queue, Stack};

fn bench_stack_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_push");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("grow_from_one", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut stack = Stack::new(1).unwrap();
                    for i in 0..size {
                        stack.push(black_box(i));
                    }
                    black_box(stack.len())
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("presized", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut stack = Stack::new(size).unwrap();
                    for i in 0..size {
                        stack.push(black_box(i));
                    }
                    black_box(stack.len())
                });
            },
        );
    }
    group.finish();
}

fn bench_stack_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("push_pop_cycle", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut stack = Stack::with_default_capacity();

                    for i in 0..size {
                        stack.push(format!("element_{}", i));
                    }

                    for _ in 0..size {
                        black_box(stack.pop().unwrap());
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_queue_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("enqueue_dequeue_cycle", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut queue = Queue::new();

                    for i in 0..size {
                        queue.enqueue(format!("element_{}", i));
                    }

                    for _ in 0..size {
                        black_box(queue.dequeue().unwrap());
                    }
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("drop_full", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut queue = Queue::new();
                    for i in 0..size {
                        queue.enqueue(black_box(i));
                    }
                    drop(queue);
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_stack_push,
    bench_stack_operations,
    bench_queue_operations
);
criterion_main!(benches);
