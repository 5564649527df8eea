use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use stockbook_core::{ItemName, Quantity};
use stockbook_ledger::{StockLedger, report};

fn seed_ledger(items: usize) -> StockLedger {
    let mut ledger = StockLedger::new();
    for i in 0..items {
        let name = ItemName::new(format!("item-{i}")).unwrap();
        let qty = Quantity::new(((i % 50) + 1) as i64).unwrap();
        ledger.add(&name, qty);
    }
    ledger
}

fn bench_add_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_throughput");

    for batch_size in [10usize, 100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_with_input(
            BenchmarkId::new("batch_add", batch_size),
            batch_size,
            |b, &size| {
                let names: Vec<ItemName> = (0..size)
                    .map(|i| ItemName::new(format!("item-{i}")).unwrap())
                    .collect();
                let qty = Quantity::new(7).unwrap();

                b.iter(|| {
                    let mut ledger = StockLedger::new();
                    for name in &names {
                        ledger.add(black_box(name), qty);
                    }
                    black_box(ledger.len())
                });
            },
        );
    }

    group.finish();
}

fn bench_mutation_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutation_cycle");
    group.sample_size(1000);

    // Partial removal: the entry survives each cycle.
    group.bench_function("add_then_partial_remove", |b| {
        let name = ItemName::new("apple").unwrap();
        let ten = Quantity::new(10).unwrap();
        let three = Quantity::new(3).unwrap();
        let mut ledger = StockLedger::new();

        b.iter(|| {
            ledger.add(black_box(&name), ten);
            ledger.remove(black_box(&name), three).unwrap();
        });
    });

    // Full removal: the entry is recreated and deleted each cycle.
    group.bench_function("add_then_full_remove", |b| {
        let name = ItemName::new("apple").unwrap();
        let ten = Quantity::new(10).unwrap();
        let mut ledger = StockLedger::new();

        b.iter(|| {
            ledger.add(black_box(&name), ten);
            ledger.remove(black_box(&name), ten).unwrap();
        });
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    for item_count in [10usize, 100, 1_000, 10_000].iter() {
        group.bench_with_input(
            BenchmarkId::new("low_stock", item_count),
            item_count,
            |b, &count| {
                let ledger = seed_ledger(count);
                b.iter(|| black_box(ledger.low_stock(black_box(5))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("render_report", item_count),
            item_count,
            |b, &count| {
                let ledger = seed_ledger(count);
                b.iter(|| black_box(report::render(&ledger)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add_throughput,
    bench_mutation_cycle,
    bench_queries
);
criterion_main!(benches);
