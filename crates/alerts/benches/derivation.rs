use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shelftrack_alerts::derive_low_stock;
use shelftrack_core::TagUid;
use shelftrack_inventory::{InventoryStore, Item};

fn catalog(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| {
            // Every third item sits at/below its threshold.
            let stock = if i % 3 == 0 { 1 } else { 8 };
            Item::new(TagUid::new(format!("TAG{i:06}")).unwrap(), "Widget", stock, 2).unwrap()
        })
        .collect()
}

fn bench_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_low_stock");

    for size in [4usize, 64, 512] {
        let items = catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| derive_low_stock(black_box(items)));
        });
    }

    group.finish();
}

fn bench_mutate_then_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("take_then_derive");

    for size in [4usize, 64, 512] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let uid = TagUid::new("TAG000000").unwrap();
            b.iter_batched(
                || InventoryStore::new(catalog(size)).unwrap(),
                |mut store| {
                    store.take(black_box(&uid));
                    store.restock(black_box(&uid));
                    derive_low_stock(black_box(store.snapshot()))
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_derivation, bench_mutate_then_derive);
criterion_main!(benches);
