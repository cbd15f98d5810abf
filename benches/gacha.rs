use std::num::NonZeroUsize;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use gachasim::{CategoricalSampler, Rarity, RarityTable, tally};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

fn gen_pairs(n: usize) -> Vec<(usize, f64)> {
    let mut rng = Pcg32::seed_from_u64(777);
    let raw: Vec<f64> = (0..n).map(|_| 0.1 + rng.random::<f64>()).collect();
    let sum: f64 = raw.iter().sum();
    raw.into_iter()
        .enumerate()
        .map(|(i, w)| (i, w / sum * 100.0))
        .collect()
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_scan");
    const DRAWS_PER_ITER: usize = 1024;

    for &n in &[2usize, 5, 64, 256] {
        let sampler = CategoricalSampler::new(RarityTable::from_pairs(gen_pairs(n)).unwrap());
        group.throughput(Throughput::Elements(DRAWS_PER_ITER as u64));
        group.bench_function(format!("draw_one_n={n}"), |b| {
            b.iter_batched_ref(
                || Pcg32::seed_from_u64(999),
                |rng| {
                    let mut s = 0usize;
                    for _ in 0..DRAWS_PER_ITER {
                        s ^= sampler.draw_one(rng);
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("product_table");
    let sampler = CategoricalSampler::new(Rarity::table().unwrap());
    let eleven = NonZeroUsize::new(11).unwrap();

    group.bench_function("multi_pull_and_tally", |b| {
        b.iter_batched_ref(
            || Pcg32::seed_from_u64(1001),
            |rng| {
                let session = sampler.draw_n(rng, eleven);
                black_box(tally(sampler.table(), &session))
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("until_heroic", |b| {
        b.iter_batched_ref(
            || Pcg32::seed_from_u64(1003),
            |rng| black_box(sampler.draw_until(rng, &Rarity::Heroic).unwrap().1),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(gacha, bench_scan, bench_product);
criterion_main!(gacha);
