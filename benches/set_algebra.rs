use std::{
    collections::{BTreeSet, HashSet},
    hint::black_box,
    time::Duration,
};

use collect_algebra::set;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::{RngExt, SeedableRng, rngs::StdRng};

fn set_algebra(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut random_set = |len: usize| -> HashSet<u32> {
        std::iter::repeat_with(|| rng.random_range(0..200_000))
            .take(len)
            .collect()
    };

    let a = random_set(100_000);
    let b = random_set(100_000);
    let b_sorted: BTreeSet<_> = b.iter().copied().collect();
    println!("Seed: {seed}");
    println!("|a| = {}, |b| = {}", a.len(), b.len());

    let mut group = criterion.benchmark_group("binary_ops");
    group.bench_function("union", |bencher| {
        bencher.iter(|| set::union(black_box(&a), black_box(&b)));
    });
    group.bench_function("std_union", |bencher| {
        bencher.iter(|| {
            black_box(&a)
                .union(black_box(&b))
                .copied()
                .collect::<HashSet<_>>()
        });
    });
    group.bench_function("intersect", |bencher| {
        bencher.iter(|| set::intersect(black_box(&a), black_box(&b)));
    });
    group.bench_function("intersect_mixed", |bencher| {
        bencher.iter(|| set::intersect(black_box(&a), black_box(&b_sorted)));
    });
    group.bench_function("symmetric_difference", |bencher| {
        bencher.iter(|| set::symmetric_difference(black_box(&a), black_box(&b)));
    });
    group.bench_function("is_subset_of", |bencher| {
        bencher.iter(|| set::is_subset_of(black_box(&a), black_box(&b)));
    });
    group.finish();

    let small = random_set(16);
    let mut group = criterion.benchmark_group("combinatorial");
    group.bench_function("power_set_16", |bencher| {
        bencher.iter(|| set::power_set(black_box(&small)).len());
    });
    group.bench_function("cartesian_product_count", |bencher| {
        bencher.iter(|| set::cartesian_product(black_box(&a), black_box(&small)).count());
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(10))
        .sample_size(50);
    targets = set_algebra
}
criterion_main!(benches);
