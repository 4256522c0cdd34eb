use std::{collections::HashSet, hint::black_box, time::Duration};

use collect_algebra::{prelude::*, reducers};
use criterion::{Criterion, criterion_group, criterion_main};
use rand::{RngExt, SeedableRng, rngs::StdRng};

fn reduce(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    macro_rules! bench_fn {
        ($group:ident.$fn_name:ident($nums:expr)) => {
            $group.bench_function(stringify!($fn_name), |bencher| {
                bencher.iter(|| $fn_name(black_box($nums)));
            });
        };
    }

    let nums: Box<_> = std::iter::repeat_with(|| rng.random_range(-10_000..=10_000))
        .take(500_000)
        .collect();

    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &nums[..10]);

    let mut group = criterion.benchmark_group("distinct");
    bench_fn!(group.iter_collect_set(&nums));
    bench_fn!(group.reducer_to_set(&nums));
    bench_fn!(group.reducer_to_set_partitioned(&nums));
    group.finish();

    let mut group = criterion.benchmark_group("sorted");
    bench_fn!(group.vec_sort(&nums));
    bench_fn!(group.reducer_to_sorted_list(&nums));
    bench_fn!(group.reducer_to_sorted_list_partitioned(&nums));
    group.finish();

    let mut group = criterion.benchmark_group("group_by_remainder");
    bench_fn!(group.reducer_to_list_multimap(&nums));
    bench_fn!(group.reducer_to_bag_multimap(&nums));
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(5))
        .measurement_time(Duration::from_secs(15))
        .sample_size(100);
    targets = reduce
}
criterion_main!(benches);

const PARTITIONS: usize = 8;

fn iter_collect_set(nums: &[i32]) -> HashSet<i32> {
    nums.iter().copied().collect()
}

fn reducer_to_set(nums: &[i32]) -> HashSet<i32> {
    nums.iter().copied().reduce_with(reducers::to_set())
}

fn reducer_to_set_partitioned(nums: &[i32]) -> HashSet<i32> {
    let chunk_len = nums.len().div_ceil(PARTITIONS);
    reducers::to_set().reduce_partitions(nums.chunks(chunk_len).map(|chunk| chunk.iter().copied()))
}

fn vec_sort(nums: &[i32]) -> Vec<i32> {
    let mut sorted = nums.to_vec();
    sorted.sort();
    sorted
}

fn reducer_to_sorted_list(nums: &[i32]) -> Vec<i32> {
    nums.iter().copied().reduce_with(reducers::to_sorted_list())
}

fn reducer_to_sorted_list_partitioned(nums: &[i32]) -> Vec<i32> {
    let chunk_len = nums.len().div_ceil(PARTITIONS);
    reducers::to_sorted_list()
        .reduce_partitions(nums.chunks(chunk_len).map(|chunk| chunk.iter().copied()))
}

fn reducer_to_list_multimap(nums: &[i32]) -> usize {
    let groups = nums
        .iter()
        .copied()
        .reduce_with(reducers::to_list_multimap(|num: &i32| num.rem_euclid(64)));
    groups.key_len()
}

fn reducer_to_bag_multimap(nums: &[i32]) -> usize {
    let groups = nums
        .iter()
        .copied()
        .reduce_with(reducers::to_bag_multimap(|num: &i32| num.rem_euclid(64)));
    groups.key_len()
}
