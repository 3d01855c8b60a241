// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::time::Duration;
use criterion::measurement::WallTime;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkGroup, Criterion};
use rand_pcg32x2::rand_core::{RngCore, SeedableRng};
use rand_pcg32x2::{Bounded, Pcg32, Pcg32x2};

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = random_bytes, random_u32, random_u64, bounded, init_from_u64, advance
);
criterion_main!(benches);

pub fn random_bytes(c: &mut Criterion) {
    let mut g = c.benchmark_group("random_bytes");
    g.warm_up_time(Duration::from_millis(500));
    g.measurement_time(Duration::from_millis(1000));
    g.throughput(criterion::Throughput::Bytes(1024));

    fn bench(g: &mut BenchmarkGroup<WallTime>, name: &str, mut rng: impl RngCore) {
        g.bench_function(name, |b| {
            let mut buf = [0u8; 1024];
            b.iter(|| {
                rng.fill_bytes(&mut buf);
                black_box(buf);
            });
        });
    }

    bench(&mut g, "pcg32", Pcg32::seed_from_u64(123));
    bench(&mut g, "pcg32x2", Pcg32x2::seed_from_u64(123));

    g.finish()
}

pub fn random_u32(c: &mut Criterion) {
    let mut g = c.benchmark_group("random_u32");
    g.sample_size(1000);
    g.warm_up_time(Duration::from_millis(500));
    g.measurement_time(Duration::from_millis(1000));
    g.throughput(criterion::Throughput::Bytes(4));

    fn bench(g: &mut BenchmarkGroup<WallTime>, name: &str, mut rng: impl RngCore) {
        g.bench_function(name, |b| {
            b.iter(|| rng.next_u32());
        });
    }

    bench(&mut g, "pcg32", Pcg32::seed_from_u64(123));
    bench(&mut g, "pcg32x2", Pcg32x2::seed_from_u64(123));

    g.finish()
}

pub fn random_u64(c: &mut Criterion) {
    let mut g = c.benchmark_group("random_u64");
    g.sample_size(1000);
    g.warm_up_time(Duration::from_millis(500));
    g.measurement_time(Duration::from_millis(1000));
    g.throughput(criterion::Throughput::Bytes(8));

    fn bench(g: &mut BenchmarkGroup<WallTime>, name: &str, mut rng: impl RngCore) {
        g.bench_function(name, |b| {
            b.iter(|| rng.next_u64());
        });
    }

    bench(&mut g, "pcg32", Pcg32::seed_from_u64(123));
    bench(&mut g, "pcg32x2", Pcg32x2::seed_from_u64(123));

    g.finish()
}

pub fn bounded(c: &mut Criterion) {
    let mut g = c.benchmark_group("bounded");
    g.warm_up_time(Duration::from_millis(500));
    g.measurement_time(Duration::from_millis(1000));

    // 2^31 + 1 rejects almost half of all draws
    for &bound in &[6u32, 52, (1 << 31) + 1] {
        let mut rng = Pcg32::seed_from_u64(123);
        g.bench_function(format!("pcg32_{}", bound), |b| {
            b.iter(|| rng.bounded_rand(black_box(bound)));
        });
    }
    for &bound in &[6u64, 52, (1 << 63) + 1] {
        let mut rng = Pcg32x2::seed_from_u64(123);
        g.bench_function(format!("pcg32x2_{}", bound), |b| {
            b.iter(|| rng.bounded_rand(black_box(bound)));
        });
    }

    let die = Bounded::<u64>::new(6).unwrap();
    let mut rng = Pcg32x2::seed_from_u64(123);
    g.bench_function("pcg32x2_sampler_6", |b| {
        b.iter(|| die.sample(&mut rng));
    });

    g.finish()
}

pub fn init_from_u64(c: &mut Criterion) {
    let mut g = c.benchmark_group("init_from_u64");
    g.warm_up_time(Duration::from_millis(500));
    g.measurement_time(Duration::from_millis(1000));

    g.bench_function("pcg32", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            Pcg32::seed_from_u64(black_box(seed))
        });
    });
    g.bench_function("pcg32x2", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            Pcg32x2::new(black_box(seed), black_box(seed))
        });
    });

    g.finish()
}

pub fn advance(c: &mut Criterion) {
    let mut g = c.benchmark_group("advance");
    g.warm_up_time(Duration::from_millis(500));
    g.measurement_time(Duration::from_millis(1000));

    let mut rng = Pcg32x2::seed_from_u64(123);
    g.bench_function("pcg32x2_2^40", |b| {
        b.iter(|| rng.advance(black_box(1 << 40)));
    });

    g.finish()
}
