use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use number_theory::{mult_inverse, pow, unsquare};
use rand::thread_rng;

#[path = "../tests/common/mod.rs"]
mod common;
use common::random_below;

pub fn criterion_benchmark(c: &mut Criterion) {
    // The Curve25519 field prime, 2^255 - 19.
    let modulus = (BigInt::one() << 255u32) - BigInt::from(19);
    let mut rng = thread_rng();

    c.bench_function("pow", |b| {
        b.iter_batched(
            || {
                (
                    random_below(&mut rng, &modulus),
                    random_below(&mut rng, &modulus),
                )
            },
            |(n, k)| pow(black_box(&n), black_box(&k), black_box(&modulus)),
            BatchSize::SmallInput,
        );
    });

    c.bench_function("mult_inverse", |b| {
        b.iter_batched(
            || random_below(&mut rng, &modulus),
            |n| mult_inverse(black_box(&n), black_box(&modulus)),
            BatchSize::SmallInput,
        );
    });

    c.bench_function("unsquare", |b| {
        b.iter_batched(
            || {
                let a = random_below(&mut rng, &modulus);
                (&a * &a).mod_floor(&modulus)
            },
            |n| unsquare(black_box(&n), black_box(&modulus)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
