//! Benchmark: full-table affine-gap alignment.
//!
//! Run with:
//! `cargo bench`
//!
//! The fill is quadratic in time and memory, so sizes stay moderate; this
//! mainly guards against regressions in the inner loop.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use gotoh_align::{align, Penalties, Solved};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn bench_align(c: &mut Criterion) {
    let penalties = Penalties::new(1, 3, 1).unwrap();
    let mut group = c.benchmark_group("affine_alignment");

    for &len in &[256usize, 512, 1024] {
        group.bench_function(format!("fill_and_traceback_len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    let s = random_dna(&mut rng, len);
                    let t = random_dna(&mut rng, len);
                    (s, t)
                },
                |(s, t)| {
                    let alignment = align(&s, &t, penalties);
                    criterion::black_box(alignment.score());
                },
                BatchSize::PerIteration,
            )
        });

        group.bench_function(format!("fill_only_len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    let s = random_dna(&mut rng, len);
                    let t = random_dna(&mut rng, len);
                    (s, t)
                },
                |(s, t)| {
                    let solved = Solved::compute(&s, &t, penalties);
                    criterion::black_box(solved.score());
                },
                BatchSize::PerIteration,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_align);
criterion_main!(benches);
