use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use noisemap_core::perlin2::sample;
use noisemap_core::{Grid2D, Perlin2D, PermutationTable, StaticNoise};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SIZE: usize = 256;
const SEED: u64 = 2025;

fn bench_table_build(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    c.bench_function("PermutationTable::build", |b| {
        b.iter(|| PermutationTable::build(&mut rng))
    });
}

fn bench_sample_point(c: &mut Criterion) {
    let table = PermutationTable::from_seed(SEED);
    c.bench_function("perlin2 sample (single point)", |b| {
        b.iter(|| sample(black_box(37.3), black_box(-12.8), &table))
    });
}

fn bench_perlin_generate(c: &mut Criterion) {
    let perlin = Perlin2D::new(PermutationTable::from_seed(SEED));
    c.bench_function("Perlin2D generate 256x256", |b| {
        b.iter(|| perlin.generate(SIZE, SIZE))
    });
}

fn bench_perlin_fill(c: &mut Criterion) {
    let perlin = Perlin2D::new(PermutationTable::from_seed(SEED));
    let mut grid: Grid2D<f64> = Grid2D::new(SIZE, SIZE).unwrap();
    c.bench_function("Perlin2D fill 256x256 (reused buffer)", |b| {
        b.iter(|| perlin.fill(&mut grid))
    });
}

fn bench_static_generate(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    c.bench_function("StaticNoise generate 256x256", |b| {
        b.iter(|| StaticNoise::generate(SIZE, SIZE, &mut rng))
    });
}

criterion_group!(
    noise_benchmarks,
    bench_table_build,
    bench_sample_point,
    bench_perlin_generate,
    bench_perlin_fill,
    bench_static_generate
);
criterion_main!(noise_benchmarks);
