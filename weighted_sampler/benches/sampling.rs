use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use weighted_sampler::{MtUniform, WeightedSampler};

fn uniform_sampler(n: usize) -> WeightedSampler<usize> {
    let p = 1.0 / n as f64;
    WeightedSampler::new((0..n).map(|i| (i, p)).collect()).unwrap()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for &n in &[10, 1_000, 100_000] {
        let p = 1.0 / n as f64;
        group.bench_function(format!("new_n{}", n), |b| {
            b.iter(|| {
                let pairs: Vec<(usize, f64)> = (0..n).map(|i| (i, p)).collect();
                black_box(WeightedSampler::new(black_box(pairs)).unwrap());
            })
        });
    }
    group.finish();
}

fn bench_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("draws");

    for &n in &[10, 1_000, 100_000] {
        let sampler = uniform_sampler(n);
        group.bench_function(format!("chacha_n{}", n), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| black_box(sampler.next_value_with_rng(&mut rng)))
        });
        group.bench_function(format!("mt_n{}", n), |b| {
            let mut rng = MtUniform::new(42);
            b.iter(|| black_box(sampler.next_value_with_rng(&mut rng)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construction, bench_draws);
criterion_main!(benches);
