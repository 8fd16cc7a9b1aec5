use criterion::{criterion_group, criterion_main, Criterion};
use ixa_sir::parameters::SimulationParameters;
use ixa_sir::reshape::to_long;
use ixa_sir::simulator::simulate;
use std::hint::black_box;

pub fn criterion_benchmark(criterion: &mut Criterion) {
    let mut criterion = criterion.benchmark_group("simulate");

    let reference = SimulationParameters::default();
    criterion.bench_function("reference-scenario", |bencher| {
        bencher.iter(|| simulate(black_box(&reference)).unwrap());
    });

    let long_horizon = SimulationParameters {
        timesteps: 100_000,
        ..SimulationParameters::default()
    };
    criterion.bench_function("long-horizon", |bencher| {
        bencher.iter_with_large_drop(|| simulate(black_box(&long_horizon)).unwrap());
    });

    let trajectory = simulate(&reference).unwrap();
    criterion.bench_function("to-long", |bencher| {
        bencher.iter_with_large_drop(|| to_long(black_box(&trajectory)));
    });

    criterion.finish()
}

criterion_group!(simulate_benches, criterion_benchmark);
criterion_main!(simulate_benches);
