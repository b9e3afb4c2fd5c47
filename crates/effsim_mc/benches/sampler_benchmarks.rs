//! Criterion benchmarks for the acceptance-rejection engine.
//!
//! Measures sampling, correction and ceiling-check throughput on the toy
//! scenario across trial counts to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use effsim_mc::correction::correction_factor;
use effsim_mc::mc::{verify_ceiling, AcceptRejectSampler};
use effsim_mc::mixture::build_mixture;
use effsim_mc::rng::SimRng;
use effsim_models::Scenario;

/// Benchmark one sampling pass of the efficiency-modulated `f`.
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("accept_reject");
    let scenario = Scenario::toy().unwrap();
    let sampler = AcceptRejectSampler::new(scenario.domain, scenario.range);
    let observed = scenario.observed_f();

    for n_gen in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("observed_f", n_gen), &n_gen, |b, &n| {
            let mut rng = SimRng::from_seed(42);
            b.iter(|| sampler.sample(&mut rng, black_box(&observed), n));
        });
    }

    group.finish();
}

/// Benchmark correction factors and mixture sampling.
fn bench_reweighting(c: &mut Criterion) {
    let mut group = c.benchmark_group("reweighting");
    let scenario = Scenario::toy().unwrap();
    let sampler = AcceptRejectSampler::new(scenario.domain, scenario.range);

    for n_gen in [10_000, 100_000] {
        let mut rng = SimRng::from_seed(7);
        let f_reco = sampler.sample(&mut rng, &scenario.observed_f(), n_gen);
        let g_reco = sampler.sample(&mut rng, &scenario.observed_g(), n_gen);

        group.bench_with_input(
            BenchmarkId::new("correction_factor", n_gen),
            &f_reco,
            |b, samples| {
                b.iter(|| correction_factor(black_box(samples.values()), &scenario.f));
            },
        );

        let approx = build_mixture(
            scenario.f,
            scenario.g,
            correction_factor(f_reco.values(), &scenario.f),
            correction_factor(g_reco.values(), &scenario.g),
        )
        .unwrap();
        group.bench_with_input(BenchmarkId::new("mixture_pass", n_gen), &n_gen, |b, &n| {
            let mut rng = SimRng::from_seed(11);
            b.iter(|| sampler.sample(&mut rng, black_box(&approx), n));
        });
    }

    group.finish();
}

/// Benchmark the pre-sampling ceiling probe.
fn bench_ceiling_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("ceiling_check");
    let scenario = Scenario::toy().unwrap();
    let observed = scenario.observed_g();

    for probes in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(probes), &probes, |b, &p| {
            b.iter(|| verify_ceiling(black_box(&observed), &scenario.domain, &scenario.range, p));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sampling, bench_reweighting, bench_ceiling_check);
criterion_main!(benches);
