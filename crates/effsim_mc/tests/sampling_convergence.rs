//! Convergence tests for the acceptance-rejection pipeline.
//!
//! These tests run the toy scenario at moderate sample counts and compare
//! Monte Carlo estimates with quantities computed on a fine grid.
//!
//! # Test Categories
//!
//! 1. **Acceptance rate**: accepted / trials vs `∫density / box area`
//! 2. **Correction factors**: `Σ 1/pdf(x)` vs `n_gen·∫efficiency / box area`
//! 3. **Mixture weights**: equal trial counts give near-equal weights
//! 4. **Properties**: accepted count and location bounds for any seed

use approx::assert_relative_eq;
use effsim_mc::correction::correction_factor;
use effsim_mc::grid::Grid;
use effsim_mc::histogram::{measured_efficiency, Histogram, DEFAULT_HISTOGRAM_BINS};
use effsim_mc::mc::{AcceptRejectSampler, DEFAULT_CEILING_PROBES};
use effsim_mc::mixture::build_mixture;
use effsim_mc::rng::SimRng;
use effsim_models::Scenario;
use proptest::prelude::*;

const N_TRIALS: usize = 200_000;

fn toy() -> (Scenario, AcceptRejectSampler) {
    let scenario = Scenario::toy().unwrap();
    let sampler = AcceptRejectSampler::new(scenario.domain, scenario.range);
    (scenario, sampler)
}

fn box_area(scenario: &Scenario) -> f64 {
    scenario.domain.width() * scenario.range.width()
}

// ============================================================================
// Acceptance Rate
// ============================================================================

#[test]
fn test_observed_f_acceptance_rate_converges() {
    let (scenario, sampler) = toy();
    let observed = scenario.observed_f();
    let mut rng = SimRng::from_seed(42);

    let samples = sampler.sample(&mut rng, &observed, N_TRIALS);
    let expected = sampler.expected_acceptance_rate(&observed, 10_001).unwrap();

    // Binomial σ ≈ 0.001 at this trial count
    assert!(
        (samples.acceptance_rate() - expected).abs() < 0.01,
        "rate {} vs expected {}",
        samples.acceptance_rate(),
        expected
    );
}

#[test]
fn test_observed_g_acceptance_rate_converges() {
    let (scenario, sampler) = toy();
    let observed = scenario.observed_g();
    let mut rng = SimRng::from_seed(43);

    let samples = sampler.sample(&mut rng, &observed, N_TRIALS);
    let expected = sampler.expected_acceptance_rate(&observed, 10_001).unwrap();

    assert!((samples.acceptance_rate() - expected).abs() < 0.01);
}

// ============================================================================
// Correction Factors
// ============================================================================

#[test]
fn test_correction_factor_tracks_efficiency_integral() {
    let (scenario, sampler) = toy();
    let mut rng = SimRng::from_seed(7);

    let f_reco = sampler.sample(&mut rng, &scenario.observed_f(), N_TRIALS);
    let c_f = correction_factor(f_reco.values(), &scenario.f);

    let efficiency = Grid::evaluate(&scenario.efficiency, &scenario.domain, 10_001).unwrap();
    let expected = N_TRIALS as f64 * efficiency.integral() / box_area(&scenario);

    assert_relative_eq!(c_f, expected, max_relative = 0.03);
}

#[test]
fn test_equal_trials_give_balanced_mixture() {
    let (scenario, sampler) = toy();
    let mut rng = SimRng::from_seed(2024);

    let f_reco = sampler
        .sample_checked(&mut rng, &scenario.observed_f(), N_TRIALS, DEFAULT_CEILING_PROBES)
        .unwrap();
    let g_reco = sampler
        .sample_checked(&mut rng, &scenario.observed_g(), N_TRIALS, DEFAULT_CEILING_PROBES)
        .unwrap();

    let c_f = correction_factor(f_reco.values(), &scenario.f);
    let c_g = correction_factor(g_reco.values(), &scenario.g);
    let approx = build_mixture(scenario.f, scenario.g, c_f, c_g).unwrap();

    // Both factors estimate the same efficiency integral
    assert_relative_eq!(approx.weights().first(), 0.5, epsilon = 0.03);
    assert_relative_eq!(approx.weights().second(), 0.5, epsilon = 0.03);
}

#[test]
fn test_mixture_passes_ceiling_check() {
    let (scenario, sampler) = toy();
    let mut rng = SimRng::from_seed(5);

    let f_reco = sampler.sample(&mut rng, &scenario.observed_f(), 10_000);
    let g_reco = sampler.sample(&mut rng, &scenario.observed_g(), 10_000);
    let approx = build_mixture(
        scenario.f,
        scenario.g,
        correction_factor(f_reco.values(), &scenario.f),
        correction_factor(g_reco.values(), &scenario.g),
    )
    .unwrap();

    let samples = sampler
        .sample_checked(&mut rng, &approx, 20_000, DEFAULT_CEILING_PROBES)
        .unwrap();
    assert!(samples.len() <= 20_000);
}

#[test]
fn test_measured_efficiency_has_one_value_per_bin() {
    let (scenario, sampler) = toy();
    let mut rng = SimRng::from_seed(9);

    let f_reco = sampler.sample(&mut rng, &scenario.observed_f(), 50_000);
    let g_reco = sampler.sample(&mut rng, &scenario.observed_g(), 50_000);
    let approx = build_mixture(
        scenario.f,
        scenario.g,
        correction_factor(f_reco.values(), &scenario.f),
        correction_factor(g_reco.values(), &scenario.g),
    )
    .unwrap();
    let generated = sampler.sample(&mut rng, &approx, 100_000);

    let mut reco = f_reco.into_values();
    reco.extend_from_slice(g_reco.values());

    let reco_hist = Histogram::from_samples(&reco, &scenario.domain, DEFAULT_HISTOGRAM_BINS).unwrap();
    let gen_hist =
        Histogram::from_samples(generated.values(), &scenario.domain, DEFAULT_HISTOGRAM_BINS)
            .unwrap();
    let measured = measured_efficiency(&reco_hist, &gen_hist).unwrap();

    assert_eq!(measured.len(), DEFAULT_HISTOGRAM_BINS);
    let finite: Vec<f64> = measured.iter().copied().filter(|v| v.is_finite()).collect();
    let mean = finite.iter().sum::<f64>() / finite.len() as f64;
    assert_relative_eq!(mean, 1.0, epsilon = 1e-9);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_accepted_count_bounded(seed in any::<u64>(), n_gen in 0usize..2_000) {
        let (scenario, sampler) = toy();
        let mut rng = SimRng::from_seed(seed);

        let samples = sampler.sample(&mut rng, &scenario.observed_f(), n_gen);
        prop_assert!(samples.len() <= n_gen);
        prop_assert_eq!(samples.n_generated(), n_gen);
    }

    #[test]
    fn prop_accepted_values_in_domain(seed in any::<u64>()) {
        let (scenario, sampler) = toy();
        let mut rng = SimRng::from_seed(seed);

        let samples = sampler.sample(&mut rng, &scenario.observed_g(), 1_000);
        for &x in samples.values() {
            prop_assert!(x >= scenario.domain.low() && x < scenario.domain.high());
        }
    }

    #[test]
    fn prop_correction_factor_non_negative(seed in any::<u64>()) {
        let (scenario, sampler) = toy();
        let mut rng = SimRng::from_seed(seed);

        let samples = sampler.sample(&mut rng, &scenario.observed_f(), 500);
        let c = correction_factor(samples.values(), &scenario.f);
        prop_assert!(c >= 0.0 && c.is_finite());
    }
}
