//! Acceptance-rejection sampler.

use effsim_core::types::Interval;
use effsim_models::Density;
use rand_distr::Uniform;
use tracing::debug;

use super::ceiling::verify_ceiling;
use super::error::SamplingError;
use crate::rng::SimRng;

/// Samples accepted by one sampling pass.
///
/// Holds the accepted candidates in draw order together with the number of
/// trials that produced them. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    values: Vec<f64>,
    n_generated: usize,
}

impl SampleSet {
    /// Accepted values, in the order they were drawn.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of accepted values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no candidate was accepted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of trials, accepted or not.
    #[inline]
    pub fn n_generated(&self) -> usize {
        self.n_generated
    }

    /// Fraction of trials accepted; zero when no trials were run.
    pub fn acceptance_rate(&self) -> f64 {
        if self.n_generated == 0 {
            0.0
        } else {
            self.values.len() as f64 / self.n_generated as f64
        }
    }

    /// Consumes the set, returning the accepted values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl AsRef<[f64]> for SampleSet {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// Acceptance-rejection sampler over a fixed domain × range box.
///
/// Each trial draws `x` uniformly on the domain, then `y` uniformly on the
/// range, and keeps `x` iff `y < density(x)`. Rejected trials are **not**
/// retried, so a pass of `n_gen` trials returns at most `n_gen` values; the
/// count itself estimates `∫density / (domain width × range height)`.
///
/// A NaN density value is never accepted (`y < NaN` is false). A density
/// rising above `range.high()` is silently under-represented; guard against
/// it with [`AcceptRejectSampler::sample_checked`].
///
/// # Examples
///
/// ```rust
/// use effsim_core::types::Interval;
/// use effsim_mc::mc::AcceptRejectSampler;
/// use effsim_mc::rng::SimRng;
/// use effsim_models::Gaussian;
///
/// let domain = Interval::new(-2.0, 6.0).unwrap();
/// let range = Interval::new(0.0, 1.0).unwrap();
/// let sampler = AcceptRejectSampler::new(domain, range);
///
/// let mut rng = SimRng::from_seed(42);
/// let f = Gaussian::new(0.0, 3.0, 7.0).unwrap();
/// let samples = sampler.sample(&mut rng, &f, 10_000);
///
/// assert!(samples.len() <= 10_000);
/// assert!(samples.values().iter().all(|&x| domain.contains(x)));
/// ```
#[derive(Debug, Clone)]
pub struct AcceptRejectSampler {
    domain: Interval,
    range: Interval,
    domain_dist: Uniform<f64>,
    range_dist: Uniform<f64>,
}

impl AcceptRejectSampler {
    /// Creates a sampler for the given domain and acceptance range.
    pub fn new(domain: Interval, range: Interval) -> Self {
        Self {
            domain,
            range,
            domain_dist: Uniform::new(domain.low(), domain.high()),
            range_dist: Uniform::new(range.low(), range.high()),
        }
    }

    /// Sampling domain.
    #[inline]
    pub fn domain(&self) -> &Interval {
        &self.domain
    }

    /// Acceptance range.
    #[inline]
    pub fn range(&self) -> &Interval {
        &self.range
    }

    /// Runs `n_gen` trials against `density`.
    pub fn sample<D: Density + ?Sized>(
        &self,
        rng: &mut SimRng,
        density: &D,
        n_gen: usize,
    ) -> SampleSet {
        let mut values = Vec::new();

        for _ in 0..n_gen {
            let x = rng.sample(&self.domain_dist);
            let y = rng.sample(&self.range_dist);
            if y < density.density(x) {
                values.push(x);
            }
        }

        debug!(
            requested = n_gen,
            accepted = values.len(),
            domain = %self.domain,
            range = %self.range,
            "Acceptance-rejection pass complete"
        );

        SampleSet {
            values,
            n_generated: n_gen,
        }
    }

    /// Verifies the ceiling on `probes` grid points, then samples.
    ///
    /// # Errors
    ///
    /// Any error from [`verify_ceiling`]; no trials are run in that case.
    pub fn sample_checked<D: Density + ?Sized>(
        &self,
        rng: &mut SimRng,
        density: &D,
        n_gen: usize,
        probes: usize,
    ) -> Result<SampleSet, SamplingError> {
        verify_ceiling(density, &self.domain, &self.range, probes)?;
        Ok(self.sample(rng, density, n_gen))
    }

    /// Acceptance rate a pass should converge to:
    /// `∫density / (domain width × range height)`, with the integral taken
    /// by the trapezoidal rule on `n_points` grid points.
    ///
    /// # Errors
    ///
    /// [`SamplingError::Grid`] if `n_points < 2`.
    pub fn expected_acceptance_rate<D: Density + ?Sized>(
        &self,
        density: &D,
        n_points: usize,
    ) -> Result<f64, SamplingError> {
        let grid = crate::grid::Grid::evaluate(density, &self.domain, n_points)?;
        Ok(grid.integral() / (self.domain.width() * self.range.width()))
    }
}
