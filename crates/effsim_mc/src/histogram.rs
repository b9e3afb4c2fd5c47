//! Binned sample counts and the measured efficiency they imply.
//!
//! Dividing the histogram of reconstructed samples by the histogram of
//! samples drawn from the approximate generating mixture gives a per-bin
//! efficiency estimate. Both sides are only known up to normalisation, so
//! the ratio is rescaled to unit mean before it is compared with the true
//! curve (rescaled the same way).

use effsim_core::math::linspace;
use effsim_core::types::Interval;

use crate::mc::SamplingError;

/// Default number of bins (50 edges over the domain).
pub const DEFAULT_HISTOGRAM_BINS: usize = 49;

/// Equal-width histogram over a domain.
///
/// Bins are half-open `[edge_i, edge_{i+1})` except the last, which also
/// includes the upper domain bound. Values outside the domain are dropped.
///
/// # Examples
///
/// ```rust
/// use effsim_core::types::Interval;
/// use effsim_mc::histogram::Histogram;
///
/// let domain = Interval::new(0.0, 4.0).unwrap();
/// let hist = Histogram::from_samples(&[0.0, 0.5, 1.0, 3.9, 4.0, 7.0], &domain, 4).unwrap();
///
/// assert_eq!(hist.counts(), &[2, 1, 0, 2]);
/// assert_eq!(hist.centres(), vec![0.5, 1.5, 2.5, 3.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<u64>,
}

impl Histogram {
    /// Bins `samples` into `n_bins` equal-width bins spanning `domain`.
    ///
    /// # Errors
    ///
    /// [`SamplingError::InvalidParameter`] if `n_bins == 0`.
    pub fn from_samples(
        samples: &[f64],
        domain: &Interval,
        n_bins: usize,
    ) -> Result<Self, SamplingError> {
        if n_bins == 0 {
            return Err(SamplingError::InvalidParameter {
                name: "n_bins",
                value: "must be positive".to_string(),
            });
        }

        let edges = linspace(domain, n_bins + 1)?;
        let mut counts = vec![0u64; n_bins];
        let scale = n_bins as f64 / domain.width();

        for &x in samples.iter().filter(|&&x| domain.contains(x)) {
            let index = (((x - domain.low()) * scale) as usize).min(n_bins - 1);
            counts[index] += 1;
        }

        Ok(Self { edges, counts })
    }

    /// Bin edges, `n_bins + 1` of them.
    #[inline]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Per-bin counts.
    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of bins.
    #[inline]
    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    /// Bin midpoints.
    pub fn centres(&self) -> Vec<f64> {
        self.edges.windows(2).map(|e| 0.5 * (e[0] + e[1])).collect()
    }

    /// Total number of binned samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Rescales `values` so the mean over the finite entries is one.
///
/// Returns the input unchanged if there is no finite entry or the mean is
/// not positive.
pub fn normalise_to_unit_mean(values: &[f64]) -> Vec<f64> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return values.to_vec();
    }

    let mean = finite.iter().sum::<f64>() / finite.len() as f64;
    if mean > 0.0 {
        values.iter().map(|v| v / mean).collect()
    } else {
        values.to_vec()
    }
}

/// Per-bin ratio `reco / generated`, rescaled to unit mean.
///
/// Bins with no generated samples give NaN and are excluded from the mean.
///
/// # Errors
///
/// [`SamplingError::InvalidParameter`] if the two histograms do not share
/// the same binning.
pub fn measured_efficiency(
    reco: &Histogram,
    generated: &Histogram,
) -> Result<Vec<f64>, SamplingError> {
    if reco.edges != generated.edges {
        return Err(SamplingError::InvalidParameter {
            name: "generated",
            value: "histograms must share the same bin edges".to_string(),
        });
    }

    let ratios: Vec<f64> = reco
        .counts
        .iter()
        .zip(&generated.counts)
        .map(|(&r, &g)| if g == 0 { f64::NAN } else { r as f64 / g as f64 })
        .collect();

    Ok(normalise_to_unit_mean(&ratios))
}
