//! Fixed-resolution arc-length lookup.
//!
//! The table samples a curve at uniform parameter spacing and accumulates
//! chord lengths. Accuracy is bounded by the sampling resolution, not by a
//! tolerance: doubling the sample count roughly quarters the chord error
//! on smooth curves, at linear cost in construction time and memory.

use tracing::debug;

use crate::error::{InputError, Result};
use crate::geometry::{Curve, CurveDomain};

/// Monotonic table of `(parameter, cumulative length)` pairs.
#[derive(Debug, Clone)]
pub struct ArcLengthTable {
    domain: CurveDomain,
    parameters: Vec<f64>,
    cumulative: Vec<f64>,
}

impl ArcLengthTable {
    /// Samples `curve` at `samples` uniformly spaced parameters over its
    /// domain and accumulates the distances between consecutive positions.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples < 2`.
    pub fn build<C: Curve + ?Sized>(curve: &C, samples: usize) -> Result<Self> {
        if samples < 2 {
            return Err(InputError::InvalidResolution { samples }.into());
        }

        let domain = curve.domain();
        let parameters = domain.linspace(samples);
        let positions: Vec<_> = parameters.iter().map(|&t| curve.evaluate(t)).collect();

        let mut cumulative = Vec::with_capacity(samples);
        cumulative.push(0.0);
        let mut total = 0.0;
        for pair in positions.windows(2) {
            total += (pair[1] - pair[0]).norm();
            cumulative.push(total);
        }

        debug!(samples, total_length = total, "built arc-length table");
        Ok(Self {
            domain,
            parameters,
            cumulative,
        })
    }

    /// Number of samples in the table.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.parameters.len()
    }

    /// Sampled parameter values, strictly increasing.
    #[must_use]
    pub fn parameters(&self) -> &[f64] {
        &self.parameters
    }

    /// Cumulative length at each sampled parameter, non-decreasing and
    /// starting at zero.
    #[must_use]
    pub fn cumulative_lengths(&self) -> &[f64] {
        &self.cumulative
    }

    /// Total polyline length through all samples.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Approximate length along the curve from `t_start` to `t_end`.
    ///
    /// Both bounds are clamped to the domain, then snapped to the first
    /// sample at or after them. Reversed bounds give the negated length.
    #[must_use]
    pub fn length_between(&self, t_start: f64, t_end: f64) -> f64 {
        self.cumulative[self.lower_bound(t_end)] - self.cumulative[self.lower_bound(t_start)]
    }

    /// Parameter at which the cumulative length reaches `length`.
    ///
    /// `length` is clamped to `[0, total_length]`; the result is linearly
    /// interpolated between the bracketing samples. A NaN `length` maps to
    /// the start of the domain.
    #[must_use]
    pub fn parameter_at_length(&self, length: f64) -> f64 {
        // f64::clamp panics on a NaN bound; max/min skip NaN operands.
        let target = length.max(0.0).min(self.total_length());
        let idx = self.cumulative.partition_point(|&c| c < target);
        if idx == 0 {
            return self.parameters[0];
        }
        let idx = idx.min(self.cumulative.len() - 1);

        let (s0, s1) = (self.cumulative[idx - 1], self.cumulative[idx]);
        let (t0, t1) = (self.parameters[idx - 1], self.parameters[idx]);
        let seg = s1 - s0;
        if seg <= 0.0 {
            t1
        } else {
            t0 + (target - s0) / seg * (t1 - t0)
        }
    }

    fn lower_bound(&self, t: f64) -> usize {
        let t = self.domain.clamp(t);
        self.parameters
            .partition_point(|&p| p < t)
            .min(self.parameters.len() - 1)
    }
}
