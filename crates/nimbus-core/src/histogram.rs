//! Intensity histograms of calibrated channel values.

use crate::error::{Result, ValidationError};

/// Equal-width intensity histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    counts: Vec<u64>,
    min: f32,
    max: f32,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning `[min, max]`.
    ///
    /// Values outside the span clamp into the edge bins; a value exactly at
    /// `max` lands in the last bin. Requires `bins > 0` and `min < max`.
    pub fn compute(values: &[f32], bins: usize, min: f32, max: f32) -> Result<Self> {
        if bins == 0 || !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ValidationError::InvalidHistogram { bins, min, max });
        }

        let mut counts = vec![0u64; bins];
        let width = (max - min) / bins as f32;
        for &v in values {
            // A negative offset casts to 0, so out-of-range values clamp.
            let bin = (((v - min) / width) as usize).min(bins - 1);
            counts[bin] += 1;
        }

        Ok(Self { counts, min, max })
    }

    /// Per-bin counts, lowest bin first.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of bins.
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Width of one bin.
    pub fn bin_width(&self) -> f32 {
        (self.max - self.min) / self.counts.len() as f32
    }

    /// Center value of a bin.
    pub fn bin_center(&self, bin: usize) -> f32 {
        self.min + (bin as f32 + 0.5) * self.bin_width()
    }

    /// Total number of binned values.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
