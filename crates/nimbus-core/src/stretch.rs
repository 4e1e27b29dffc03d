//! Two-pass piecewise-linear contrast stretch.
//!
//! Raw envelope values occupy a narrow, recording-dependent band of the
//! intensity range. The stretch spreads that band across the full output
//! range in two independent passes: pass 1 fixes the white point (highlight
//! saturation), pass 2 fixes the black point within the already-saturated
//! range.

use crate::error::{Result, ValidationError};
use crate::raster::Raster;

/// Per-channel contrast calibration.
///
/// `high_threshold` is expressed in raw envelope units; `low_threshold` is
/// expressed in *output* units and applied to the pass-1 result. The unit
/// asymmetry is deliberate and load-bearing: channel constants are tuned by
/// visual inspection against this exact two-pass formula, so the thresholds
/// are not required to satisfy `low < high` in raw units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastStretch {
    /// White point in raw envelope units; values above it saturate.
    pub high_threshold: f32,
    /// Black point in output units; pass-1 values below it floor to zero.
    pub low_threshold: f32,
    /// Upper bound of the output range (255 for 8-bit grayscale).
    pub output_max: f32,
}

impl ContrastStretch {
    /// Create a stretch calibration.
    pub fn new(high_threshold: f32, low_threshold: f32, output_max: f32) -> Self {
        Self {
            high_threshold,
            low_threshold,
            output_max,
        }
    }

    /// Check the calibration for degenerate configurations.
    ///
    /// `low_threshold == output_max` would divide by zero in the black-point
    /// rescale; it is rejected here rather than propagated as NaN.
    pub fn validate(&self) -> Result<()> {
        if !self.high_threshold.is_finite() || self.high_threshold <= 0.0 {
            return Err(ValidationError::InvalidUpperThreshold(self.high_threshold));
        }
        if !self.output_max.is_finite() || self.output_max <= 0.0 {
            return Err(ValidationError::InvalidOutputMax(self.output_max));
        }
        if !self.low_threshold.is_finite()
            || self.low_threshold < 0.0
            || self.low_threshold >= self.output_max
        {
            return Err(ValidationError::InvalidLowerThreshold {
                low: self.low_threshold,
                output_max: self.output_max,
            });
        }
        Ok(())
    }

    /// Apply the stretch to every sample, returning a new raster.
    ///
    /// Pure transform: the input raster is never mutated. Every output value
    /// lies in `[0, output_max]`, and the mapping is non-decreasing in the
    /// input value. Envelope values beyond the thresholds are valid data
    /// that clamps; they are not errors.
    pub fn apply(&self, raster: &Raster) -> Result<Raster> {
        self.validate()?;

        let data = (0..raster.rows())
            .map(|r| {
                raster
                    .row(r)
                    .unwrap_or(&[])
                    .iter()
                    .map(|&v| self.stretch_value(v))
                    .collect()
            })
            .collect();

        Ok(Raster::from_rows(data))
    }

    fn stretch_value(&self, v: f32) -> f32 {
        // Pass 1: clamp the white point, rescale to [0, output_max].
        let v = v.min(self.high_threshold) * self.output_max / self.high_threshold;

        // Pass 2: clamp the black point within the rescaled range.
        let v = v.max(self.low_threshold);
        let v = (v - self.low_threshold) * self.output_max / (self.output_max - self.low_threshold);

        // Rounding can overshoot the range edge by an ulp.
        v.clamp(0.0, self.output_max)
    }
}
