//! Error types for the decode pipeline.

use thiserror::Error;

/// Errors raised by pipeline stage validation.
///
/// Every stage validates its inputs eagerly and a failure aborts the whole
/// decode; there is no retry or partial-result path. The pipeline is a
/// deterministic batch transform over already-captured audio, so re-running
/// with corrected configuration is the only remediation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The sample series has no samples.
    #[error("sample series is empty")]
    EmptySamples,

    /// The sample series contains a NaN or infinite value.
    #[error("non-finite sample at index {0}")]
    NonFiniteSample(usize),

    /// The sample rate is zero.
    #[error("sample rate must be positive")]
    ZeroSampleRate,

    /// The scan-line width is zero samples.
    #[error("line width must be at least one sample")]
    ZeroLineWidth,

    /// The trim range selects no samples.
    #[error("trim range {start}..{end} selects no samples from a {len}-sample recording")]
    EmptyTrimRange {
        /// First sample index of the range.
        start: usize,
        /// One past the last sample index, after clamping to the recording.
        end: usize,
        /// Length of the recording.
        len: usize,
    },

    /// A channel's column range does not fit inside the raster.
    #[error("column range {start}..{end} does not fit a raster {cols} columns wide")]
    ColumnRangeOutOfBounds {
        /// First column of the requested range.
        start: usize,
        /// One past the last column of the requested range.
        end: usize,
        /// Width of the raster being sliced.
        cols: usize,
    },

    /// The upper stretch threshold is not a positive finite number.
    #[error("upper threshold must be positive and finite, got {0}")]
    InvalidUpperThreshold(f32),

    /// The stretch output maximum is not a positive finite number.
    #[error("output maximum must be positive and finite, got {0}")]
    InvalidOutputMax(f32),

    /// The lower stretch threshold coincides with or exceeds the output
    /// maximum, which would divide by zero in the black-point rescale.
    #[error("lower threshold {low} must lie in [0, {output_max})")]
    InvalidLowerThreshold {
        /// The offending lower threshold, in output units.
        low: f32,
        /// The configured output maximum.
        output_max: f32,
    },

    /// Histogram binning parameters are degenerate.
    #[error("histogram needs at least one bin and min < max, got {bins} bins over [{min}, {max}]")]
    InvalidHistogram {
        /// Requested number of bins.
        bins: usize,
        /// Lower edge of the binned range.
        min: f32,
        /// Upper edge of the binned range.
        max: f32,
    },
}

/// Convenience result type for pipeline operations.
pub type Result<T> = std::result::Result<T, ValidationError>;
