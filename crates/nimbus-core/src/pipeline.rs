//! The decode pipeline: audio samples in, calibrated channel images out.
//!
//! Data flows strictly forward: raw samples → trimmed/centered samples →
//! envelope → raster → per-channel band → stretched band. Every stage is a
//! pure function over an immutable input, and channels are independent of
//! one another once the raster exists.

use tracing::debug;

use crate::config::DecodeConfig;
use crate::envelope;
use crate::error::{Result, ValidationError};
use crate::raster::Raster;

/// One decoded channel.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedChannel {
    /// Channel name from the configuration.
    pub name: String,
    /// Calibrated grayscale image, values in `[0, output_max]`.
    pub image: Raster,
    /// Row-major flattened pixel values for histogram binning.
    pub values: Vec<f32>,
}

/// Run the full decode.
///
/// Any validation failure aborts the whole run: a malformed envelope or
/// raster makes every downstream channel meaningless, so there is no
/// partial-result path. Results are returned in configuration order.
pub fn decode(
    samples: &[f32],
    sample_rate: u32,
    config: &DecodeConfig,
) -> Result<Vec<DecodedChannel>> {
    envelope::validate(samples)?;
    if sample_rate == 0 {
        return Err(ValidationError::ZeroSampleRate);
    }

    let (start, end) = config.trim.resolve(samples.len())?;
    let trimmed = &samples[start..end];
    debug!(start, end, kept = trimmed.len(), "trimmed recording");

    let centered = envelope::remove_mean(trimmed);
    let amplitude = envelope::demodulate(&centered)?;

    let line_width = config.line_width(sample_rate)?;
    let mut raster = Raster::from_envelope(&amplitude, line_width)?;
    if config.rotate180 {
        raster = raster.rotate_180();
    }
    debug!(
        rows = raster.rows(),
        cols = raster.cols(),
        "reconstructed raster"
    );

    let mut channels = Vec::with_capacity(config.channels.len());
    for ch in &config.channels {
        let band = raster.columns(ch.column_start, ch.column_end)?;
        let image = ch.stretch.apply(&band)?;
        let values = image.flatten();
        debug!(
            channel = %ch.name,
            rows = image.rows(),
            cols = image.cols(),
            "decoded channel"
        );
        channels.push(DecodedChannel {
            name: ch.name.clone(),
            image,
            values,
        });
    }

    Ok(channels)
}
