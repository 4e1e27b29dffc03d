//! Amplitude demodulation of the received audio.
//!
//! The satellite amplitude-modulates pixel intensity onto an audio-band
//! carrier. Recovering the image therefore means recovering the amplitude
//! envelope: center the recording on zero, compute the analytic signal, and
//! take its magnitude sample by sample.

use crate::error::{Result, ValidationError};
use crate::hilbert::HilbertTransform;

/// Check that a sample series is non-empty and contains only finite values.
pub fn validate(samples: &[f32]) -> Result<()> {
    if samples.is_empty() {
        return Err(ValidationError::EmptySamples);
    }
    if let Some(i) = samples.iter().position(|v| !v.is_finite()) {
        return Err(ValidationError::NonFiniteSample(i));
    }
    Ok(())
}

/// Arithmetic mean of a sample series.
///
/// Accumulates in f64: recordings run to tens of millions of samples and an
/// f32 accumulator loses the low bits long before the end.
pub fn mean(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&x| f64::from(x)).sum();
    (sum / samples.len() as f64) as f32
}

/// Subtract the mean from every sample (zero-centering).
///
/// Envelope detection assumes a zero-mean oscillating signal; a DC bias
/// shifts every recovered pixel value.
pub fn remove_mean(samples: &[f32]) -> Vec<f32> {
    let m = mean(samples);
    samples.iter().map(|&x| x - m).collect()
}

/// Recover the amplitude envelope of a centered sample series.
///
/// Input must be pre-trimmed (leading static removed) and pre-centered;
/// see [`remove_mean`]. Output length equals input length and every value
/// is non-negative.
pub fn demodulate(samples: &[f32]) -> Result<Vec<f32>> {
    validate(samples)?;
    let hilbert = HilbertTransform::new(samples.len());
    Ok(hilbert.envelope(samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(demodulate(&[]), Err(ValidationError::EmptySamples));
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let samples = [0.0, 1.0, f32::NAN, 2.0];
        assert_eq!(demodulate(&samples), Err(ValidationError::NonFiniteSample(2)));

        let samples = [0.0, f32::INFINITY];
        assert_eq!(demodulate(&samples), Err(ValidationError::NonFiniteSample(1)));
    }

    #[test]
    fn test_mean_removed() {
        let samples: Vec<f32> = (0..1000)
            .map(|i| 512.0 + (2.0 * PI * 50.0 * i as f32 / 1000.0).sin())
            .collect();

        let centered = remove_mean(&samples);
        assert!(mean(&centered).abs() < 1e-3);
    }

    #[test]
    fn test_output_length_matches_input() {
        let samples: Vec<f32> = (0..777)
            .map(|i| (2.0 * PI * 60.0 * i as f32 / 1000.0).sin())
            .collect();

        let envelope = demodulate(&samples).unwrap();
        assert_eq!(envelope.len(), samples.len());
    }

    #[test]
    fn test_envelope_non_negative() {
        let samples: Vec<f32> = (0..512)
            .map(|i| {
                let t = i as f32 / 1000.0;
                (0.5 + 0.5 * (2.0 * PI * 3.0 * t).sin()) * (2.0 * PI * 120.0 * t).sin()
            })
            .collect();

        for &v in &demodulate(&samples).unwrap() {
            assert!(v >= 0.0);
        }
    }

    #[test]
    fn test_dc_offset_corrupts_envelope() {
        // The same AM signal with and without centering: the biased run
        // must not recover the flat unit envelope of the pure tone.
        let samples: Vec<f32> = (0..1024)
            .map(|i| (2.0 * PI * 100.0 * i as f32 / 1000.0).sin())
            .collect();
        let biased: Vec<f32> = samples.iter().map(|&x| x + 2.0).collect();

        let clean = demodulate(&samples).unwrap();
        let corrupt = demodulate(&biased).unwrap();

        let mid = samples.len() / 2;
        assert!((clean[mid] - 1.0).abs() < 0.1);
        assert!((corrupt[mid] - 1.0).abs() > 0.5);
    }
}
