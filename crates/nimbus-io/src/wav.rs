//! WAV file reading.

use crate::Result;
use hound::{SampleFormat, WavReader};
use std::path::Path;
use tracing::debug;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without loading sample data.
///
/// Opens the file, reads the header, and returns a [`WavInfo`] struct with
/// format details and duration. Much faster than [`read_wav`] when only
/// metadata is needed.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = reader.len() as u64; // total across all channels
    let num_frames = total_samples / u64::from(spec.channels);
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// Read a WAV recording as mono samples in raw counts plus the sample rate.
///
/// Integer PCM samples are returned as their raw ADC counts, *not*
/// normalized to [-1, 1]: the contrast calibration thresholds of a decode
/// preset are expressed in raw counts, so scaling here would silently
/// invalidate every preset. IEEE float samples pass through unchanged.
///
/// The transmission is mono; multi-channel captures of it are mixed down by
/// averaging, which decodes identically.
///
/// # Example
/// ```ignore
/// let (samples, sample_rate) = read_wav("recording.wav")?;
/// println!("Loaded {} samples at {} Hz", samples.len(), sample_rate);
/// ```
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, u32)> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let channels = usize::from(spec.channels);

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => reader
            .into_samples::<i32>()
            .map(|s| s.map(|v| v as f32))
            .collect::<std::result::Result<Vec<_>, _>>()?,
    };

    let mono_samples = if channels > 1 {
        samples
            .chunks(channels)
            .map(|chunk| chunk.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    debug!(
        samples = mono_samples.len(),
        sample_rate = spec.sample_rate,
        channels,
        "loaded recording"
    );

    Ok((mono_samples, spec.sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn write_i16_wav(path: &Path, channels: u16, sample_rate: u32, samples: &[i16]) {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_int_samples_stay_in_raw_counts() {
        let file = NamedTempFile::new().unwrap();
        write_i16_wav(file.path(), 1, 11025, &[0, 300, -260, 32767]);

        let (samples, sample_rate) = read_wav(file.path()).unwrap();
        assert_eq!(sample_rate, 11025);
        assert_eq!(samples, vec![0.0, 300.0, -260.0, 32767.0]);
    }

    #[test]
    fn test_stereo_mixdown_averages() {
        let file = NamedTempFile::new().unwrap();
        write_i16_wav(file.path(), 2, 8000, &[100, 300, -50, 50]);

        let (samples, _) = read_wav(file.path()).unwrap();
        assert_eq!(samples, vec![200.0, 0.0]);
    }

    #[test]
    fn test_float_samples_pass_through() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let file = NamedTempFile::new().unwrap();
        let mut writer = hound::WavWriter::create(file.path(), spec).unwrap();
        for s in [0.25f32, -0.5, 0.75] {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();

        let (samples, sample_rate) = read_wav(file.path()).unwrap();
        assert_eq!(sample_rate, 48000);
        for (got, want) in samples.iter().zip([0.25f32, -0.5, 0.75]) {
            assert!((got - want).abs() < 1e-6);
        }
    }

    #[test]
    fn test_info_matches_written_file() {
        let file = NamedTempFile::new().unwrap();
        write_i16_wav(file.path(), 1, 11025, &[0; 22050]);

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.channels, 1);
        assert_eq!(info.sample_rate, 11025);
        assert_eq!(info.bits_per_sample, 16);
        assert_eq!(info.num_frames, 22050);
        assert_eq!(info.format, WavFormat::Pcm);
        assert!((info.duration_secs - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(read_wav("/nonexistent/recording.wav").is_err());
    }
}
