//! Audio input and image output for the nimbus decoder.
//!
//! This crate provides the two collaborators bracketing the decode
//! pipeline:
//!
//! - **WAV reading**: [`read_wav`] and [`read_wav_info`] for loading
//!   recorded transmissions
//! - **Artifact export**: [`write_pgm`] for grayscale channel images and
//!   [`write_histogram_csv`] for histogram data
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nimbus_config::DecodePreset;
//! use nimbus_io::{read_wav, write_pgm};
//!
//! let (samples, sample_rate) = read_wav("recording.wav")?;
//! let config = DecodePreset::reference().to_config(sample_rate)?;
//! let channels = nimbus_core::decode(&samples, sample_rate, &config)?;
//! write_pgm(&channels[0].image, "op.pgm", 255.0)?;
//! ```

mod image;
mod wav;

pub use image::{write_histogram_csv, write_pgm};
pub use wav::{WavFormat, WavInfo, read_wav, read_wav_info};

/// Error types for decoder I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for decoder I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
