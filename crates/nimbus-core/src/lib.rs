//! Nimbus Core - decode pipeline for weather-satellite audio transmissions
//!
//! A recorded transmission is a mono audio signal whose carrier amplitude
//! encodes pixel intensity. This crate turns such a recording into
//! calibrated grayscale channel images:
//!
//! - [`envelope`] - trimming support, zero-centering, and amplitude
//!   demodulation via the analytic-signal magnitude
//! - [`hilbert`] / [`fft`] - the frequency-domain Hilbert transform behind
//!   the demodulator
//! - [`raster`] - folding the envelope into scan lines, rotation, channel
//!   band slicing
//! - [`stretch`] - two-pass piecewise-linear contrast calibration
//! - [`histogram`] - intensity histograms of decoded channels
//! - [`config`] - the explicit configuration surface (trim range, line
//!   period, rotation, per-channel bands and thresholds)
//! - [`pipeline`] - the orchestrator wiring the stages together
//!
//! # Example
//!
//! ```rust
//! use nimbus_core::{ChannelConfig, ContrastStretch, DecodeConfig, TrimRange, decode};
//!
//! // Two scan lines of a 10-sample-per-line transmission.
//! let samples: Vec<f32> = (0..20)
//!     .map(|i| 100.0 * (i as f32 * 2.2).sin())
//!     .collect();
//!
//! let config = DecodeConfig {
//!     trim: TrimRange::default(),
//!     line_duration_secs: 0.5,
//!     rotate180: false,
//!     channels: vec![ChannelConfig {
//!         name: "OP".to_string(),
//!         column_start: 2,
//!         column_end: 8,
//!         stretch: ContrastStretch::new(120.0, 0.0, 255.0),
//!     }],
//! };
//!
//! let channels = decode(&samples, 20, &config)?;
//! assert_eq!(channels[0].image.rows(), 2);
//! assert_eq!(channels[0].image.cols(), 6);
//! # Ok::<(), nimbus_core::ValidationError>(())
//! ```
//!
//! Every stage is a pure function over an immutable input; the pipeline is
//! a single-threaded batch computation with no I/O. Reading audio and
//! writing image files live in `nimbus-io`.

pub mod config;
pub mod envelope;
pub mod error;
pub mod fft;
pub mod hilbert;
pub mod histogram;
pub mod pipeline;
pub mod raster;
pub mod stretch;

pub use config::{ChannelConfig, DecodeConfig, TrimRange};
pub use error::{Result, ValidationError};
pub use fft::Fft;
pub use hilbert::HilbertTransform;
pub use histogram::Histogram;
pub use pipeline::{DecodedChannel, decode};
pub use raster::Raster;
pub use stretch::ContrastStretch;
