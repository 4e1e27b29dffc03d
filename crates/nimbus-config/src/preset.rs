//! Decode preset file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use nimbus_core::{ChannelConfig, ContrastStretch, DecodeConfig, TrimRange};

use crate::error::ConfigError;

/// Decode preset for one recording setup.
///
/// Presets are stored as TOML files holding the full configuration surface
/// of the pipeline: trim range, line period, rotation, and per-channel
/// column ranges and contrast thresholds. Channel constants are selected by
/// visual inspection per antenna/receiver setup, so a new recording chain
/// usually needs its own preset.
///
/// # TOML Format
///
/// ```toml
/// name = "reference"
/// trim_start = 1000
/// trim_end_secs = 420.0
/// line_duration_secs = 0.5
/// rotate180 = true
///
/// [[channels]]
/// name = "OP"
/// column_start = 200
/// column_end = 2300
/// high_threshold = 300.0
/// low_threshold = 190.0
/// output_max = 255.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecodePreset {
    /// Name of the preset.
    pub name: String,

    /// Samples to drop from the start of the recording (leading static
    /// before the receiver locks, a capture artifact counted in samples).
    #[serde(default)]
    pub trim_start: usize,

    /// Keep audio up to this many seconds into the recording; absent keeps
    /// everything. The usable pass length is a time property, so it is
    /// stored in seconds and resolved against the actual sample rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim_end_secs: Option<f64>,

    /// Scan-line period in seconds.
    #[serde(default = "default_line_duration")]
    pub line_duration_secs: f64,

    /// Rotate the image 180° (south-to-north pass).
    #[serde(default)]
    pub rotate180: bool,

    /// Channel bands in output order.
    #[serde(default)]
    pub channels: Vec<ChannelPreset>,
}

fn default_line_duration() -> f64 {
    0.5
}

/// One channel band of a preset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelPreset {
    /// Channel name, used for output naming.
    pub name: String,
    /// First raster column of the band.
    pub column_start: usize,
    /// One past the last raster column of the band.
    pub column_end: usize,
    /// White point in raw envelope units.
    pub high_threshold: f32,
    /// Black point in output units.
    pub low_threshold: f32,
    /// Upper bound of the output range.
    #[serde(default = "default_output_max")]
    pub output_max: f32,
}

fn default_output_max() -> f32 {
    255.0
}

impl DecodePreset {
    /// The reference calibration: the constants of the recording setup the
    /// decoder was originally tuned against (seven-minute pass, half-second
    /// lines, south-to-north orbit, Optical and Infra-Red bands).
    pub fn reference() -> Self {
        Self {
            name: "reference".to_string(),
            trim_start: 1000,
            trim_end_secs: Some(420.0),
            line_duration_secs: 0.5,
            rotate180: true,
            channels: vec![
                ChannelPreset {
                    name: "OP".to_string(),
                    column_start: 200,
                    column_end: 2300,
                    high_threshold: 300.0,
                    low_threshold: 190.0,
                    output_max: 255.0,
                },
                ChannelPreset {
                    name: "IR".to_string(),
                    column_start: 2700,
                    column_end: 4800,
                    high_threshold: 260.0,
                    low_threshold: 100.0,
                    output_max: 255.0,
                },
            ],
        }
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset: DecodePreset = toml::from_str(&content)?;
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Convert to a pipeline configuration for a recording at `sample_rate`.
    ///
    /// Validates every channel's stretch calibration eagerly, so a
    /// degenerate preset fails here instead of mid-decode.
    pub fn to_config(&self, sample_rate: u32) -> Result<DecodeConfig, ConfigError> {
        let mut channels = Vec::with_capacity(self.channels.len());
        for ch in &self.channels {
            let stretch =
                ContrastStretch::new(ch.high_threshold, ch.low_threshold, ch.output_max);
            stretch.validate()?;
            channels.push(ChannelConfig {
                name: ch.name.clone(),
                column_start: ch.column_start,
                column_end: ch.column_end,
                stretch,
            });
        }

        let end = self
            .trim_end_secs
            .map(|secs| (secs * f64::from(sample_rate)).round() as usize);

        Ok(DecodeConfig {
            trim: TrimRange::new(self.trim_start, end),
            line_duration_secs: self.line_duration_secs,
            rotate180: self.rotate180,
            channels,
        })
    }
}

impl Default for DecodePreset {
    fn default() -> Self {
        Self::reference()
    }
}
