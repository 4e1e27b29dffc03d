//! Decode presets for the nimbus decoder.
//!
//! A preset captures everything operator-specific about decoding one
//! recording setup: the trim range, the scan-line period, the rotation
//! flag, and each channel's column band and contrast thresholds. Presets
//! are TOML files; [`DecodePreset::reference`] carries the calibration the
//! decoder was originally tuned against.
//!
//! ```rust
//! use nimbus_config::DecodePreset;
//!
//! let preset = DecodePreset::reference();
//! let config = preset.to_config(11025).expect("reference preset is valid");
//! assert_eq!(config.channels.len(), 2);
//! ```

mod error;
mod preset;

pub use error::ConfigError;
pub use preset::{ChannelPreset, DecodePreset};
