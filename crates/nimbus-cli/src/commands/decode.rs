//! Decode a recording into channel images and histograms.

use clap::Args;
use nimbus_config::DecodePreset;
use nimbus_core::Histogram;
use nimbus_io::{read_wav, write_histogram_csv, write_pgm};
use std::path::PathBuf;

/// Decode command arguments.
#[derive(Args)]
pub struct DecodeArgs {
    /// Input WAV recording
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Preset TOML file (defaults to the reference calibration)
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Directory for output images and histograms
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Histogram bin count
    #[arg(long, default_value = "500")]
    bins: usize,

    /// Write the effective preset to a TOML file and exit
    #[arg(long, value_name = "FILE")]
    write_preset: Option<PathBuf>,
}

/// Run the decode command.
pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let preset = match &args.preset {
        Some(path) => DecodePreset::load(path)?,
        None => DecodePreset::reference(),
    };

    if let Some(path) = &args.write_preset {
        preset.save(path)?;
        println!("Wrote preset '{}' to {}", preset.name, path.display());
        return Ok(());
    }

    println!("Decoding {}...", args.input.display());

    let (samples, sample_rate) = read_wav(&args.input)?;
    println!(
        "  {} samples, {} Hz, {:.2}s",
        samples.len(),
        sample_rate,
        samples.len() as f64 / f64::from(sample_rate)
    );

    let config = preset.to_config(sample_rate)?;
    tracing::debug!(preset = %preset.name, channels = config.channels.len(), "decoding");
    let channels = nimbus_core::decode(&samples, sample_rate, &config)?;

    std::fs::create_dir_all(&args.output_dir)?;
    let stem = args
        .input
        .file_stem()
        .map_or_else(|| "decoded".to_string(), |s| s.to_string_lossy().into_owned());

    for (channel, channel_config) in channels.iter().zip(&config.channels) {
        let white_level = channel_config.stretch.output_max;

        let image_path = args.output_dir.join(format!("{stem}_{}.pgm", channel.name));
        write_pgm(&channel.image, &image_path, white_level)?;

        let hist = Histogram::compute(&channel.values, args.bins, 0.0, white_level)?;
        let hist_path = args
            .output_dir
            .join(format!("{stem}_hist_{}.csv", channel.name));
        write_histogram_csv(&hist, &hist_path)?;

        println!(
            "  {}: {} x {} px -> {}",
            channel.name,
            channel.image.cols(),
            channel.image.rows(),
            image_path.display()
        );
    }

    Ok(())
}
