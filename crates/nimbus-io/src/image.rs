//! Grayscale image and histogram export.
//!
//! Decoded channels leave the pipeline as rasters of calibrated values in
//! `[0, output_max]`. Images are written in PGM, a plain ASCII grayscale
//! format most image tools open directly; histograms are written as CSV for
//! an external plotting tool.

use nimbus_core::{Histogram, Raster};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a calibrated raster as an ASCII PGM image.
///
/// `white_level` is the channel's configured output maximum; a value at
/// `white_level` maps to pixel 255. Values are clamped into 0..=255 after
/// scaling, so a raster that was stretched with a different output range
/// still produces a valid file.
pub fn write_pgm(raster: &Raster, path: impl AsRef<Path>, white_level: f32) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(file, "P2")?;
    writeln!(
        file,
        "# {} scan lines of {} samples",
        raster.rows(),
        raster.cols()
    )?;
    writeln!(file, "{} {}", raster.cols(), raster.rows())?;
    writeln!(file, "255")?;

    let scale = 255.0 / white_level;
    for r in 0..raster.rows() {
        let row = raster.row(r).unwrap_or(&[]);
        for (i, &v) in row.iter().enumerate() {
            if i > 0 {
                write!(file, " ")?;
            }
            let pixel = (v * scale).round().clamp(0.0, 255.0) as u8;
            write!(file, "{}", pixel)?;
        }
        writeln!(file)?;
    }

    file.flush()
}

/// Write a histogram as `bin_center,count` CSV rows with a header line.
pub fn write_histogram_csv(hist: &Histogram, path: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(file, "bin_center,count")?;
    for bin in 0..hist.bins() {
        writeln!(file, "{:.4},{}", hist.bin_center(bin), hist.counts()[bin])?;
    }

    file.flush()
}
