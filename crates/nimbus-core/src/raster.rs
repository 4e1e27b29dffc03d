//! Row-major pixel raster reconstruction.
//!
//! The demodulated envelope is a 1-D series; the transmitted image emerges
//! by folding it into scan lines of a fixed width derived from the sample
//! rate and the format's line period.

use crate::error::{Result, ValidationError};

/// Row-major 2-D grid of pixel intensities.
///
/// Each row is one scan line of the transmitted image.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    data: Vec<Vec<f32>>,
    rows: usize,
    cols: usize,
}

impl Raster {
    /// Fold a 1-D envelope into rows of `line_width` samples.
    ///
    /// The first `floor(len / line_width) * line_width` samples fill the
    /// raster row-major; the trailing remainder is discarded. The
    /// transmission ends mid-line, so the partial line carries no usable
    /// image content — the truncation is deliberate, not an error. An
    /// envelope shorter than one line yields a valid raster with zero rows.
    pub fn from_envelope(envelope: &[f32], line_width: usize) -> Result<Self> {
        if line_width == 0 {
            return Err(ValidationError::ZeroLineWidth);
        }

        let rows = envelope.len() / line_width;
        let data = envelope[..rows * line_width]
            .chunks_exact(line_width)
            .map(<[f32]>::to_vec)
            .collect();

        Ok(Self {
            data,
            rows,
            cols: line_width,
        })
    }

    /// Build a raster from pre-shaped rows. Rows must share one length.
    pub fn from_rows(data: Vec<Vec<f32>>) -> Self {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        debug_assert!(data.iter().all(|row| row.len() == cols));

        Self { data, rows, cols }
    }

    /// Number of scan lines.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Samples per scan line.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// One scan line, or `None` if out of bounds.
    pub fn row(&self, r: usize) -> Option<&[f32]> {
        self.data.get(r).map(Vec::as_slice)
    }

    /// Sample at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, r: usize, c: usize) -> Option<f32> {
        self.data.get(r).and_then(|row| row.get(c)).copied()
    }

    /// Rotate the raster 180° (reverse row order and column order).
    ///
    /// Used when the satellite pass ran opposite to the desired image
    /// orientation. Rotation is an involution: applying it twice restores
    /// the original raster.
    pub fn rotate_180(&self) -> Raster {
        let data = self
            .data
            .iter()
            .rev()
            .map(|row| row.iter().rev().copied().collect())
            .collect();

        Raster {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Extract columns `[start, end)` across all rows.
    ///
    /// This is the channel slice: each channel of the transmission occupies
    /// a fixed band of columns within every scan line. Pure extraction, no
    /// recomputation.
    pub fn columns(&self, start: usize, end: usize) -> Result<Raster> {
        if start >= end || end > self.cols {
            return Err(ValidationError::ColumnRangeOutOfBounds {
                start,
                end,
                cols: self.cols,
            });
        }

        let data = self
            .data
            .iter()
            .map(|row| row[start..end].to_vec())
            .collect();

        Ok(Raster {
            data,
            rows: self.rows,
            cols: end - start,
        })
    }

    /// Flatten row-major into a single value sequence.
    pub fn flatten(&self) -> Vec<f32> {
        self.data.iter().flatten().copied().collect()
    }
}
