//! Pixel-space stitch dimensions.
//!
//! The constants below are tuned by eye for visual parity, not derived from yarn physics.
//! Adjust them freely; only the relations documented on [`StitchGeometry`] are load-bearing.

use crate::foundation::core::Canvas;
use crate::foundation::error::{SwatchError, SwatchResult};
use crate::strand::model::Strand;
use crate::texture::synth::TextureOpts;
use smallvec::SmallVec;

/// Stitch width in pixels per millimetre of needle diameter.
pub const PX_PER_NEEDLE_MM: f64 = 6.0;
/// Smallest stitch width a needle can produce.
pub const MIN_STITCH_PX: f64 = 6.0;
/// Smallest cell edge the layout will tile, whatever the geometry.
pub const MIN_CELL_PX: f64 = 4.0;
/// Stitch height as a fraction of stitch width.
pub const STITCH_ASPECT: f64 = 0.8;
/// Yarn stroke width in pixels per unit of combined thickness.
pub const YARN_PX_PER_THICKNESS: f64 = 1.6;
/// Upper bound of the yarn stroke relative to stitch width.
pub const MAX_YARN_FRACTION: f64 = 0.45;
/// Lower bound of the yarn stroke in pixels.
pub const MIN_YARN_PX: f64 = 1.0;
/// Distance between neighbouring ply centerlines, in ply widths.
pub const PLY_SPACING: f64 = 0.9;

/// Derived pixel-space dimensions of one knit loop.
///
/// Invariant: `ply_width == yarn_width / sqrt(strand_count)`, so individual plies thin out as
/// more strands are held together.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StitchGeometry {
    /// Cell width in pixels.
    pub stitch_width: f64,
    /// Cell height in pixels.
    pub stitch_height: f64,
    /// Stroke width of the combined yarn.
    pub yarn_width: f64,
    /// Stroke width of one ply.
    pub ply_width: f64,
}

impl StitchGeometry {
    /// Derive geometry from needle diameter and combined yarn thickness.
    pub fn derive(needle_mm: f64, exact_thickness: f64, strand_count: usize) -> SwatchResult<Self> {
        if !needle_mm.is_finite() || needle_mm <= 0.0 {
            return Err(SwatchError::validation("needle size must be finite and > 0"));
        }
        if !exact_thickness.is_finite() || exact_thickness <= 0.0 {
            return Err(SwatchError::validation("yarn thickness must be finite and > 0"));
        }
        let stitch_width = (needle_mm * PX_PER_NEEDLE_MM).max(MIN_STITCH_PX);
        let stitch_height = stitch_width * STITCH_ASPECT;
        let yarn_width = (exact_thickness * YARN_PX_PER_THICKNESS)
            .min(stitch_width * MAX_YARN_FRACTION)
            .max(MIN_YARN_PX);
        Self::from_parts(stitch_width, stitch_height, yarn_width, strand_count)
    }

    /// Build geometry from explicit dimensions, deriving the ply width.
    pub fn from_parts(
        stitch_width: f64,
        stitch_height: f64,
        yarn_width: f64,
        strand_count: usize,
    ) -> SwatchResult<Self> {
        for (name, v) in [
            ("stitch_width", stitch_width),
            ("stitch_height", stitch_height),
            ("yarn_width", yarn_width),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(SwatchError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if strand_count == 0 {
            return Err(SwatchError::validation("strand_count must be >= 1"));
        }
        Ok(Self {
            stitch_width,
            stitch_height,
            yarn_width,
            ply_width: yarn_width / (strand_count as f64).sqrt(),
        })
    }

    /// Lateral offset (in pixels) of each strand's ply from the yarn center.
    ///
    /// Offsets are spread evenly and symmetrically unless a strand carries its own offset.
    pub fn ply_offsets(&self, strands: &[Strand]) -> SmallVec<[f64; 4]> {
        let n = strands.len() as f64;
        strands
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let slot = s.ply_offset.unwrap_or(i as f64 - (n - 1.0) / 2.0);
                slot * self.ply_width * PLY_SPACING
            })
            .collect()
    }
}

/// Integer canvas holding a whole number of stitch cells, so the raster tiles exactly.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StitchLayout {
    /// Stitch columns.
    pub columns: u32,
    /// Stitch rows.
    pub rows: u32,
    /// Cell width after fitting to whole pixels.
    pub cell_width: f64,
    /// Cell height after fitting to whole pixels.
    pub cell_height: f64,
    /// Raster size.
    pub canvas: Canvas,
}

impl StitchLayout {
    /// Fit as many whole cells as approximate `opts.target_size_px` without exceeding
    /// `opts.max_size_px`.
    pub fn fit(geometry: &StitchGeometry, opts: &TextureOpts) -> SwatchResult<Self> {
        opts.validate()?;
        let (columns, width) = fit_axis(geometry.stitch_width, opts);
        let (rows, height) = fit_axis(geometry.stitch_height, opts);
        Ok(Self {
            columns,
            rows,
            cell_width: f64::from(width) / f64::from(columns),
            cell_height: f64::from(height) / f64::from(rows),
            canvas: Canvas { width, height },
        })
    }

    /// Ratio between fitted and nominal cell width; stroke widths scale by it.
    pub fn scale(&self, geometry: &StitchGeometry) -> f64 {
        self.cell_width / geometry.stitch_width
    }
}

fn fit_axis(cell: f64, opts: &TextureOpts) -> (u32, u32) {
    let cell = cell.max(MIN_CELL_PX);
    let target = f64::from(opts.target_size_px);
    let max = f64::from(opts.max_size_px);
    let mut count = (target / cell).round().max(1.0);
    if count * cell > max {
        count = (max / cell).floor().max(1.0);
    }
    let px = (count * cell).round().clamp(1.0, max);
    (count as u32, px as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/texture/geometry.rs"]
mod tests;
