use crate::foundation::error::{SwatchError, SwatchResult};
use crate::strand::model::Strand;
use crate::texture::geometry::{StitchGeometry, StitchLayout};
use crate::texture::plan::plan_strokes;
use crate::texture::raster::rasterize;
use crate::texture::texture::{Texture, WrapMode};

/// Stitch texture options.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextureOpts {
    /// Approximate edge length of the raster; the exact size is a whole number of cells.
    pub target_size_px: u32,
    /// Hard upper bound on either raster dimension.
    pub max_size_px: u32,
    /// Repeats of the raster across the fabric mesh in each axis.
    pub repeat: f32,
}

impl Default for TextureOpts {
    fn default() -> Self {
        Self {
            target_size_px: 256,
            max_size_px: 1024,
            repeat: 4.0,
        }
    }
}

impl TextureOpts {
    /// Check sizes fit a raster context and the repeat factor is usable.
    pub fn validate(&self) -> SwatchResult<()> {
        if self.target_size_px == 0 || self.max_size_px == 0 {
            return Err(SwatchError::validation("texture sizes must be > 0"));
        }
        if self.max_size_px > u32::from(u16::MAX) {
            return Err(SwatchError::validation("texture max_size_px must fit in u16"));
        }
        if !self.repeat.is_finite() || self.repeat <= 1.0 {
            return Err(SwatchError::validation("texture repeat must be finite and > 1"));
        }
        Ok(())
    }
}

/// Paint the interlocking-stitch raster for `strands`.
///
/// An empty strand list yields [`Texture::placeholder`]. Output is byte-identical for identical
/// inputs.
#[tracing::instrument(skip_all, fields(strands = strands.len()))]
pub fn synthesize(
    strands: &[Strand],
    geometry: &StitchGeometry,
    opts: &TextureOpts,
) -> SwatchResult<Texture> {
    if strands.is_empty() {
        return Ok(Texture::placeholder());
    }

    let layout = StitchLayout::fit(geometry, opts)?;
    let plan = plan_strokes(strands, geometry, &layout);
    let data = rasterize(&plan)?;
    tracing::debug!(
        width = layout.canvas.width,
        height = layout.canvas.height,
        columns = layout.columns,
        rows = layout.rows,
        "stitch texture synthesized"
    );

    Ok(Texture {
        width: layout.canvas.width,
        height: layout.canvas.height,
        data,
        wrap_s: WrapMode::Repeat,
        wrap_t: WrapMode::Repeat,
        repeat: [opts.repeat, opts.repeat],
        layout: Some(layout),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/texture/synth.rs"]
mod tests;
