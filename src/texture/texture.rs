use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{SwatchError, SwatchResult};
use crate::texture::geometry::StitchLayout;

/// Edge length of the flat placeholder raster.
pub const PLACEHOLDER_SIZE: u32 = 16;

/// How samplers treat coordinates outside `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum WrapMode {
    /// Tile the raster.
    Repeat,
    /// Clamp to the edge texel.
    ClampToEdge,
}

/// A finished RGBA8 raster plus the sampling hints a host needs to upload it.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Straight-alpha RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Horizontal wrap mode.
    pub wrap_s: WrapMode,
    /// Vertical wrap mode.
    pub wrap_t: WrapMode,
    /// How many times the raster repeats across the mesh in each axis.
    pub repeat: [f32; 2],
    /// Stitch grid the raster was painted on; `None` for placeholders.
    pub layout: Option<StitchLayout>,
}

impl Texture {
    /// Flat neutral-gray raster shown when no strands are selected.
    pub fn placeholder() -> Self {
        let canvas = Canvas {
            width: PLACEHOLDER_SIZE,
            height: PLACEHOLDER_SIZE,
        };
        let g = Rgb8::NEUTRAL_GRAY;
        let data = [g.r, g.g, g.b, 255].repeat(canvas.byte_len() / 4);
        Self {
            width: canvas.width,
            height: canvas.height,
            data,
            wrap_s: WrapMode::Repeat,
            wrap_t: WrapMode::Repeat,
            repeat: [1.0, 1.0],
            layout: None,
        }
    }

    /// Return `true` for the flat placeholder raster.
    pub fn is_placeholder(&self) -> bool {
        self.layout.is_none()
    }

    /// RGBA of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Stable 64-bit content hash over dimensions and pixels.
    pub fn fingerprint(&self) -> u64 {
        let mut bytes = Vec::with_capacity(8 + self.data.len());
        bytes.extend_from_slice(&self.width.to_le_bytes());
        bytes.extend_from_slice(&self.height.to_le_bytes());
        bytes.extend_from_slice(&self.data);
        xxhash_rust::xxh3::xxh3_64(&bytes)
    }

    /// Copy into an [`image::RgbaImage`] for hosts that upload through `image`.
    pub fn to_rgba_image(&self) -> SwatchResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| SwatchError::render("texture byte length does not match its size"))
    }
}
