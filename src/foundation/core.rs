pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Straight (non-premultiplied) opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Mid-gray used for placeholders and malformed color input.
    pub const NEUTRAL_GRAY: Self = Self::new(128, 128, 128);

    /// Construct a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `factor` (clamped to `[0, 255]`).
    ///
    /// `factor < 1` darkens, `factor > 1` brightens.
    pub fn scaled(self, factor: f64) -> Self {
        fn ch(c: u8, f: f64) -> u8 {
            (f64::from(c) * f).round().clamp(0.0, 255.0) as u8
        }
        Self {
            r: ch(self.r, factor),
            g: ch(self.g, factor),
            b: ch(self.b, factor),
        }
    }

    /// Attach an alpha channel.
    pub fn with_alpha(self, a: u8) -> Rgba8 {
        Rgba8 {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Channel-wise rounded mean of `colors`; `None` when empty.
    pub fn mean<'a>(colors: impl IntoIterator<Item = &'a Rgb8>) -> Option<Self> {
        let mut n = 0u32;
        let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
        for c in colors {
            n += 1;
            r += u32::from(c.r);
            g += u32::from(c.g);
            b += u32::from(c.b);
        }
        if n == 0 {
            return None;
        }
        let avg = |sum: u32| ((sum + n / 2) / n) as u8;
        Some(Self::new(avg(r), avg(g), avg(b)))
    }
}

/// Straight-alpha RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Raster canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Number of RGBA8 bytes needed for this canvas.
    pub fn byte_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
