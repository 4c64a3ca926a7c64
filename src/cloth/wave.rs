//! Billow displacement: four traveling sine waves under a cubic edge falloff.
//!
//! The wave constants are visual heuristics. Nothing here models fabric physics.

use crate::foundation::error::{SwatchError, SwatchResult};
use crate::foundation::math::cubic_edge_falloff;

/// Combined thickness at which billow amplitude is halved.
pub const REFERENCE_THICKNESS: f32 = 8.0;

/// One traveling sine wave, `amplitude · sin(kx·x + ky·y − speed·t)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveComponent {
    /// Spatial frequency along x (radians per world unit).
    pub kx: f32,
    /// Spatial frequency along y (radians per world unit).
    pub ky: f32,
    /// Phase speed (radians per second); negative values travel backwards.
    pub speed: f32,
    /// Peak displacement in world units.
    pub amplitude: f32,
}

impl WaveComponent {
    fn sample(&self, x: f32, y: f32, t: f32) -> f32 {
        self.amplitude * (self.kx * x + self.ky * y - self.speed * t).sin()
    }
}

/// Parameters of the fabric billow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BillowParams {
    /// x-driven, y-driven, diagonal and fast counter-phase components, in that order.
    pub waves: [WaveComponent; 4],
}

impl Default for BillowParams {
    fn default() -> Self {
        Self {
            waves: [
                WaveComponent {
                    kx: 1.6,
                    ky: 0.0,
                    speed: 1.1,
                    amplitude: 0.18,
                },
                WaveComponent {
                    kx: 0.0,
                    ky: 1.3,
                    speed: 0.8,
                    amplitude: 0.14,
                },
                WaveComponent {
                    kx: 1.0,
                    ky: 1.0,
                    speed: 0.6,
                    amplitude: 0.10,
                },
                WaveComponent {
                    kx: 2.7,
                    ky: -2.2,
                    speed: -2.4,
                    amplitude: 0.05,
                },
            ],
        }
    }
}

impl BillowParams {
    /// Scale for a yarn of `exact_thickness`: heavier yarn billows slower and shallower.
    pub fn for_combination(&self, exact_thickness: f64) -> Self {
        let t = if exact_thickness.is_finite() {
            exact_thickness.max(0.0) as f32
        } else {
            0.0
        };
        let k = REFERENCE_THICKNESS / (REFERENCE_THICKNESS + t);
        let mut out = *self;
        for w in &mut out.waves {
            w.amplitude *= k;
            w.speed *= 0.5 + 0.5 * k;
        }
        out
    }

    /// Reject non-finite parameters.
    pub fn validate(&self) -> SwatchResult<()> {
        for (i, w) in self.waves.iter().enumerate() {
            if ![w.kx, w.ky, w.speed, w.amplitude]
                .iter()
                .all(|v| v.is_finite())
            {
                return Err(SwatchError::validation(format!(
                    "billow wave {i} has non-finite parameters"
                )));
            }
        }
        Ok(())
    }

    /// Undamped sum of the four waves at `(x, y)` and time `t`.
    pub fn raw(&self, x: f32, y: f32, t: f32) -> f32 {
        self.waves.iter().map(|w| w.sample(x, y, t)).sum()
    }

    /// Out-of-plane displacement of the undeformed point `(x, y)` on a plane spanning
    /// `[-half_w, half_w] × [-half_h, half_h]`.
    ///
    /// Zero on and outside the boundary for every `t`.
    pub fn displacement(&self, x: f32, y: f32, t: f32, half_w: f32, half_h: f32) -> f32 {
        let damping = cubic_edge_falloff(x, half_w) * cubic_edge_falloff(y, half_h);
        if damping == 0.0 {
            return 0.0;
        }
        damping * self.raw(x, y, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cloth/wave.rs"]
mod tests;
