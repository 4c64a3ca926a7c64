//! Multi-ply yarn centerlines twisted around a shared axis.

use crate::foundation::core::Rgb8;
use crate::foundation::error::{SwatchError, SwatchResult};
use crate::scene::resources::{ResourceHandle, ResourceKind, ResourceRegistry};
use crate::strand::model::Strand;
use crate::texture::geometry::StitchGeometry;
use glam::Vec3;
use std::f32::consts::TAU;

/// Below this radius a helix is replaced by a planar wave.
pub const MIN_HELIX_RADIUS: f32 = 1e-4;
/// Amplitude of the planar wave used for degenerate helices, in world units.
pub const DEGENERATE_WAVE_RADIUS: f32 = 0.004;
/// Helix turns per world unit for an untwisted yarn.
pub const BASE_TURNS_PER_UNIT: f32 = 1.5;
/// Spin of the twist phase, radians per second.
pub const SPIN_RATE: f32 = 0.6;

/// Yarn preview options.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct YarnOpts {
    /// Length of the yarn along its axis, in world units.
    pub length: f32,
    /// Points per ply centerline.
    pub samples: u32,
    /// World units per texture pixel.
    pub world_scale: f32,
}

impl Default for YarnOpts {
    fn default() -> Self {
        Self {
            length: 3.0,
            samples: 160,
            world_scale: 0.02,
        }
    }
}

impl YarnOpts {
    /// Check lengths are positive and the sample count usable.
    pub fn validate(&self) -> SwatchResult<()> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(SwatchError::validation("yarn length must be finite and > 0"));
        }
        if !(2..=4096).contains(&self.samples) {
            return Err(SwatchError::validation("yarn samples must be in 2..=4096"));
        }
        if !self.world_scale.is_finite() || self.world_scale <= 0.0 {
            return Err(SwatchError::validation(
                "yarn world_scale must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// How a ply centerline is shaped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlyShape {
    /// Helix of the given radius.
    Helix {
        /// Distance from the shared axis.
        radius: f32,
    },
    /// Planar sine wave of [`DEGENERATE_WAVE_RADIUS`]; used when the helix radius vanishes.
    Wave,
}

/// One ply's centerline.
#[derive(Clone, Debug, PartialEq)]
pub struct YarnPly {
    /// Ply color.
    pub color: Rgb8,
    /// Tube width in world units.
    pub width: f32,
    /// Centerline shape.
    pub shape: PlyShape,
    /// Angular offset around the axis.
    pub phase: f32,
    /// Centerline points along +X.
    pub points: Vec<Vec3>,
}

/// All plies of one yarn, twisted together.
#[derive(Debug)]
pub struct YarnModel {
    handle: ResourceHandle,
    opts: YarnOpts,
    turns_per_unit: f32,
    spin: f32,
    plies: Vec<YarnPly>,
}

impl YarnModel {
    /// Build one centerline per strand and register a yarn handle.
    pub fn build(
        strands: &[Strand],
        geometry: &StitchGeometry,
        opts: &YarnOpts,
        resources: &mut ResourceRegistry,
    ) -> SwatchResult<Self> {
        opts.validate()?;
        if strands.is_empty() {
            return Err(SwatchError::EmptyInput);
        }

        let n = strands.len() as f32;
        let radius = geometry.ply_width as f32 * (1.0 - 1.0 / n) * opts.world_scale;
        let shape = if radius.is_finite() && radius >= MIN_HELIX_RADIUS {
            PlyShape::Helix { radius }
        } else {
            tracing::debug!(radius, "helix radius degenerate, using planar wave");
            PlyShape::Wave
        };
        let mean_twist = strands.iter().map(|s| s.twist_intensity as f32).sum::<f32>() / n;
        let turns_per_unit = BASE_TURNS_PER_UNIT * (1.0 + mean_twist.max(0.0));

        let plies = strands
            .iter()
            .enumerate()
            .map(|(i, s)| YarnPly {
                color: s.color,
                width: geometry.ply_width as f32 * opts.world_scale,
                shape,
                phase: TAU * i as f32 / n,
                points: Vec::with_capacity(opts.samples as usize),
            })
            .collect();

        let mut model = Self {
            handle: resources.acquire(ResourceKind::Yarn),
            opts: *opts,
            turns_per_unit,
            spin: 0.0,
            plies,
        };
        model.rebuild();
        Ok(model)
    }

    /// Yarn resource handle.
    pub fn handle(&self) -> ResourceHandle {
        self.handle
    }

    /// Plies in strand order.
    pub fn plies(&self) -> &[YarnPly] {
        &self.plies
    }

    /// Helix turns per world unit.
    pub fn turns_per_unit(&self) -> f32 {
        self.turns_per_unit
    }

    /// Spin the twist to its phase at `elapsed_secs`.
    pub fn tick(&mut self, elapsed_secs: f32) {
        self.spin = elapsed_secs * SPIN_RATE;
        self.rebuild();
    }

    /// Release the yarn handle.
    pub fn dispose(self, resources: &mut ResourceRegistry) {
        resources.release(self.handle);
    }

    fn rebuild(&mut self) {
        let samples = self.opts.samples as usize;
        let length = self.opts.length;
        let step = length / (samples - 1) as f32;
        for ply in &mut self.plies {
            ply.points.clear();
            for k in 0..samples {
                let along = k as f32 * step;
                let angle = ply.phase + TAU * self.turns_per_unit * along + self.spin;
                let x = along - length / 2.0;
                ply.points.push(match ply.shape {
                    PlyShape::Helix { radius } => {
                        Vec3::new(x, radius * angle.cos(), radius * angle.sin())
                    }
                    PlyShape::Wave => Vec3::new(x, DEGENERATE_WAVE_RADIUS * angle.sin(), 0.0),
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/yarn/helix.rs"]
mod tests;
