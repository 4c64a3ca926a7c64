use crate::foundation::core::Rgb8;
use crate::foundation::error::{SwatchError, SwatchResult};
use crate::scene::resources::ResourceHandle;
use crate::texture::texture::Texture;
use glam::Vec3;

/// Upper bound on grid subdivisions per axis.
pub const MAX_SEGMENTS: u32 = 512;

/// Fabric plane dimensions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MeshOpts {
    /// Plane width in world units.
    pub width: f32,
    /// Plane height in world units.
    pub height: f32,
    /// Quads per axis.
    pub segments: u32,
}

impl Default for MeshOpts {
    fn default() -> Self {
        Self {
            width: 4.0,
            height: 4.0,
            segments: 48,
        }
    }
}

impl MeshOpts {
    /// Check the plane is non-degenerate and the grid size bounded.
    pub fn validate(&self) -> SwatchResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(SwatchError::validation("mesh width must be finite and > 0"));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(SwatchError::validation("mesh height must be finite and > 0"));
        }
        if self.segments == 0 || self.segments > MAX_SEGMENTS {
            return Err(SwatchError::validation(format!(
                "mesh segments must be in 1..={MAX_SEGMENTS}"
            )));
        }
        Ok(())
    }
}

/// Grid geometry before any handles are attached.
pub(crate) struct PlaneGrid {
    pub(crate) positions: Vec<Vec3>,
    pub(crate) uvs: Vec<[f32; 2]>,
    pub(crate) indices: Vec<u32>,
}

/// Flat `segments × segments` quad grid centered on the origin in the XY plane.
///
/// Boundary vertices sit exactly on `±width/2` and `±height/2`. UVs run `0..repeat` so a
/// repeating texture tiles across the plane.
pub(crate) fn plane_grid(opts: &MeshOpts, repeat: [f32; 2]) -> PlaneGrid {
    let n = opts.segments as usize;
    let verts = n + 1;
    let half_w = opts.width / 2.0;
    let half_h = opts.height / 2.0;

    let coord = |i: usize, half: f32| {
        if i == 0 {
            -half
        } else if i == n {
            half
        } else {
            -half + (i as f32 / n as f32) * 2.0 * half
        }
    };

    let mut positions = Vec::with_capacity(verts * verts);
    let mut uvs = Vec::with_capacity(verts * verts);
    for j in 0..verts {
        for i in 0..verts {
            let u = i as f32 / n as f32;
            let v = j as f32 / n as f32;
            positions.push(Vec3::new(coord(i, half_w), -coord(j, half_h), 0.0));
            uvs.push([u * repeat[0], v * repeat[1]]);
        }
    }

    let mut indices = Vec::with_capacity(n * n * 6);
    for j in 0..n {
        for i in 0..n {
            let top_left = (j * verts + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts as u32;
            let bot_right = bot_left + 1;
            indices.extend_from_slice(&[top_left, bot_left, top_right]);
            indices.extend_from_slice(&[top_right, bot_left, bot_right]);
        }
    }

    PlaneGrid {
        positions,
        uvs,
        indices,
    }
}

/// A textured fabric plane with its undeformed rest pose.
#[derive(Debug)]
pub struct FabricMesh {
    pub(crate) handle: ResourceHandle,
    pub(crate) texture_handle: ResourceHandle,
    pub(crate) texture: Texture,
    pub(crate) tint: Rgb8,
    pub(crate) half_extent: [f32; 2],
    pub(crate) positions: Vec<Vec3>,
    pub(crate) original: Box<[Vec3]>,
    pub(crate) normals: Vec<Vec3>,
    pub(crate) uvs: Vec<[f32; 2]>,
    pub(crate) indices: Vec<u32>,
}

impl FabricMesh {
    /// Mesh resource handle.
    pub fn handle(&self) -> ResourceHandle {
        self.handle
    }

    /// Texture resource handle.
    pub fn texture_handle(&self) -> ResourceHandle {
        self.texture_handle
    }

    /// The raster skinning this plane.
    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    /// Base tint (average strand color).
    pub fn tint(&self) -> Rgb8 {
        self.tint
    }

    /// Half width and half height of the plane.
    pub fn half_extent(&self) -> [f32; 2] {
        self.half_extent
    }

    /// Current vertex positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Undeformed rest positions.
    pub fn original_positions(&self) -> &[Vec3] {
        &self.original
    }

    /// Current unit vertex normals.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Texture coordinates, already scaled by the repeat factor.
    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    /// Triangle list.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Largest absolute out-of-plane displacement.
    pub fn max_displacement(&self) -> f32 {
        self.positions.iter().map(|p| p.z.abs()).fold(0.0, f32::max)
    }

    /// Return `true` if no vertex has left the rest plane.
    pub fn is_flat(&self) -> bool {
        self.positions.iter().all(|p| p.z == 0.0)
    }
}
