use crate::cloth::mesh::{FabricMesh, MeshOpts, plane_grid};
use crate::cloth::normals::compute_vertex_normals;
use crate::cloth::wave::BillowParams;
use crate::foundation::core::Rgb8;
use crate::foundation::error::SwatchResult;
use crate::scene::resources::{ResourceKind, ResourceRegistry};
use crate::texture::texture::Texture;
use glam::Vec3;

/// Builds fabric planes and billows them once per frame.
///
/// Has no timer of its own; callers pass elapsed time to [`ClothAnimator::tick`].
#[derive(Clone, Debug)]
pub struct ClothAnimator {
    mesh: MeshOpts,
    billow: BillowParams,
}

impl ClothAnimator {
    /// Animator for planes of `mesh` size billowing with `billow`.
    pub fn new(mesh: MeshOpts, billow: BillowParams) -> Self {
        Self { mesh, billow }
    }

    /// Billow parameters in use.
    pub fn billow(&self) -> &BillowParams {
        &self.billow
    }

    /// Build a flat plane skinned with `texture` and register its mesh and texture handles.
    #[tracing::instrument(skip_all, fields(texture_w = texture.width, texture_h = texture.height))]
    pub fn create_mesh(
        &self,
        texture: Texture,
        average_color: Rgb8,
        resources: &mut ResourceRegistry,
    ) -> SwatchResult<FabricMesh> {
        self.mesh.validate()?;
        self.billow.validate()?;

        let grid = plane_grid(&self.mesh, texture.repeat);
        let mut normals = vec![Vec3::Z; grid.positions.len()];
        compute_vertex_normals(&grid.positions, &grid.indices, &mut normals);

        let texture_handle = resources.acquire(ResourceKind::Texture);
        let handle = resources.acquire(ResourceKind::Mesh);
        tracing::debug!(
            vertices = grid.positions.len(),
            triangles = grid.indices.len() / 3,
            "fabric mesh created"
        );

        Ok(FabricMesh {
            handle,
            texture_handle,
            texture,
            tint: average_color,
            half_extent: [self.mesh.width / 2.0, self.mesh.height / 2.0],
            original: grid.positions.clone().into_boxed_slice(),
            positions: grid.positions,
            normals,
            uvs: grid.uvs,
            indices: grid.indices,
        })
    }

    /// Displace every vertex from its rest position for time `elapsed_secs`, then recompute
    /// normals.
    pub fn tick(&self, mesh: &mut FabricMesh, elapsed_secs: f32) {
        let [half_w, half_h] = mesh.half_extent;
        for (p, o) in mesh.positions.iter_mut().zip(mesh.original.iter()) {
            let z = self
                .billow
                .displacement(o.x, o.y, elapsed_secs, half_w, half_h);
            *p = Vec3::new(o.x, o.y, o.z + z);
        }
        compute_vertex_normals(&mesh.positions, &mesh.indices, &mut mesh.normals);
    }

    /// Release the mesh and texture handles held by `mesh`.
    pub fn dispose(&self, mesh: FabricMesh, resources: &mut ResourceRegistry) {
        resources.release(mesh.handle);
        resources.release(mesh.texture_handle);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cloth/animator.rs"]
mod tests;
