use glam::Vec3;

/// Recompute area-weighted vertex normals in place.
///
/// Each triangle's unnormalized face normal (twice its area) is accumulated at its three
/// corners, then every sum is normalized. Vertices touched only by degenerate triangles keep
/// `+Z`.
pub(crate) fn compute_vertex_normals(positions: &[Vec3], indices: &[u32], normals: &mut [Vec3]) {
    normals.iter_mut().for_each(|n| *n = Vec3::ZERO);

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let (Some(&pa), Some(&pb), Some(&pc)) = (positions.get(a), positions.get(b), positions.get(c))
        else {
            continue;
        };
        let face = (pb - pa).cross(pc - pa);
        for i in [a, b, c] {
            if let Some(n) = normals.get_mut(i) {
                *n += face;
            }
        }
    }

    for n in normals.iter_mut() {
        *n = if n.length_squared() > 1e-20 {
            n.normalize()
        } else {
            Vec3::Z
        };
    }
}
