//! Per-vertex tangent computation

use glam::{Vec2, Vec3};

use super::IndexedMesh;

/// Compute per-vertex tangents from positions and texture coordinates
///
/// Triangle tangents are accumulated onto their vertices, then each sum is
/// orthogonalised against the vertex normal. Vertices whose texture mapping
/// is degenerate get an arbitrary tangent perpendicular to the normal.
pub fn compute_tangents(mesh: &mut IndexedMesh) {
    let mut accumulated = vec![Vec3::ZERO; mesh.positions.len()];

    for [a, b, c] in mesh.triangles() {
        let (p0, p1, p2) = (mesh.position(a), mesh.position(b), mesh.position(c));
        let uv0 = Vec2::from(mesh.tex_coords[a as usize]);
        let uv1 = Vec2::from(mesh.tex_coords[b as usize]);
        let uv2 = Vec2::from(mesh.tex_coords[c as usize]);

        let e1 = p1 - p0;
        let e2 = p2 - p0;
        let d1 = uv1 - uv0;
        let d2 = uv2 - uv0;

        let det = d1.x * d2.y - d2.x * d1.y;
        if det.abs() <= f32::EPSILON {
            continue;
        }
        let tangent = (e1 * d2.y - e2 * d1.y) / det;

        for vertex in [a, b, c] {
            accumulated[vertex as usize] += tangent;
        }
    }

    mesh.tangents = accumulated
        .into_iter()
        .zip(&mesh.normals)
        .map(|(t, n)| {
            let n = Vec3::from(*n);
            let orthogonal = t - n * n.dot(t);
            orthogonal
                .try_normalize()
                .unwrap_or_else(|| n.any_orthonormal_vector())
                .to_array()
        })
        .collect();
}
