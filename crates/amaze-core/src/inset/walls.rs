//! Wall synthesis between rim edges and their inset copies

use std::collections::HashSet;

use glam::{Vec2, Vec3};

use super::VertexCorrespondence;
use crate::constants::AXIS_EPSILON;
use crate::mesh::{IndexedMesh, calculate_triangle_normal, round_to_axis};

/// Walls appended by [`build_walls`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallStats {
    /// Wall quads (two triangles each)
    pub walls: usize,
    /// Vertices appended for them
    pub vertices: usize,
}

fn edge_key(a: u32, b: u32) -> (u32, u32) {
    if a < b { (a, b) } else { (b, a) }
}

/// Index of the only non-zero component of an axis-aligned vector
fn axis_of(v: Vec3) -> Option<usize> {
    let non_zero: Vec<usize> = (0..3).filter(|&i| v[i].abs() > AXIS_EPSILON).collect();
    match non_zero.as_slice() {
        [axis] => Some(*axis),
        _ => None,
    }
}

/// Texture offset from a wall's rim to its floor edge
///
/// The wall normal is first re-expressed in the texture frame of the face the
/// corridor was cut into, then the offset runs one tile along its axis.
fn wall_texture_offset(face_normal: Vec3, wall_normal: Vec3, tile: f32) -> Vec2 {
    let mut n = wall_normal;
    match axis_of(face_normal) {
        Some(1) => n.z = -n.z,
        Some(0) => std::mem::swap(&mut n.x, &mut n.z),
        _ => {}
    }
    match axis_of(n) {
        Some(0) => Vec2::new(tile * n.x, 0.0),
        Some(1) => Vec2::new(0.0, tile * n.y),
        Some(2) => Vec2::new(0.0, tile * n.z),
        _ => Vec2::ZERO,
    }
}

/// Build walls for every inset triangle whose rim edge still borders the surface
///
/// An edge needs a wall when an uncarved triangle of the current index buffer
/// still uses both rim vertices; edges between two carved triangles do not.
/// Each wall gets four fresh vertices so it carries its own normal (facing the
/// corridor) and texture coordinates tiled `1 / segments` down the wall.
pub fn build_walls(
    mesh: &mut IndexedMesh,
    segments: u32,
    correspondences: &[VertexCorrespondence],
) -> WallStats {
    let surface_edges: HashSet<(u32, u32)> = mesh
        .triangles()
        .flat_map(|[a, b, c]| [edge_key(a, b), edge_key(b, c), edge_key(c, a)])
        .collect();
    let tile = 1.0 / segments.max(1) as f32;
    let mut stats = WallStats::default();

    for VertexCorrespondence { rim, inset } in correspondences {
        let top = rim.map(|v| mesh.position(v));
        let bottom = inset.map(|v| mesh.position(v));
        let face_normal = round_to_axis(calculate_triangle_normal(top[0], top[1], top[2]));

        for i in 0..3 {
            let j = (i + 1) % 3;
            if !surface_edges.contains(&edge_key(rim[i], rim[j])) {
                continue;
            }

            let wall_normal = round_to_axis(calculate_triangle_normal(top[i], top[j], bottom[i]));
            let offset = wall_texture_offset(face_normal, wall_normal, tile);
            let uv_i = Vec2::from(mesh.tex_coords[rim[i] as usize]);
            let uv_j = Vec2::from(mesh.tex_coords[rim[j] as usize]);

            let base = mesh.push_vertex(top[i], wall_normal, uv_i.to_array());
            mesh.push_vertex(top[j], wall_normal, uv_j.to_array());
            mesh.push_vertex(bottom[i], wall_normal, (uv_i + offset).to_array());
            mesh.push_vertex(bottom[j], wall_normal, (uv_j + offset).to_array());

            mesh.indices
                .extend_from_slice(&[base, base + 1, base + 2, base + 1, base + 3, base + 2]);
            stats.walls += 1;
            stats.vertices += 4;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::inset::inset_faces;
    use crate::labyrinth::{CellCoord, FaceMaze};
    use crate::primitive::{cell_triangle_index, generate_subdivided_cube};

    #[test]
    fn test_axis_of() {
        assert_eq!(axis_of(Vec3::X), Some(0));
        assert_eq!(axis_of(Vec3::NEG_Z), Some(2));
        assert_eq!(axis_of(Vec3::new(1.0, 1.0, 0.0)), None);
        assert_eq!(axis_of(Vec3::ZERO), None);
    }

    #[test]
    fn test_wall_texture_offset() {
        let tile = 0.25;
        // cut into +Z: wall normals map straight onto u/v
        assert_eq!(wall_texture_offset(Vec3::Z, Vec3::NEG_X, tile), Vec2::new(-0.25, 0.0));
        assert_eq!(wall_texture_offset(Vec3::Z, Vec3::Y, tile), Vec2::new(0.0, 0.25));
        // cut into +Y: z is flipped
        assert_eq!(wall_texture_offset(Vec3::Y, Vec3::Z, tile), Vec2::new(0.0, -0.25));
        // cut into -X: x and z swap
        assert_eq!(wall_texture_offset(Vec3::NEG_X, Vec3::Z, tile), Vec2::new(0.25, 0.0));
        assert_eq!(wall_texture_offset(Vec3::NEG_X, Vec3::Y, tile), Vec2::new(0.0, 0.25));
    }

    #[test]
    fn test_no_correspondences_no_walls() {
        let mut mesh = generate_subdivided_cube(1.0, 3);
        let before = mesh.clone();
        assert_eq!(build_walls(&mut mesh, 3, &[]), WallStats::default());
        assert_eq!(mesh, before);
    }

    #[test]
    fn test_walls_face_into_corridor() {
        let mut mesh = generate_subdivided_cube(7.0, 7);
        let original = mesh.clone();
        let mut faces = vec![FaceMaze::new(7, Vec::new()); 6];
        // an L-shaped corridor on -X
        faces[2].cells = vec![CellCoord::new(2, 2), CellCoord::new(3, 2), CellCoord::new(3, 3)];

        let report = inset_faces(&mut mesh, 7, 7.0, &faces).unwrap();
        assert_eq!(report.walls, 8);

        // the two centroids of a cell's triangles average to the cell centre
        let centroid = |t: usize| {
            let [a, b, c] = original.triangle(t).map(|v| original.position(v));
            (a + b + c) / 3.0
        };
        let corridor_centres: Vec<Vec3> = faces[2]
            .cells
            .iter()
            .map(|c| {
                let t = cell_triangle_index(7, 2, c.x, c.y);
                (centroid(t) + centroid(t + 1)) / 2.0
            })
            .collect();

        let wall_start = mesh.triangle_count() - 2 * report.walls;
        for t in (wall_start..mesh.triangle_count()).step_by(2) {
            let [a, b, c] = mesh.triangle(t);
            let (pa, pb, pc) = (mesh.position(a), mesh.position(b), mesh.position(c));
            let normal = Vec3::from(mesh.normals[a as usize]);
            // the winding agrees with the stored normal
            let winding = calculate_triangle_normal(pa, pb, pc);
            assert!((winding - normal).length() < 1e-4);
            // and it points towards the nearest carved cell
            let mid = (pa + pb + pc) / 3.0;
            let nearest = corridor_centres
                .iter()
                .min_by(|x, y| (**x - mid).length().total_cmp(&(**y - mid).length()))
                .unwrap();
            assert!(normal.dot(*nearest - mid) > 0.0);
        }
    }

    #[test]
    fn test_each_rim_edge_walled_once() {
        let mut mesh = generate_subdivided_cube(1.0, 7);
        let labyrinth = crate::labyrinth::generate_labyrinth(7, 5).unwrap();
        let report = inset_faces(&mut mesh, 7, 1.0, &labyrinth.faces).unwrap();

        let wall_start = mesh.triangle_count() - 2 * report.walls;
        let mut rim_edges: HashMap<([i32; 3], [i32; 3]), usize> = HashMap::new();
        let key = |p: Vec3| (p * 1000.0).round().as_ivec3().to_array();
        for t in (wall_start..mesh.triangle_count()).step_by(2) {
            let [a, b, _] = mesh.triangle(t);
            let (ka, kb) = (key(mesh.position(a)), key(mesh.position(b)));
            let edge = if ka < kb { (ka, kb) } else { (kb, ka) };
            *rim_edges.entry(edge).or_default() += 1;
        }
        assert!(rim_edges.values().all(|&count| count == 1));
        assert_eq!(rim_edges.len(), report.walls);
    }
}
