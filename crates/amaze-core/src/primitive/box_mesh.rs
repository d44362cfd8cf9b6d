//! Subdivided box (rectangular prism) mesh generation
//!
//! Faces are emitted in the order +X, -Y, -X, +Z, -Z, +Y. Each face is a
//! `(segments + 1)²` vertex grid with its own vertices, so faces never share
//! vertex indices along the box edges. Grid rows run from the top of the face
//! (`v = 1`) downwards and every quad is split into two counter-clockwise
//! triangles, which gives face cell `(x, y)` (origin bottom-left) the
//! triangles returned by [`cell_triangle_index`] and the one after it.
//!
//! The face order and the in-plane orientation of every face are chosen so
//! that the labyrinth wiring lines up: a breach in the middle of a face
//! side always sits across the cube edge from the breach of the face the
//! corridor continues on.

use glam::Vec3;

use crate::mesh::IndexedMesh;

/// Layout of one box face: which axes cell x and cell y run along
struct FaceLayout {
    /// Axis of increasing cell x
    u: usize,
    u_sign: f32,
    /// Axis of increasing cell y
    v: usize,
    v_sign: f32,
    /// Axis the face is perpendicular to
    w: usize,
    /// Sign of the outward normal along `w`
    w_sign: f32,
}

// u × v is the outward normal of every face
const FACE_LAYOUTS: [FaceLayout; 6] = [
    // +X: x along +Z, y along -Y
    FaceLayout { u: 2, u_sign: 1.0, v: 1, v_sign: -1.0, w: 0, w_sign: 1.0 },
    // -Y: x along +X, y along +Z
    FaceLayout { u: 0, u_sign: 1.0, v: 2, v_sign: 1.0, w: 1, w_sign: -1.0 },
    // -X: x along +Z, y along +Y
    FaceLayout { u: 2, u_sign: 1.0, v: 1, v_sign: 1.0, w: 0, w_sign: -1.0 },
    // +Z: x along +Y, y along -X
    FaceLayout { u: 1, u_sign: 1.0, v: 0, v_sign: -1.0, w: 2, w_sign: 1.0 },
    // -Z: x along +X, y along -Y
    FaceLayout { u: 0, u_sign: 1.0, v: 1, v_sign: -1.0, w: 2, w_sign: -1.0 },
    // +Y: x along -Z, y along -X
    FaceLayout { u: 2, u_sign: -1.0, v: 0, v_sign: -1.0, w: 1, w_sign: 1.0 },
];

/// Number of triangles on one face of a box with `segments` per edge
pub fn triangles_per_face(segments: u32) -> usize {
    2 * segments as usize * segments as usize
}

/// Global index of the first of the two triangles covering cell `(x, y)` of `face`
pub fn cell_triangle_index(segments: u32, face: usize, x: u32, y: u32) -> usize {
    let s = segments as usize;
    triangles_per_face(segments) * face + 2 * x as usize + 2 * s * (s - 1 - y as usize)
}

/// Generate a cube with edge length `size` and `segments` subdivisions per edge
pub fn generate_subdivided_cube(size: f32, segments: u32) -> IndexedMesh {
    generate_subdivided_box([size; 3], segments)
}

/// Generate a box with the given dimensions, subdivided `segments` times per edge
///
/// # Arguments
/// * `size` - [width (x), height (y), depth (z)]
/// * `segments` - subdivisions along every edge (at least 1)
pub fn generate_subdivided_box(size: [f32; 3], segments: u32) -> IndexedMesh {
    let segments = segments.max(1);
    let grid = segments + 1;
    let vertex_count = 6 * (grid * grid) as usize;

    let mut mesh = IndexedMesh {
        positions: Vec::with_capacity(vertex_count),
        indices: Vec::with_capacity(6 * triangles_per_face(segments) * 3),
        tex_coords: Vec::with_capacity(vertex_count),
        normals: Vec::with_capacity(vertex_count),
        tangents: Vec::new(),
    };

    for layout in &FACE_LAYOUTS {
        add_face(&mut mesh, layout, size, segments);
    }

    mesh
}

fn add_face(mesh: &mut IndexedMesh, layout: &FaceLayout, size: [f32; 3], segments: u32) {
    let width = size[layout.u];
    let height = size[layout.v];
    let half_depth = size[layout.w] / 2.0 * layout.w_sign;
    let seg_width = width / segments as f32;
    let seg_height = height / segments as f32;
    let grid = segments + 1;
    let base = mesh.positions.len() as u32;

    let mut normal = Vec3::ZERO;
    normal[layout.w] = layout.w_sign;

    for iy in 0..grid {
        let v = height / 2.0 - iy as f32 * seg_height;
        for ix in 0..grid {
            let u = ix as f32 * seg_width - width / 2.0;
            let mut position = Vec3::ZERO;
            position[layout.u] = u * layout.u_sign;
            position[layout.v] = v * layout.v_sign;
            position[layout.w] = half_depth;

            let tex_coord = [
                ix as f32 / segments as f32,
                1.0 - iy as f32 / segments as f32,
            ];
            mesh.push_vertex(position, normal, tex_coord);
        }
    }

    for iy in 0..segments {
        for ix in 0..segments {
            let a = base + ix + grid * iy;
            let b = base + ix + grid * (iy + 1);
            let c = base + (ix + 1) + grid * (iy + 1);
            let d = base + (ix + 1) + grid * iy;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
}
