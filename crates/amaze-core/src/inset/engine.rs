//! Inset engine: carve tagged triangles into the box and rebuild its index buffer

use std::collections::HashSet;

use glam::Vec3;

use super::mapper::triangle_tags;
use super::walls::build_walls;
use super::{InsetError, InsetReport, VertexCorrespondence};
use crate::constants::{CUBE_FACES, SEAM_QUANTIZE_PRECISION};
use crate::labyrinth::FaceMaze;
use crate::mesh::{IndexedMesh, calculate_triangle_normal};
use crate::primitive::triangles_per_face;

type QuantizedVertex = [i32; 3];

/// Quantized inset positions of the boundary triangles emitted so far
///
/// Triangles are keyed by their three vertices truncated to a fixed-point
/// grid and sorted, so the same physical triangle matches regardless of
/// winding or which face produced it.
#[derive(Debug, Default)]
pub struct SeamRegistry {
    seen: HashSet<[QuantizedVertex; 3]>,
}

impl SeamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(positions: &[Vec3; 3]) -> [QuantizedVertex; 3] {
        let mut key = positions.map(|p| {
            [
                (p.x * SEAM_QUANTIZE_PRECISION) as i32,
                (p.y * SEAM_QUANTIZE_PRECISION) as i32,
                (p.z * SEAM_QUANTIZE_PRECISION) as i32,
            ]
        });
        key.sort_unstable();
        key
    }

    /// Record a triangle, returning `false` if it was already recorded
    pub fn insert(&mut self, positions: &[Vec3; 3]) -> bool {
        self.seen.insert(Self::key(positions))
    }

    pub fn contains(&self, positions: &[Vec3; 3]) -> bool {
        self.seen.contains(&Self::key(positions))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Carve the face mazes into a subdivided box mesh
///
/// `mesh` must be a box from [`crate::generate_subdivided_box`] (or laid out
/// identically) with `segments` subdivisions per edge. Every carved cell's
/// two triangles are moved inward by `cube_size / segments`:
/// - interior triangles are replaced by a floor triangle on new vertices,
/// - boundary triangles lose their surface triangle but get no floor, and
///   are skipped entirely when an identical one was already emitted across
///   a seam,
/// - walls are then built on every rim edge still bordering the surface.
///
/// Triangles are processed in descending index order and the surviving
/// original triangles keep their relative order, followed by the floors in
/// processing order and finally the walls.
pub fn inset_faces(
    mesh: &mut IndexedMesh,
    segments: u32,
    cube_size: f32,
    faces: &[FaceMaze],
) -> Result<InsetReport, InsetError> {
    if !(cube_size > 0.0) || !cube_size.is_finite() {
        return Err(InsetError::InvalidArgument(format!(
            "cube size must be a positive number, got {cube_size}"
        )));
    }
    mesh.validate()?;
    let tags = triangle_tags(segments, faces)?;

    let expected = CUBE_FACES * triangles_per_face(segments);
    if mesh.triangle_count() < expected {
        return Err(InsetError::MeshMismatch {
            expected,
            actual: mesh.triangle_count(),
        });
    }

    let depth = cube_size / segments as f32;
    let mut removed = vec![false; mesh.triangle_count()];
    let mut floors: Vec<u32> = Vec::new();
    let mut correspondences = Vec::with_capacity(tags.len());
    let mut seams = SeamRegistry::new();
    let mut report = InsetReport {
        tagged: tags.len(),
        ..InsetReport::default()
    };

    for tag in &tags {
        // the index buffer is only rebuilt after the pass, so `tag.triangle`
        // still addresses the original triangle
        let rim = mesh.triangle(tag.triangle);
        let originals = rim.map(|v| mesh.position(v));
        let normal = calculate_triangle_normal(originals[0], originals[1], originals[2]);
        let inset_positions = originals.map(|p| p - normal * depth);
        removed[tag.triangle] = true;

        if tag.boundary && !seams.insert(&inset_positions) {
            report.deduplicated += 1;
            continue;
        }

        let mut inset = [0u32; 3];
        for i in 0..3 {
            let tex_coord = mesh.tex_coords[rim[i] as usize];
            inset[i] = mesh.push_vertex(inset_positions[i], normal, tex_coord);
        }
        report.inset_vertices += 3;

        if tag.boundary {
            report.boundary_kept += 1;
        } else {
            floors.extend_from_slice(&inset);
            report.floors += 1;
        }
        correspondences.push(VertexCorrespondence { rim, inset });
    }

    let mut indices = Vec::with_capacity(mesh.indices.len() - 3 * tags.len() + floors.len());
    for (triangle, chunk) in mesh.indices.chunks_exact(3).enumerate() {
        if !removed[triangle] {
            indices.extend_from_slice(chunk);
        }
    }
    indices.extend_from_slice(&floors);
    mesh.indices = indices;

    let walls = build_walls(mesh, segments, &correspondences);
    report.walls = walls.walls;
    report.wall_vertices = walls.vertices;

    tracing::info!(
        "Inset {} triangles: {} floors, {} boundary, {} seam duplicates, {} walls",
        report.tagged,
        report.floors,
        report.boundary_kept,
        report.deduplicated,
        report.walls
    );

    Ok(report)
}
