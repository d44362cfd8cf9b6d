//! Indexed triangle mesh buffers and their post-processing
//!
//! The maze cube is carried through the pipeline as four parallel buffers
//! (positions, indices, texture coordinates, normals). Generation only ever
//! appends to them or rebuilds the index buffer; afterwards they are plain
//! render data.

mod compact;
mod normals;
mod stl;
mod tangents;

use glam::Vec3;

pub use compact::remove_unused_vertices;
pub use normals::{calculate_triangle_normal, round_to_axis};
pub use stl::{StlError, save_stl, write_stl};
pub use tangents::compute_tangents;

/// Indexed triangle mesh with per-vertex attributes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedMesh {
    /// Vertex positions
    pub positions: Vec<[f32; 3]>,
    /// Triangle list (3 indices per triangle)
    pub indices: Vec<u32>,
    /// Texture coordinates (one per vertex)
    pub tex_coords: Vec<[f32; 2]>,
    /// Vertex normals (one per vertex)
    pub normals: Vec<[f32; 3]>,
    /// Vertex tangents, empty until [`compute_tangents`] has run
    pub tangents: Vec<[f32; 3]>,
}

impl IndexedMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex indices of triangle `index`
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        let base = index * 3;
        [
            self.indices[base],
            self.indices[base + 1],
            self.indices[base + 2],
        ]
    }

    /// Iterate over all triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }

    pub fn position(&self, vertex: u32) -> Vec3 {
        Vec3::from(self.positions[vertex as usize])
    }

    /// Append a vertex and return its index
    pub fn push_vertex(&mut self, position: Vec3, normal: Vec3, tex_coord: [f32; 2]) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        self.tex_coords.push(tex_coord);
        index
    }

    /// Axis-aligned bounding box as (min, max), `None` for an empty mesh
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        if self.positions.is_empty() {
            return None;
        }

        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];

        for v in &self.positions {
            for i in 0..3 {
                min[i] = min[i].min(v[i]);
                max[i] = max[i].max(v[i]);
            }
        }

        Some((min, max))
    }

    /// Check the buffer invariants: whole triangles, in-range indices and
    /// one normal/texture coordinate per vertex
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::PartialTriangle(self.indices.len()));
        }
        let vertex_count = self.positions.len();
        if self.normals.len() != vertex_count || self.tex_coords.len() != vertex_count {
            return Err(MeshError::AttributeMismatch {
                positions: vertex_count,
                normals: self.normals.len(),
                tex_coords: self.tex_coords.len(),
            });
        }
        if let Some(&index) = self
            .indices
            .iter()
            .find(|&&i| i as usize >= vertex_count)
        {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }
        Ok(())
    }
}

/// Mesh buffer errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum MeshError {
    #[error("Index buffer length {0} is not a multiple of 3")]
    PartialTriangle(usize),
    #[error("Index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
    #[error(
        "Attribute buffers disagree: {positions} positions, {normals} normals, {tex_coords} texture coordinates"
    )]
    AttributeMismatch {
        positions: usize,
        normals: usize,
        tex_coords: usize,
    },
}
