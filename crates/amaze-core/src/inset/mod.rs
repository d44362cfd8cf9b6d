//! Carving face mazes into a subdivided box mesh
//!
//! The pipeline is mapper → engine → walls:
//! - the mapper turns carved cells into tagged triangle indices,
//! - the engine insets those triangles along their normals, rebuilds the
//!   index buffer and drops boundary triangles that repeat across a seam,
//! - the wall builder closes every rim edge that still borders the surface.

mod engine;
mod mapper;
mod walls;

pub use engine::{SeamRegistry, inset_faces};
pub use mapper::{TriangleTag, triangle_tags};
pub use walls::{WallStats, build_walls};

use crate::mesh::MeshError;

/// Original rim vertices of an inset triangle and the inset copies replacing them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexCorrespondence {
    pub rim: [u32; 3],
    pub inset: [u32; 3],
}

/// Summary of one inset pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsetReport {
    /// Triangles scheduled for insetting
    pub tagged: usize,
    /// Interior triangles replaced by a carved floor
    pub floors: usize,
    /// Boundary triangles kept after seam deduplication
    pub boundary_kept: usize,
    /// Boundary triangles dropped as seam duplicates
    pub deduplicated: usize,
    /// Wall quads built (two triangles each)
    pub walls: usize,
    /// Vertices appended for inset triangles
    pub inset_vertices: usize,
    /// Vertices appended for walls
    pub wall_vertices: usize,
}

impl InsetReport {
    /// Net change of the triangle count caused by the pass
    pub fn triangle_delta(&self) -> isize {
        self.floors as isize + 2 * self.walls as isize - self.tagged as isize
    }
}

/// Inset errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum InsetError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Mesh has {actual} triangles, a subdivided box needs at least {expected}")]
    MeshMismatch { expected: usize, actual: usize },
    #[error("Invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),
}
