//! Face cells to tagged triangle indices

use crate::constants::CUBE_FACES;
use crate::labyrinth::FaceMaze;
use crate::primitive::cell_triangle_index;

use super::InsetError;

/// A triangle of the subdivided box scheduled for insetting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriangleTag {
    /// Global triangle index into the box's index buffer
    pub triangle: usize,
    /// The source cell lies on the outer ring of its face
    pub boundary: bool,
}

/// Map the carved cells of every face to the triangles covering them
///
/// Each cell contributes its two quad triangles. The result is sorted by
/// descending triangle index with repeated cells collapsed, which is the
/// order the inset pass relies on.
pub fn triangle_tags(segments: u32, faces: &[FaceMaze]) -> Result<Vec<TriangleTag>, InsetError> {
    if segments == 0 {
        return Err(InsetError::InvalidArgument(
            "segments must be positive".to_string(),
        ));
    }
    if faces.len() > CUBE_FACES {
        return Err(InsetError::InvalidArgument(format!(
            "a cube has {CUBE_FACES} faces, got {} face mazes",
            faces.len()
        )));
    }

    let mut tags = Vec::with_capacity(faces.iter().map(|f| 2 * f.len()).sum());
    for (face, maze) in faces.iter().enumerate() {
        for cell in &maze.cells {
            if cell.x >= segments || cell.y >= segments {
                return Err(InsetError::InvalidArgument(format!(
                    "cell ({}, {}) of face {face} outside a {segments}×{segments} grid",
                    cell.x, cell.y
                )));
            }
            let first = cell_triangle_index(segments, face, cell.x, cell.y);
            let boundary = cell.is_on_ring(segments);
            tags.push(TriangleTag {
                triangle: first,
                boundary,
            });
            tags.push(TriangleTag {
                triangle: first + 1,
                boundary,
            });
        }
    }

    tags.sort_unstable_by(|a, b| b.triangle.cmp(&a.triangle));
    tags.dedup_by_key(|tag| tag.triangle);
    Ok(tags)
}
