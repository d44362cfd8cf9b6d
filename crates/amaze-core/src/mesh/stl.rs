//! Binary STL export

use std::io::Write;
use std::path::Path;

use super::{IndexedMesh, calculate_triangle_normal};

/// Save a mesh as a binary STL file
pub fn save_stl(mesh: &IndexedMesh, path: impl AsRef<Path>) -> Result<(), StlError> {
    let path = path.as_ref();
    let mut file = std::fs::File::create(path).map_err(|e| StlError::Io(e.to_string()))?;
    write_stl(mesh, &mut file)?;
    tracing::info!(
        "Wrote {} triangles to {}",
        mesh.triangle_count(),
        path.display()
    );
    Ok(())
}

/// Write a mesh as binary STL to any writer
///
/// Facet normals are recomputed from the triangle winding since the mesh
/// only carries per-vertex normals.
pub fn write_stl<W: Write>(mesh: &IndexedMesh, writer: &mut W) -> Result<(), StlError> {
    let triangles: Vec<stl_io::Triangle> = mesh
        .triangles()
        .map(|[a, b, c]| {
            let (v0, v1, v2) = (mesh.position(a), mesh.position(b), mesh.position(c));
            let normal = calculate_triangle_normal(v0, v1, v2);
            stl_io::Triangle {
                normal: stl_io::Normal::new(normal.to_array()),
                vertices: [
                    stl_io::Vertex::new(v0.to_array()),
                    stl_io::Vertex::new(v1.to_array()),
                    stl_io::Vertex::new(v2.to_array()),
                ],
            }
        })
        .collect();

    stl_io::write_stl(writer, triangles.iter()).map_err(|e| StlError::Write(e.to_string()))
}

/// STL-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum StlError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Write error: {0}")]
    Write(String),
}
