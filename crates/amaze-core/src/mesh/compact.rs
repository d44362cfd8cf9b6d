//! Unused-vertex compaction

use super::IndexedMesh;

/// Remove vertices that no triangle references and remap the index buffer
///
/// Vertex order is preserved. Returns the number of vertices removed.
pub fn remove_unused_vertices(mesh: &mut IndexedMesh) -> usize {
    let vertex_count = mesh.positions.len();
    let mut used = vec![false; vertex_count];
    for &index in &mesh.indices {
        used[index as usize] = true;
    }

    let mut remap = vec![u32::MAX; vertex_count];
    let mut next = 0u32;
    for (old, &is_used) in used.iter().enumerate() {
        if is_used {
            remap[old] = next;
            next += 1;
        }
    }

    let removed = vertex_count - next as usize;
    if removed == 0 {
        return 0;
    }

    for index in &mut mesh.indices {
        *index = remap[*index as usize];
    }

    retain_used(&mut mesh.positions, &used);
    retain_used(&mut mesh.normals, &used);
    retain_used(&mut mesh.tex_coords, &used);
    if mesh.tangents.len() == vertex_count {
        retain_used(&mut mesh.tangents, &used);
    } else {
        mesh.tangents.clear();
    }

    removed
}

fn retain_used<T>(buffer: &mut Vec<T>, used: &[bool]) {
    let mut flags = used.iter();
    buffer.retain(|_| flags.next().copied().unwrap_or(false));
}
