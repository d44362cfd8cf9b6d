//! Primitive mesh generation
//!
//! Generates the uniformly subdivided box the maze is carved into.

mod box_mesh;

pub use box_mesh::{
    cell_triangle_index, generate_subdivided_box, generate_subdivided_cube, triangles_per_face,
};
