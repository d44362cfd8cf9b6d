//! Cube Maze Core
//!
//! This crate generates a maze carved into the surface of a subdivided cube:
//! - Labyrinth: per-face randomized grid mazes wired into one corridor
//! - Inset: carving the corridor into a subdivided box mesh (floors + walls)
//! - Mesh: indexed triangle buffers and their post-processing
//! - MazeCube: the end-to-end pipeline

pub mod config;
pub mod constants;
pub mod inset;
pub mod labyrinth;
pub mod maze_cube;
pub mod mesh;
pub mod primitive;

pub use config::*;
pub use constants::*;
pub use inset::*;
pub use labyrinth::*;
pub use maze_cube::*;
pub use mesh::*;
pub use primitive::*;
