//! Normal calculation utilities for mesh data

use glam::Vec3;

/// Calculate the unit normal of a counter-clockwise triangle
///
/// Degenerate triangles yield +Z.
pub fn calculate_triangle_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    let cross = (v1 - v0).cross(v2 - v0);
    cross.try_normalize().unwrap_or(Vec3::Z)
}

/// Snap a unit normal to its axis by rounding every component
///
/// Wall normals on a subdivided cube are axis-aligned up to float noise;
/// rounding removes the noise (and `-0.0`) so the axis can be compared exactly.
pub fn round_to_axis(normal: Vec3) -> Vec3 {
    let rounded = normal.round();
    Vec3::new(rounded.x + 0.0, rounded.y + 0.0, rounded.z + 0.0)
}
