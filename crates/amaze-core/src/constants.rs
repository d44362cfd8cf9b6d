//! Global constants for amaze-core

/// Number of faces of a cube
pub const CUBE_FACES: usize = 6;

/// Default number of segments along each cube edge
pub const DEFAULT_SEGMENTS: u32 = 7;

/// Smallest segment count that still yields a walled maze (exclusive bound)
pub const MIN_SEGMENTS_EXCLUSIVE: u32 = 5;

/// Default edge length of the maze cube
pub const DEFAULT_CUBE_SIZE: f32 = 1.0;

/// Default number of whole-grid attempts per face before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Attempts above this count are logged as a warning
pub const RETRY_WARN_THRESHOLD: u32 = 100;

/// Seam deduplication precision (multiply by this, then truncate to int)
pub const SEAM_QUANTIZE_PRECISION: f32 = 10.0;

/// Tolerance when classifying a unit normal by its dominant axis
pub const AXIS_EPSILON: f32 = 1e-4;
