//! Bounded retry driver for single-face maze generation

use rand::Rng;

use super::grid::{MazeGenerator, find_violation};
use super::{CellCoord, FaceMaze, LabyrinthError};
use crate::constants::{MIN_SEGMENTS_EXCLUSIVE, RETRY_WARN_THRESHOLD};

/// Walk and breach points of one face, in grid coordinates
///
/// `start`/`end` are where the walk begins and must arrive; `entry`/`exit`
/// are the breaches in the outer wall leading to the neighbouring faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceEndpoints {
    pub start: CellCoord,
    pub entry: CellCoord,
    pub end: CellCoord,
    pub exit: CellCoord,
}

impl FaceEndpoints {
    fn points(&self) -> [CellCoord; 4] {
        [self.start, self.entry, self.end, self.exit]
    }
}

/// Reject segment counts that cannot produce a properly walled maze
///
/// `segments` must be odd and greater than 5.
pub fn check_segments(segments: u32) -> Result<(), LabyrinthError> {
    if segments <= MIN_SEGMENTS_EXCLUSIVE {
        return Err(LabyrinthError::PreconditionViolation(format!(
            "segments must be greater than {MIN_SEGMENTS_EXCLUSIVE}, got {segments}"
        )));
    }
    if segments % 2 == 0 {
        return Err(LabyrinthError::PreconditionViolation(format!(
            "segments must be odd, got {segments}"
        )));
    }
    Ok(())
}

/// Generate the maze of one face
///
/// Runs whole-grid attempts until one passes the validity check, giving up
/// after `max_attempts`. The result lists every carved grid position as a
/// face cell, scanned row-major.
pub fn generate_face_maze<R: Rng + ?Sized>(
    segments: u32,
    endpoints: FaceEndpoints,
    rng: &mut R,
    max_attempts: u32,
) -> Result<FaceMaze, LabyrinthError> {
    check_segments(segments)?;
    if let Some(point) = endpoints.points().into_iter().find(|p| p.x >= segments || p.y >= segments) {
        return Err(LabyrinthError::PreconditionViolation(format!(
            "endpoint ({}, {}) outside a {segments}×{segments} face",
            point.x, point.y
        )));
    }

    let width = (segments / 2) as usize;
    let mut generator = MazeGenerator::new(width, endpoints);

    for attempt in 1..=max_attempts {
        if attempt > 1 {
            generator.reset();
        }
        generator.carve(rng);

        match find_violation(generator.grid(), endpoints.end) {
            None => {
                if attempt > RETRY_WARN_THRESHOLD {
                    tracing::warn!("Face maze needed {} attempts", attempt);
                }
                tracing::debug!(attempt, segments, "Face maze accepted");
                return Ok(FaceMaze::new(segments, generator.grid().open_cells()));
            }
            Some(violation) => {
                tracing::trace!(attempt, ?violation, "Discarding face maze attempt");
            }
        }
    }

    Err(LabyrinthError::GenerationFailed {
        attempts: max_attempts,
    })
}
