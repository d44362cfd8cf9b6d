//! Cube face router: symbolic boundary positions and the six-face wiring

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use super::generator::{FaceEndpoints, check_segments, generate_face_maze};
use super::{CellCoord, CubeLabyrinth, FaceMaze, LabyrinthError};
use crate::constants::DEFAULT_MAX_ATTEMPTS;

/// Where on a face a corridor starts or ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryPosition {
    Left,
    Middle,
    Top,
    Bottom,
    Right,
}

impl BoundaryPosition {
    /// Resolve to (walk point, breach point) on a grid of `width` passage cells
    ///
    /// The walk point sits one step inside the outer wall, the breach point on
    /// the wall itself. `Middle` resolves both to the face centre, so it opens
    /// no breach.
    pub fn points(self, width: u32) -> (CellCoord, CellCoord) {
        let mid = width;
        let far = 2 * width;
        match self {
            BoundaryPosition::Left => (CellCoord::new(1, mid), CellCoord::new(0, mid)),
            BoundaryPosition::Middle => (CellCoord::new(mid, mid), CellCoord::new(mid, mid)),
            BoundaryPosition::Top => (CellCoord::new(mid, 1), CellCoord::new(mid, 0)),
            BoundaryPosition::Bottom => (CellCoord::new(mid, far - 1), CellCoord::new(mid, far)),
            BoundaryPosition::Right => (CellCoord::new(far - 1, mid), CellCoord::new(far, mid)),
        }
    }

    /// Endpoints of a face whose corridor runs from `start` to `end`
    pub fn face_endpoints(start: Self, end: Self, width: u32) -> FaceEndpoints {
        let (start, entry) = start.points(width);
        let (end, exit) = end.points(width);
        FaceEndpoints {
            start,
            entry,
            end,
            exit,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BoundaryPosition::Left => "left",
            BoundaryPosition::Middle => "middle",
            BoundaryPosition::Top => "top",
            BoundaryPosition::Bottom => "bottom",
            BoundaryPosition::Right => "right",
        }
    }
}

/// (start, end) of every face
///
/// Together with the face layout of the subdivided box, every breach meets
/// the breach of exactly one other face across a shared cube edge.
pub const CUBE_WIRING: [(BoundaryPosition, BoundaryPosition); 6] = [
    (BoundaryPosition::Top, BoundaryPosition::Bottom),
    (BoundaryPosition::Bottom, BoundaryPosition::Right),
    (BoundaryPosition::Left, BoundaryPosition::Right),
    (BoundaryPosition::Bottom, BoundaryPosition::Left),
    (BoundaryPosition::Left, BoundaryPosition::Middle),
    (BoundaryPosition::Middle, BoundaryPosition::Top),
];

/// Faces in the order the corridor crosses them
///
/// The corridor starts at the middle of face 5 and ends at the middle of
/// face 4; every other face is entered through one breach and left through
/// the other.
pub const CORRIDOR_ORDER: [usize; 6] = [5, 0, 1, 3, 2, 4];

/// Generate the six wired face mazes of a cube
pub fn generate_cube_labyrinth<R: Rng + ?Sized>(
    segments: u32,
    rng: &mut R,
    max_attempts: u32,
) -> Result<CubeLabyrinth, LabyrinthError> {
    check_segments(segments)?;
    let width = segments / 2;

    let mut faces = vec![FaceMaze::new(segments, Vec::new()); CUBE_WIRING.len()];
    for &face in &CORRIDOR_ORDER {
        let (start, end) = CUBE_WIRING[face];
        let endpoints = BoundaryPosition::face_endpoints(start, end, width);
        let maze = generate_face_maze(segments, endpoints, rng, max_attempts)?;
        tracing::debug!(
            "Face {} ({} -> {}): {} cells",
            face,
            start.name(),
            end.name(),
            maze.len()
        );
        faces[face] = maze;
    }

    Ok(CubeLabyrinth { segments, faces })
}

/// Generate a cube labyrinth from a seed with the default retry cap
///
/// The same seed always yields the same labyrinth.
pub fn generate_labyrinth(segments: u32, seed: u64) -> Result<CubeLabyrinth, LabyrinthError> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    generate_cube_labyrinth(segments, &mut rng, DEFAULT_MAX_ATTEMPTS)
}
