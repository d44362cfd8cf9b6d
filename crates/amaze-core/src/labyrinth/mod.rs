//! Labyrinth generation for the six faces of a cube
//!
//! Each face is a randomized depth-first maze on an occupancy grid whose odd
//! rows/columns are passage cells and whose even rows/columns are the walls
//! between them. The router wires six such mazes together through breaches
//! in their outer walls so they form one corridor over the cube's surface.

mod generator;
mod grid;
mod router;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

pub use generator::{FaceEndpoints, check_segments, generate_face_maze};
pub use grid::{Cell, Grid, MazeGenerator, Violation, find_violation};
pub use router::{
    BoundaryPosition, CORRIDOR_ORDER, CUBE_WIRING, generate_cube_labyrinth, generate_labyrinth,
};

/// Cell of a face in face-local segment coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: u32,
    pub y: u32,
}

impl CellCoord {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Whether the cell lies on the outer ring of a `segments × segments` face
    pub fn is_on_ring(&self, segments: u32) -> bool {
        self.x == 0 || self.y == 0 || self.x + 1 == segments || self.y + 1 == segments
    }
}

impl From<(u32, u32)> for CellCoord {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// Carved cells of one cube face, in row-major scan order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceMaze {
    pub segments: u32,
    pub cells: Vec<CellCoord>,
}

impl FaceMaze {
    pub fn new(segments: u32, cells: Vec<CellCoord>) -> Self {
        Self { segments, cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: CellCoord) -> bool {
        self.cells.contains(&cell)
    }

    /// Rebuild the occupancy of the face (`true` = carved), indexed `[y][x]`
    pub fn occupancy(&self) -> Vec<Vec<bool>> {
        let s = self.segments as usize;
        let mut open = vec![vec![false; s]; s];
        for cell in &self.cells {
            if (cell.x as usize) < s && (cell.y as usize) < s {
                open[cell.y as usize][cell.x as usize] = true;
            }
        }
        open
    }

    /// Whether `from` and `to` are joined by a 4-connected run of carved cells
    pub fn connects(&self, from: CellCoord, to: CellCoord) -> bool {
        let open = self.occupancy();
        let s = self.segments as usize;
        let is_open = |c: CellCoord| (c.x as usize) < s && (c.y as usize) < s && open[c.y as usize][c.x as usize];
        if !is_open(from) || !is_open(to) {
            return false;
        }

        let mut visited = vec![vec![false; s]; s];
        let mut queue = VecDeque::from([from]);
        visited[from.y as usize][from.x as usize] = true;

        while let Some(cell) = queue.pop_front() {
            if cell == to {
                return true;
            }
            let neighbors = [
                cell.x.checked_sub(1).map(|x| CellCoord::new(x, cell.y)),
                Some(CellCoord::new(cell.x + 1, cell.y)),
                cell.y.checked_sub(1).map(|y| CellCoord::new(cell.x, y)),
                Some(CellCoord::new(cell.x, cell.y + 1)),
            ];
            for next in neighbors.into_iter().flatten() {
                if is_open(next) && !visited[next.y as usize][next.x as usize] {
                    visited[next.y as usize][next.x as usize] = true;
                    queue.push_back(next);
                }
            }
        }
        false
    }
}

/// The six face mazes of one cube, indexed like the faces of the subdivided box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeLabyrinth {
    pub segments: u32,
    pub faces: Vec<FaceMaze>,
}

impl CubeLabyrinth {
    /// Total number of carved cells over all faces
    pub fn cell_count(&self) -> usize {
        self.faces.iter().map(FaceMaze::len).sum()
    }
}

/// Labyrinth generation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum LabyrinthError {
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),
    #[error("Maze generation failed after {attempts} attempts")]
    GenerationFailed { attempts: u32 },
}
