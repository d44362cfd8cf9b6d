//! Occupancy grid and the randomized depth-first walk over it

use rand::Rng;
use rand::seq::IndexedRandom;

use super::CellCoord;
use super::generator::FaceEndpoints;

/// Axis steps in half-resolution cell space: right, left, down, up
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Occupancy of one grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Wall,
    Passage,
}

/// Square occupancy grid of side `2 * width + 1`
///
/// Odd rows/columns hold the `width × width` passage cells, even ones the
/// walls between them, so walls have the same thickness as corridors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a fully walled grid for `width` passage cells per side
    pub fn new(width: usize) -> Self {
        let size = 2 * width + 1;
        Self {
            size,
            cells: vec![Cell::Wall; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    pub fn is_open(&self, col: usize, row: usize) -> bool {
        self.get(col, row) == Cell::Passage
    }

    pub fn open(&mut self, col: usize, row: usize) {
        self.cells[row * self.size + col] = Cell::Passage;
    }

    pub fn open_point(&mut self, point: CellCoord) {
        self.open(point.x as usize, point.y as usize);
    }

    /// Number of open positions
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Passage).count()
    }

    /// Every open position as a coordinate, scanned row-major
    pub fn open_cells(&self) -> Vec<CellCoord> {
        let mut open = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.is_open(col, row) {
                    open.push(CellCoord::new(col as u32, row as u32));
                }
            }
        }
        open
    }
}

/// Reason a finished grid was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The walk never opened the end point
    EndUnreachable,
    /// A 2×2 window is fully open (an unintended room)
    OpenBlock { col: usize, row: usize },
    /// A 2×2 window is open only along one diagonal (a leak between walls)
    Checkerboard { col: usize, row: usize },
}

/// Check a finished grid for global validity
///
/// Windows are reported by their top-left position. Every 2×2 window is
/// inspected, for the full block and for both checkerboard orientations.
pub fn find_violation(grid: &Grid, end: CellCoord) -> Option<Violation> {
    if !grid.is_open(end.x as usize, end.y as usize) {
        return Some(Violation::EndUnreachable);
    }

    for row in 0..grid.size() - 1 {
        for col in 0..grid.size() - 1 {
            let top_left = grid.is_open(col, row);
            let top_right = grid.is_open(col + 1, row);
            let bottom_left = grid.is_open(col, row + 1);
            let bottom_right = grid.is_open(col + 1, row + 1);

            if top_left && top_right && bottom_left && bottom_right {
                return Some(Violation::OpenBlock { col, row });
            }
            let main_diagonal = top_left && bottom_right && !top_right && !bottom_left;
            let anti_diagonal = top_right && bottom_left && !top_left && !bottom_right;
            if main_diagonal || anti_diagonal {
                return Some(Violation::Checkerboard { col, row });
            }
        }
    }

    None
}

/// Whether `point` is one of the odd/odd passage cells of the grid
fn is_passage(point: CellCoord) -> bool {
    point.x % 2 == 1 && point.y % 2 == 1
}

/// State of one generation attempt: the grid, the walk's path and the endpoints
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    width: usize,
    endpoints: FaceEndpoints,
    grid: Grid,
    /// Active walk in half-resolution cell coordinates
    path: Vec<(usize, usize)>,
}

impl MazeGenerator {
    /// Create a generator for `width` passage cells per side, ready to walk
    pub fn new(width: usize, endpoints: FaceEndpoints) -> Self {
        let mut generator = Self {
            width,
            endpoints,
            grid: Grid::new(width),
            path: Vec::new(),
        };
        generator.reset();
        generator
    }

    /// Discard the grid and start over from the initial cell
    ///
    /// Entry and exit are opened up front only when they are walls or pillars.
    /// A breach on a passage cell is left to the walk, which reaches every
    /// passage.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.width);
        let start = (
            self.endpoints.start.x as usize / 2,
            self.endpoints.start.y as usize / 2,
        );
        self.grid.open_point(self.endpoints.start);
        self.grid.open(2 * start.0 + 1, 2 * start.1 + 1);
        for breach in [self.endpoints.entry, self.endpoints.exit] {
            if !is_passage(breach) {
                self.grid.open_point(breach);
            }
        }

        self.path.clear();
        self.path.push(start);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn endpoints(&self) -> &FaceEndpoints {
        &self.endpoints
    }

    pub fn is_finished(&self) -> bool {
        self.path.is_empty()
    }

    /// Directions from `cell` whose destination passage is still closed
    pub fn open_directions(&self, cell: (usize, usize)) -> Vec<(isize, isize)> {
        DIRECTIONS
            .iter()
            .copied()
            .filter(|&direction| {
                self.neighbor(cell, direction)
                    .is_some_and(|(x, y)| !self.grid.is_open(2 * x + 1, 2 * y + 1))
            })
            .collect()
    }

    fn neighbor(&self, (x, y): (usize, usize), (dx, dy): (isize, isize)) -> Option<(usize, usize)> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < self.width && ny < self.width).then_some((nx, ny))
    }

    /// Advance the walk by one move or one backtrack
    ///
    /// Returns `false` once the path is empty and the attempt has ended.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(&current) = self.path.last() else {
            return false;
        };

        let alternatives = self.open_directions(current);
        let Some(&direction) = alternatives.choose(rng) else {
            self.path.pop();
            return !self.path.is_empty();
        };

        let Some(next) = self.neighbor(current, direction) else {
            return true;
        };
        self.grid.open(2 * next.0 + 1, 2 * next.1 + 1);
        // the wall between the two passages
        let wall_col = (2 * current.0 + 1).wrapping_add_signed(direction.0);
        let wall_row = (2 * current.1 + 1).wrapping_add_signed(direction.1);
        self.grid.open(wall_col, wall_row);
        self.path.push(next);
        true
    }

    /// Run the walk until the path is exhausted
    pub fn carve<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        while self.step(rng) {}
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    use super::*;

    fn left_to_right(width: u32) -> FaceEndpoints {
        FaceEndpoints {
            start: CellCoord::new(1, width),
            entry: CellCoord::new(0, width),
            end: CellCoord::new(2 * width - 1, width),
            exit: CellCoord::new(2 * width, width),
        }
    }

    fn grid_from_rows(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len() / 2);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch == '#' {
                    continue;
                }
                grid.open(col, row);
            }
        }
        grid
    }

    #[test]
    fn test_new_grid_is_walled() {
        let grid = Grid::new(3);
        assert_eq!(grid.size(), 7);
        assert_eq!(grid.open_count(), 0);
        assert_eq!(grid.get(3, 3), Cell::Wall);
    }

    #[test]
    fn test_reset_marks_endpoints() {
        let generator = MazeGenerator::new(3, left_to_right(3));
        let grid = generator.grid();
        assert!(grid.is_open(1, 3));
        assert!(grid.is_open(0, 3));
        assert!(grid.is_open(6, 3));
        assert!(!grid.is_open(5, 3));
        assert_eq!(grid.open_count(), 3);
        assert!(!generator.is_finished());
    }

    #[test]
    fn test_passage_exit_is_carved_by_walk() {
        // left side to the centre of a width-3 grid: the centre is a passage
        let endpoints = FaceEndpoints {
            start: CellCoord::new(1, 3),
            entry: CellCoord::new(0, 3),
            end: CellCoord::new(3, 3),
            exit: CellCoord::new(3, 3),
        };
        let mut generator = MazeGenerator::new(3, endpoints);
        assert!(!generator.grid().is_open(3, 3));
        assert_eq!(generator.grid().open_count(), 2);

        for seed in 0..10 {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            generator.reset();
            generator.carve(&mut rng);
            let grid = generator.grid();
            assert!(grid.is_open(3, 3));
            // the centre joins the tree through at least one opened wall
            let walls = [(2, 3), (4, 3), (3, 2), (3, 4)];
            assert!(walls.iter().any(|&(col, row)| grid.is_open(col, row)));
            assert_eq!(grid.open_count(), 9 + 8 + 1);
        }
    }

    #[test]
    fn test_start_passage_opened_on_reset() {
        // on a width-4 grid the left breach sits on a wall between two passages
        let endpoints = FaceEndpoints {
            start: CellCoord::new(1, 4),
            entry: CellCoord::new(0, 4),
            end: CellCoord::new(7, 4),
            exit: CellCoord::new(8, 4),
        };
        let generator = MazeGenerator::new(4, endpoints);
        let grid = generator.grid();
        assert!(grid.is_open(1, 4) && grid.is_open(1, 5));
        assert!(grid.is_open(0, 4) && grid.is_open(8, 4));
        assert_eq!(grid.open_count(), 4);
    }

    #[test]
    fn test_open_directions_at_corner() {
        let generator = MazeGenerator::new(3, left_to_right(3));
        // (2, 2) can only go left or up
        let mut dirs = generator.open_directions((2, 2));
        dirs.sort();
        assert_eq!(dirs, vec![(-1, 0), (0, -1)]);
        // the start cell (0, 1) is already open
        assert_eq!(generator.open_directions((0, 0)), vec![(1, 0)]);
    }

    #[test]
    fn test_carve_builds_spanning_tree() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut generator = MazeGenerator::new(3, left_to_right(3));
        generator.carve(&mut rng);

        assert!(generator.is_finished());
        let grid = generator.grid();
        for y in 0..3 {
            for x in 0..3 {
                assert!(grid.is_open(2 * x + 1, 2 * y + 1));
            }
        }
        // 9 passages, 8 tree walls, entry and exit breaches
        assert_eq!(grid.open_count(), 9 + 8 + 2);
        // pillars stay closed
        for row in (0..7).step_by(2) {
            for col in (0..7).step_by(2) {
                assert!(!grid.is_open(col, row));
            }
        }
    }

    #[test]
    fn test_step_after_finish_is_noop() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let mut generator = MazeGenerator::new(3, left_to_right(3));
        generator.carve(&mut rng);
        let grid = generator.grid().clone();
        assert!(!generator.step(&mut rng));
        assert_eq!(generator.grid(), &grid);
    }

    #[test]
    fn test_reset_discards_walk() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let mut generator = MazeGenerator::new(3, left_to_right(3));
        generator.carve(&mut rng);
        generator.reset();
        assert_eq!(generator.grid().open_count(), 3);
        assert!(!generator.is_finished());
    }

    #[test]
    fn test_violation_end_unreachable() {
        let grid = Grid::new(2);
        assert_eq!(
            find_violation(&grid, CellCoord::new(1, 1)),
            Some(Violation::EndUnreachable)
        );
    }

    #[test]
    fn test_violation_open_block() {
        let grid = grid_from_rows(&["#####", "#..##", "#..##", "#####", "#####"]);
        assert_eq!(
            find_violation(&grid, CellCoord::new(1, 1)),
            Some(Violation::OpenBlock { col: 1, row: 1 })
        );
    }

    #[test]
    fn test_violation_checkerboards() {
        let main = grid_from_rows(&["#####", "#.###", "##.##", "#####", "#####"]);
        assert_eq!(
            find_violation(&main, CellCoord::new(1, 1)),
            Some(Violation::Checkerboard { col: 1, row: 1 })
        );

        let anti = grid_from_rows(&["#####", "##.##", "#.###", "#####", "#####"]);
        assert_eq!(
            find_violation(&anti, CellCoord::new(1, 2)),
            Some(Violation::Checkerboard { col: 1, row: 1 })
        );
    }

    #[test]
    fn test_violation_on_outer_ring_windows() {
        // checkerboard touching the top-left corner of the grid
        let grid = grid_from_rows(&[".####", "#.###", "#.###", "#####", "#####"]);
        assert_eq!(
            find_violation(&grid, CellCoord::new(1, 1)),
            Some(Violation::Checkerboard { col: 0, row: 0 })
        );
    }

    #[test]
    fn test_every_window_pattern() {
        // exhaustive over the 16 fillings of one interior 2×2 window
        for mask in 0u8..16 {
            let mut grid = Grid::new(2);
            // keep a lone open end point far from the window
            grid.open(4, 4);
            let bits = [mask & 1 != 0, mask & 2 != 0, mask & 4 != 0, mask & 8 != 0];
            let positions = [(1, 1), (2, 1), (1, 2), (2, 2)];
            for (open, (col, row)) in bits.iter().zip(positions) {
                if *open {
                    grid.open(col, row);
                }
            }

            let [tl, tr, bl, br] = bits;
            let expect_block = tl && tr && bl && br;
            let expect_checker = (tl && br && !tr && !bl) || (tr && bl && !tl && !br);
            let found = find_violation(&grid, CellCoord::new(4, 4));

            match found {
                Some(Violation::OpenBlock { .. }) => assert!(expect_block, "mask {mask}"),
                Some(Violation::Checkerboard { .. }) => assert!(expect_checker, "mask {mask}"),
                Some(Violation::EndUnreachable) => panic!("end point is open"),
                None => assert!(!expect_block && !expect_checker, "mask {mask}"),
            }
        }
    }

    #[test]
    fn test_open_cells_row_major() {
        let grid = grid_from_rows(&["#.###", "#....", "#####", "#####", "#####"]);
        let cells = grid.open_cells();
        assert_eq!(cells[0], CellCoord::new(1, 0));
        assert_eq!(cells[1], CellCoord::new(1, 1));
        assert_eq!(cells.len(), 5);
    }
}
