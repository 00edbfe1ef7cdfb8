//! Randomized perfect-maze generation.
//!
//! Carves a perfect maze — passage cells form a spanning tree, so any two
//! passages are connected by exactly one simple path — with an iterative
//! randomized backtracker. Passages occupy odd/odd coordinates, walls
//! occupy the rest; carving an edge of the spanning tree turns the wall
//! cell midway between two passages into `Empty`.
//!
//! The generator is generic over [`rand::Rng`], so tests inject a seeded
//! [`StdRng`](rand::rngs::StdRng) for reproducible layouts.

use log::debug;
use pathtrace_core::{CellType, DIRS, Grid, Point};
use rand::{Rng, RngExt};

/// A freshly carved maze: the grid plus the generator-chosen endpoints.
///
/// The generator only writes `Empty`/`Obstacle`; retyping `start` and
/// `end` to their marker cell types is the caller's job.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    pub grid: Grid,
    pub start: Point,
    pub end: Point,
}

/// Maze generator holding the randomness source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator using `rng` for neighbor selection.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a perfect maze of the given dimensions.
    ///
    /// The start is always the seed passage at (1, 1). The end is the
    /// topmost `Empty` cell in the highest-indexed column that contains
    /// any `Empty` cell. Dimensions too small for an odd/odd passage
    /// degenerate to a single open cell at the origin with start == end.
    pub fn generate(&mut self, width: i32, height: i32) -> Maze {
        let mut grid = Grid::new(width, height);
        grid.fill(CellType::Obstacle);

        if width < 2 || height < 2 {
            let origin = Point::ZERO;
            grid.set(origin, CellType::Empty);
            return Maze {
                grid,
                start: origin,
                end: origin,
            };
        }

        // Seed the passage lattice: every odd/odd cell is a passage, and
        // the backtracker below visits each exactly once.
        for y in (1..height).step_by(2) {
            for x in (1..width).step_by(2) {
                grid.set(Point::new(x, y), CellType::Empty);
            }
        }

        let start = Point::new(1, 1);
        let mut visited = vec![false; grid.len()];
        let cell_index = |p: Point| (p.y * width + p.x) as usize;
        visited[cell_index(start)] = true;

        let mut stack = vec![start];
        let mut candidates: Vec<Point> = Vec::with_capacity(4);

        while let Some(current) = stack.pop() {
            // Passage neighbors two cells away, one wall cell between.
            candidates.clear();
            for d in DIRS {
                let n = current + d + d;
                if grid.contains(n) && !visited[cell_index(n)] {
                    candidates.push(n);
                }
            }
            if candidates.is_empty() {
                continue;
            }
            // The current cell may still have unexplored branches.
            stack.push(current);

            let chosen = candidates[self.rng.random_range(0..candidates.len())];
            let wall = Point::new((current.x + chosen.x) / 2, (current.y + chosen.y) / 2);
            grid.set(wall, CellType::Empty);
            visited[cell_index(chosen)] = true;
            stack.push(chosen);
        }

        let end = pick_end(&grid).unwrap_or(start);
        debug!("carved {width}x{height} maze, start {start}, end {end}");
        Maze { grid, start, end }
    }
}

/// Scan columns left to right, remembering the topmost `Empty` cell of
/// each column that has one; the final candidate wins.
fn pick_end(grid: &Grid) -> Option<Point> {
    let mut end = None;
    for x in 0..grid.width() {
        for y in (0..grid.height()).rev() {
            let p = Point::new(x, y);
            if grid.at(p) == Some(CellType::Empty) {
                end = Some(p);
                break;
            }
        }
    }
    end
}

/// Carve a maze sized to an existing grid's dimensions.
///
/// The input grid is only consulted for its width and height; a freshly
/// carved grid is returned alongside the chosen endpoints.
pub fn generate_maze(grid: &Grid, rng: impl Rng) -> Maze {
    MazeGen::new(rng).generate(grid.width(), grid.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn carve(width: i32, height: i32, seed: u64) -> Maze {
        MazeGen::new(StdRng::seed_from_u64(seed)).generate(width, height)
    }

    /// Passage count of the odd/odd lattice.
    fn passages(width: i32, height: i32) -> usize {
        (width as usize / 2) * (height as usize / 2)
    }

    #[test]
    fn spanning_tree_invariant() {
        for (w, h, seed) in [(5, 5, 7), (11, 11, 7), (16, 9, 3)] {
            let maze = carve(w, h, seed);
            let p = passages(w, h);
            // A spanning tree of p passages carves exactly p - 1 walls.
            assert_eq!(
                maze.grid.count(CellType::Empty),
                2 * p - 1,
                "{w}x{h}: empty-cell count must be 2p - 1"
            );
            // Connected: every empty cell is reachable from the start.
            let reached = pathtrace_search::flood(&maze.grid, maze.start);
            assert_eq!(reached.len(), 2 * p - 1);
        }
    }

    #[test]
    fn endpoints_are_open_and_reachable() {
        let maze = carve(9, 9, 42);
        assert_eq!(maze.start, Point::new(1, 1));
        assert_eq!(maze.grid.at(maze.start), Some(CellType::Empty));
        assert_eq!(maze.grid.at(maze.end), Some(CellType::Empty));
        let res = pathtrace_search::bfs(&maze.grid, maze.start, maze.end);
        assert!(res.found());
    }

    #[test]
    fn end_is_topmost_in_last_open_column() {
        let maze = carve(11, 7, 5);
        // No empty cell right of the end's column.
        for x in (maze.end.x + 1)..maze.grid.width() {
            for y in 0..maze.grid.height() {
                assert_ne!(maze.grid.at(Point::new(x, y)), Some(CellType::Empty));
            }
        }
        // None above it in its own column.
        for y in (maze.end.y + 1)..maze.grid.height() {
            assert_ne!(
                maze.grid.at(Point::new(maze.end.x, y)),
                Some(CellType::Empty)
            );
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = carve(5, 5, 99);
        let b = carve(5, 5, 99);
        assert_eq!(a.grid, b.grid);
        assert_eq!((a.start, a.end), (b.start, b.end));

        let c = carve(11, 11, 1);
        let d = carve(11, 11, 2);
        assert_ne!(c.grid, d.grid, "different seeds must differ structurally");
    }

    #[test]
    fn sizes_from_existing_grid() {
        let template = Grid::new(7, 5);
        let maze = generate_maze(&template, StdRng::seed_from_u64(0));
        assert_eq!(maze.grid.width(), 7);
        assert_eq!(maze.grid.height(), 5);
    }

    #[test]
    fn degenerate_dimensions_yield_single_passage() {
        let maze = carve(1, 8, 0);
        assert_eq!(maze.start, Point::ZERO);
        assert_eq!(maze.end, Point::ZERO);
        assert_eq!(maze.grid.count(CellType::Empty), 1);
    }
}
