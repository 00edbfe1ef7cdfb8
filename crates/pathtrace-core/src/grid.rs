//! The mutable 2D cell grid.
//!
//! The grid is plainly owned by the caller: the editing layer holds a
//! `&mut Grid` for the lifetime of a session, while the search and maze
//! engines only ever borrow it immutably for the duration of one call.

use crate::cell::{Cell, CellType};
use crate::geom::Point;

/// Cardinal directions in the fixed scan order: up, right, down, left.
///
/// Strategies that scan neighbors linearly depend on this order for
/// deterministic tie-breaking, so it must not change.
pub const DIRS: [Point; 4] = [
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
];

/// A rectangular, origin-anchored grid of [`CellType`] values.
///
/// Every in-bounds coordinate maps to exactly one cell. The grid may only
/// grow (see [`Grid::resize`]); existing cells keep their coordinate and
/// classification across a resize.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<CellType>,
}

impl Grid {
    /// Create a new grid with every cell `Empty`.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![CellType::Empty; (width * height) as usize],
        }
    }

    /// Width of the grid (valid x coordinates are `0..width`).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid (valid y coordinates are `0..height`).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the grid contains the given coordinate.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// The cell type at a coordinate, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellType> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Whether the cell at `p` blocks traversal. Out-of-bounds counts as
    /// blocked.
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        !self.at(p).is_some_and(CellType::traversable)
    }

    /// Set the cell type at a coordinate. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, kind: CellType) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = kind;
    }

    /// Retype every listed coordinate at once. Out-of-bounds entries are
    /// skipped. Convenient for painting a returned path or exploration
    /// frame back onto the grid.
    pub fn set_all(&mut self, points: &[Point], kind: CellType) {
        for &p in points {
            self.set(p, kind);
        }
    }

    /// Fill the entire grid with the given cell type.
    pub fn fill(&mut self, kind: CellType) {
        self.cells.fill(kind);
    }

    /// Count how many cells hold the given type.
    pub fn count(&self, kind: CellType) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// The in-bounds cardinal neighbors of `p`, appended to `buf` in the
    /// fixed up, right, down, left order. The caller clears `buf` first.
    pub fn neighbors_into(&self, p: Point, buf: &mut Vec<Point>) {
        for d in DIRS {
            let n = p + d;
            if self.contains(n) {
                buf.push(n);
            }
        }
    }

    /// The in-bounds cardinal neighbors of `p` (up, right, down, left).
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf);
        buf
    }

    /// Grow the grid to at least the requested dimensions.
    ///
    /// Requested dimensions smaller than the current ones are clamped:
    /// the grid never shrinks and no cell is ever discarded. Newly
    /// exposed coordinates default to `Empty`.
    pub fn resize(&mut self, width: i32, height: i32) {
        let new_w = width.max(self.width);
        let new_h = height.max(self.height);
        if new_w == self.width && new_h == self.height {
            return;
        }
        let mut cells = vec![CellType::Empty; (new_w * new_h) as usize];
        for y in 0..self.height {
            for x in 0..self.width {
                cells[(y * new_w + x) as usize] = self.cells[(y * self.width + x) as usize];
            }
        }
        self.width = new_w;
        self.height = new_h;
        self.cells = cells;
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().map(|(i, &kind)| {
            let x = i as i32 % self.width;
            let y = i as i32 / self.width;
            Cell::new(Point::new(x, y), kind)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty_cells() {
        let g = Grid::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.count(CellType::Empty), 12);
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4);
        let p = Point::new(2, 3);
        g.set(p, CellType::Obstacle);
        assert_eq!(g.at(p), Some(CellType::Obstacle));
        assert_eq!(g.at(Point::new(0, 0)), Some(CellType::Empty));
        assert_eq!(g.at(Point::new(10, 10)), None);
        // Out-of-bounds set is a no-op.
        g.set(Point::new(-1, 0), CellType::Obstacle);
        assert_eq!(g.count(CellType::Obstacle), 1);
    }

    #[test]
    fn neighbors_order_and_bounds() {
        let g = Grid::new(3, 3);
        // Interior: all four, in up/right/down/left order.
        assert_eq!(
            g.neighbors(Point::new(1, 1)),
            vec![
                Point::new(1, 2),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(0, 1),
            ]
        );
        // Corner: out-of-bounds candidates dropped, order preserved.
        assert_eq!(
            g.neighbors(Point::new(0, 0)),
            vec![Point::new(0, 1), Point::new(1, 0)]
        );
        for p in g.neighbors(Point::new(2, 2)) {
            assert!(g.contains(p));
        }
    }

    #[test]
    fn resize_grows_and_preserves() {
        let mut g = Grid::new(3, 3);
        g.set(Point::new(2, 1), CellType::Obstacle);
        g.set(Point::new(0, 2), CellType::Start);
        g.resize(5, 4);
        assert_eq!(g.width(), 5);
        assert_eq!(g.height(), 4);
        assert_eq!(g.at(Point::new(2, 1)), Some(CellType::Obstacle));
        assert_eq!(g.at(Point::new(0, 2)), Some(CellType::Start));
        assert_eq!(g.at(Point::new(4, 3)), Some(CellType::Empty));
    }

    #[test]
    fn resize_never_shrinks() {
        let mut g = Grid::new(4, 4);
        g.set(Point::new(3, 3), CellType::End);
        g.resize(2, 6);
        assert_eq!(g.width(), 4); // clamped
        assert_eq!(g.height(), 6);
        assert_eq!(g.at(Point::new(3, 3)), Some(CellType::End));
    }

    #[test]
    fn set_all_retypes() {
        let mut g = Grid::new(3, 3);
        let pts = [Point::new(0, 0), Point::new(1, 1), Point::new(9, 9)];
        g.set_all(&pts, CellType::PathCell);
        assert_eq!(g.count(CellType::PathCell), 2);
    }

    #[test]
    fn iter_row_major() {
        let mut g = Grid::new(3, 2);
        g.set(Point::new(1, 0), CellType::Obstacle);
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[1].pos, Point::new(1, 0));
        assert_eq!(cells[1].kind, CellType::Obstacle);
        assert_eq!(cells[5].pos, Point::new(2, 1));
    }
}
