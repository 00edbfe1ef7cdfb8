use std::collections::VecDeque;

use pathtrace_core::{Grid, Point};

/// Sentinel distance meaning "not yet reached".
pub const UNREACHABLE: i32 = i32::MAX;

/// Per-cell search bookkeeping, index-referenced into a flat array sized
/// to the grid. Nodes never escape a strategy invocation; a stale
/// `generation` marks a node as untouched by the current call.
#[derive(Clone)]
pub(crate) struct Node {
    /// Cost from the start (BFS/DFS leave this unused).
    pub(crate) g: i32,
    /// Heuristic estimate to the goal (A* only).
    pub(crate) h: i32,
    /// `g + h` (A* only).
    pub(crate) f: i32,
    /// Predecessor index, `usize::MAX` at the start node.
    pub(crate) parent: usize,
    /// In the frontier / open list.
    pub(crate) open: bool,
    /// Settled: visited (BFS/DFS), settled (Dijkstra) or closed (A*).
    pub(crate) closed: bool,
    /// Obstacle flag, set during Dijkstra's whole-grid initialisation.
    pub(crate) wall: bool,
    pub(crate) generation: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            h: 0,
            f: 0,
            parent: usize::MAX,
            open: false,
            closed: false,
            wall: false,
            generation: 0,
        }
    }
}

/// Coordinator for the four search strategies.
///
/// Owns the per-cell node array and scratch buffers so that repeated
/// queries reuse allocations; caches grow lazily to the largest grid
/// seen. No state carries meaning across calls — each invocation bumps
/// the generation counter, lazily invalidating every node.
///
/// The strategy methods all share one contract:
/// `search(grid, start, end) -> SearchResult`. The grid is only ever
/// read; a start or end outside the grid yields the empty result.
pub struct Searcher {
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    /// LIFO frontier / open list (DFS, A*, flood fill).
    pub(crate) frontier: Vec<usize>,
    /// FIFO frontier (BFS).
    pub(crate) queue: VecDeque<usize>,
    pub(crate) nbuf: Vec<Point>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    /// Create a searcher with empty caches.
    pub fn new() -> Self {
        Self {
            width: 0,
            nodes: Vec::new(),
            generation: 0,
            frontier: Vec::new(),
            queue: VecDeque::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Adopt the grid's dimensions for this call, growing the node array
    /// if needed and invalidating all nodes from previous calls.
    pub(crate) fn prepare(&mut self, grid: &Grid) {
        self.width = grid.width().max(0) as usize;
        if grid.len() > self.nodes.len() {
            self.nodes.resize(grid.len(), Node::default());
        }
        self.generation = self.generation.wrapping_add(1);
        self.frontier.clear();
        self.queue.clear();
    }

    /// Flat index of an in-bounds point.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> usize {
        p.y as usize * self.width + p.x as usize
    }

    /// Point for a flat index.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Mutable access to a node, resetting it first if it is stale.
    #[inline]
    pub(crate) fn touch(&mut self, idx: usize) -> &mut Node {
        let generation = self.generation;
        let node = &mut self.nodes[idx];
        if node.generation != generation {
            *node = Node {
                generation,
                ..Node::default()
            };
        }
        node
    }

    /// Reconstruct the path by walking predecessor pointers from the goal
    /// back to the start, then reversing. Only valid once the goal has
    /// been reached in the current generation.
    pub(crate) fn walk_parents(&self, start_idx: usize, goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        loop {
            path.push(self.point(ci));
            if ci == start_idx {
                break;
            }
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_grows_but_never_shrinks_caches() {
        let mut s = Searcher::new();
        s.prepare(&Grid::new(5, 4));
        assert_eq!(s.nodes.len(), 20);
        assert_eq!(s.width, 5);

        // A smaller grid reuses the existing allocation.
        s.prepare(&Grid::new(2, 2));
        assert_eq!(s.nodes.len(), 20);
        assert_eq!(s.width, 2);

        // A larger grid grows it.
        s.prepare(&Grid::new(10, 10));
        assert_eq!(s.nodes.len(), 100);
    }

    #[test]
    fn generation_invalidates_stale_nodes() {
        let mut s = Searcher::new();
        s.prepare(&Grid::new(3, 3));
        s.touch(4).closed = true;

        s.prepare(&Grid::new(3, 3));
        assert!(!s.touch(4).closed);
    }

    #[test]
    fn idx_point_round_trip() {
        let mut s = Searcher::new();
        s.prepare(&Grid::new(7, 3));
        for i in 0..21 {
            assert_eq!(s.idx(s.point(i)), i);
        }
    }
}
