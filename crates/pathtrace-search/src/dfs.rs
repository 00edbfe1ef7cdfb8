use pathtrace_core::{Grid, Point};

use crate::Searcher;
use crate::result::SearchResult;

impl Searcher {
    /// Depth-first search from `start` to `end`.
    ///
    /// Identical bookkeeping to [`Searcher::bfs`] with a LIFO frontier:
    /// finds *some* obstacle-free path when one exists, with no length
    /// guarantee. Neighbors are pushed in the fixed up/right/down/left
    /// order, so the walk descends leftward first.
    pub fn dfs(&mut self, grid: &Grid, start: Point, end: Point) -> SearchResult {
        let mut result = SearchResult::default();
        if !grid.contains(start) || !grid.contains(end) {
            return result;
        }
        if start == end {
            result.path.push(start);
            return result;
        }
        self.prepare(grid);

        let start_idx = self.idx(start);
        let goal_idx = self.idx(end);
        self.touch(start_idx);
        self.frontier.push(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = self.frontier.pop() {
            if ci == goal_idx {
                found = true;
                break;
            }
            let node = self.touch(ci);
            if node.closed {
                continue;
            }
            node.closed = true;

            let cp = self.point(ci);
            result.explored.push(vec![cp]);

            nbuf.clear();
            grid.neighbors_into(cp, &mut nbuf);
            for &np in nbuf.iter() {
                if grid.is_obstacle(np) {
                    continue;
                }
                let ni = self.idx(np);
                let neighbor = self.touch(ni);
                if neighbor.closed {
                    continue;
                }
                neighbor.parent = ci;
                self.frontier.push(ni);
            }
        }

        self.nbuf = nbuf;

        if found {
            result.path = self.walk_parents(start_idx, goal_idx);
        }
        result
    }
}
