//! Reachability flood fill.

use pathtrace_core::{Grid, Point};

use crate::Searcher;

impl Searcher {
    /// The set of non-obstacle cells reachable from `from`, including
    /// `from` itself, in settle order.
    ///
    /// Returns an empty set if `from` is out of bounds or an obstacle.
    /// Useful to the editing layer for validating that a chosen start and
    /// end share a component before kicking off an animated search.
    pub fn flood(&mut self, grid: &Grid, from: Point) -> Vec<Point> {
        let mut reached = Vec::new();
        if !grid.contains(from) || grid.is_obstacle(from) {
            return reached;
        }
        self.prepare(grid);

        let si = self.idx(from);
        self.touch(si).closed = true;
        self.frontier.push(si);
        reached.push(from);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.frontier.pop() {
            let cp = self.point(ci);
            nbuf.clear();
            grid.neighbors_into(cp, &mut nbuf);
            for &np in nbuf.iter() {
                if grid.is_obstacle(np) {
                    continue;
                }
                let ni = self.idx(np);
                let node = self.touch(ni);
                if node.closed {
                    continue;
                }
                node.closed = true;
                self.frontier.push(ni);
                reached.push(np);
            }
        }

        self.nbuf = nbuf;
        reached
    }
}
