use log::trace;
use pathtrace_core::{Grid, Point};

use crate::Searcher;
use crate::result::SearchResult;

impl Searcher {
    /// Breadth-first search from `start` to `end`.
    ///
    /// Guarantees a shortest path by hop count when one exists. A node is
    /// marked visited only when dequeued, so a coordinate may sit in the
    /// queue more than once before its first dequeue; later enqueues
    /// overwrite the predecessor pointer. The overwrite is deliberate:
    /// BFS drains a frontier level in full before advancing, so any
    /// overwriting predecessor lies at the same distance from the start.
    pub fn bfs(&mut self, grid: &Grid, start: Point, end: Point) -> SearchResult {
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
        self.queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = self.queue.pop_front() {
            if ci == goal_idx {
                found = true;
                break;
            }
            let node = self.touch(ci);
            if node.closed {
                // Enqueued more than once; the first dequeue settled it.
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
                self.queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;

        if found {
            result.path = self.walk_parents(start_idx, goal_idx);
        } else {
            trace!("bfs: frontier exhausted, {end} unreachable from {start}");
        }
        result
    }
}
