use log::trace;
use pathtrace_core::{Grid, Point, manhattan};

use crate::Searcher;
use crate::result::SearchResult;

impl Searcher {
    /// A* search from `start` to `end` with the Manhattan heuristic.
    ///
    /// Maintains an open list scanned linearly for the minimum `f`,
    /// breaking ties by the lower `h` so that, among equally cheap
    /// candidates, the one estimated closer to the goal is settled first.
    /// The heuristic is admissible and consistent for 4-directional
    /// unit-cost movement, so the returned path is as short as the
    /// BFS/Dijkstra one. An already-open neighbor is relaxed in place
    /// whenever a strictly better tentative `g` is found.
    ///
    /// Each round's frame records the node settled that round.
    pub fn astar(&mut self, grid: &Grid, start: Point, end: Point) -> SearchResult {
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
        {
            let h = manhattan(start, end);
            let node = self.touch(start_idx);
            node.g = 0;
            node.h = h;
            node.f = h;
            node.open = true;
        }
        self.frontier.push(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while !self.frontier.is_empty() {
            // Linear scan for the lowest f; the lower h wins ties so the
            // candidate nearer the goal is preferred.
            let mut best = 0;
            for (k, &i) in self.frontier.iter().enumerate() {
                let node = &self.nodes[i];
                let best_node = &self.nodes[self.frontier[best]];
                if node.f < best_node.f || (node.f == best_node.f && node.h < best_node.h) {
                    best = k;
                }
            }
            let ci = self.frontier[best];
            if ci == goal_idx {
                found = true;
                break;
            }
            // Keep insertion order so equal (f, h) entries settle
            // first-come-first-served.
            self.frontier.remove(best);
            self.nodes[ci].open = false;
            self.nodes[ci].closed = true;
            let current_g = self.nodes[ci].g;
            let cp = self.point(ci);
            result.explored.push(vec![cp]);

            nbuf.clear();
            grid.neighbors_into(cp, &mut nbuf);
            for &np in nbuf.iter() {
                let ni = self.idx(np);
                if self.touch(ni).closed {
                    continue;
                }
                if grid.is_obstacle(np) {
                    self.nodes[ni].closed = true;
                    continue;
                }
                let tentative_g = current_g + 1;
                let neighbor = &mut self.nodes[ni];
                if neighbor.open {
                    // Relax in place on a strictly better tentative cost.
                    if tentative_g < neighbor.g {
                        neighbor.g = tentative_g;
                        neighbor.f = tentative_g + neighbor.h;
                        neighbor.parent = ci;
                    }
                    continue;
                }
                let h = manhattan(np, end);
                neighbor.g = tentative_g;
                neighbor.h = h;
                neighbor.f = tentative_g + h;
                neighbor.parent = ci;
                neighbor.open = true;
                self.frontier.push(ni);
            }
        }

        self.nbuf = nbuf;

        if found {
            result.path = self.walk_parents(start_idx, goal_idx);
        } else {
            trace!("astar: open list exhausted, {end} unreachable from {start}");
        }
        result
    }
}
