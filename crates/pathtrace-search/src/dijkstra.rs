use log::trace;
use pathtrace_core::{Grid, Point};

use crate::Searcher;
use crate::result::SearchResult;
use crate::searcher::UNREACHABLE;

impl Searcher {
    /// Dijkstra's algorithm from `start` to `end` with unit edge costs.
    ///
    /// Every cell gets a node up front (distance 0 at the start,
    /// unreachable elsewhere, obstacles flagged as walls). Each round
    /// linearly scans the unsettled set for the minimum-distance node —
    /// an O(V²) simplicity trade-off that keeps the settle order easy to
    /// reason about at interactive grid sizes — settles it, and relaxes
    /// its non-wall, unsettled neighbors. Wall nodes are never relaxed,
    /// so they stay unreachable; the loop ends once only unreachable
    /// nodes remain.
    ///
    /// Each round's frame records the neighbors examined for relaxation,
    /// so playback shows the relaxation wave.
    pub fn dijkstra(&mut self, grid: &Grid, start: Point, end: Point) -> SearchResult {
        let mut result = SearchResult::default();
        if !grid.contains(start) || !grid.contains(end) {
            return result;
        }
        if start == end {
            result.path.push(start);
            return result;
        }
        self.prepare(grid);

        let len = grid.len();
        for i in 0..len {
            let p = self.point(i);
            let wall = grid.is_obstacle(p);
            let node = self.touch(i);
            node.g = UNREACHABLE;
            node.wall = wall;
        }
        let start_idx = self.idx(start);
        let goal_idx = self.idx(end);
        self.nodes[start_idx].g = 0;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        loop {
            // Linear scan for the minimum-distance unsettled node.
            let mut best: Option<usize> = None;
            for i in 0..len {
                if self.nodes[i].closed {
                    continue;
                }
                if best.is_none_or(|b| self.nodes[i].g < self.nodes[b].g) {
                    best = Some(i);
                }
            }
            let Some(ci) = best else {
                break;
            };
            if self.nodes[ci].g == UNREACHABLE {
                // Nothing reachable remains unsettled.
                trace!("dijkstra: {end} unreachable from {start}");
                break;
            }
            if ci == goal_idx {
                found = true;
                break;
            }
            self.nodes[ci].closed = true;
            let current_g = self.nodes[ci].g;
            let cp = self.point(ci);

            nbuf.clear();
            grid.neighbors_into(cp, &mut nbuf);
            let mut frame = Vec::new();
            for &np in nbuf.iter() {
                let ni = self.idx(np);
                let neighbor = &mut self.nodes[ni];
                if neighbor.wall || neighbor.closed {
                    continue;
                }
                frame.push(np);
                let alt = current_g + 1;
                if alt < neighbor.g {
                    neighbor.g = alt;
                    neighbor.parent = ci;
                }
            }
            result.explored.push(frame);
        }

        self.nbuf = nbuf;

        if found {
            result.path = self.walk_parents(start_idx, goal_idx);
        }
        result
    }
}
