//! Grid search strategies with frame-by-frame exploration records.
//!
//! Four strategies over a read-only [`Grid`](pathtrace_core::Grid), all
//! sharing one contract — `search(grid, start, end)` returns the path
//! (start to end inclusive, empty when no path exists) together with the
//! ordered exploration frames an animation layer replays afterwards:
//!
//! - **BFS** ([`Searcher::bfs`]) — shortest path by hop count
//! - **DFS** ([`Searcher::dfs`]) — some valid path, no length guarantee
//! - **Dijkstra** ([`Searcher::dijkstra`]) — shortest path, linear-scan
//!   settle order
//! - **A\*** ([`Searcher::astar`]) — shortest path, Manhattan heuristic
//!
//! All queries run through a [`Searcher`], which owns and reuses the
//! per-cell node caches. The free functions below are one-shot
//! conveniences for callers that do not keep a `Searcher` around.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod flood;
mod result;
mod searcher;

pub use result::SearchResult;
pub use searcher::{Searcher, UNREACHABLE};

use pathtrace_core::{Grid, Point};

/// One-shot breadth-first search. See [`Searcher::bfs`].
pub fn bfs(grid: &Grid, start: Point, end: Point) -> SearchResult {
    Searcher::new().bfs(grid, start, end)
}

/// One-shot depth-first search. See [`Searcher::dfs`].
pub fn dfs(grid: &Grid, start: Point, end: Point) -> SearchResult {
    Searcher::new().dfs(grid, start, end)
}

/// One-shot Dijkstra search. See [`Searcher::dijkstra`].
pub fn dijkstra(grid: &Grid, start: Point, end: Point) -> SearchResult {
    Searcher::new().dijkstra(grid, start, end)
}

/// One-shot A* search. See [`Searcher::astar`].
pub fn astar(grid: &Grid, start: Point, end: Point) -> SearchResult {
    Searcher::new().astar(grid, start, end)
}

/// One-shot reachability flood fill. See [`Searcher::flood`].
pub fn flood(grid: &Grid, from: Point) -> Vec<Point> {
    Searcher::new().flood(grid, from)
}
