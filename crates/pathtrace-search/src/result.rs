use pathtrace_core::Point;

/// The outcome of one strategy invocation.
///
/// `path` runs from start to end inclusive; it is empty when no path
/// exists (a normal outcome, not an error). `explored` is the ordered
/// exploration record: frame `i` holds the cells settled or relaxed
/// during outer iteration `i`, for the caller to replay as animation at
/// its own cadence. The frames are bookkeeping for playback only and
/// carry no correctness weight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub path: Vec<Point>,
    pub explored: Vec<Vec<Point>>,
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Total number of cells across all exploration frames.
    pub fn explored_count(&self) -> usize {
        self.explored.iter().map(Vec::len).sum()
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn result_round_trip() {
        let res = SearchResult {
            path: vec![Point::new(0, 0), Point::new(0, 1)],
            explored: vec![vec![Point::new(0, 0)], vec![Point::new(0, 1)]],
        };
        let json = serde_json::to_string(&res).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, res);
    }
}
