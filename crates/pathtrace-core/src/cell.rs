//! Cell classification for grid cells.

use crate::geom::Point;

/// The classification a grid cell currently holds.
///
/// Classifications are mutually exclusive: a cell is exactly one of these
/// at any time. Searches only ever read [`Obstacle`](CellType::Obstacle);
/// the remaining variants exist for the editing/playback layer, which
/// retypes cells as the user draws and as results are replayed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    /// Open, traversable cell.
    #[default]
    Empty,
    /// The cell a search departs from.
    Start,
    /// The cell a search is aiming for.
    End,
    /// Blocks traversal.
    Obstacle,
    /// Part of a returned path (playback only).
    PathCell,
    /// Settled during a replayed search (playback only).
    Explored,
}

impl CellType {
    /// Whether a search may pass through a cell of this type.
    #[inline]
    pub const fn traversable(self) -> bool {
        !matches!(self, CellType::Obstacle)
    }
}

/// A grid coordinate together with its current classification.
///
/// Identity is the coordinate; the classification is what the owning
/// caller mutates over an editing session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub kind: CellType,
}

impl Cell {
    /// Create a new cell.
    pub const fn new(pos: Point, kind: CellType) -> Self {
        Self { pos, kind }
    }
}
