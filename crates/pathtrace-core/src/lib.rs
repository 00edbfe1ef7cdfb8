//! **pathtrace-core** — shared types for the pathtrace grid engine.
//!
//! This crate provides the data model the rest of the workspace operates
//! on: the [`Point`] coordinate, the [`CellType`] classification, the
//! caller-owned [`Grid`], and the shared neighbor/distance primitives.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellType};
pub use geom::{Point, manhattan};
pub use grid::{DIRS, Grid};
