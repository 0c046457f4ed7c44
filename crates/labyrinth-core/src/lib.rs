//! **labyrinth-core** - the grid world searched by `labyrinth-paths`.
//!
//! This crate provides the foundational types: [`Position`] and
//! [`Direction`] geometry, [`CellKind`] classification, the [`Grid`] map
//! with bounds-safe adjacency queries, text layout parsing, and the
//! validated [`Maze`] wrapper that guarantees a single start and end.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
mod layout;
pub mod maze;

pub use cell::CellKind;
pub use error::GridError;
pub use geom::{Direction, Position};
pub use grid::{Grid, GridIter, MAX_DIMENSION};
pub use maze::Maze;
