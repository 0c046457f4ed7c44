//! Errors raised while building or validating a grid.

use thiserror::Error;

use crate::geom::Position;

/// Errors that can occur when parsing a layout or validating a [`Maze`].
///
/// [`Maze`]: crate::Maze
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The layout text contained no cells.
    #[error("grid layout is empty")]
    Empty,
    /// The requested dimensions cannot be addressed with `i32` coordinates
    /// or their cell count overflows `usize`.
    #[error("grid of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
    /// A layout line does not have the same width as the first one.
    #[error("grid layout line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character with no cell meaning was found.
    #[error("grid layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Position },
    /// No start cell.
    #[error("grid has no start cell")]
    MissingStart,
    /// No end cell.
    #[error("grid has no end cell")]
    MissingEnd,
    /// More than one start cell.
    #[error("grid has {0} start cells, expected exactly one")]
    MultipleStarts(usize),
    /// More than one end cell.
    #[error("grid has {0} end cells, expected exactly one")]
    MultipleEnds(usize),
}
