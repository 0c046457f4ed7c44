//! The [`Maze`] type - a grid checked to have exactly one start and one end.

use crate::cell::CellKind;
use crate::error::GridError;
use crate::geom::Position;
use crate::grid::Grid;

/// A read-only [`Grid`] with a single start cell and a single end cell.
///
/// Generators populate a `Grid` freely; wrapping it in a `Maze` is the point
/// where a malformed layout is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Position,
    end: Position,
}

impl Maze {
    /// Validate `grid` and take ownership of it.
    pub fn new(grid: Grid) -> Result<Self, GridError> {
        let (start, end) = Self::validate(&grid).inspect_err(|e| {
            log::debug!(
                "rejecting {}x{} grid: {e}",
                grid.width(),
                grid.height()
            );
        })?;
        Ok(Self { grid, start, end })
    }

    /// Parse a text layout and validate it in one go.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        Self::new(Grid::parse(s)?)
    }

    fn validate(grid: &Grid) -> Result<(Position, Position), GridError> {
        match grid.count(CellKind::Start) {
            0 => return Err(GridError::MissingStart),
            1 => {}
            n => return Err(GridError::MultipleStarts(n)),
        }
        match grid.count(CellKind::End) {
            0 => return Err(GridError::MissingEnd),
            1 => {}
            n => return Err(GridError::MultipleEnds(n)),
        }
        // With exactly one cell of each kind, the recorded positions are the
        // cells themselves; fall back to a scan if the record was lost.
        let find = |kind: CellKind| grid.iter().find(|&(_, k)| k == kind).map(|(p, _)| p);
        let start = grid
            .start()
            .filter(|&p| grid.cell(p) == Some(CellKind::Start))
            .or_else(|| find(CellKind::Start))
            .ok_or(GridError::MissingStart)?;
        let end = grid
            .end()
            .filter(|&p| grid.cell(p) == Some(CellKind::End))
            .or_else(|| find(CellKind::End))
            .ok_or(GridError::MissingEnd)?;
        Ok((start, end))
    }

    /// The underlying grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// The end cell.
    #[inline]
    pub fn end(&self) -> Position {
        self.end
    }

    /// Give the grid back, e.g. to edit it and validate again.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl TryFrom<Grid> for Maze {
    type Error = GridError;

    fn try_from(grid: Grid) -> Result<Self, Self::Error> {
        Self::new(grid)
    }
}
