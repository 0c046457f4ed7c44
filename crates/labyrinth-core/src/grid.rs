//! The [`Grid`] type - a 2D map of [`CellKind`]s.
//!
//! A `Grid` owns its cells outright (no shared buffer, no interior
//! mutability), so a `&Grid` can be handed to any number of readers on any
//! number of threads while a search is running.

use std::collections::VecDeque;

use crate::cell::CellKind;
use crate::error::GridError;
use crate::geom::{Direction, Position};

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular grid of cells, addressed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellKind>,
    width: usize,
    height: usize,
    start: Option<Position>,
    end: Option<Position>,
}

/// Largest width or height a grid may have, so that every cell has an
/// `i32` coordinate.
pub const MAX_DIMENSION: usize = i32::MAX as usize;

impl Grid {
    /// Create a new grid of the given dimensions, filled with walls.
    ///
    /// Each dimension is clamped to [`MAX_DIMENSION`]. Allocation of an
    /// impossibly large cell buffer panics like any `Vec`; use
    /// [`try_new`](Self::try_new) to reject such sizes up front.
    pub fn new(width: usize, height: usize) -> Self {
        let (width, height) = (width.min(MAX_DIMENSION), height.min(MAX_DIMENSION));
        Self::filled(width, height, width.saturating_mul(height))
    }

    /// Create a new wall-filled grid, or fail if the dimensions exceed
    /// [`MAX_DIMENSION`] or the cell count overflows `usize`.
    pub fn try_new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = width
            .checked_mul(height)
            .filter(|_| width <= MAX_DIMENSION && height <= MAX_DIMENSION)
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Self::filled(width, height, len))
    }

    fn filled(width: usize, height: usize, len: usize) -> Self {
        Self {
            cells: vec![CellKind::Wall; len],
            width,
            height,
            start: None,
            end: None,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.index(p).is_some()
    }

    /// The most recently recorded start cell.
    #[inline]
    pub fn start(&self) -> Option<Position> {
        self.start
    }

    /// The most recently recorded end cell.
    #[inline]
    pub fn end(&self) -> Option<Position> {
        self.end
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Position) -> Option<usize> {
        if p.row < 0 || p.col < 0 {
            return None;
        }
        let (row, col) = (p.row as usize, p.col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Inverse of [`index`](Self::index). `idx` must be below [`len`](Self::len).
    #[inline]
    pub fn position(&self, idx: usize) -> Position {
        // Both quotient and remainder are below MAX_DIMENSION for valid `idx`.
        Position::new((idx / self.width) as i32, (idx % self.width) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Position) -> Option<CellKind> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`. No-op if `p` is outside the grid.
    ///
    /// Setting a `Start` or `End` cell records its position. Overwriting the
    /// recorded start or end with another kind forgets the record.
    pub fn set_cell(&mut self, p: Position, kind: CellKind) {
        let Some(i) = self.index(p) else {
            return;
        };
        self.cells[i] = kind;

        match kind {
            CellKind::Start => self.start = Some(p),
            CellKind::End => self.end = Some(p),
            _ => {}
        }
        if kind != CellKind::Start && self.start == Some(p) {
            self.start = None;
        }
        if kind != CellKind::End && self.end == Some(p) {
            self.end = None;
        }
    }

    /// Fill every cell with `kind`, resetting any recorded start or end.
    pub fn fill(&mut self, kind: CellKind) {
        self.cells.fill(kind);
        self.start = None;
        self.end = None;
    }

    /// Whether `p` is in bounds and its cell can be walked on.
    #[inline]
    pub fn is_traversable(&self, p: Position) -> bool {
        self.cell(p).is_some_and(CellKind::is_traversable)
    }

    /// Traversable orthogonal neighbours of `p`, in [`Direction::ALL`] order.
    pub fn neighbors(&self, p: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| p.checked_step(d))
            .filter(move |&n| self.is_traversable(n))
    }

    /// Count the cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// All traversable cells 4-connected to `p` (including `p` itself),
    /// in breadth-first discovery order. Empty if `p` is not traversable.
    pub fn open_region(&self, p: Position) -> Vec<Position> {
        let mut region = Vec::new();
        let Some(si) = self.index(p) else {
            return region;
        };
        if !self.cells[si].is_traversable() {
            return region;
        }

        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        seen[si] = true;
        queue.push_back(p);

        while let Some(cp) = queue.pop_front() {
            region.push(cp);
            for np in self.neighbors(cp) {
                if let Some(ni) = self.index(np) {
                    if !seen[ni] {
                        seen[ni] = true;
                        queue.push_back(np);
                    }
                }
            }
        }
        region
    }

    /// Row-major iterator over `(Position, CellKind)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter { grid: self, idx: 0 }
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Position, CellKind)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    idx: usize,
}

impl Iterator for GridIter<'_> {
    type Item = (Position, CellKind);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let kind = *self.grid.cells.get(self.idx)?;
        let p = self.grid.position(self.idx);
        self.idx += 1;
        Some((p, kind))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.grid.cells.len() - self.idx;
        (n, Some(n))
    }
}

impl ExactSizeIterator for GridIter<'_> {}
