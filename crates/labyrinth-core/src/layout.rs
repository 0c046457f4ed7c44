//! Building grids from text layouts.
//!
//! A layout is a block of lines of equal width, one character per cell:
//!
//! ```text
//! #######
//! #S  #E#
//! # # # #
//! #   . #
//! #######
//! ```
//!
//! See [`CellKind::from_char`] for the accepted characters.

use crate::cell::CellKind;
use crate::error::GridError;
use crate::geom::Position;
use crate::grid::Grid;

impl Grid {
    /// Parse a text layout into a grid.
    ///
    /// Blank lines before and after the block are ignored; leading spaces on
    /// a line are significant (they are open cells). Every line must have
    /// the same number of characters.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let all: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let first = all.iter().position(|l| !l.is_empty()).unwrap_or(all.len());
        let last = all.iter().rposition(|l| !l.is_empty()).map_or(first, |i| i + 1);
        let lines = &all[first..last];

        let width = lines.first().map_or(0, |l| l.chars().count());
        if width == 0 {
            return Err(GridError::Empty);
        }

        // Every position below fits in i32 once the dimensions are accepted.
        let mut grid = Grid::try_new(width, lines.len())?;
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentWidth {
                    line: row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Position::new(row as i32, col as i32);
                let kind = CellKind::from_char(ch).ok_or(GridError::InvalidChar { ch, pos })?;
                grid.set_cell(pos, kind);
            }
        }
        Ok(grid)
    }

    /// Render the grid back to layout text using canonical characters.
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.height());
        for (p, kind) in self.iter() {
            if p.col == 0 && p.row > 0 {
                out.push('\n');
            }
            out.push(kind.to_char());
        }
        out
    }
}
