//! Geometry primitives: [`Position`] and [`Direction`].
//!
//! Coordinates are `(row, col)`: rows grow downwards, columns grow to the
//! right. Both are signed so that neighbor steps may leave a grid
//! and simply be rejected by bounds checks.

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell coordinate on a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The adjacent position one step in `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let (drow, dcol) = dir.delta();
        self.shift(drow, dcol)
    }

    /// Like [`step`](Self::step), but `None` when the step would leave the
    /// `i32` coordinate range.
    #[inline]
    pub const fn checked_step(self, dir: Direction) -> Option<Self> {
        let (drow, dcol) = dir.delta();
        match (self.row.checked_add(drow), self.col.checked_add(dcol)) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }

    /// The four orthogonal neighbours in [`Direction::ALL`] order
    /// (up, down, left, right). No bounds checking.
    #[inline]
    pub fn neighbors_4(self) -> [Position; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    /// Row-major ordering.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Position> for (i32, i32) {
    #[inline]
    fn from(p: Position) -> Self {
        (p.row, p.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// An orthogonal movement direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in the fixed order used for neighbor enumeration.
    ///
    /// Search strategies break ties by this order, so changing it changes
    /// which of several equal-length routes they return.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(drow, dcol)` offset of a single step.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction of a single orthogonal step from `from` to `to`, if any.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        Self::ALL.into_iter().find(|&d| from.step(d) == to)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn position_round_trip() {
        let p = Position::new(-3, 9);
        let json = serde_json::to_string(&p).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
