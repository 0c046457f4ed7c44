//! The [`CellKind`] type - classification of a single grid cell.

/// What occupies a grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Wall,
    Open,
    Start,
    End,
}

impl CellKind {
    /// Whether a walker may stand on this cell.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        matches!(self, CellKind::Open | CellKind::Start | CellKind::End)
    }

    /// Map a layout character to a cell kind.
    ///
    /// `#` and `█` are walls, space and `.` are open floor, `S` and `E`
    /// mark the start and end cells.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' | '█' => Some(CellKind::Wall),
            ' ' | '.' => Some(CellKind::Open),
            'S' => Some(CellKind::Start),
            'E' => Some(CellKind::End),
            _ => None,
        }
    }

    /// Canonical layout character.
    pub const fn to_char(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Open => '.',
            CellKind::Start => 'S',
            CellKind::End => 'E',
        }
    }
}
