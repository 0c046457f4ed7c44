use labyrinth_core::Position;

/// Manhattan (L1) distance between two positions, saturating at `u32::MAX`.
#[inline]
pub fn manhattan(a: Position, b: Position) -> u32 {
    a.row.abs_diff(b.row).saturating_add(a.col.abs_diff(b.col))
}
