use labyrinth_core::Position;

use crate::distance::manhattan;

/// Movement cost and goal estimate used by informed search.
///
/// DFS, BFS and backtracking ignore the cost model; A* orders its frontier
/// by it. Implementations other than [`UniformCost`] are how weighted
/// terrain plugs in.
pub trait CostModel {
    /// Cost of moving from `from` to the orthogonally adjacent `to`.
    /// Must be > 0.
    fn step_cost(&self, from: Position, to: Position) -> u32;

    /// Estimated cost from `pos` to `goal`.
    ///
    /// Must never overestimate the true cost (admissible) for A* to return
    /// shortest paths. If it also satisfies
    /// `heuristic(a, goal) <= step_cost(a, b) + heuristic(b, goal)` for
    /// adjacent `a`, `b` (consistent), A* expands each position at most
    /// once; otherwise positions reached again by a cheaper route are
    /// expanded again. An overestimating heuristic can make A* return a
    /// route that is not the cheapest.
    fn heuristic(&self, pos: Position, goal: Position) -> u32;
}

/// Every orthogonal move costs 1; the heuristic is Manhattan distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformCost;

impl CostModel for UniformCost {
    #[inline]
    fn step_cost(&self, _from: Position, _to: Position) -> u32 {
        1
    }

    #[inline]
    fn heuristic(&self, pos: Position, goal: Position) -> u32 {
        manhattan(pos, goal)
    }
}

impl<C: CostModel + ?Sized> CostModel for &C {
    #[inline]
    fn step_cost(&self, from: Position, to: Position) -> u32 {
        (**self).step_cost(from, to)
    }

    #[inline]
    fn heuristic(&self, pos: Position, goal: Position) -> u32 {
        (**self).heuristic(pos, goal)
    }
}

/// Total step cost along `path`. Zero for paths of fewer than two cells.
pub fn path_cost<C: CostModel + ?Sized>(model: &C, path: &[Position]) -> u64 {
    path.windows(2)
        .map(|w| u64::from(model.step_cost(w[0], w[1])))
        .sum()
}
