use labyrinth_core::{Grid, Position};

use crate::observer::SearchObserver;
use crate::stats::SolverStats;

/// An ordered route from start to end, both included.
pub type Path = Vec<Position>;

/// Sentinel parent index for the root of a search tree.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-call scratch
// ---------------------------------------------------------------------------

/// Visited flags and predecessor links for one search over one grid.
///
/// Allocated fresh by every solve and dropped when it returns, so no call
/// can observe another's state.
pub(crate) struct SearchSpace {
    pub(crate) visited: Vec<bool>,
    pub(crate) parent: Vec<usize>,
}

impl SearchSpace {
    pub(crate) fn new(grid: &Grid) -> Self {
        Self {
            visited: vec![false; grid.len()],
            parent: vec![NO_PARENT; grid.len()],
        }
    }

    /// Follow predecessor links back from `goal` to the root.
    pub(crate) fn path_to(&self, grid: &Grid, goal: usize) -> Path {
        trace_path(grid, goal, |i| self.parent[i])
    }
}

/// Rebuild a start-to-goal path from a predecessor function.
pub(crate) fn trace_path(grid: &Grid, goal: usize, parent: impl Fn(usize) -> usize) -> Path {
    let mut path = Vec::new();
    let mut ci = goal;
    while ci != NO_PARENT {
        path.push(grid.position(ci));
        ci = parent(ci);
    }
    path.reverse();
    path
}

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

/// Counts exploration into [`SolverStats`] and forwards it to the observer.
pub(crate) struct Tracker<'o> {
    pub(crate) stats: SolverStats,
    observer: &'o mut dyn SearchObserver,
}

impl<'o> Tracker<'o> {
    pub(crate) fn new(observer: &'o mut dyn SearchObserver) -> Self {
        Self {
            stats: SolverStats::default(),
            observer,
        }
    }

    #[inline]
    pub(crate) fn visit(&mut self, p: Position) {
        self.stats.nodes_explored += 1;
        self.observer.on_visit(p);
    }

    #[inline]
    pub(crate) fn backtrack(&mut self, p: Position) {
        self.stats.backtracked += 1;
        self.observer.on_backtrack(p);
    }
}
