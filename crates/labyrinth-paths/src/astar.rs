use std::cmp::Ordering;
use std::collections::BinaryHeap;

use labyrinth_core::{Grid, Position};

use crate::cost::CostModel;
use crate::search::{NO_PARENT, Path, SearchSpace, Tracker, trace_path};
use crate::solver::Solver;

/// Sentinel cost for positions not yet reached.
const UNREACHED: u64 = u64::MAX;

// ---------------------------------------------------------------------------
// Internal node table and frontier entries
// ---------------------------------------------------------------------------

/// Best-known route to one position during a single A* run.
#[derive(Clone, Copy)]
struct SearchNode {
    g_cost: u64,
    h_cost: u64,
    parent: usize,
}

impl SearchNode {
    #[inline]
    fn f_cost(&self) -> u64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g_cost: UNREACHED,
            h_cost: 0,
            parent: NO_PARENT,
        }
    }
}

/// Frontier entry, ordered by `f` then by insertion sequence.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    f: u64,
    seq: u64,
    idx: usize,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the entry pushed earliest.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: CostModel> Solver<C> {
    /// A* search ordered by `g + h` under the solver's cost model.
    ///
    /// A position is pushed again only when a strictly cheaper route to it
    /// is found; stale heap entries for already-expanded positions are
    /// skipped on pop. A cheaper route to an expanded position reopens it,
    /// so an admissible heuristic is enough for the returned path to be
    /// cheapest. With a consistent heuristic nothing is ever reopened and
    /// each position is expanded at most once.
    pub(crate) fn astar_path(
        &self,
        grid: &Grid,
        start: Position,
        end: Position,
        tracker: &mut Tracker<'_>,
    ) -> Option<Path> {
        let start_idx = grid.index(start)?;
        let mut closed = SearchSpace::new(grid);
        let mut nodes = vec![SearchNode::default(); grid.len()];
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u64 = 0;

        nodes[start_idx] = SearchNode {
            g_cost: 0,
            h_cost: u64::from(self.cost.heuristic(start, end)),
            parent: NO_PARENT,
        };
        open.push(NodeRef {
            f: nodes[start_idx].f_cost(),
            seq,
            idx: start_idx,
        });

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if closed.visited[ci] {
                continue;
            }
            closed.visited[ci] = true;

            let cp = grid.position(ci);
            tracker.visit(cp);
            if cp == end {
                return Some(trace_path(grid, ci, |i| nodes[i].parent));
            }

            let current_g = nodes[ci].g_cost;
            for np in grid.neighbors(cp) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                let tentative_g = current_g.saturating_add(u64::from(self.cost.step_cost(cp, np)));
                if tentative_g >= nodes[ni].g_cost {
                    continue;
                }

                if closed.visited[ni] {
                    log::trace!("reopening {np} at g={tentative_g}");
                    closed.visited[ni] = false;
                }
                let n = &mut nodes[ni];
                n.g_cost = tentative_g;
                n.h_cost = u64::from(self.cost.heuristic(np, end));
                n.parent = ci;

                seq += 1;
                open.push(NodeRef {
                    f: n.f_cost(),
                    seq,
                    idx: ni,
                });
            }
        }
        None
    }
}
