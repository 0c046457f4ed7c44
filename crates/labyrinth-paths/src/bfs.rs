use std::collections::VecDeque;

use labyrinth_core::{Grid, Position};

use crate::cost::CostModel;
use crate::search::{Path, SearchSpace, Tracker};
use crate::solver::Solver;

impl<C: CostModel> Solver<C> {
    /// Breadth-first search with a FIFO queue.
    ///
    /// A position is marked when it is enqueued, so it enters the queue at
    /// most once and its predecessor is the first position to discover it.
    /// The returned path has the fewest possible moves.
    pub(crate) fn bfs_path(
        &self,
        grid: &Grid,
        start: Position,
        end: Position,
        tracker: &mut Tracker<'_>,
    ) -> Option<Path> {
        let start_idx = grid.index(start)?;
        let mut space = SearchSpace::new(grid);
        let mut queue: VecDeque<usize> = VecDeque::new();

        space.visited[start_idx] = true;
        queue.push_back(start_idx);

        while let Some(ci) = queue.pop_front() {
            let cp = grid.position(ci);
            tracker.visit(cp);
            if cp == end {
                return Some(space.path_to(grid, ci));
            }

            for np in grid.neighbors(cp) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if space.visited[ni] {
                    continue;
                }
                space.visited[ni] = true;
                space.parent[ni] = ci;
                queue.push_back(ni);
            }
        }
        None
    }
}
