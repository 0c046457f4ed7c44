use labyrinth_core::{Grid, Position};

use crate::cost::CostModel;
use crate::search::{NO_PARENT, Path, SearchSpace, Tracker};
use crate::solver::Solver;

impl<C: CostModel> Solver<C> {
    /// Iterative depth-first search with a LIFO stack.
    ///
    /// Stack entries carry the position that pushed them, so the
    /// predecessor is recorded when an entry is popped and visited, not
    /// when it is pushed. Endpoints must already be known traversable.
    pub(crate) fn dfs_path(
        &self,
        grid: &Grid,
        start: Position,
        end: Position,
        tracker: &mut Tracker<'_>,
    ) -> Option<Path> {
        let start_idx = grid.index(start)?;
        let mut space = SearchSpace::new(grid);
        let mut stack: Vec<(usize, usize)> = vec![(start_idx, NO_PARENT)];

        while let Some((ci, parent)) = stack.pop() {
            if space.visited[ci] {
                continue;
            }
            space.visited[ci] = true;
            space.parent[ci] = parent;

            let cp = grid.position(ci);
            tracker.visit(cp);
            if cp == end {
                return Some(space.path_to(grid, ci));
            }

            for np in grid.neighbors(cp) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if !space.visited[ni] {
                    stack.push((ni, ci));
                }
            }
        }
        None
    }
}
