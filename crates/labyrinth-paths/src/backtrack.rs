use labyrinth_core::{Direction, Grid, Position};

use crate::cost::CostModel;
use crate::search::{Path, SearchSpace, Tracker};
use crate::solver::Solver;

/// One level of the explicit recursion: a position on the working path and
/// the index of the next direction to try from it.
struct Frame {
    idx: usize,
    next_dir: usize,
}

impl<C: CostModel> Solver<C> {
    /// Depth-first search that keeps a single working path and unwinds it.
    ///
    /// Each position entered is appended to the path; once every direction
    /// from it has failed it is popped again and reported as backtracked.
    /// Entered positions stay explored after being unwound, so a dead end is
    /// never re-entered from another branch. The recursion runs on a heap
    /// allocated frame stack, bounded by the grid area.
    pub(crate) fn backtrack_path(
        &self,
        grid: &Grid,
        start: Position,
        end: Position,
        tracker: &mut Tracker<'_>,
    ) -> Option<Path> {
        let start_idx = grid.index(start)?;
        let mut explored = SearchSpace::new(grid);
        let mut path: Path = Vec::new();
        let mut frames: Vec<Frame> = Vec::new();

        explored.visited[start_idx] = true;
        path.push(start);
        tracker.visit(start);
        if start == end {
            return Some(path);
        }
        frames.push(Frame {
            idx: start_idx,
            next_dir: 0,
        });

        while let Some(frame) = frames.last_mut() {
            let ci = frame.idx;
            let Some(&dir) = Direction::ALL.get(frame.next_dir) else {
                // All directions failed: unwind this position.
                frames.pop();
                path.pop();
                tracker.backtrack(grid.position(ci));
                continue;
            };
            frame.next_dir += 1;

            let Some(np) = grid.position(ci).checked_step(dir) else {
                continue;
            };
            if !grid.is_traversable(np) {
                continue;
            }
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if explored.visited[ni] {
                continue;
            }

            explored.visited[ni] = true;
            path.push(np);
            tracker.visit(np);
            if np == end {
                return Some(path);
            }
            frames.push(Frame {
                idx: ni,
                next_dir: 0,
            });
        }
        None
    }
}
