use std::time::Instant;

use labyrinth_core::{Grid, Maze, Position};

use crate::cost::{CostModel, UniformCost};
use crate::observer::SearchObserver;
use crate::search::{Path, Tracker};
use crate::stats::SolverStats;
use crate::strategy::Strategy;

/// Entry point for running a [`Strategy`] against a grid.
///
/// A `Solver` holds nothing but its cost model. Every call allocates its own
/// frontier, visited set and predecessor table and drops them on return, so
/// a solver can be shared freely and repeated calls behave identically.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver<C = UniformCost> {
    pub(crate) cost: C,
}

/// The outcome of one strategy in [`Solver::compare`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub strategy: Strategy,
    pub path: Option<Path>,
    pub stats: SolverStats,
}

impl Solver<UniformCost> {
    /// A solver with unit step costs and the Manhattan heuristic.
    pub fn new() -> Self {
        Self { cost: UniformCost }
    }
}

impl<C: CostModel> Solver<C> {
    /// A solver that prices A* moves with `cost`.
    pub fn with_cost_model(cost: C) -> Self {
        Self { cost }
    }

    /// The cost model used by A*.
    #[inline]
    pub fn cost_model(&self) -> &C {
        &self.cost
    }

    /// Find a route from `start` to `end` with the given strategy.
    ///
    /// Returns `None` as the path when no route exists or when either
    /// endpoint is out of bounds or not traversable; in the latter case no
    /// node is explored. The grid is only read.
    pub fn solve(
        &self,
        strategy: Strategy,
        grid: &Grid,
        start: Position,
        end: Position,
    ) -> (Option<Path>, SolverStats) {
        self.solve_observed(strategy, grid, start, end, &mut ())
    }

    /// Like [`solve`](Self::solve), reporting every explored and unwound
    /// position to `observer` as it happens.
    pub fn solve_observed(
        &self,
        strategy: Strategy,
        grid: &Grid,
        start: Position,
        end: Position,
        observer: &mut dyn SearchObserver,
    ) -> (Option<Path>, SolverStats) {
        let started = Instant::now();
        let mut tracker = Tracker::new(observer);

        let path = if !grid.is_traversable(start) || !grid.is_traversable(end) {
            log::trace!("{strategy}: endpoint {start} or {end} is not traversable");
            None
        } else {
            match strategy {
                Strategy::DepthFirst => self.dfs_path(grid, start, end, &mut tracker),
                Strategy::BreadthFirst => self.bfs_path(grid, start, end, &mut tracker),
                Strategy::AStar => self.astar_path(grid, start, end, &mut tracker),
                Strategy::Backtracking => self.backtrack_path(grid, start, end, &mut tracker),
            }
        };

        let mut stats = tracker.stats;
        stats.path_length = path.as_ref().map_or(0, Vec::len);
        stats.elapsed = started.elapsed();

        log::debug!(
            "{strategy}: {} from {start} to {end}, explored {} nodes, path length {}, took {:?}",
            if path.is_some() { "route found" } else { "no route" },
            stats.nodes_explored,
            stats.path_length,
            stats.elapsed,
        );
        (path, stats)
    }

    /// Solve between a validated maze's start and end cells.
    pub fn solve_maze(&self, strategy: Strategy, maze: &Maze) -> (Option<Path>, SolverStats) {
        self.solve(strategy, maze.grid(), maze.start(), maze.end())
    }

    /// Run every strategy in [`Strategy::ALL`] order on the same maze.
    pub fn compare(&self, maze: &Maze) -> Vec<Comparison> {
        Strategy::ALL
            .into_iter()
            .map(|strategy| {
                let (path, stats) = self.solve_maze(strategy, maze);
                Comparison {
                    strategy,
                    path,
                    stats,
                }
            })
            .collect()
    }

    /// The first step of a cheapest route from `from` to `to`.
    ///
    /// `None` when already at the target or when it cannot be reached.
    pub fn next_move(&self, grid: &Grid, from: Position, to: Position) -> Option<Position> {
        let (path, _) = self.solve(Strategy::AStar, grid, from, to);
        path?.get(1).copied()
    }
}

#[cfg(test)]
mod tests {
    use labyrinth_core::{CellKind, Grid, Maze, Position};
    use rand::prelude::*;

    use super::*;
    use crate::manhattan;
    use crate::observer::SearchEvent;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    /// Route is contiguous, walkable, loop-free and joins the endpoints.
    fn assert_valid_route(grid: &Grid, path: &[Position], start: Position, end: Position) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a step", w[0], w[1]);
        }
        for &q in path {
            assert!(grid.is_traversable(q), "{q} is not walkable");
        }
        let mut sorted = path.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), path.len(), "route revisits a cell");
    }

    /// Random grid with roughly `wall_pct` percent walls and the given
    /// endpoints forced open.
    fn random_grid(rng: &mut SmallRng, width: usize, height: usize, wall_pct: u32) -> Grid {
        let mut grid = Grid::new(width, height);
        for row in 0..height as i32 {
            for col in 0..width as i32 {
                if rng.random_range(0..100) >= wall_pct {
                    grid.set_cell(p(row, col), CellKind::Open);
                }
            }
        }
        grid.set_cell(p(0, 0), CellKind::Start);
        grid.set_cell(p(height as i32 - 1, width as i32 - 1), CellKind::End);
        grid
    }

    /// Start and end cells joined only through the gap at the bottom of
    /// column 2.
    const WALL_WITH_GAP: &str = "
S.#..
..#..
..#..
..#..
....E
";

    #[test]
    fn wall_with_gap_shortest_route() {
        let maze = Maze::parse(WALL_WITH_GAP).unwrap();
        let expected = vec![
            p(0, 0),
            p(1, 0),
            p(2, 0),
            p(3, 0),
            p(4, 0),
            p(4, 1),
            p(4, 2),
            p(4, 3),
            p(4, 4),
        ];
        let solver = Solver::new();

        let (bfs, bfs_stats) = solver.solve_maze(Strategy::BreadthFirst, &maze);
        assert_eq!(bfs.as_deref(), Some(&expected[..]));
        assert_eq!(bfs_stats.path_length, 9);
        assert_eq!(bfs_stats.nodes_explored, 14);

        let (astar, astar_stats) = solver.solve_maze(Strategy::AStar, &maze);
        assert_eq!(astar.as_deref(), Some(&expected[..]));
        assert_eq!(astar_stats.nodes_explored, 13);

        for strategy in [Strategy::DepthFirst, Strategy::Backtracking] {
            let (path, stats) = solver.solve_maze(strategy, &maze);
            let path = path.unwrap();
            assert_valid_route(maze.grid(), &path, maze.start(), maze.end());
            assert!(stats.path_length >= 9, "{strategy}");
        }
    }

    #[test]
    fn adjacent_endpoints() {
        let maze = Maze::parse("##\nSE\n##").unwrap();
        let solver = Solver::new();
        for strategy in Strategy::ALL {
            let (path, stats) = solver.solve_maze(strategy, &maze);
            let path = path.unwrap();
            assert_eq!(path, vec![p(1, 0), p(1, 1)], "{strategy}");
            assert_eq!(crate::path_cost(solver.cost_model(), &path), 1);
            assert_eq!(stats.path_edges(), 1);
        }
    }

    #[test]
    fn start_equals_end() {
        let maze = Maze::parse("S.\n.E").unwrap();
        let start = maze.start();
        for strategy in Strategy::ALL {
            let (path, stats) = Solver::new().solve(strategy, maze.grid(), start, start);
            assert_eq!(path, Some(vec![start]), "{strategy}");
            assert_eq!(stats.nodes_explored, 1, "{strategy}");
            assert_eq!(stats.path_length, 1);
            assert_eq!(stats.backtracked, 0);
        }
    }

    #[test]
    fn unreachable_end_explores_start_region() {
        let maze = Maze::parse(
            "
S...#...
.##.#.E.
....#...
",
        )
        .unwrap();
        let region = maze.grid().open_region(maze.start()).len();
        assert_eq!(region, 10);
        for strategy in Strategy::ALL {
            let (path, stats) = Solver::new().solve_maze(strategy, &maze);
            assert!(path.is_none(), "{strategy}");
            assert_eq!(stats.nodes_explored, region, "{strategy}");
            assert_eq!(stats.path_length, 0);
        }
    }

    #[test]
    fn non_traversable_endpoints_explore_nothing() {
        let maze = Maze::parse("S#\n.E").unwrap();
        let grid = maze.grid();
        for strategy in Strategy::ALL {
            for (start, end) in [
                (p(0, 1), maze.end()),
                (maze.start(), p(0, 1)),
                (p(-1, 0), maze.end()),
                (maze.start(), p(7, 7)),
            ] {
                let (path, stats) = Solver::new().solve(strategy, grid, start, end);
                assert!(path.is_none());
                assert_eq!(stats.nodes_explored, 0);
            }
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let grid = random_grid(&mut rng, 24, 16, 28);
        let (start, end) = (p(0, 0), p(15, 23));
        let solver = Solver::new();
        for strategy in Strategy::ALL {
            let first = solver.solve(strategy, &grid, start, end);
            let second = solver.solve(strategy, &grid, start, end);
            assert_eq!(first, second, "{strategy}");
        }
    }

    #[test]
    fn solving_never_mutates_the_grid() {
        let maze = Maze::parse(WALL_WITH_GAP).unwrap();
        let before = maze.clone();
        let _ = Solver::new().compare(&maze);
        assert_eq!(maze, before);
    }

    #[test]
    fn optimal_strategies_agree_on_random_grids() {
        let mut rng = SmallRng::seed_from_u64(42);
        let solver = Solver::new();
        let mut solved = 0;
        for _ in 0..200 {
            let width = rng.random_range(2..20);
            let height = rng.random_range(2..20);
            let grid = random_grid(&mut rng, width, height, 30);
            let start = p(0, 0);
            let end = p(height as i32 - 1, width as i32 - 1);

            let (bfs, bfs_stats) = solver.solve(Strategy::BreadthFirst, &grid, start, end);
            let (astar, astar_stats) = solver.solve(Strategy::AStar, &grid, start, end);
            let (dfs, _) = solver.solve(Strategy::DepthFirst, &grid, start, end);
            let (back, _) = solver.solve(Strategy::Backtracking, &grid, start, end);

            let Some(bfs) = bfs else {
                assert!(astar.is_none() && dfs.is_none() && back.is_none());
                let region = grid.open_region(start).len();
                assert_eq!(bfs_stats.nodes_explored, region);
                assert_eq!(astar_stats.nodes_explored, region);
                continue;
            };
            solved += 1;
            let astar = astar.unwrap();
            let dfs = dfs.unwrap();
            let back = back.unwrap();
            for path in [&bfs, &astar, &dfs, &back] {
                assert_valid_route(&grid, path, start, end);
            }
            assert_eq!(astar.len(), bfs.len());
            assert!(dfs.len() >= bfs.len());
            assert!(back.len() >= bfs.len());
            assert!(astar_stats.nodes_explored <= bfs_stats.nodes_explored);
        }
        assert!(solved > 0);
    }

    #[test]
    fn manhattan_never_overestimates() {
        let mut rng = SmallRng::seed_from_u64(7);
        let solver = Solver::new();
        for _ in 0..20 {
            let grid = random_grid(&mut rng, 10, 10, 25);
            let goal = p(9, 9);
            for (pos, kind) in grid.iter() {
                if !kind.is_traversable() {
                    continue;
                }
                let (path, stats) = solver.solve(Strategy::BreadthFirst, &grid, pos, goal);
                if path.is_some() {
                    assert!(manhattan(pos, goal) as usize <= stats.path_edges());
                }
            }
        }
    }

    #[test]
    fn observer_sees_every_explored_node() {
        let maze = Maze::parse(WALL_WITH_GAP).unwrap();
        for strategy in Strategy::ALL {
            let mut events: Vec<SearchEvent> = Vec::new();
            let (_, stats) = Solver::new().solve_observed(
                strategy,
                maze.grid(),
                maze.start(),
                maze.end(),
                &mut events,
            );
            let visits = events
                .iter()
                .filter(|e| matches!(e, SearchEvent::Visit(_)))
                .count();
            assert_eq!(visits, stats.nodes_explored, "{strategy}");
            assert_eq!(events.len() - visits, stats.backtracked, "{strategy}");
            assert_eq!(events.first(), Some(&SearchEvent::Visit(maze.start())));
        }
    }

    #[test]
    fn compare_runs_all_strategies_in_order() {
        let maze = Maze::parse(WALL_WITH_GAP).unwrap();
        let results = Solver::new().compare(&maze);
        let order: Vec<Strategy> = results.iter().map(|c| c.strategy).collect();
        assert_eq!(order, Strategy::ALL.to_vec());
        assert!(results.iter().all(|c| c.path.is_some()));
    }

    #[test]
    fn next_move_steps_along_route() {
        let maze = Maze::parse(WALL_WITH_GAP).unwrap();
        let solver = Solver::new();
        let grid = maze.grid();
        assert_eq!(solver.next_move(grid, maze.start(), maze.end()), Some(p(1, 0)));
        assert_eq!(solver.next_move(grid, p(4, 1), maze.end()), Some(p(4, 2)));
        assert_eq!(solver.next_move(grid, maze.end(), maze.end()), None);
        assert_eq!(solver.next_move(grid, maze.start(), p(0, 2)), None);
    }

    #[test]
    fn concurrent_solves_share_one_grid() {
        let maze = Maze::parse(WALL_WITH_GAP).unwrap();
        let solver = Solver::new();
        let expected = solver.compare(&maze);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| solver.compare(&maze)))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }
}
