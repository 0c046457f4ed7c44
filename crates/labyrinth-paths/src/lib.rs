//! Route finding on a [`labyrinth_core::Grid`].
//!
//! This crate provides four interchangeable search strategies, all run
//! through [`Solver::solve`] with a [`Strategy`] tag:
//!
//! | Strategy | Frontier | Shortest route |
//! |---|---|---|
//! | [`Strategy::DepthFirst`] | stack | no |
//! | [`Strategy::BreadthFirst`] | queue | yes (fewest moves) |
//! | [`Strategy::AStar`] | priority queue on `g + h` | yes (cheapest under the [`CostModel`]) |
//! | [`Strategy::Backtracking`] | working path with unwinding | no |
//!
//! Every solve returns the route (or `None`) together with
//! [`SolverStats`] so the strategies can be compared on the same grid.
//! Nothing is cached between calls: each solve allocates its own scratch
//! space and the grid is only ever read.
//!
//! ```
//! use labyrinth_core::Maze;
//! use labyrinth_paths::{Solver, Strategy};
//!
//! let maze = Maze::parse("S.#\n..E").unwrap();
//! let (path, stats) = Solver::new().solve_maze(Strategy::BreadthFirst, &maze);
//! assert_eq!(path.map(|p| p.len()), Some(4));
//! assert_eq!(stats.path_length, 4);
//! ```

mod astar;
mod backtrack;
mod bfs;
mod cost;
mod dfs;
mod distance;
mod observer;
mod search;
mod solver;
mod stats;
mod strategy;

pub use cost::{CostModel, UniformCost, path_cost};
pub use distance::manhattan;
pub use observer::{SearchEvent, SearchObserver};
pub use search::Path;
pub use solver::{Comparison, Solver};
pub use stats::SolverStats;
pub use strategy::{ParseStrategyError, Strategy};
