use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which search algorithm a [`Solver`](crate::Solver) runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Iterative depth-first search. Finds a route, not necessarily the
    /// shortest.
    DepthFirst,
    /// Breadth-first search. Shortest route in number of moves.
    BreadthFirst,
    /// A* ordered by the solver's cost model. Shortest route, usually with
    /// less exploration than BFS.
    #[default]
    AStar,
    /// Depth-first search that unwinds dead ends from its working path.
    Backtracking,
}

impl Strategy {
    /// Every strategy, in comparison order.
    pub const ALL: [Strategy; 4] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::AStar,
        Strategy::Backtracking,
    ];

    /// Short lowercase name, accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::AStar => "astar",
            Strategy::Backtracking => "backtracking",
        }
    }

    /// Whether the strategy always returns a shortest route.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Strategy::BreadthFirst | Strategy::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy \u{201c}{0}\u{201d} (expected dfs, bfs, astar or backtracking)")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "depth_first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" | "breadth_first" => Ok(Strategy::BreadthFirst),
            "astar" | "a*" | "a-star" => Ok(Strategy::AStar),
            "backtracking" | "backtrack" => Ok(Strategy::Backtracking),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}
