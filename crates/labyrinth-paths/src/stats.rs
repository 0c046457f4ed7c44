use std::time::Duration;

/// Counters collected during a single solve.
///
/// Equality compares the deterministic counters only; `elapsed` is
/// wall-clock time and varies between otherwise identical runs.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverStats {
    /// Positions taken off the frontier and expanded. Each position counts
    /// once, except that A* under an inconsistent heuristic counts every
    /// re-expansion.
    pub nodes_explored: usize,
    /// Number of positions in the returned path, 0 if none.
    pub path_length: usize,
    /// Positions unwound from the working path after every branch through
    /// them failed. Only the backtracking strategy unwinds.
    pub backtracked: usize,
    /// Time spent inside the strategy.
    pub elapsed: Duration,
}

impl SolverStats {
    /// Number of moves along the path (one less than its length).
    #[inline]
    pub fn path_edges(&self) -> usize {
        self.path_length.saturating_sub(1)
    }
}

impl PartialEq for SolverStats {
    fn eq(&self, other: &Self) -> bool {
        self.nodes_explored == other.nodes_explored
            && self.path_length == other.path_length
            && self.backtracked == other.backtracked
    }
}

impl Eq for SolverStats {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn stats_round_trip() {
        let s = SolverStats {
            nodes_explored: 12,
            path_length: 5,
            backtracked: 2,
            elapsed: Duration::from_micros(250),
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: SolverStats = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
        assert_eq!(back.elapsed, s.elapsed);
    }
}
