//! Hooks for watching a search as it runs.
//!
//! A search never marks the grid; anything that wants to animate or record
//! exploration passes a [`SearchObserver`] to
//! [`Solver::solve_observed`](crate::Solver::solve_observed) instead.

use labyrinth_core::Position;

/// A single exploration step reported to an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// The position was taken off the frontier and expanded.
    Visit(Position),
    /// Every branch through the position failed and it was unwound.
    Backtrack(Position),
}

/// Receives exploration events in the order they happen.
pub trait SearchObserver {
    fn on_visit(&mut self, _pos: Position) {}

    fn on_backtrack(&mut self, _pos: Position) {}
}

/// Ignores everything.
impl SearchObserver for () {}

/// Records every event.
impl SearchObserver for Vec<SearchEvent> {
    fn on_visit(&mut self, pos: Position) {
        self.push(SearchEvent::Visit(pos));
    }

    fn on_backtrack(&mut self, pos: Position) {
        self.push(SearchEvent::Backtrack(pos));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_records_in_order() {
        let mut events: Vec<SearchEvent> = Vec::new();
        let obs: &mut dyn SearchObserver = &mut events;
        obs.on_visit(Position::new(0, 0));
        obs.on_backtrack(Position::new(0, 0));
        assert_eq!(
            events,
            vec![
                SearchEvent::Visit(Position::new(0, 0)),
                SearchEvent::Backtrack(Position::new(0, 0)),
            ]
        );
    }
}
