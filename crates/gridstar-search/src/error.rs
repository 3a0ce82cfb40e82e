use std::fmt;

use gridstar_core::{Location, MazeError};

/// Errors reported by [`Solver::new`](crate::Solver::new).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The grid could not be built.
    Maze(MazeError),
    /// The grid reports its own start location as blocked.
    StartBlocked(Location),
    /// The grid reports its own goal location as blocked.
    GoalBlocked(Location),
    /// The frontier ran empty before the goal was reached.
    NoPath {
        start: Location,
        goal: Location,
        /// Number of locations explored before giving up.
        explored: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maze(e) => write!(f, "{e}"),
            Self::StartBlocked(p) => write!(f, "search: start square {p} is blocked"),
            Self::GoalBlocked(p) => write!(f, "search: goal square {p} is blocked"),
            Self::NoPath {
                start,
                goal,
                explored,
            } => write!(
                f,
                "search: no path exists from {start} to {goal} ({explored} squares explored)"
            ),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MazeError> for SearchError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}
