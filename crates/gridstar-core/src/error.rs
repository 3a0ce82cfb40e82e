use std::fmt;

use crate::geom::Location;

/// Errors that can occur when building or parsing a [`Maze`](crate::Maze).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Row or column count is not strictly positive.
    InvalidDimensions { rows: i32, columns: i32 },
    /// The start location lies outside the maze.
    StartOutOfBounds(Location),
    /// The goal location lies outside the maze.
    GoalOutOfBounds(Location),
    /// The start location is an obstacle.
    StartBlocked(Location),
    /// The goal location is an obstacle.
    GoalBlocked(Location),
    /// The text to parse contains no maze at all.
    Empty,
    /// A text line differs in width from the first line.
    InconsistentWidth { line: usize },
    /// A text line is not enclosed by the `#` border.
    MissingBorder { line: usize },
    /// A character other than `#`, ` `, `.`, `S` or `G` inside the border.
    InvalidChar { ch: char, row: i32, column: i32 },
    /// No `S` cell in the text.
    MissingStart,
    /// More than one `S` cell in the text.
    DuplicateStart,
    /// More than one `G` cell in the text.
    DuplicateGoal,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, columns } => {
                write!(f, "maze: invalid dimensions {rows}x{columns}")
            }
            Self::StartOutOfBounds(p) => write!(f, "maze: start square {p} is out of bounds"),
            Self::GoalOutOfBounds(p) => write!(f, "maze: goal square {p} is out of bounds"),
            Self::StartBlocked(p) => write!(f, "maze: start square {p} is blocked"),
            Self::GoalBlocked(p) => write!(f, "maze: goal square {p} is blocked"),
            Self::Empty => write!(f, "maze: empty input"),
            Self::InconsistentWidth { line } => {
                write!(f, "maze: line {line} has inconsistent width")
            }
            Self::MissingBorder { line } => write!(f, "maze: line {line} is missing the # border"),
            Self::InvalidChar { ch, row, column } => write!(
                f,
                "maze contains invalid character \u{201c}{ch}\u{201d} at ({row}, {column})"
            ),
            Self::MissingStart => write!(f, "maze: no start square (S)"),
            Self::DuplicateStart => write!(f, "maze: more than one start square (S)"),
            Self::DuplicateGoal => write!(f, "maze: more than one goal square (G)"),
        }
    }
}

impl std::error::Error for MazeError {}
