//! A rectangular maze with a start square, a goal square and obstacles.
//!
//! A [`Maze`] is immutable once built. Its text form draws a `#` border one
//! cell wide around the field:
//!
//! ```text
//! #######
//! #    G#
//! #  #  #
//! # S # #
//! #######
//! ```
//!
//! The same format is accepted by [`str::parse`], so rendered mazes (and
//! rendered solutions, whose path cells are drawn as `.`) parse back. When
//! start and goal coincide only the `S` is drawn.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::error::MazeError;
use crate::geom::Location;

const WALL: char = '#';
const FREE: char = ' ';
const TRAIL: char = '.';
const START: char = 'S';
const GOAL: char = 'G';

/// An immutable rectangular maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: i32,
    columns: i32,
    start: Location,
    goal: Location,
    /// In-bounds obstacles; iteration is row-major.
    blocked: BTreeSet<Location>,
}

impl Maze {
    /// Create a maze of `rows` x `columns` squares.
    ///
    /// Obstacles outside the bounds are accepted and ignored: everything
    /// outside the bounds is blocked anyway. Fails if the dimensions are not
    /// positive, or if start or goal is out of bounds or an obstacle.
    pub fn new(
        rows: i32,
        columns: i32,
        start: Location,
        goal: Location,
        obstacles: impl IntoIterator<Item = Location>,
    ) -> Result<Self, MazeError> {
        if rows <= 0 || columns <= 0 {
            return Err(MazeError::InvalidDimensions { rows, columns });
        }
        let mut maze = Self {
            rows,
            columns,
            start,
            goal,
            blocked: BTreeSet::new(),
        };
        if !maze.contains(start) {
            return Err(MazeError::StartOutOfBounds(start));
        }
        if !maze.contains(goal) {
            return Err(MazeError::GoalOutOfBounds(goal));
        }
        let in_bounds: BTreeSet<Location> =
            obstacles.into_iter().filter(|&p| maze.contains(p)).collect();
        maze.blocked = in_bounds;
        if maze.is_blocked(start) {
            return Err(MazeError::StartBlocked(start));
        }
        if maze.is_blocked(goal) {
            return Err(MazeError::GoalBlocked(goal));
        }
        Ok(maze)
    }

    /// Number of rows of squares.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns of squares.
    #[inline]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// The start square, where the maze begins.
    #[inline]
    pub fn start(&self) -> Location {
        self.start
    }

    /// The goal square, where the maze ends.
    #[inline]
    pub fn goal(&self) -> Location {
        self.goal
    }

    /// Whether `p` lies within the maze bounds.
    #[inline]
    pub fn contains(&self, p: Location) -> bool {
        p.row >= 0 && p.row < self.rows && p.column >= 0 && p.column < self.columns
    }

    /// Whether `p` is an obstacle or out of bounds.
    #[inline]
    pub fn is_blocked(&self, p: Location) -> bool {
        !self.contains(p) || self.blocked.contains(&p)
    }

    /// Iterate over the obstacle squares in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Location> + '_ {
        self.blocked.iter().copied()
    }

    /// Number of squares that are not obstacles.
    pub fn free_count(&self) -> u64 {
        self.rows as u64 * self.columns as u64 - self.blocked.len() as u64
    }

    /// Render the maze, asking `mark` for the character of each free square
    /// other than start and goal. `None` draws the square as a space.
    pub fn render_with(&self, mark: impl Fn(Location) -> Option<char>) -> String {
        let width = self.columns as usize + 2;
        let mut out = String::with_capacity(width * (self.rows as usize + 2) + self.rows as usize);
        push_wall_row(&mut out, width);
        for row in 0..self.rows {
            out.push(WALL);
            for column in 0..self.columns {
                let p = Location::new(row, column);
                let ch = if p == self.start {
                    START
                } else if p == self.goal {
                    GOAL
                } else if self.is_blocked(p) {
                    WALL
                } else {
                    mark(p).unwrap_or(FREE)
                };
                out.push(ch);
            }
            out.push(WALL);
            out.push('\n');
        }
        push_wall_row(&mut out, width);
        out
    }

    /// Render the maze with the squares of `path` drawn as `.`.
    pub fn render_path(&self, path: &[Location]) -> String {
        let on_path: HashSet<Location> = path.iter().copied().collect();
        self.render_with(|p| on_path.contains(&p).then_some(TRAIL))
    }
}

fn push_wall_row(out: &mut String, width: usize) {
    out.extend(std::iter::repeat_n(WALL, width));
    out.push('\n');
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(|_| None))
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parse the bordered text form.
    ///
    /// Leading and trailing whitespace of the whole string is trimmed, but
    /// not of individual lines. Inside the border, `#` is an obstacle,
    /// ` ` and `.` are free, `S` and `G` mark start and goal. Without a `G`,
    /// the goal is the start square.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MazeError::Empty);
        }
        let lines: Vec<Vec<char>> = s.lines().map(|l| l.chars().collect()).collect();
        let width = lines[0].len();
        for (n, line) in lines.iter().enumerate() {
            if line.len() != width {
                return Err(MazeError::InconsistentWidth { line: n });
            }
        }
        let last = lines.len() - 1;
        for n in [0, last] {
            if lines[n].iter().any(|&ch| ch != WALL) {
                return Err(MazeError::MissingBorder { line: n });
            }
        }

        let mut start = None;
        let mut goal = None;
        let mut obstacles = Vec::new();
        for (n, line) in lines.iter().enumerate().take(last).skip(1) {
            if line[0] != WALL || line[width - 1] != WALL {
                return Err(MazeError::MissingBorder { line: n });
            }
            let row = n as i32 - 1;
            for (c, &ch) in line[1..width - 1].iter().enumerate() {
                let p = Location::new(row, c as i32);
                match ch {
                    WALL => obstacles.push(p),
                    FREE | TRAIL => {}
                    START if start.is_some() => return Err(MazeError::DuplicateStart),
                    START => start = Some(p),
                    GOAL if goal.is_some() => return Err(MazeError::DuplicateGoal),
                    GOAL => goal = Some(p),
                    _ => {
                        return Err(MazeError::InvalidChar {
                            ch,
                            row,
                            column: c as i32,
                        });
                    }
                }
            }
        }

        let rows = lines.len().saturating_sub(2) as i32;
        let columns = width.saturating_sub(2) as i32;
        if rows == 0 || columns == 0 {
            return Err(MazeError::InvalidDimensions { rows, columns });
        }
        let start = start.ok_or(MazeError::MissingStart)?;
        // A start drawn over the goal hides the `G`.
        let goal = goal.unwrap_or(start);
        let maze = Maze::new(rows, columns, start, goal, obstacles)?;
        log::debug!(
            "parsed {}x{} maze, start {} goal {}",
            rows,
            columns,
            start,
            goal
        );
        Ok(maze)
    }
}
