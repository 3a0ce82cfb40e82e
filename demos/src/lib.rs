//! Shared pieces of the `solve` front-end: maze loading, random maze
//! generation and result formatting.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::str::FromStr;

use gridstar_core::{Location, Maze, MazeError};
use gridstar_search::Solver;

const EXPLORED: char = '+';
const TRAIL: char = '.';

/// Maze dimensions given on the command line as `ROWSxCOLS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: i32,
    pub columns: i32,
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (r, c) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected ROWSxCOLS, got \u{201c}{s}\u{201d}"))?;
        let rows = r.trim().parse::<i32>().map_err(|e| format!("bad row count: {e}"))?;
        let columns = c.trim().parse::<i32>().map_err(|e| format!("bad column count: {e}"))?;
        Ok(Self { rows, columns })
    }
}

/// Parse an obstacle probability in `[0, 1]`.
pub fn parse_density(s: &str) -> Result<f64, String> {
    let p = s.parse::<f64>().map_err(|e| format!("bad density: {e}"))?;
    if !(0.0..=1.0).contains(&p) {
        return Err(format!("density must be within [0, 1], got {p}"));
    }
    Ok(p)
}

/// Parse a maze from its JSON description.
pub fn load_json(s: &str) -> Result<Maze, serde_json::Error> {
    serde_json::from_str(s)
}

/// Generate a maze with the start in the top-left corner, the goal in the
/// bottom-right corner and each other square an obstacle with probability
/// `density`. The result is not guaranteed to be solvable.
pub fn random_maze(size: Size, density: f64) -> Result<Maze, MazeError> {
    let start = Location::ZERO;
    let goal = Location::new(size.rows - 1, size.columns - 1);
    let mut obstacles = Vec::new();
    for row in 0..size.rows {
        for column in 0..size.columns {
            let p = Location::new(row, column);
            if p != start && p != goal && rand::random_bool(density) {
                obstacles.push(p);
            }
        }
    }
    log::debug!(
        "generated {}x{} maze with {} obstacles",
        size.rows,
        size.columns,
        obstacles.len()
    );
    Maze::new(size.rows, size.columns, start, goal, obstacles)
}

/// Format the solution: the maze with the path drawn as `.` (and, if
/// `show_explored`, other explored squares as `+`), followed by a summary.
pub fn report(maze: &Maze, solver: &Solver, show_explored: bool) -> String {
    let on_path: HashSet<Location> = solver.path().iter().copied().collect();
    let mut out = maze.render_with(|p| {
        if on_path.contains(&p) {
            Some(TRAIL)
        } else if show_explored && solver.explored().contains(&p) {
            Some(EXPLORED)
        } else {
            None
        }
    });

    let _ = writeln!(out, "cost: {}", solver.cost());
    let steps: Vec<String> = solver.path().iter().map(Location::to_string).collect();
    let _ = writeln!(out, "path: {}", steps.join(" -> "));
    if show_explored {
        let stats = solver.stats();
        let _ = writeln!(
            out,
            "explored: {} squares ({} expanded, {} generated, frontier peak {})",
            solver.explored().len(),
            stats.expanded,
            stats.generated,
            stats.max_frontier
        );
    }
    out
}
