//! A* shortest-path search over grid mazes.
//!
//! [`Solver`] runs an A* search with the Manhattan heuristic over any
//! [`SearchGrid`] (implemented for [`gridstar_core::Maze`]) and keeps two
//! results: the optimal path, start and goal included, and the set of
//! explored locations.
//!
//! Frontier nodes are ordered by `(f, h, row, column)`, smallest first, so
//! among several equally short paths the same one is always returned.
//!
//! ```
//! use gridstar_core::{Location, Maze};
//! use gridstar_search::Solver;
//!
//! let maze: Maze = "######\n#    #\n# # G#\n#S # #\n######\n".parse().unwrap();
//! let solver = Solver::new(&maze).unwrap();
//! assert_eq!(solver.path().first(), Some(&Location::new(2, 0)));
//! assert_eq!(solver.cost(), 6);
//! ```

mod bfs;
mod distance;
mod error;
mod neighbors;
mod node;
mod solver;
mod traits;

#[cfg(test)]
mod scenarios;

pub use bfs::bfs_distance;
pub use distance::manhattan;
pub use error::SearchError;
pub use neighbors::Neighbors;
pub use node::{Priority, SearchNode, priority};
pub use solver::{SearchStats, Solver};
pub use traits::SearchGrid;
