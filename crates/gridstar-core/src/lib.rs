//! **gridstar-core** — grid mazes for shortest-path search (core types).
//!
//! This crate provides the value types shared across the *gridstar*
//! workspace: the [`Location`] cell address, the immutable [`Maze`] with its
//! bordered text rendering, and the serializable [`MazeConfig`].

pub mod config;
pub mod error;
pub mod geom;
pub mod maze;

pub use config::MazeConfig;
pub use error::MazeError;
pub use geom::Location;
pub use maze::Maze;
