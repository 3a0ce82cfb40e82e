//! Serializable maze description.
//!
//! [`MazeConfig`] is the plain-data form of a [`Maze`]: what a file or a
//! test fixture stores. Building it runs the same validation as
//! [`Maze::new`]. With the `serde` feature, `Maze` itself (de)serializes
//! through this form.

use crate::error::MazeError;
use crate::geom::Location;
use crate::maze::Maze;

/// Plain description of a maze.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub rows: i32,
    pub columns: i32,
    pub start: Location,
    pub goal: Location,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstacles: Vec<Location>,
}

impl MazeConfig {
    /// Validate and build the maze.
    pub fn build(&self) -> Result<Maze, MazeError> {
        Maze::new(
            self.rows,
            self.columns,
            self.start,
            self.goal,
            self.obstacles.iter().copied(),
        )
    }
}

impl Maze {
    /// The plain description of this maze. Obstacles are listed in
    /// row-major order.
    pub fn to_config(&self) -> MazeConfig {
        MazeConfig {
            rows: self.rows(),
            columns: self.columns(),
            start: self.start(),
            goal: self.goal(),
            obstacles: self.obstacles().collect(),
        }
    }
}

impl TryFrom<MazeConfig> for Maze {
    type Error = MazeError;

    fn try_from(config: MazeConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Maze {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_config().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Maze {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let config = MazeConfig::deserialize(deserializer)?;
        config.build().map_err(serde::de::Error::custom)
    }
}
