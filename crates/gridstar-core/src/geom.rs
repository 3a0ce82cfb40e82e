//! Geometry primitive: [`Location`].
//!
//! Locations are addressed as (row, column). Row grows down, column grows
//! right, matching the textual rendering of a maze.

use std::fmt;

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A cell address on a rectangular grid.
///
/// Coordinates are signed so that neighbours of border cells (row or column
/// `-1`) can be represented and rejected by a bounds check.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub row: i32,
    pub column: i32,
}

impl Location {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, column: 0 };

    /// Create a new location.
    #[inline]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Return a location shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            column: self.column + dc,
        }
    }

    /// The four axis-adjacent neighbours (up, down, left, right).
    #[inline]
    pub const fn neighbors_4(self) -> [Location; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// Whether `other` is exactly one unit step away along a single axis.
    #[inline]
    pub fn is_adjacent(self, other: Location) -> bool {
        (self.row - other.row).abs() + (self.column - other.column).abs() == 1
    }
}

impl From<(i32, i32)> for Location {
    #[inline]
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
