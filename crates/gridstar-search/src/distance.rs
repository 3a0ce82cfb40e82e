use gridstar_core::Location;

/// Manhattan (L1) distance between two locations.
#[inline]
pub fn manhattan(a: Location, b: Location) -> i32 {
    (a.row - b.row).abs() + (a.column - b.column).abs()
}
