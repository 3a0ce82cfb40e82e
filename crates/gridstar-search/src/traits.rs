use gridstar_core::{Location, Maze};

/// The view of a grid the search engine consumes.
///
/// Implementations must be pure: repeated calls with the same arguments
/// return the same answer for the whole duration of a search.
pub trait SearchGrid {
    /// Where the search begins.
    fn start(&self) -> Location;

    /// Where the search ends.
    fn goal(&self) -> Location;

    /// Whether `loc` is impassable or out of bounds.
    fn is_blocked(&self, loc: Location) -> bool;
}

impl SearchGrid for Maze {
    #[inline]
    fn start(&self) -> Location {
        Maze::start(self)
    }

    #[inline]
    fn goal(&self) -> Location {
        Maze::goal(self)
    }

    #[inline]
    fn is_blocked(&self, loc: Location) -> bool {
        Maze::is_blocked(self, loc)
    }
}

impl<T: SearchGrid + ?Sized> SearchGrid for &T {
    #[inline]
    fn start(&self) -> Location {
        (**self).start()
    }

    #[inline]
    fn goal(&self) -> Location {
        (**self).goal()
    }

    #[inline]
    fn is_blocked(&self, loc: Location) -> bool {
        (**self).is_blocked(loc)
    }
}
