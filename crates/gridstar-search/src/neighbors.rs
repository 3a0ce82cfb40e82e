use gridstar_core::Location;

/// Cached neighbor computation helper.
///
/// Enumerates the four axis-adjacent neighbors of a location (up, down,
/// left, right), filtered by a predicate, into a reused buffer.
pub struct Neighbors {
    buf: Vec<Location>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, p: Location, keep: impl Fn(Location) -> bool) -> &[Location] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
