use std::cmp::Ordering;

use gridstar_core::Location;

/// Frontier priority: `(f, h, row, column)`, compared lexicographically,
/// smallest first.
pub type Priority = (i32, i32, i32, i32);

/// One point in the search tree.
///
/// Nodes live in the solver's arena and are never mutated after creation;
/// `parent` is the arena index of the node that generated this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub location: Location,
    /// Path cost from the start, in steps.
    pub g: i32,
    /// Manhattan estimate to the goal.
    pub h: i32,
    pub parent: Option<usize>,
}

impl SearchNode {
    /// Estimated total cost through this node.
    #[inline]
    pub fn f(&self) -> i32 {
        self.g + self.h
    }

    /// Frontier ordering key for this node.
    #[inline]
    pub fn priority(&self) -> Priority {
        priority(self.g + self.h, self.h, self.location)
    }
}

/// Ordering key for a node with score `f`, estimate `h` at `loc`.
#[inline]
pub fn priority(f: i32, h: i32, loc: Location) -> Priority {
    (f, h, loc.row, loc.column)
}

// ---------------------------------------------------------------------------
// Frontier entry
// ---------------------------------------------------------------------------

/// Reference into the node arena, ordered for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FrontierEntry {
    pub(crate) key: Priority,
    pub(crate) idx: usize,
}

impl FrontierEntry {
    #[inline]
    pub(crate) fn new(node: &SearchNode, idx: usize) -> Self {
        Self {
            key: node.priority(),
            idx,
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        // Equal keys mean the same cell with the same g; the older node wins.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
