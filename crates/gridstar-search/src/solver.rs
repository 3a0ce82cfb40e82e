use std::collections::{BinaryHeap, HashSet};

use gridstar_core::Location;
use log::{debug, trace};

use crate::distance::manhattan;
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::node::{FrontierEntry, SearchNode};
use crate::traits::SearchGrid;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes popped and expanded (the goal is popped but not expanded).
    pub expanded: usize,
    /// Nodes created, including the start node.
    pub generated: usize,
    /// Popped nodes discarded because their location was already explored.
    pub skipped: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// A* search over a [`SearchGrid`] with the Manhattan heuristic.
///
/// The search runs to completion inside [`Solver::new`]; afterwards the
/// solver only exposes its results. Frontier ties are broken by smaller
/// `h`, then smaller row, then smaller column, so the result is fully
/// determined by the grid.
#[derive(Debug, Clone)]
pub struct Solver {
    path: Vec<Location>,
    explored: HashSet<Location>,
    explored_order: Vec<Location>,
    stats: SearchStats,
}

impl Solver {
    /// Solve `grid`, computing the shortest path from its start to its goal.
    ///
    /// Fails if the grid reports start or goal as blocked, or with
    /// [`SearchError::NoPath`] if the goal cannot be reached.
    pub fn new<G: SearchGrid + ?Sized>(grid: &G) -> Result<Self, SearchError> {
        let start = grid.start();
        let goal = grid.goal();
        if grid.is_blocked(start) {
            return Err(SearchError::StartBlocked(start));
        }
        if grid.is_blocked(goal) {
            return Err(SearchError::GoalBlocked(goal));
        }
        trace!("[astar] solve: start={start} goal={goal}");

        let mut stats = SearchStats::default();
        let mut nodes: Vec<SearchNode> = Vec::new();
        let mut open: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut explored: HashSet<Location> = HashSet::new();
        let mut explored_order = Vec::new();
        let mut nbuf = Neighbors::new();

        let root = SearchNode {
            location: start,
            g: 0,
            h: manhattan(start, goal),
            parent: None,
        };
        open.push(FrontierEntry::new(&root, 0));
        nodes.push(root);
        stats.generated = 1;
        stats.max_frontier = 1;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search None;
            };
            let ci = current.idx;
            let SearchNode { location, g, .. } = nodes[ci];

            // A cheaper (or equal) node for this location was already expanded.
            if !explored.insert(location) {
                stats.skipped += 1;
                continue;
            }
            explored_order.push(location);

            if location == goal {
                break 'search Some(ci);
            }

            stats.expanded += 1;
            let next = nbuf.cardinal(location, |p| {
                !grid.is_blocked(p) && !explored.contains(&p)
            });
            trace!(
                "[astar] expand {location} g={g} f={} children={}",
                nodes[ci].f(),
                next.len()
            );
            for &np in next {
                let child = SearchNode {
                    location: np,
                    g: g + 1,
                    h: manhattan(np, goal),
                    parent: Some(ci),
                };
                open.push(FrontierEntry::new(&child, nodes.len()));
                nodes.push(child);
            }
            stats.generated = nodes.len();
            stats.max_frontier = stats.max_frontier.max(open.len());
        };

        let Some(goal_idx) = found else {
            debug!(
                "[astar] FAILED: no path from {start} to {goal}, explored={} stats={stats:?}",
                explored.len()
            );
            return Err(SearchError::NoPath {
                start,
                goal,
                explored: explored.len(),
            });
        };

        // Walk parent links back to the root.
        let mut path = Vec::with_capacity(nodes[goal_idx].g as usize + 1);
        let mut ci = Some(goal_idx);
        while let Some(i) = ci {
            path.push(nodes[i].location);
            ci = nodes[i].parent;
        }
        path.reverse();

        debug!(
            "[astar] solved {start} -> {goal}: cost={} explored={} stats={stats:?}",
            path.len() - 1,
            explored.len()
        );
        Ok(Self {
            path,
            explored,
            explored_order,
            stats,
        })
    }

    /// The shortest path, from start to goal inclusive.
    #[inline]
    pub fn path(&self) -> &[Location] {
        &self.path
    }

    /// Every location popped from the frontier, the path included.
    #[inline]
    pub fn explored(&self) -> &HashSet<Location> {
        &self.explored
    }

    /// Explored locations in the order the search first reached them.
    #[inline]
    pub fn explored_order(&self) -> &[Location] {
        &self.explored_order
    }

    /// Path length in steps.
    #[inline]
    pub fn cost(&self) -> usize {
        self.path.len() - 1
    }

    /// Counters from the search run.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
