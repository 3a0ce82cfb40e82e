use std::collections::{HashMap, VecDeque};

use gridstar_core::Location;

use crate::neighbors::Neighbors;
use crate::traits::SearchGrid;

/// Breadth-first shortest distance from the grid's start to its goal.
///
/// Each step has cost 1. Returns `None` if the goal is unreachable (or if
/// start or goal is blocked). The grid must be finite: every location far
/// enough away has to be blocked.
pub fn bfs_distance<G: SearchGrid + ?Sized>(grid: &G) -> Option<i32> {
    let start = grid.start();
    let goal = grid.goal();
    if grid.is_blocked(start) || grid.is_blocked(goal) {
        return None;
    }

    let mut dist: HashMap<Location, i32> = HashMap::new();
    let mut queue: VecDeque<Location> = VecDeque::new();
    let mut nbuf = Neighbors::new();
    dist.insert(start, 0);
    queue.push_back(start);

    while let Some(cp) = queue.pop_front() {
        let d = dist[&cp];
        if cp == goal {
            return Some(d);
        }
        for &np in nbuf.cardinal(cp, |p| !grid.is_blocked(p) && !dist.contains_key(&p)) {
            dist.insert(np, d + 1);
            queue.push_back(np);
        }
    }
    None
}
