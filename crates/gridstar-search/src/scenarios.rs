//! Acceptance mazes with a known unique answer, plus randomized property
//! checks against breadth-first search.

use std::collections::HashSet;

use gridstar_core::{Location, Maze};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::{SearchError, Solver, bfs_distance};

fn locs(cells: &[(i32, i32)]) -> Vec<Location> {
    cells.iter().map(|&p| p.into()).collect()
}

/// Parse `text`, check it renders back identically, solve it and compare
/// the path and the explored set (path plus `extra`).
fn check(text: &str, path: &[(i32, i32)], extra: &[(i32, i32)]) {
    let maze: Maze = text.parse().unwrap();
    assert_eq!(maze.to_string(), text);

    let solver = Solver::new(&maze).unwrap();
    let expected_path = locs(path);
    assert_eq!(solver.path(), expected_path.as_slice());

    let mut expected_explored: HashSet<Location> = expected_path.into_iter().collect();
    expected_explored.extend(locs(extra));
    assert_eq!(solver.explored(), &expected_explored);
}

const ROOMS: &str = "\
###############
#     #       #
#G###  #     S#
####   # #### #
#    ## #     #
# ###    #### #
#  #  ###  #  #
#             #
###############
";

/// Return [`ROOMS`] with start and goal moved.
fn rooms(start: (i32, i32), goal: (i32, i32)) -> String {
    let maze: Maze = ROOMS.parse().unwrap();
    Maze::new(
        maze.rows(),
        maze.columns(),
        start.into(),
        goal.into(),
        maze.obstacles(),
    )
    .unwrap()
    .to_string()
}

/// The long way round the rooms, from the left edge to the right edge.
const ROOMS_CROSSING: [(i32, i32); 33] = [
    (1, 0),
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
    (1, 4),
    (2, 4),
    (2, 3),
    (3, 3),
    (3, 2),
    (3, 1),
    (3, 0),
    (4, 0),
    (5, 0),
    (5, 1),
    (6, 1),
    (6, 2),
    (6, 3),
    (6, 4),
    (6, 5),
    (6, 6),
    (6, 7),
    (6, 8),
    (6, 9),
    (6, 10),
    (6, 11),
    (5, 11),
    (5, 12),
    (4, 12),
    (3, 12),
    (2, 12),
    (1, 12),
];

const ROOMS_SIDE_POCKETS: [(i32, i32); 11] = [
    (5, 8),
    (5, 9),
    (1, 5),
    (2, 5),
    (5, 3),
    (5, 4),
    (4, 4),
    (4, 5),
    (4, 6),
    (4, 7),
    (3, 6),
];

#[test]
fn no_obstacles() {
    let text = "\
###############
#S           G#
#             #
###############
";
    let path: Vec<_> = (0..=12).map(|c| (0, c)).collect();
    check(text, &path, &[]);
}

#[test]
fn around_two_obstacles() {
    let text = "\
######
#    #
# # G#
#S # #
######
";
    check(
        text,
        &[(2, 0), (1, 0), (0, 0), (0, 1), (0, 2), (0, 3), (1, 3)],
        &[(2, 1)],
    );
}

#[test]
fn many_obstacles() {
    let text = "\
##########
#    #   #
# #    #G#
#S #     #
##########
";
    check(
        text,
        &[
            (2, 0),
            (1, 0),
            (0, 0),
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 3),
            (1, 4),
            (1, 5),
            (0, 5),
            (0, 6),
            (0, 7),
            (1, 7),
        ],
        &[(2, 1), (1, 2)],
    );
}

#[test]
fn dead_end_column_is_explored() {
    let text = "\
######
#  #G#
# ## #
# ## #
#S   #
######
";
    check(
        text,
        &[(3, 0), (3, 1), (3, 2), (3, 3), (2, 3), (1, 3), (0, 3)],
        &[(2, 0), (1, 0), (0, 0), (0, 1)],
    );
}

#[test]
fn over_the_wall() {
    let text = "\
########
#      #
#  #   #
#   #  #
#S  # G#
########
";
    let maze: Maze = text.parse().unwrap();
    let solver = Solver::new(&maze).unwrap();
    assert_eq!(
        solver.path(),
        locs(&[
            (3, 0),
            (3, 1),
            (2, 1),
            (1, 1),
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (0, 5),
            (1, 5),
            (2, 5),
            (3, 5),
        ])
        .as_slice()
    );
}

#[test]
fn adjacent_goal() {
    let text = "\
########
#      #
#  #   #
#   #  #
#SG #  #
########
";
    check(text, &[(3, 0), (3, 1)], &[]);
}

#[test]
fn right_to_left_above_obstacle() {
    let text = "\
###############
#             #
#G     #     S#
#             #
###############
";
    check(
        text,
        &[
            (1, 12),
            (1, 11),
            (1, 10),
            (1, 9),
            (1, 8),
            (1, 7),
            (0, 7),
            (0, 6),
            (0, 5),
            (0, 4),
            (0, 3),
            (0, 2),
            (0, 1),
            (0, 0),
            (1, 0),
        ],
        &[],
    );
}

#[test]
fn rooms_right_to_left() {
    assert_eq!(rooms((1, 12), (1, 0)), ROOMS);
    let path: Vec<_> = ROOMS_CROSSING.iter().rev().copied().collect();
    check(
        ROOMS,
        &path,
        &[
            (1, 11),
            (1, 10),
            (1, 9),
            (1, 8),
            (1, 7),
            (0, 7),
            (0, 6),
            (2, 7),
            (0, 8),
            (0, 9),
            (0, 10),
            (0, 11),
            (0, 12),
            (3, 11),
            (3, 10),
            (3, 9),
            (3, 8),
            (5, 8),
            (5, 9),
            (5, 4),
            (4, 4),
            (5, 3),
            (3, 6),
            (6, 12),
            (4, 7),
            (4, 6),
            (6, 0),
            (4, 5),
        ],
    );
}

#[test]
fn step_up_then_corridor() {
    let text = "\
###############
#            G#
#S            #
###############
";
    let mut path = vec![(1, 0)];
    path.extend((0..=12).map(|c| (0, c)));
    check(text, &path, &[]);
}

#[test]
fn rooms_left_to_top() {
    let text = rooms((1, 0), (0, 6));
    let mut path = ROOMS_CROSSING.to_vec();
    path.extend([(0, 12), (0, 11), (0, 10), (0, 9), (0, 8), (0, 7), (0, 6)]);
    let mut extra = ROOMS_SIDE_POCKETS.to_vec();
    extra.push((6, 0));
    check(&text, &path, &extra);
}

#[test]
fn rooms_left_to_right() {
    let text = rooms((1, 0), (1, 12));
    assert!(text.contains("#S###  #     G#"));
    check(&text, &ROOMS_CROSSING, &ROOMS_SIDE_POCKETS);
}

#[test]
fn large_open_field() {
    let maze = Maze::new(1000, 1000, Location::new(0, 0), Location::new(999, 999), []).unwrap();
    let solver = Solver::new(&maze).unwrap();
    let mut expected: Vec<Location> = (0..=999).map(|c| Location::new(0, c)).collect();
    expected.extend((1..=999).map(|r| Location::new(r, 999)));
    assert_eq!(solver.path(), expected.as_slice());
    let expected_explored: HashSet<Location> = expected.into_iter().collect();
    assert_eq!(solver.explored(), &expected_explored);
}

#[test]
fn up_around_pillar() {
    let text = "\
###############
#      G      #
#      #      #
#      S      #
###############
";
    check(text, &[(2, 6), (2, 5), (1, 5), (0, 5), (0, 6)], &[]);
}

#[test]
fn down_around_pillar() {
    let text = "\
###############
#      S      #
#      #      #
#      G      #
###############
";
    check(text, &[(0, 6), (0, 5), (1, 5), (2, 5), (2, 6)], &[]);
}

#[test]
fn around_wide_wall() {
    let text = "\
###############
#     G       #
#    ###      #
#      S      #
###############
";
    check(
        text,
        &[(2, 6), (2, 7), (1, 7), (0, 7), (0, 6), (0, 5)],
        &[(2, 5), (2, 4)],
    );
}

#[test]
fn enclosed_goal_is_an_error() {
    let text = "\
#######
#S    #
#   ###
#   #G#
#######
";
    let maze: Maze = text.parse().unwrap();
    let err = Solver::new(&maze).unwrap_err();
    // Every free square except the goal gets explored.
    assert_eq!(
        err,
        SearchError::NoPath {
            start: maze.start(),
            goal: maze.goal(),
            explored: 11,
        }
    );
    assert_eq!(maze.free_count(), 12);
}

// ---------------------------------------------------------------------------
// Randomized properties
// ---------------------------------------------------------------------------

fn random_maze(rng: &mut StdRng) -> Maze {
    let rows = rng.random_range(1..9);
    let columns = rng.random_range(1..9);
    let start = Location::new(rng.random_range(0..rows), rng.random_range(0..columns));
    let goal = Location::new(rng.random_range(0..rows), rng.random_range(0..columns));
    let mut obstacles = Vec::new();
    for row in 0..rows {
        for column in 0..columns {
            let p = Location::new(row, column);
            if p != start && p != goal && rng.random_bool(0.3) {
                obstacles.push(p);
            }
        }
    }
    Maze::new(rows, columns, start, goal, obstacles).unwrap()
}

#[test]
fn random_mazes_match_bfs() {
    for seed in 0..500 {
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = random_maze(&mut rng);
        let result = Solver::new(&maze);
        let Some(dist) = bfs_distance(&maze) else {
            assert!(
                matches!(result, Err(SearchError::NoPath { .. })),
                "seed {seed}: expected no path in\n{maze}"
            );
            continue;
        };
        let solver = result.unwrap();
        let path = solver.path();

        // Optimal.
        assert_eq!(solver.cost() as i32, dist, "seed {seed}: suboptimal path in\n{maze}");
        // Endpoints included.
        assert_eq!(path.first(), Some(&maze.start()), "seed {seed}");
        assert_eq!(path.last(), Some(&maze.goal()), "seed {seed}");
        // Unit axis steps over free cells only.
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "seed {seed}: non-adjacent step in\n{maze}");
        }
        assert!(path.iter().all(|&p| !maze.is_blocked(p)), "seed {seed}");
        // Explored covers the path, and each location is popped once.
        assert!(path.iter().all(|p| solver.explored().contains(p)), "seed {seed}");
        assert_eq!(solver.explored_order().len(), solver.explored().len(), "seed {seed}");
        let order: HashSet<_> = solver.explored_order().iter().copied().collect();
        assert_eq!(&order, solver.explored(), "seed {seed}");
    }
}

#[test]
fn random_mazes_are_deterministic() {
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = random_maze(&mut rng);
        let copy: Maze = maze
            .to_string()
            .parse()
            .unwrap_or_else(|e| panic!("seed {seed}: {e} for\n{maze}"));
        assert_eq!(copy, maze, "seed {seed}");
        match (Solver::new(&maze), Solver::new(&copy)) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a.path(), b.path(), "seed {seed}");
                assert_eq!(a.explored_order(), b.explored_order(), "seed {seed}");
                assert_eq!(a.stats(), b.stats(), "seed {seed}");
            }
            (Err(a), Err(b)) => assert_eq!(a, b, "seed {seed}"),
            (a, b) => panic!("seed {seed}: diverging results {a:?} / {b:?} for\n{maze}"),
        }
    }
}

#[test]
fn start_on_goal_mazes_survive_text_round_trip() {
    let maze = Maze::new(3, 3, Location::new(1, 1), Location::new(1, 1), [Location::new(0, 1)])
        .unwrap();
    let copy: Maze = maze.to_string().parse().unwrap();
    let a = Solver::new(&maze).unwrap();
    let b = Solver::new(&copy).unwrap();
    assert_eq!(a.path(), &[Location::new(1, 1)]);
    assert_eq!(a.path(), b.path());
}
