#![allow(dead_code)]

use std::collections::HashSet;

use gridloop::config::{LoopConstraints, TrackConfig};
use gridloop::grid::Direction;
use gridloop::track::TrackPath;

pub const SCENARIO_SEED: u64 = 12345;

/// The reference scenario: an 80-step budget on a 40x40 grid.
pub fn scenario_config() -> TrackConfig {
    TrackConfig {
        max_steps: 80,
        grid_size: 40,
        constraints: LoopConstraints {
            min_straight_run: 2,
            max_straight_run: 8,
            min_curve_run: 1,
            max_curve_run: 3,
            min_loop_length: 16,
        },
        ..Default::default()
    }
}

/// Checks every loop invariant independently of `TrackPath::validate`.
pub fn assert_loop_invariants(path: &TrackPath, constraints: &LoopConstraints) {
    let nodes = path.nodes();
    let last = nodes.len() - 1;

    assert!(nodes.len() >= constraints.min_loop_length, "loop too short: {}", nodes.len());
    assert_eq!(nodes[0].position, nodes[last].position, "loop is not closed");

    let mut seen = HashSet::new();
    for node in &nodes[..last] {
        assert!(seen.insert(node.position), "cell {} visited twice", node.position);
    }

    // Cyclic sequence of moves: move k enters node k, for k in 1..=last.
    let moves: Vec<Direction> = nodes[1..].iter().map(|node| node.direction).collect();
    for (k, pair) in nodes.windows(2).enumerate() {
        let step = pair[1].position - pair[0].position;
        assert_eq!(step.abs().element_sum(), 1, "node {} is not adjacent to its predecessor", k + 1);
        assert_eq!(Direction::from_step(step), Some(pair[1].direction), "node {} heading mismatch", k + 1);
    }

    let n = moves.len();
    for k in 0..n {
        let previous = moves[(k + n - 1) % n];
        let current = moves[k];
        let next = moves[(k + 1) % n];
        assert_ne!(current, previous.opposite(), "U-turn at move {}", k + 1);
        if current != previous {
            assert_eq!(next, current, "curve at move {} is followed by another curve", k + 1);
        }
    }
}

/// Longest run of straight moves, counted cyclically so a run through the start cell is whole.
pub fn longest_straight_run(path: &TrackPath) -> usize {
    let nodes = path.nodes();
    // Move k enters node k; move 1 follows the closing move.
    let straight: Vec<bool> = (1..nodes.len()).map(|k| nodes[k].direction == nodes[k - 1].direction).collect();
    let n = straight.len();

    let mut longest = 0;
    let mut run = 0;
    for k in 0..2 * n {
        if straight[k % n] {
            run += 1;
            longest = longest.max(run.min(n));
        } else {
            run = 0;
        }
    }
    longest
}
