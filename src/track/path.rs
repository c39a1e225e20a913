//! Closed-loop paths on the track grid and their invariants.

use std::collections::HashSet;

use glam::IVec2;

use crate::config::LoopConstraints;
use crate::error::ValidationError;
use crate::grid::Direction;

/// One step of a path: a grid cell and the direction of travel into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathNode {
    pub position: IVec2,
    pub direction: Direction,
}

impl PathNode {
    pub const fn new(position: IVec2, direction: Direction) -> Self {
        Self { position, direction }
    }

    /// The node reached by moving one cell in `direction`.
    pub fn step(&self, direction: Direction) -> PathNode {
        PathNode::new(self.position + direction.as_ivec2(), direction)
    }

    /// Whether entering this node after `previous` changes heading.
    pub fn is_curve_after(&self, previous: &PathNode) -> bool {
        self.direction != previous.direction
    }
}

/// A validated closed loop.
///
/// The first and last nodes share both cell and heading, so the loop can be
/// walked cyclically: node `1` follows the last node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackPath {
    nodes: Vec<PathNode>,
}

impl TrackPath {
    /// Wraps `nodes` after checking every loop invariant.
    pub fn new(nodes: Vec<PathNode>, constraints: &LoopConstraints) -> Result<TrackPath, ValidationError> {
        validate_nodes(&nodes, constraints)?;
        Ok(TrackPath { nodes })
    }

    /// A clockwise rectangle anchored at the origin, long enough for `constraints`.
    ///
    /// Each side is `max(2, ceil(min_loop_length / 4))` moves, so every corner is
    /// followed by a straight and the loop meets the minimum length.
    pub fn fallback(constraints: &LoopConstraints) -> TrackPath {
        let side = constraints.min_loop_length.div_ceil(4).max(2);
        let mut nodes = Vec::with_capacity(side * 4 + 1);
        let mut current = PathNode::new(IVec2::ZERO, Direction::Up);
        nodes.push(current);

        for direction in Direction::DIRECTIONS {
            for _ in 0..side {
                current = current.step(direction);
                nodes.push(current);
            }
        }

        TrackPath { nodes }
    }

    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    /// Node count, closing node included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> IVec2 {
        self.nodes[0].position
    }

    /// Distinct cells on the loop, in travel order (the closing node is skipped).
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.nodes[..self.nodes.len() - 1].iter().map(|node| node.position)
    }

    /// Whether node `index` changes heading relative to its predecessor on the loop.
    ///
    /// Index `0` is compared against the node before the closing node, making the
    /// answer identical for the first and last node.
    pub fn is_curve(&self, index: usize) -> bool {
        let last = self.nodes.len() - 1;
        let index = if index == 0 { last } else { index };
        self.nodes[index].is_curve_after(&self.nodes[index - 1])
    }

    /// Number of heading changes around the loop.
    pub fn curve_count(&self) -> usize {
        (1..self.nodes.len()).filter(|&i| self.is_curve(i)).count()
    }

    /// Re-runs the invariant check. Pure, so repeated calls agree.
    pub fn validate(&self, constraints: &LoopConstraints) -> Result<(), ValidationError> {
        validate_nodes(&self.nodes, constraints)
    }
}

/// Checks closure, adjacency, U-turns, curve-then-straight alternation,
/// self-avoidance and straight run length, treating the sequence as a cycle.
pub fn validate_nodes(nodes: &[PathNode], constraints: &LoopConstraints) -> Result<(), ValidationError> {
    let min_loop_length = constraints.min_loop_length;
    if nodes.len() < min_loop_length.max(2) {
        return Err(ValidationError::TooShort {
            len: nodes.len(),
            min: min_loop_length,
        });
    }

    let first = nodes[0];
    let last = nodes[nodes.len() - 1];
    if first != last {
        return Err(ValidationError::NotClosed);
    }

    let mut seen = HashSet::with_capacity(nodes.len());
    seen.insert(first.position);

    for index in 1..nodes.len() {
        let previous = nodes[index - 1];
        let node = nodes[index];

        if node.position - previous.position != node.direction.as_ivec2() {
            return Err(ValidationError::NotAdjacent { index });
        }
        if node.direction == previous.direction.opposite() {
            return Err(ValidationError::UTurn { index });
        }
        if index < nodes.len() - 1 && !seen.insert(node.position) {
            return Err(ValidationError::SelfIntersection { index });
        }

        // The node after the closing node is node 1.
        let following = if index == nodes.len() - 1 { nodes[1] } else { nodes[index + 1] };
        if node.is_curve_after(&previous) && following.is_curve_after(&node) {
            let offending = if index == nodes.len() - 1 { 1 } else { index + 1 };
            return Err(ValidationError::ConsecutiveCurves { index: offending });
        }
    }

    check_straight_runs(nodes, constraints.max_straight_run)
}

/// Walks the moves once around the loop, starting after a curve so that a run
/// spanning the closing node is counted whole.
fn check_straight_runs(nodes: &[PathNode], max_straight_run: usize) -> Result<(), ValidationError> {
    let moves = nodes.len() - 1;
    let is_straight = |index: usize| !nodes[index].is_curve_after(&nodes[index - 1]);
    let Some(curve) = (1..nodes.len()).find(|&index| !is_straight(index)) else {
        return Ok(());
    };

    let mut run = 0;
    for offset in 1..=moves {
        let index = (curve - 1 + offset) % moves + 1;
        if !is_straight(index) {
            run = 0;
            continue;
        }

        run += 1;
        if run > max_straight_run {
            return Err(ValidationError::StraightRunTooLong {
                index,
                max: max_straight_run,
            });
        }
    }

    Ok(())
}
