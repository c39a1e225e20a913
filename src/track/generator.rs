//! Randomized closed-loop search on the track grid.
//!
//! A single attempt is a greedy depth-first walk: from the current cell it scores
//! the (at most three) legal moves and takes the best one, backtracking when it
//! runs out of moves. The path vector doubles as the search stack.

use std::collections::HashSet;

use glam::IVec2;
use rand::seq::IndexedRandom;
use rand::Rng;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::config::{LoopConstraints, TrackConfig};
use crate::constants::{CURVE_READY_BONUS, HOMING_WEIGHT, SEARCH_BUDGET_FACTOR, SHORT_RUN_BONUS};
use crate::error::{ConfigResult, TrackError, TrackResult};
use crate::grid::{self, Direction};
use crate::track::path::{PathNode, TrackPath};

/// Where a track came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackSource {
    /// Found by the search on the given (1-based) attempt.
    Generated { attempt: u32 },
    /// Every attempt failed; the deterministic rectangle was substituted.
    Fallback,
}

/// A loop ready for the host game, along with how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTrack {
    pub path: TrackPath,
    pub source: TrackSource,
}

impl GeneratedTrack {
    pub fn is_fallback(&self) -> bool {
        self.source == TrackSource::Fallback
    }
}

/// Generates closed loops for a fixed, validated configuration.
#[derive(Debug, Clone)]
pub struct LoopGenerator {
    config: TrackConfig,
}

impl LoopGenerator {
    pub fn new(config: TrackConfig) -> ConfigResult<LoopGenerator> {
        config.validate()?;
        Ok(LoopGenerator { config })
    }

    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    /// Runs a single search attempt.
    ///
    /// Fails with [`TrackError::GenerationExhausted`] when the search cannot close a
    /// loop, or [`TrackError::ValidationFailure`] if the finished loop breaks an invariant.
    pub fn generate_loop<R: Rng + ?Sized>(&self, rng: &mut R) -> TrackResult<TrackPath> {
        let nodes = Search::new(&self.config).run(rng)?;
        Ok(TrackPath::new(nodes, &self.config.constraints)?)
    }

    /// Runs up to `max_attempts` searches, returning the first loop and its attempt number.
    pub fn generate_with_retries<R: Rng + ?Sized>(&self, rng: &mut R) -> TrackResult<(TrackPath, u32)> {
        for attempt in 1..=self.config.max_attempts {
            match self.generate_loop(rng) {
                Ok(path) => {
                    debug!(attempt, nodes = path.len(), "Generated closed loop");
                    return Ok((path, attempt));
                }
                Err(err @ (TrackError::GenerationExhausted { .. } | TrackError::ValidationFailure(_))) => {
                    trace!(attempt, error = %err, "Generation attempt failed");
                }
                Err(err) => return Err(err),
            }
        }

        Err(TrackError::AttemptBudgetExceeded {
            attempts: self.config.max_attempts,
        })
    }

    /// Always produces a track, substituting the fallback loop when every attempt fails.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> GeneratedTrack {
        match self.generate_with_retries(rng) {
            Ok((path, attempt)) => GeneratedTrack {
                path,
                source: TrackSource::Generated { attempt },
            },
            Err(err) => {
                warn!(error = %err, grid_size = self.config.grid_size, "Using fallback loop");
                GeneratedTrack {
                    path: TrackPath::fallback(&self.config.constraints),
                    source: TrackSource::Fallback,
                }
            }
        }
    }
}

/// Single-attempt generation from loose parameters.
pub fn generate_loop<R: Rng + ?Sized>(
    max_steps: usize,
    grid_size: u32,
    constraints: LoopConstraints,
    rng: &mut R,
) -> TrackResult<TrackPath> {
    let config = TrackConfig {
        max_steps,
        grid_size,
        constraints,
        ..Default::default()
    };
    LoopGenerator::new(config)?.generate_loop(rng)
}

/// Consecutive straights and curves at the tail of the path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RunCounters {
    straight: usize,
    curve: usize,
}

impl RunCounters {
    fn advance(&mut self, is_curve: bool) {
        if is_curve {
            self.curve += 1;
            self.straight = 0;
        } else {
            self.straight += 1;
            self.curve = 0;
        }
    }

    /// Recounts the tail runs from scratch, used after backtracking.
    fn rescan(nodes: &[PathNode]) -> RunCounters {
        let mut runs = RunCounters::default();
        if nodes.len() < 2 {
            return runs;
        }

        let tail_is_curve = nodes[nodes.len() - 1].is_curve_after(&nodes[nodes.len() - 2]);
        for pair in nodes.windows(2).rev() {
            if pair[1].is_curve_after(&pair[0]) != tail_is_curve {
                break;
            }
            runs.advance(tail_is_curve);
        }
        runs
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    direction: Direction,
    cell: IVec2,
    is_curve: bool,
    closes: bool,
    score: f32,
}

/// Mutable state of one generation attempt.
struct Search<'a> {
    config: &'a TrackConfig,
    start: IVec2,
    nodes: Vec<PathNode>,
    visited: HashSet<IVec2>,
    /// Directions already explored out of each node, aligned with `nodes`.
    tried: Vec<SmallVec<[Direction; 3]>>,
    runs: RunCounters,
    expansions: usize,
}

impl<'a> Search<'a> {
    fn new(config: &'a TrackConfig) -> Search<'a> {
        let start = grid::center_cell(config.grid_size);
        let mut nodes = Vec::with_capacity(config.max_steps + 1);
        nodes.push(PathNode::new(start, Direction::default()));

        Search {
            config,
            start,
            nodes,
            visited: HashSet::from([start]),
            tried: vec![SmallVec::new()],
            runs: RunCounters::default(),
            expansions: 0,
        }
    }

    fn constraints(&self) -> &LoopConstraints {
        &self.config.constraints
    }

    fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> TrackResult<Vec<PathNode>> {
        let budget = self.config.max_steps * SEARCH_BUDGET_FACTOR;

        loop {
            if self.expansions >= budget {
                trace!(expansions = self.expansions, nodes = self.nodes.len(), "Search budget spent");
                return Err(TrackError::GenerationExhausted { steps: self.expansions });
            }
            self.expansions += 1;

            let choice = if self.nodes.len() == 1 {
                self.first_move(rng)
            } else if self.nodes.len() < self.config.max_steps {
                self.best_move(rng)
            } else {
                None
            };

            match choice {
                Some(candidate) if candidate.closes => {
                    let closing = PathNode::new(candidate.cell, candidate.direction);
                    self.nodes.push(closing);
                    // The start cell is entered by the closing move, so it carries that heading.
                    self.nodes[0].direction = closing.direction;
                    return Ok(self.nodes);
                }
                Some(candidate) => self.push(candidate),
                None if self.nodes.len() == 1 => {
                    return Err(TrackError::GenerationExhausted { steps: self.expansions });
                }
                None => self.backtrack(),
            }
        }
    }

    /// The first move always turns off the start heading.
    fn first_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Candidate> {
        let heading = self.nodes[0].direction;
        let options: SmallVec<[Candidate; 2]> = heading
            .perpendicular()
            .into_iter()
            .filter(|direction| !self.tried[0].contains(direction))
            .map(|direction| Candidate {
                direction,
                cell: self.start + direction.as_ivec2(),
                is_curve: true,
                closes: false,
                score: 0.0,
            })
            .filter(|candidate| grid::in_bounds(candidate.cell, self.config.grid_size))
            .collect();

        options.choose(rng).copied()
    }

    fn best_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Candidate> {
        let constraints = self.constraints();
        let len = self.nodes.len();
        let current = self.nodes[len - 1];
        let previous_was_curve = current.is_curve_after(&self.nodes[len - 2]);
        let progress = len as f32 / self.config.max_steps as f32;

        let mut best: Option<Candidate> = None;
        for direction in current.direction.forward_options() {
            if self.tried[len - 1].contains(&direction) {
                continue;
            }

            let cell = current.position + direction.as_ivec2();
            if !grid::in_bounds(cell, self.config.grid_size) {
                continue;
            }

            let is_curve = direction != current.direction;
            if is_curve && previous_was_curve {
                continue;
            }
            if !is_curve && self.runs.straight + 1 > constraints.max_straight_run {
                continue;
            }
            if is_curve && self.runs.curve + 1 > constraints.max_curve_run {
                continue;
            }

            let closes = cell == self.start && len + 1 >= constraints.min_loop_length && self.closure_fits(direction);
            if !closes && self.visited.contains(&cell) {
                continue;
            }

            let score = if closes {
                f32::NEG_INFINITY
            } else {
                let mut score = rng.random::<f32>();
                if !is_curve && self.runs.straight < constraints.min_straight_run {
                    score -= SHORT_RUN_BONUS;
                }
                if is_curve && self.runs.straight >= constraints.min_straight_run {
                    score -= CURVE_READY_BONUS;
                }
                score + grid::manhattan(cell, self.start) as f32 * HOMING_WEIGHT * progress * progress
            };

            let candidate = Candidate {
                direction,
                cell,
                is_curve,
                closes,
                score,
            };
            if best.is_none_or(|b| candidate.score < b.score) {
                best = Some(candidate);
            }
        }

        best
    }

    /// Whether entering the start cell heading `direction` keeps the loop valid
    /// where it wraps around onto the first move.
    fn closure_fits(&self, direction: Direction) -> bool {
        let current = self.nodes[self.nodes.len() - 1];
        let first = self.nodes[1].direction;
        let second = self.nodes[2].direction;

        if first == direction.opposite() {
            return false;
        }
        if direction != current.direction && first != direction {
            return false;
        }
        if first != direction {
            return second == first;
        }

        // Node 1 now continues the closing heading, joining the tail and head straights.
        let closing_run = if direction == current.direction { self.runs.straight + 1 } else { 0 };
        closing_run + self.head_straight_run() <= self.constraints().max_straight_run
    }

    /// Straight moves at the head of the path, counting node 1 as a straight.
    fn head_straight_run(&self) -> usize {
        1 + self.nodes[1..]
            .windows(2)
            .take_while(|pair| !pair[1].is_curve_after(&pair[0]))
            .count()
    }

    fn push(&mut self, candidate: Candidate) {
        self.nodes.push(PathNode::new(candidate.cell, candidate.direction));
        self.visited.insert(candidate.cell);
        self.tried.push(SmallVec::new());
        self.runs.advance(candidate.is_curve);
    }

    fn backtrack(&mut self) {
        let Some(popped) = self.nodes.pop() else {
            return;
        };
        self.visited.remove(&popped.position);
        self.tried.pop();
        if let Some(parent) = self.tried.last_mut() {
            parent.push(popped.direction);
        }
        self.runs = RunCounters::rescan(&self.nodes);

        trace!(
            cell = %popped.position,
            direction = popped.direction.as_ref(),
            nodes = self.nodes.len(),
            "Backtracked"
        );
    }
}
