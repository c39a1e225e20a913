//! This module contains the tuning constants and defaults used by the generators.

/// The size of each track tile, in pixels.
pub const TILE_SIZE: f32 = 64.0;

/// Default side length of the track grid, in cells.
pub const DEFAULT_GRID_SIZE: u32 = 40;
/// Default upper bound on the number of nodes in a generated path.
pub const DEFAULT_MAX_STEPS: usize = 80;
/// Default number of generation attempts before the fallback loop is used.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 200;

pub const DEFAULT_MIN_STRAIGHT_RUN: usize = 2;
pub const DEFAULT_MAX_STRAIGHT_RUN: usize = 8;
pub const DEFAULT_MIN_CURVE_RUN: usize = 1;
pub const DEFAULT_MAX_CURVE_RUN: usize = 3;
/// Default minimum node count (closing node included) for an accepted loop.
pub const DEFAULT_MIN_LOOP_LENGTH: usize = 16;

/// The smallest loop the generator will accept, whatever the configuration says.
pub const MIN_LOOP_LENGTH_FLOOR: usize = 4;

/// Search expansions allowed per attempt, as a multiple of `max_steps`.
pub const SEARCH_BUDGET_FACTOR: usize = 40;

/// Score bonus for continuing straight while the run is still below the minimum.
pub const SHORT_RUN_BONUS: f32 = 1.0;
/// Score bonus for curving once the minimum straight run has been met.
pub const CURVE_READY_BONUS: f32 = 0.5;
/// Weight of the distance-to-start bias at the end of the step budget.
pub const HOMING_WEIGHT: f32 = 2.0;

/// Default horizontal extent of a generated slope, in pixels.
pub const DEFAULT_SLOPE_LENGTH: f32 = 4096.0;
/// Default horizontal distance between raw slope samples, in pixels.
pub const DEFAULT_SLOPE_STEP: f32 = 32.0;
pub const DEFAULT_SLOPE_MIN_DROP: f32 = 4.0;
pub const DEFAULT_SLOPE_MAX_DROP: f32 = 24.0;
/// Chance per sample of a small rise instead of a drop.
pub const DEFAULT_SLOPE_BUMP_CHANCE: f64 = 0.1;
pub const DEFAULT_SLOPE_BUMP_HEIGHT: f32 = 8.0;
/// Default Douglas-Peucker tolerance, in pixels.
pub const DEFAULT_SLOPE_EPSILON: f32 = 6.0;
/// Upper bound on raw samples in one slope (`length / step`).
pub const MAX_SLOPE_SAMPLES: usize = 1 << 16;
