//! Generator configuration, loaded from defaults and `GRIDLOOP_*` environment variables.

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, ConfigResult, TerrainError, TerrainResult};

/// Prefix for environment overrides. Nested keys are separated by `__`,
/// e.g. `GRIDLOOP_TRACK__CONSTRAINTS__MIN_LOOP_LENGTH=24`.
pub const ENV_PREFIX: &str = "GRIDLOOP_";

/// Bounds on runs of straights and curves, and on the total loop length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConstraints {
    /// Straights preferred after a curve before another curve is encouraged.
    pub min_straight_run: usize,
    /// Hard cap on consecutive straights.
    pub max_straight_run: usize,
    pub min_curve_run: usize,
    /// Hard cap on consecutive curves. Curves never follow curves, so anything above 1 is permissive.
    pub max_curve_run: usize,
    /// Minimum node count of a closed loop, closing node included.
    pub min_loop_length: usize,
}

impl Default for LoopConstraints {
    fn default() -> Self {
        Self {
            min_straight_run: DEFAULT_MIN_STRAIGHT_RUN,
            max_straight_run: DEFAULT_MAX_STRAIGHT_RUN,
            min_curve_run: DEFAULT_MIN_CURVE_RUN,
            max_curve_run: DEFAULT_MAX_CURVE_RUN,
            min_loop_length: DEFAULT_MIN_LOOP_LENGTH,
        }
    }
}

/// Parameters for closed-loop track generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Upper bound on path length (in nodes) during a single attempt.
    pub max_steps: usize,
    /// Side length of the square grid, in cells.
    pub grid_size: u32,
    /// Attempts before the fallback loop is substituted.
    pub max_attempts: u32,
    /// Fixed RNG seed for reproducible tracks. Drawn from entropy when unset.
    pub seed: Option<u64>,
    /// Tile size used when placing segments in world space.
    pub tile_size: f32,
    pub constraints: LoopConstraints,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            grid_size: DEFAULT_GRID_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
            tile_size: TILE_SIZE,
            constraints: LoopConstraints::default(),
        }
    }
}

impl TrackConfig {
    /// Checks that the parameters describe a searchable problem.
    ///
    /// A grid too small to hold a loop is deliberately accepted: it exhausts
    /// every attempt and resolves to the fallback loop.
    pub fn validate(&self) -> ConfigResult<()> {
        let c = &self.constraints;
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.grid_size == 0 {
            return invalid("grid_size must be at least 1".to_string());
        }
        if c.min_loop_length < MIN_LOOP_LENGTH_FLOOR {
            return invalid(format!(
                "min_loop_length must be at least {MIN_LOOP_LENGTH_FLOOR}, got {}",
                c.min_loop_length
            ));
        }
        if self.max_steps <= c.min_loop_length {
            return invalid(format!(
                "max_steps ({}) must exceed min_loop_length ({})",
                self.max_steps, c.min_loop_length
            ));
        }
        if c.max_straight_run == 0 {
            return invalid("max_straight_run must be at least 1".to_string());
        }
        if c.min_straight_run > c.max_straight_run {
            return invalid(format!(
                "min_straight_run ({}) exceeds max_straight_run ({})",
                c.min_straight_run, c.max_straight_run
            ));
        }
        if c.max_curve_run == 0 {
            return invalid("max_curve_run must be at least 1".to_string());
        }
        if c.min_curve_run > c.max_curve_run {
            return invalid(format!(
                "min_curve_run ({}) exceeds max_curve_run ({})",
                c.min_curve_run, c.max_curve_run
            ));
        }
        if self.max_attempts == 0 {
            return invalid("max_attempts must be at least 1".to_string());
        }
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return invalid(format!("tile_size must be positive, got {}", self.tile_size));
        }

        Ok(())
    }
}

/// Parameters for the downhill slope generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlopeConfig {
    /// Horizontal extent of the slope, in pixels.
    pub length: f32,
    /// Horizontal distance between raw samples.
    pub step: f32,
    pub min_drop: f32,
    pub max_drop: f32,
    /// Probability of a rise instead of a drop at each sample.
    pub bump_chance: f64,
    pub bump_height: f32,
    /// Douglas-Peucker tolerance applied to the raw samples.
    pub epsilon: f32,
}

impl Default for SlopeConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_SLOPE_LENGTH,
            step: DEFAULT_SLOPE_STEP,
            min_drop: DEFAULT_SLOPE_MIN_DROP,
            max_drop: DEFAULT_SLOPE_MAX_DROP,
            bump_chance: DEFAULT_SLOPE_BUMP_CHANCE,
            bump_height: DEFAULT_SLOPE_BUMP_HEIGHT,
            epsilon: DEFAULT_SLOPE_EPSILON,
        }
    }
}

impl SlopeConfig {
    pub fn validate(&self) -> TerrainResult<()> {
        let invalid = |msg: String| Err(TerrainError::InvalidConfig(msg));

        if !(self.step.is_finite() && self.step > 0.0) {
            return invalid(format!("step must be positive, got {}", self.step));
        }
        if !(self.length.is_finite() && self.length >= self.step) {
            return invalid(format!("length ({}) must be at least one step ({})", self.length, self.step));
        }
        if self.length / self.step > MAX_SLOPE_SAMPLES as f32 {
            return invalid(format!(
                "length / step must not exceed {MAX_SLOPE_SAMPLES} samples, got {}",
                self.length / self.step
            ));
        }
        if !(self.min_drop > 0.0 && self.min_drop < self.max_drop && self.max_drop.is_finite()) {
            return invalid(format!(
                "drop range must satisfy 0 < min_drop < max_drop, got {}..{}",
                self.min_drop, self.max_drop
            ));
        }
        if !(0.0..1.0).contains(&self.bump_chance) {
            return invalid(format!("bump_chance must be in [0, 1), got {}", self.bump_chance));
        }
        if !(self.bump_height >= 0.0 && self.bump_height.is_finite()) {
            return invalid(format!("bump_height must be non-negative, got {}", self.bump_height));
        }
        if !self.epsilon.is_finite() {
            return invalid(format!("epsilon must be finite, got {}", self.epsilon));
        }

        Ok(())
    }
}

/// Top-level configuration for the demo binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub track: TrackConfig,
    pub slope: SlopeConfig,
}

impl Config {
    /// Extracts and validates a configuration from an arbitrary figment.
    pub fn from_figment(figment: Figment) -> ConfigResult<Config> {
        let config: Config = figment.extract()?;
        config.track.validate()?;
        config
            .slope
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(config)
    }

    /// Defaults merged with `GRIDLOOP_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load() -> ConfigResult<Config> {
        Self::from_figment(Self::figment())
    }
}
