//! Centralized error types for track and terrain generation.
//!
//! Generation failures are ordinary values: callers retry or fall back,
//! nothing here is meant to bring down the host game.

/// Main error type for track generation.
#[derive(thiserror::Error, Debug)]
pub enum TrackError {
    /// The search ran out of moves (or search budget) without closing the loop.
    #[error("Generation exhausted after {steps} search steps")]
    GenerationExhausted { steps: usize },

    /// A finished path failed the post-generation invariant check.
    #[error("Path validation failed: {0}")]
    ValidationFailure(#[from] ValidationError),

    /// Every allowed attempt failed.
    #[error("No valid loop found in {attempts} attempts")]
    AttemptBudgetExceeded { attempts: u32 },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// A broken path invariant, with the index of the offending node.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Path has {len} nodes, at least {min} required")]
    TooShort { len: usize, min: usize },

    #[error("Path does not return to its starting cell and heading")]
    NotClosed,

    #[error("Node {index} is not one step from its predecessor")]
    NotAdjacent { index: usize },

    #[error("Node {index} reverses direction")]
    UTurn { index: usize },

    #[error("Node {index} curves directly after a curve")]
    ConsecutiveCurves { index: usize },

    #[error("Node {index} revisits an earlier cell")]
    SelfIntersection { index: usize },

    #[error("Node {index} extends a straight run past {max} moves")]
    StraightRunTooLong { index: usize, max: usize },
}

/// Errors raised while loading or validating configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Errors related to terrain generation.
#[derive(thiserror::Error, Debug)]
pub enum TerrainError {
    #[error("Invalid terrain configuration: {0}")]
    InvalidConfig(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Load(Box::new(err))
    }
}

/// Result type for track generation.
pub type TrackResult<T> = Result<T, TrackError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for terrain generation.
pub type TerrainResult<T> = Result<T, TerrainError>;
