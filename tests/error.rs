use gridloop::error::{ConfigError, TerrainError, TrackError, ValidationError};

#[test]
fn test_track_error_from_validation_error() {
    let validation_error = ValidationError::NotClosed;
    let track_error: TrackError = validation_error.into();
    assert!(matches!(track_error, TrackError::ValidationFailure(ValidationError::NotClosed)));
}

#[test]
fn test_track_error_from_config_error() {
    let config_error = ConfigError::Invalid("grid_size must be at least 1".to_string());
    let track_error: TrackError = config_error.into();
    assert!(matches!(track_error, TrackError::Config(_)));
}

#[test]
fn test_config_error_from_figment_error() {
    let figment_error = figment::Error::from("missing field".to_string());
    let config_error: ConfigError = figment_error.into();
    assert!(matches!(config_error, ConfigError::Load(_)));
}

#[test]
fn test_track_error_display() {
    let error = TrackError::GenerationExhausted { steps: 12 };
    assert_eq!(error.to_string(), "Generation exhausted after 12 search steps");

    let error = TrackError::AttemptBudgetExceeded { attempts: 200 };
    assert_eq!(error.to_string(), "No valid loop found in 200 attempts");

    let error = TrackError::ValidationFailure(ValidationError::UTurn { index: 3 });
    assert_eq!(error.to_string(), "Path validation failed: Node 3 reverses direction");
}

#[test]
fn test_validation_error_display() {
    let error = ValidationError::TooShort { len: 5, min: 16 };
    assert_eq!(error.to_string(), "Path has 5 nodes, at least 16 required");

    let error = ValidationError::ConsecutiveCurves { index: 7 };
    assert_eq!(error.to_string(), "Node 7 curves directly after a curve");

    let error = ValidationError::SelfIntersection { index: 4 };
    assert_eq!(error.to_string(), "Node 4 revisits an earlier cell");

    let error = ValidationError::StraightRunTooLong { index: 3, max: 8 };
    assert_eq!(error.to_string(), "Node 3 extends a straight run past 8 moves");
}

#[test]
fn test_terrain_error_display() {
    let error = TerrainError::InvalidConfig("step must be positive, got 0".to_string());
    assert_eq!(error.to_string(), "Invalid terrain configuration: step must be positive, got 0");
}
