use figment::providers::Serialized;
use figment::Jail;
use gridloop::config::{Config, LoopConstraints, SlopeConfig, TrackConfig};
use gridloop::error::ConfigError;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_defaults_match_reference_scenario() {
    let config = TrackConfig::default();

    assert_eq!(config.max_steps, 80);
    assert_eq!(config.grid_size, 40);
    assert_eq!(config.max_attempts, 200);
    assert_eq!(config.seed, None);
    assert_eq!(
        config.constraints,
        LoopConstraints {
            min_straight_run: 2,
            max_straight_run: 8,
            min_curve_run: 1,
            max_curve_run: 3,
            min_loop_length: 16,
        }
    );
    assert_that(&config.validate()).is_ok();
}

#[test]
fn test_invalid_track_configs() {
    let base = TrackConfig::default();
    let with_constraints = |constraints: LoopConstraints| TrackConfig {
        constraints,
        ..base.clone()
    };

    let test_cases = [
        ("zero grid", TrackConfig { grid_size: 0, ..base.clone() }),
        ("steps not above loop length", TrackConfig { max_steps: 16, ..base.clone() }),
        ("no attempts", TrackConfig { max_attempts: 0, ..base.clone() }),
        ("zero tile", TrackConfig { tile_size: 0.0, ..base.clone() }),
        ("nan tile", TrackConfig { tile_size: f32::NAN, ..base.clone() }),
        (
            "tiny loop",
            with_constraints(LoopConstraints {
                min_loop_length: 3,
                ..Default::default()
            }),
        ),
        (
            "zero straight cap",
            with_constraints(LoopConstraints {
                min_straight_run: 0,
                max_straight_run: 0,
                ..Default::default()
            }),
        ),
        (
            "straight range inverted",
            with_constraints(LoopConstraints {
                min_straight_run: 9,
                ..Default::default()
            }),
        ),
        (
            "zero curve cap",
            with_constraints(LoopConstraints {
                min_curve_run: 0,
                max_curve_run: 0,
                ..Default::default()
            }),
        ),
        (
            "curve range inverted",
            with_constraints(LoopConstraints {
                min_curve_run: 4,
                ..Default::default()
            }),
        ),
    ];

    for (name, config) in test_cases {
        assert!(
            matches!(config.validate(), Err(ConfigError::Invalid(_))),
            "{name} should be rejected"
        );
    }
}

#[test]
fn test_invalid_slope_configs() {
    let base = SlopeConfig::default();
    let test_cases = [
        SlopeConfig { step: 0.0, ..base.clone() },
        SlopeConfig { length: 1.0, ..base.clone() },
        SlopeConfig { step: 1e-30, ..base.clone() },
        SlopeConfig {
            length: 1e9,
            step: 1.0,
            ..base.clone()
        },
        SlopeConfig { min_drop: 30.0, ..base.clone() },
        SlopeConfig { min_drop: 0.0, ..base.clone() },
        SlopeConfig { bump_chance: 1.0, ..base.clone() },
        SlopeConfig { bump_height: -1.0, ..base.clone() },
        SlopeConfig { epsilon: f32::INFINITY, ..base.clone() },
    ];

    for config in test_cases {
        assert_that(&config.validate()).is_err();
    }
}

#[test]
fn test_figment_overrides() {
    let figment = Config::figment()
        .merge(Serialized::default("track.grid_size", 24))
        .merge(Serialized::default("track.seed", 7u64))
        .merge(Serialized::default("track.constraints.min_loop_length", 20));

    let config = Config::from_figment(figment).unwrap();

    assert_eq!(config.track.grid_size, 24);
    assert_eq!(config.track.seed, Some(7));
    assert_eq!(config.track.constraints.min_loop_length, 20);
    assert_eq!(config.track.max_steps, 80);
    assert_eq!(config.slope, SlopeConfig::default());
}

#[test]
fn test_figment_rejects_invalid_values() {
    let figment = Config::figment().merge(Serialized::default("track.max_steps", 10));
    let result = Config::from_figment(figment);
    assert!(matches!(result, Err(ConfigError::Invalid(_))));

    let figment = Config::figment().merge(Serialized::default("track.grid_size", "huge"));
    let result = Config::from_figment(figment);
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
fn test_environment_overrides() {
    Jail::expect_with(|jail| {
        jail.set_env("GRIDLOOP_TRACK__GRID_SIZE", "32");
        jail.set_env("GRIDLOOP_TRACK__CONSTRAINTS__MAX_STRAIGHT_RUN", "5");
        jail.set_env("GRIDLOOP_SLOPE__EPSILON", "2.5");

        let config = Config::load().map_err(|e| figment::Error::from(e.to_string()))?;

        assert_eq!(config.track.grid_size, 32);
        assert_eq!(config.track.constraints.max_straight_run, 5);
        assert_eq!(config.slope.epsilon, 2.5);
        Ok(())
    });
}
