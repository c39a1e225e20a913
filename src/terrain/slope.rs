//! Downhill height profiles for sledding and skiing levels.
//!
//! Coordinates are in screen space: `x` grows to the right and `y` grows
//! downwards, so a slope that falls away has increasing `y`.

use glam::Vec2;
use rand::Rng;
use tracing::debug;

use crate::config::SlopeConfig;
use crate::error::TerrainResult;
use crate::terrain::simplify::simplify;

/// A generated slope: the raw samples and the simplified outline used for colliders.
#[derive(Debug, Clone, PartialEq)]
pub struct Slope {
    pub samples: Vec<Vec2>,
    pub outline: Vec<Vec2>,
}

impl Slope {
    /// Generates a slope and simplifies it with the configured tolerance.
    pub fn generate<R: Rng + ?Sized>(config: &SlopeConfig, rng: &mut R) -> TerrainResult<Slope> {
        let samples = generate_slope(config, rng)?;
        let outline = simplify(&samples, config.epsilon);
        debug!(
            samples = samples.len(),
            outline = outline.len(),
            drop = samples.last().map(|p| p.y).unwrap_or_default(),
            "Generated slope"
        );
        Ok(Slope { samples, outline })
    }

    /// Total height lost between the first and last point.
    pub fn total_drop(&self) -> f32 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.y - first.y,
            _ => 0.0,
        }
    }
}

/// Samples a height profile every `step` pixels from `x = 0` up to `length`.
///
/// Each sample drops by a random amount, or now and then rises by
/// `bump_height` instead. The profile never climbs above its starting height,
/// and the final sample always drops, so the slope ends lower than it starts.
pub fn generate_slope<R: Rng + ?Sized>(config: &SlopeConfig, rng: &mut R) -> TerrainResult<Vec<Vec2>> {
    config.validate()?;

    let count = (config.length / config.step).floor() as usize;
    let mut points = Vec::with_capacity(count + 1);
    points.push(Vec2::ZERO);

    let mut height = 0.0f32;
    for i in 1..=count {
        let bump = i < count && rng.random_bool(config.bump_chance);
        let delta = if bump {
            -config.bump_height
        } else {
            rng.random_range(config.min_drop..config.max_drop)
        };
        height = (height + delta).max(0.0);
        points.push(Vec2::new(i as f32 * config.step, height));
    }

    Ok(points)
}
