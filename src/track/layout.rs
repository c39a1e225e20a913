//! World-space placement of track tiles.
//!
//! The host game draws one tile per cell of the loop. Straight tiles are drawn
//! horizontally at 0 degrees; curve tiles are drawn as a corner joining the left
//! and bottom edges at 0 degrees. Rotations are clockwise in screen space.

use glam::{IVec2, Vec2};
use strum_macros::AsRefStr;

use crate::grid::{self, Direction};
use crate::track::path::TrackPath;

/// The shape of a single track tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SegmentKind {
    Straight,
    Curved,
}

/// Direct rotation entries for curve tiles. Each reversed pair is derived.
const CURVE_ANGLES: [((Direction, Direction), f32); 4] = [
    ((Direction::Right, Direction::Down), 0.0),
    ((Direction::Down, Direction::Left), 90.0),
    ((Direction::Left, Direction::Up), 180.0),
    ((Direction::Up, Direction::Right), 270.0),
];

/// Classifies the tile where heading `from` turns into heading `to`.
///
/// Returns `None` for a U-turn, which has no tile.
pub fn segment_kind(from: Direction, to: Direction) -> Option<SegmentKind> {
    if from == to {
        Some(SegmentKind::Straight)
    } else if from == to.opposite() {
        None
    } else {
        Some(SegmentKind::Curved)
    }
}

/// Rotation in degrees for the tile where heading `from` turns into heading `to`.
///
/// Returns `None` for a U-turn.
pub fn segment_angle(from: Direction, to: Direction) -> Option<f32> {
    match segment_kind(from, to)? {
        SegmentKind::Straight => Some(if from.is_horizontal() { 0.0 } else { 90.0 }),
        SegmentKind::Curved => curve_angle(from, to).or_else(|| curve_angle(to, from).map(|angle| (angle + 180.0) % 360.0)),
    }
}

fn curve_angle(from: Direction, to: Direction) -> Option<f32> {
    CURVE_ANGLES
        .iter()
        .find(|((a, b), _)| *a == from && *b == to)
        .map(|(_, angle)| *angle)
}

/// A single tile of the track, ready to be placed by the host engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub cell: IVec2,
    pub kind: SegmentKind,
    /// Heading of travel into the tile.
    pub entry: Direction,
    /// Heading of travel out of the tile.
    pub exit: Direction,
    /// Clockwise rotation, in degrees.
    pub rotation: f32,
    /// Centre of the tile in world space.
    pub position: Vec2,
}

/// Axis-aligned world-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl WorldBounds {
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Grows the bounds by `margin` on every side.
    pub fn padded(&self, margin: f32) -> WorldBounds {
        WorldBounds {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }
}

/// Every tile of a loop, in travel order starting at the start cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackLayout {
    pub tile_size: f32,
    pub segments: Vec<Segment>,
}

impl TrackLayout {
    /// Lays out one tile per distinct cell of `path`.
    ///
    /// The tile on a node's cell turns from that node's heading into the next
    /// node's heading. The closing node shares the start's heading, so the start
    /// tile is classified like any other.
    pub fn from_path(path: &TrackPath, tile_size: f32) -> TrackLayout {
        let segments = path
            .nodes()
            .windows(2)
            .map(|pair| {
                let (node, next) = (pair[0], pair[1]);
                // Validated paths contain no U-turns, so neither lookup can miss.
                let kind = segment_kind(node.direction, next.direction).unwrap_or(SegmentKind::Straight);
                let rotation = segment_angle(node.direction, next.direction).unwrap_or_default();
                Segment {
                    cell: node.position,
                    kind,
                    entry: node.direction,
                    exit: next.direction,
                    rotation,
                    position: grid::cell_center(node.position, tile_size),
                }
            })
            .collect();

        TrackLayout { tile_size, segments }
    }

    pub fn count(&self, kind: SegmentKind) -> usize {
        self.segments.iter().filter(|segment| segment.kind == kind).count()
    }

    /// Bounds covering every tile in full.
    pub fn bounds(&self) -> WorldBounds {
        let half = Vec2::splat(self.tile_size / 2.0);
        let (min, max) = self.segments.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), segment| (min.min(segment.position - half), max.max(segment.position + half)),
        );

        if self.segments.is_empty() {
            WorldBounds {
                min: Vec2::ZERO,
                max: Vec2::ZERO,
            }
        } else {
            WorldBounds { min, max }
        }
    }
}
