//! Closed-loop race track generation.

pub mod generator;
pub mod layout;
pub mod path;
pub mod render;

pub use generator::{generate_loop, GeneratedTrack, LoopGenerator, TrackSource};
pub use layout::{SegmentKind, TrackLayout, WorldBounds};
pub use path::{PathNode, TrackPath};
