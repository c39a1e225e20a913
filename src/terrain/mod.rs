//! Procedural terrain profiles.

pub mod simplify;
pub mod slope;

pub use simplify::{perpendicular_distance, simplify};
pub use slope::{generate_slope, Slope};
