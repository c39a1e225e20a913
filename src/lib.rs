//! Procedural level geometry for arcade racing and sledding prototypes.
//!
//! The main entry point is [`track::LoopGenerator`], which searches an integer grid for
//! closed race loops. [`terrain`] generates downhill slope profiles.

pub mod config;
pub mod constants;
pub mod error;
pub mod grid;
pub mod logging;
pub mod rng;
pub mod terrain;
pub mod track;
