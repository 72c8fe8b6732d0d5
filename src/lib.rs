//! Randomized fleet-layout generation for grid board games.
//!
//! The core entry point is [`FleetPlacer`], which races several independent
//! placement attempts against a shared timeout and returns the first finished
//! layout. Everything below it (coordinates, chains, strategies, the
//! per-attempt availability grid) is exposed so callers can build custom
//! placement flows or validate layouts of their own.

mod chain;
mod common;
mod coord;
mod fleet;
mod grid;
mod logging;
mod placer;
mod settings;
mod strategy;

pub use chain::*;
pub use common::*;
pub use coord::*;
pub use fleet::*;
pub use grid::*;
pub use logging::init_logging;
pub use placer::*;
pub use settings::*;
pub use strategy::*;
