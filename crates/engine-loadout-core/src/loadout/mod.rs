//! Loadout Evaluation
//!
//! Scores the parts installed in an engine bay against a baseline profile and
//! turns the resulting boosts into performance fractions.

mod evaluator;
mod performance;
mod slot;

pub use evaluator::{evaluate, evaluate_loadout, LoadoutResult};
pub use performance::{performance_fraction, PerformanceFractions, BOOST_WEIGHT, HEALTH_WEIGHT};
pub use slot::{Capabilities, Component, ComponentSlot, EngineItemType};
