//! Seeded simulation studies.
//!
//! Generates non-stationary series pairs with known structure (independent
//! random walks, trending walks) and measures how often the detector flags
//! them across many seeded trials.

pub mod generators;
pub mod study;

pub use generators::{random_walk, random_walk_pair, trending_pair, trending_walk};
pub use study::{run_study, run_study_with_progress, Scenario, SimulationConfig, SimulationSummary};
