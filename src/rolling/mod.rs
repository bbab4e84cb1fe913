//! Rolling-origin cross-validation.
//!
//! Generates the valid rolling origins for a series and evaluates both
//! forecasters at each one, producing per-origin residual pairs.

pub mod evaluator;
pub mod origins;

pub use evaluator::{evaluate_origins, OriginResidual};
pub use origins::{Origin, RollingConfig, RollingOrigins};
