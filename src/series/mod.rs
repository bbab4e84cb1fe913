//! Series types and input alignment.
//!
//! A series is an ordered sequence of finite `f64` observations indexed by
//! position. Alignment truncates a response/predictor pair to their common
//! prefix before any cross-validation runs.

pub mod types;

pub use types::{AlignedPair, SeriesError, Truncation};
