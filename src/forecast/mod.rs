//! The two competing one-step-ahead forecasters.
//!
//! Both follow a fit-then-forecast split: fitting consumes only the training
//! window, forecasting extrapolates `h` positions past its end. A failed fit
//! or forecast surfaces as an error that the rolling evaluator turns into a
//! missing residual at that origin.

pub mod drift;
pub mod regression;

pub use drift::DriftForecast;
pub use regression::OlsFit;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    #[error("Insufficient training data: need {required} observations, have {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Training window length mismatch: response {response}, predictor {predictor}")]
    LengthMismatch { response: usize, predictor: usize },

    #[error("Singular design: predictor has no variance over the training window")]
    SingularDesign,

    #[error("Need {required} future predictor values, have {actual}")]
    MissingFuture { required: usize, actual: usize },
}
