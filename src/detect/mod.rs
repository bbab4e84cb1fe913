//! Spurious-regression detection.
//!
//! Ties the pipeline together: align the input pair, evaluate both
//! forecasters over rolling origins, mask to the origins where both produced
//! a residual, and compare the two cross-validated MSEs. A regression whose
//! CV-MSE exceeds the drift-naive CV-MSE is flagged spurious.

pub mod comparator;

pub use comparator::{compare, MsePair};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::rolling::{evaluate_origins, RollingConfig};
use crate::series::{AlignedPair, SeriesError, Truncation};

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },

    #[error(
        "Series too short: {len} aligned observations leave no origins \
         with initial window {initial} and horizon {horizon}"
    )]
    TooShort {
        len: usize,
        initial: usize,
        horizon: usize,
    },

    #[error(
        "Insufficient overlapping data for comparison: none of the {origins} \
         origins produced residuals from both models"
    )]
    InsufficientOverlap { origins: usize },
}

/// Outcome of one detector invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvResult {
    /// Cross-validated MSE of the regression forecaster.
    pub mse_regression: f64,
    /// Cross-validated MSE of the drift-naive forecaster.
    pub mse_naive: f64,
    /// Whether the regression lost to its own baseline (strict inequality;
    /// ties favor the regression).
    pub is_spurious: bool,
    /// Origins contributing to both MSEs.
    pub n_origins: usize,
    /// Origins masked out because either model had no residual there.
    pub n_masked: usize,
    /// Alignment truncation, when the inputs had unequal lengths.
    pub truncation: Option<Truncation>,
}

impl CvResult {
    /// Human-readable report.
    pub fn summary(&self) -> String {
        let verdict = if self.is_spurious {
            "SPURIOUS (the naive drift baseline beats the regression out of sample)"
        } else {
            "not spurious (the regression beats its baseline out of sample)"
        };

        let truncation_note = match self.truncation {
            Some(t) => format!(
                "\nNote: unequal input lengths; both series truncated to {} observations \
                 (response dropped {}, predictor dropped {})",
                t.aligned_len, t.response_dropped, t.predictor_dropped
            ),
            None => String::new(),
        };

        format!(
            "Spurious Regression Check\n\
             =========================\n\
             \n\
             Origins compared: {} (masked: {})\n\
             CV MSE, regression:  {:.6}\n\
             CV MSE, naive drift: {:.6}\n\
             Verdict: {}{}",
            self.n_origins,
            self.n_masked,
            self.mse_regression,
            self.mse_naive,
            verdict,
            truncation_note
        )
    }
}

/// Run the detector on a response/predictor pair.
///
/// Validates the inputs and parameters, aligns the pair (truncating with a
/// warning when lengths differ), evaluates both forecasters at every rolling
/// origin, and compares the two CV-MSEs over the symmetric-masked origin set.
/// All failure modes are local to this call.
pub fn detect_spurious_regression(
    response: &[f64],
    predictor: &[f64],
    config: &RollingConfig,
) -> Result<CvResult, DetectorError> {
    if config.horizon == 0 {
        return Err(DetectorError::InvalidParameter {
            name: "horizon",
            reason: "must be at least 1",
        });
    }
    if config.initial == 0 {
        return Err(DetectorError::InvalidParameter {
            name: "initial",
            reason: "must be at least 1",
        });
    }

    let pair = AlignedPair::align(response, predictor)?;

    let residuals = evaluate_origins(&pair, config);
    if residuals.is_empty() {
        return Err(DetectorError::TooShort {
            len: pair.len(),
            initial: config.initial,
            horizon: config.horizon,
        });
    }

    let mse = compare(&residuals)?;
    let result = CvResult {
        mse_regression: mse.regression,
        mse_naive: mse.naive,
        is_spurious: mse.regression > mse.naive,
        n_origins: mse.n_origins,
        n_masked: mse.n_masked,
        truncation: pair.truncation(),
    };

    info!(
        n_origins = result.n_origins,
        mse_regression = result.mse_regression,
        mse_naive = result.mse_naive,
        is_spurious = result.is_spurious,
        "cross-validation complete"
    );

    Ok(result)
}
