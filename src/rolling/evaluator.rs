//! Per-origin forecaster evaluation.
//!
//! Runs both forecasters at every rolling origin and records one signed
//! residual per model. A forecaster that cannot produce a forecast at an
//! origin leaves an explicit `None` there; evaluation continues.

use serde::{Deserialize, Serialize};

use crate::forecast::{DriftForecast, OlsFit};
use crate::series::AlignedPair;

use super::origins::{RollingConfig, RollingOrigins};

/// Residuals (`actual - predicted`) for one rolling origin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OriginResidual {
    /// The origin `t` (end of the training window, exclusive).
    pub origin: usize,
    /// Regression residual; `None` when the fit or forecast failed.
    pub regression: Option<f64>,
    /// Drift-naive residual; `None` when the fit failed.
    pub naive: Option<f64>,
}

/// Evaluate both forecasters at every valid origin of an aligned pair.
///
/// Each origin is a pure function of its training window `[0, t)`: the
/// regression is fit on response and predictor over the window and applied
/// to the `h` future predictor values, the drift forecaster on the response
/// window alone. The residual is taken at horizon offset `h`.
pub fn evaluate_origins(pair: &AlignedPair, config: &RollingConfig) -> Vec<OriginResidual> {
    let y = pair.response();
    let x = pair.predictor();
    let h = config.horizon;

    RollingOrigins::new(config.clone(), pair.len())
        .generate()
        .into_iter()
        .map(|origin| {
            let t = origin.train_end;
            let actual = y[origin.test_index];

            let regression = OlsFit::fit(&y[..t], &x[..t])
                .and_then(|fit| fit.forecast(&x[t..], h))
                .map(|forecasts| actual - forecasts[h - 1])
                .ok();

            let naive = DriftForecast::fit(&y[..t])
                .map(|model| actual - model.forecast(h)[h - 1])
                .ok();

            OriginResidual {
                origin: t,
                regression,
                naive,
            }
        })
        .collect()
}
