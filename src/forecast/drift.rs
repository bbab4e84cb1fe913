//! Drift-naive baseline forecaster.
//!
//! Extrapolates a straight line through the first and last training
//! observations: `forecast(t + k) = y[t-1] + k * drift` with
//! `drift = (y[t-1] - y[0]) / (t-1)`. Uses nothing but the response's own
//! history.

use serde::{Deserialize, Serialize};

use super::ForecastError;

/// A fitted drift-naive forecaster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DriftForecast {
    last: f64,
    drift: f64,
    n_observations: usize,
}

impl DriftForecast {
    /// Fit from a training window.
    ///
    /// A single observation yields zero drift (flat extrapolation); an empty
    /// window is a fit failure.
    pub fn fit(y: &[f64]) -> Result<Self, ForecastError> {
        let n = y.len();
        if n == 0 {
            return Err(ForecastError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        let drift = if n == 1 {
            0.0
        } else {
            (y[n - 1] - y[0]) / (n - 1) as f64
        };

        Ok(Self {
            last: y[n - 1],
            drift,
            n_observations: n,
        })
    }

    /// Per-step drift.
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Number of observations the fit used.
    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Point forecasts for `horizon` future positions.
    pub fn forecast(&self, horizon: usize) -> Vec<f64> {
        (1..=horizon)
            .map(|k| self.last + k as f64 * self.drift)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_window_is_extrapolated_exactly() {
        // y[i] = 4 + 1.5 * i
        let y: Vec<f64> = (0..10).map(|i| 4.0 + 1.5 * i as f64).collect();
        let model = DriftForecast::fit(&y).unwrap();

        assert!((model.drift() - 1.5).abs() < 1e-10);

        let forecasts = model.forecast(3);
        for (k, f) in forecasts.iter().enumerate() {
            let expected = 4.0 + 1.5 * (9 + k + 1) as f64;
            assert!((f - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn test_single_observation_flat() {
        let model = DriftForecast::fit(&[7.5]).unwrap();
        assert_eq!(model.drift(), 0.0);
        assert_eq!(model.forecast(3), vec![7.5, 7.5, 7.5]);
    }

    #[test]
    fn test_empty_window_fails() {
        let err = DriftForecast::fit(&[]).unwrap_err();
        assert_eq!(
            err,
            ForecastError::InsufficientData {
                required: 1,
                actual: 0
            }
        );
    }

    #[test]
    fn test_drift_uses_endpoints_only() {
        // Interior values do not matter, only first and last.
        let model = DriftForecast::fit(&[0.0, 100.0, -50.0, 10.0]).unwrap();
        assert!((model.drift() - 10.0 / 3.0).abs() < 1e-10);
        assert!((model.forecast(1)[0] - (10.0 + 10.0 / 3.0)).abs() < 1e-10);
    }
}
