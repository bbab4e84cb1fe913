//! Ordinary least squares regression forecaster.
//!
//! Fits `y = intercept + slope * x` over the training window and forecasts
//! by applying the fitted coefficients to the future predictor values. No
//! regularization; intercept plus one slope.

use serde::{Deserialize, Serialize};

use super::ForecastError;

/// A fitted OLS model of the response on the predictor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OlsFit {
    intercept: f64,
    slope: f64,
    n_observations: usize,
}

impl OlsFit {
    /// Fit by ordinary least squares over a training window.
    ///
    /// Requires at least 2 paired observations and a predictor with nonzero
    /// variance; anything else is a recoverable fit failure.
    pub fn fit(y: &[f64], x: &[f64]) -> Result<Self, ForecastError> {
        if y.len() != x.len() {
            return Err(ForecastError::LengthMismatch {
                response: y.len(),
                predictor: x.len(),
            });
        }
        if y.len() < 2 {
            return Err(ForecastError::InsufficientData {
                required: 2,
                actual: y.len(),
            });
        }

        let n = y.len() as f64;
        let sum_x: f64 = x.iter().sum();
        let sum_y: f64 = y.iter().sum();
        let sum_xx: f64 = x.iter().map(|v| v * v).sum();
        let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();

        let denominator = n * sum_xx - sum_x * sum_x;
        if denominator.abs() < 1e-10 {
            return Err(ForecastError::SingularDesign);
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        Ok(Self {
            intercept,
            slope,
            n_observations: y.len(),
        })
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Number of observations the fit used.
    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Point prediction for a single predictor value.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Point forecasts for `horizon` future positions.
    ///
    /// `x_future` must supply at least `horizon` predictor values; fewer is
    /// a recoverable failure at the calling origin.
    pub fn forecast(&self, x_future: &[f64], horizon: usize) -> Result<Vec<f64>, ForecastError> {
        if x_future.len() < horizon {
            return Err(ForecastError::MissingFuture {
                required: horizon,
                actual: x_future.len(),
            });
        }
        Ok(x_future[..horizon].iter().map(|&x| self.predict(x)).collect())
    }
}
