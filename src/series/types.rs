//! Core series types for spurious-regression detection.
//!
//! Observations are positional: index order is the only temporal structure
//! the detector uses, so series carry no dates.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum SeriesError {
    #[error("Series '{0}' is empty")]
    Empty(&'static str),

    #[error("Series '{name}' has a non-finite value at index {index}")]
    NonFinite { name: &'static str, index: usize },
}

/// Check the series invariant: non-empty, all values finite.
pub fn validate(name: &'static str, values: &[f64]) -> Result<(), SeriesError> {
    if values.is_empty() {
        return Err(SeriesError::Empty(name));
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(SeriesError::NonFinite { name, index });
    }
    Ok(())
}

/// Record of an alignment truncation.
///
/// Present on an [`AlignedPair`] only when the input lengths differed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Truncation {
    /// Observations dropped from the end of the response.
    pub response_dropped: usize,
    /// Observations dropped from the end of the predictor.
    pub predictor_dropped: usize,
    /// Common prefix length both series were cut to.
    pub aligned_len: usize,
}

/// A response/predictor pair truncated to a common prefix.
///
/// Construction validates both series and performs the alignment, so every
/// `AlignedPair` holds two equal-length, finite, non-empty series.
#[derive(Debug, Clone)]
pub struct AlignedPair {
    response: Vec<f64>,
    predictor: Vec<f64>,
    truncation: Option<Truncation>,
}

impl AlignedPair {
    /// Align a response and predictor to their common prefix length.
    ///
    /// Unequal lengths are recoverable: both series are truncated to the
    /// shorter length, a warning is logged, and the truncation is recorded
    /// on the pair.
    pub fn align(response: &[f64], predictor: &[f64]) -> Result<Self, SeriesError> {
        validate("response", response)?;
        validate("predictor", predictor)?;

        let len = response.len().min(predictor.len());
        let truncation = if response.len() != predictor.len() {
            warn!(
                response_len = response.len(),
                predictor_len = predictor.len(),
                aligned_len = len,
                "series lengths differ; truncating both to their common prefix"
            );
            Some(Truncation {
                response_dropped: response.len() - len,
                predictor_dropped: predictor.len() - len,
                aligned_len: len,
            })
        } else {
            None
        };

        Ok(Self {
            response: response[..len].to_vec(),
            predictor: predictor[..len].to_vec(),
            truncation,
        })
    }

    /// Aligned length (both series).
    pub fn len(&self) -> usize {
        self.response.len()
    }

    pub fn is_empty(&self) -> bool {
        self.response.is_empty()
    }

    pub fn response(&self) -> &[f64] {
        &self.response
    }

    pub fn predictor(&self) -> &[f64] {
        &self.predictor
    }

    /// Truncation record, if the inputs had unequal lengths.
    pub fn truncation(&self) -> Option<Truncation> {
        self.truncation
    }
}
