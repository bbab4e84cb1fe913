//! Paired model comparison over a shared origin set.
//!
//! Masking is symmetric: an origin counts only when both models produced a
//! residual there, so the two MSEs are always computed over an identical set
//! of origins.

use crate::rolling::OriginResidual;

use super::DetectorError;

/// Cross-validated MSEs over the surviving origins.
#[derive(Debug, Clone, Copy)]
pub struct MsePair {
    pub regression: f64,
    pub naive: f64,
    /// Origins contributing to both means.
    pub n_origins: usize,
    /// Origins dropped because either residual was missing.
    pub n_masked: usize,
}

/// Mask the residual pairs symmetrically and average the squared residuals.
///
/// Zero surviving origins is a fatal condition for the invocation; an MSE is
/// never returned undefined.
pub fn compare(residuals: &[OriginResidual]) -> Result<MsePair, DetectorError> {
    let mut sum_regression = 0.0;
    let mut sum_naive = 0.0;
    let mut n_origins = 0usize;
    let mut n_masked = 0usize;

    for r in residuals {
        match (r.regression, r.naive) {
            (Some(reg), Some(naive)) => {
                sum_regression += reg * reg;
                sum_naive += naive * naive;
                n_origins += 1;
            }
            _ => n_masked += 1,
        }
    }

    if n_origins == 0 {
        return Err(DetectorError::InsufficientOverlap {
            origins: residuals.len(),
        });
    }

    Ok(MsePair {
        regression: sum_regression / n_origins as f64,
        naive: sum_naive / n_origins as f64,
        n_origins,
        n_masked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual(origin: usize, regression: Option<f64>, naive: Option<f64>) -> OriginResidual {
        OriginResidual {
            origin,
            regression,
            naive,
        }
    }

    #[test]
    fn test_means_over_complete_pairs() {
        let residuals = vec![
            residual(5, Some(1.0), Some(2.0)),
            residual(6, Some(-3.0), Some(0.0)),
        ];
        let mse = compare(&residuals).unwrap();

        assert!((mse.regression - 5.0).abs() < 1e-12);
        assert!((mse.naive - 2.0).abs() < 1e-12);
        assert_eq!(mse.n_origins, 2);
        assert_eq!(mse.n_masked, 0);
    }

    #[test]
    fn test_masking_is_symmetric() {
        // A missing regression residual removes the naive residual at the
        // same origin, and vice versa.
        let residuals = vec![
            residual(5, Some(1.0), Some(1.0)),
            residual(6, None, Some(100.0)),
            residual(7, Some(100.0), None),
            residual(8, Some(3.0), Some(1.0)),
        ];
        let mse = compare(&residuals).unwrap();

        // Only origins 5 and 8 survive for both models.
        assert!((mse.regression - 5.0).abs() < 1e-12);
        assert!((mse.naive - 1.0).abs() < 1e-12);
        assert_eq!(mse.n_origins, 2);
        assert_eq!(mse.n_masked, 2);
    }

    #[test]
    fn test_no_surviving_origins_is_fatal() {
        let residuals = vec![
            residual(5, None, Some(1.0)),
            residual(6, Some(1.0), None),
            residual(7, None, None),
        ];
        let err = compare(&residuals).unwrap_err();
        assert!(matches!(err, DetectorError::InsufficientOverlap { origins: 3 }));
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let err = compare(&[]).unwrap_err();
        assert!(matches!(err, DetectorError::InsufficientOverlap { origins: 0 }));
    }
}
