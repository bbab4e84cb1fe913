//! Rolling-origin generation.
//!
//! An origin `t` splits a series of length `n` into training window `[0, t)`
//! and test point `t + h - 1`. Valid origins run from the initial window size
//! through `n - h` inclusive.

use serde::{Deserialize, Serialize};

/// Rolling cross-validation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollingConfig {
    /// Forecast horizon: steps ahead the test point sits past the training window.
    pub horizon: usize,
    /// Minimum training window size before the first origin.
    pub initial: usize,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            horizon: 1,
            initial: 20,
        }
    }
}

/// A single rolling origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    /// End of the training window (exclusive); also the origin index `t`.
    pub train_end: usize,
    /// Index of the test observation, `t + h - 1`.
    pub test_index: usize,
}

/// Generator for the valid origins of a series.
pub struct RollingOrigins {
    config: RollingConfig,
    n: usize,
}

impl RollingOrigins {
    /// Create a generator for a series of length `n`.
    pub fn new(config: RollingConfig, n: usize) -> Self {
        Self { config, n }
    }

    /// Generate all valid origins, oldest first.
    ///
    /// Empty when the series is too short to hold the initial window plus
    /// one horizon, or when either parameter is zero.
    pub fn generate(&self) -> Vec<Origin> {
        let h = self.config.horizon;
        let initial = self.config.initial;

        if h == 0 || initial == 0 || self.n < initial + h {
            return Vec::new();
        }

        (initial..=self.n - h)
            .map(|t| Origin {
                train_end: t,
                test_index: t + h - 1,
            })
            .collect()
    }

    /// Number of origins `generate` will produce.
    pub fn expected_origins(&self) -> usize {
        let h = self.config.horizon;
        let initial = self.config.initial;

        if h == 0 || initial == 0 || self.n < initial + h {
            return 0;
        }
        self.n - h - initial + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RollingConfig::default();
        assert_eq!(config.horizon, 1);
        assert_eq!(config.initial, 20);
    }

    #[test]
    fn test_origin_generation() {
        let config = RollingConfig {
            horizon: 1,
            initial: 3,
        };
        let origins = RollingOrigins::new(config, 6).generate();

        // t = 3, 4, 5; test point = t for h = 1
        assert_eq!(origins.len(), 3);
        assert_eq!(
            origins[0],
            Origin {
                train_end: 3,
                test_index: 3
            }
        );
        assert_eq!(
            origins[2],
            Origin {
                train_end: 5,
                test_index: 5
            }
        );
    }

    #[test]
    fn test_horizon_shifts_test_index() {
        let config = RollingConfig {
            horizon: 3,
            initial: 4,
        };
        let origins = RollingOrigins::new(config, 10).generate();

        // t = 4..=7, test index t + 2
        assert_eq!(origins.len(), 4);
        assert_eq!(origins[0].test_index, 6);
        assert_eq!(origins.last().unwrap().test_index, 9);
    }

    #[test]
    fn test_series_too_short() {
        let config = RollingConfig {
            horizon: 1,
            initial: 20,
        };
        let gen = RollingOrigins::new(config, 20);
        assert!(gen.generate().is_empty());
        assert_eq!(gen.expected_origins(), 0);
    }

    #[test]
    fn test_expected_matches_generated() {
        for n in 0..40 {
            for initial in 1..10 {
                for horizon in 1..4 {
                    let config = RollingConfig { horizon, initial };
                    let gen = RollingOrigins::new(config, n);
                    assert_eq!(gen.generate().len(), gen.expected_origins());
                }
            }
        }
    }

    #[test]
    fn test_zero_parameters_yield_no_origins() {
        let gen = RollingOrigins::new(
            RollingConfig {
                horizon: 0,
                initial: 5,
            },
            30,
        );
        assert!(gen.generate().is_empty());

        let gen = RollingOrigins::new(
            RollingConfig {
                horizon: 1,
                initial: 0,
            },
            30,
        );
        assert!(gen.generate().is_empty());
    }
}
