//! Built-in demonstration series.
//!
//! The classic spurious-regression pair: two strongly trending annual series
//! with no causal link and deliberately unequal lengths, so running the
//! detector on them exercises both the truncation warning and a spurious
//! verdict.

/// Annual Australian air passenger totals, 1970-2016, in millions.
const AIR_PASSENGERS: &[f64] = &[
    7.256, 7.559, 8.146, 8.315, 8.946, 9.322, 9.645, 10.370, 10.642, 11.411, 11.774, 12.387,
    11.916, 12.776, 14.403, 15.213, 16.316, 17.421, 17.976, 17.974, 20.250, 20.315, 22.237,
    22.717, 23.700, 24.874, 26.395, 28.451, 28.966, 31.062, 32.738, 33.951, 34.916, 36.915,
    38.789, 41.071, 44.203, 45.873, 47.936, 51.069, 53.318, 55.604, 59.897, 62.653, 64.363,
    68.774, 72.101,
];

/// Annual rice production in Guinea, 1970-2011, in million tonnes.
const RICE_PRODUCTION: &[f64] = &[
    0.1728, 0.1918, 0.2159, 0.2313, 0.2551, 0.2816, 0.3016, 0.3373, 0.3720, 0.4107, 0.4300,
    0.4749, 0.5102, 0.5788, 0.6234, 0.6487, 0.7412, 0.7980, 0.8424, 0.9015, 0.9382, 0.9925,
    1.0899, 1.1244, 1.2000, 1.2709, 1.3208, 1.4239, 1.4888, 1.5924, 1.6269, 1.7024, 1.7493,
    1.8259, 1.8601, 1.8934, 2.0293, 2.0792, 2.1073, 2.1347, 2.1251, 2.1512,
];

/// Air passenger totals: the demonstration response series.
pub fn air_passengers() -> &'static [f64] {
    AIR_PASSENGERS
}

/// Rice production: the demonstration predictor series.
///
/// Five years shorter than [`air_passengers`], so aligning the pair
/// truncates and warns.
pub fn rice_production() -> &'static [f64] {
    RICE_PRODUCTION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_are_unequal() {
        assert_eq!(air_passengers().len(), 47);
        assert_eq!(rice_production().len(), 42);
    }

    #[test]
    fn test_values_finite_and_positive() {
        for &v in air_passengers().iter().chain(rice_production()) {
            assert!(v.is_finite());
            assert!(v > 0.0);
        }
    }

    #[test]
    fn test_demonstration_pair_is_flagged_spurious() {
        use crate::detect::detect_spurious_regression;
        use crate::rolling::RollingConfig;

        let result = detect_spurious_regression(
            air_passengers(),
            rice_production(),
            &RollingConfig::default(),
        )
        .unwrap();

        let trunc = result.truncation.unwrap();
        assert_eq!(trunc.aligned_len, 42);
        assert_eq!(trunc.response_dropped, 5);
        assert_eq!(trunc.predictor_dropped, 0);

        assert!(result.is_spurious);
        assert!(result.mse_regression > result.mse_naive);
    }

    #[test]
    fn test_both_series_trend_upward() {
        let air = air_passengers();
        let rice = rice_production();
        assert!(air.last().unwrap() > &(air[0] * 5.0));
        assert!(rice.last().unwrap() > &(rice[0] * 5.0));
    }
}
