pub mod data;
pub mod detect;
pub mod forecast;
pub mod rolling;
pub mod series;
pub mod simulate;

// Re-export commonly used types
pub use data::{air_passengers, rice_production, CsvLoader, LoaderError};
pub use detect::{detect_spurious_regression, CvResult, DetectorError};
pub use forecast::{DriftForecast, ForecastError, OlsFit};
pub use rolling::{evaluate_origins, Origin, OriginResidual, RollingConfig, RollingOrigins};
pub use series::{AlignedPair, SeriesError, Truncation};
pub use simulate::{run_study, Scenario, SimulationConfig, SimulationSummary};
