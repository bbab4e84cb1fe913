//! CSV series loader.
//!
//! Loads named numeric columns from a CSV file into plain observation
//! vectors for the detector. Null entries in a column are skipped.

use std::path::{Path, PathBuf};

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Column '{0}' has no numeric values")]
    EmptyColumn(String),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// CSV loader for response/predictor columns.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    /// Create a loader for a CSV file with a header row.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load one named column as a series.
    pub fn load_column(&self, column: &str) -> Result<Vec<f64>, LoaderError> {
        let df = self.read_frame()?;
        Self::extract_column(&df, column)
    }

    /// Load a response and a predictor column from the same file.
    pub fn load_pair(
        &self,
        response: &str,
        predictor: &str,
    ) -> Result<(Vec<f64>, Vec<f64>), LoaderError> {
        let df = self.read_frame()?;
        let y = Self::extract_column(&df, response)?;
        let x = Self::extract_column(&df, predictor)?;
        Ok((y, x))
    }

    fn read_frame(&self) -> Result<DataFrame, LoaderError> {
        if !Path::new(&self.path).exists() {
            return Err(LoaderError::FileNotFound(
                self.path.display().to_string(),
            ));
        }
        Ok(CsvReader::from_path(&self.path)?.has_header(true).finish()?)
    }

    fn extract_column(df: &DataFrame, column: &str) -> Result<Vec<f64>, LoaderError> {
        let series = df
            .column(column)
            .map_err(|_| LoaderError::ColumnNotFound(column.to_string()))?;

        let values: Vec<f64> = series
            .cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .flatten()
            .collect();

        if values.is_empty() {
            return Err(LoaderError::EmptyColumn(column.to_string()));
        }
        Ok(values)
    }
}
