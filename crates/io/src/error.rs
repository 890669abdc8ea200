//! Loader error types.

use govspend_core::budget::BudgetError;
use govspend_shared::AppError;
use thiserror::Error;

/// Errors reading the spending dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened.
    #[error("Cannot open dataset {path}: {source}")]
    Open {
        /// Path that was tried.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not well-formed tab-separated text.
    #[error("Malformed dataset: {0}")]
    Malformed(#[from] csv::Error),

    /// A required header is absent.
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    /// A row's state code is not a known jurisdiction.
    #[error("Unknown state code {code:?} on line {line}")]
    UnknownState {
        /// 1-based line number, header included.
        line: u64,
        /// The code as written.
        code: String,
    },

    /// A row's amount is not a number.
    #[error("Invalid amount {value:?} on line {line}")]
    BadAmount {
        /// 1-based line number, header included.
        line: u64,
        /// The amount as written.
        value: String,
    },

    /// A row failed record validation.
    #[error("Invalid record on line {line}: {source}")]
    InvalidRecord {
        /// 1-based line number, header included.
        line: u64,
        /// Why the record was rejected.
        source: BudgetError,
    },
}

/// Errors reading the map boundaries.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// The file could not be read.
    #[error("Cannot read boundaries {path}: {source}")]
    Read {
        /// Path that was tried.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not valid GeoJSON.
    #[error("Invalid GeoJSON: {0}")]
    Parse(#[from] geojson::Error),

    /// The document is GeoJSON but not a feature collection.
    #[error("Boundary file must be a FeatureCollection")]
    NotFeatureCollection,
}

impl From<DatasetError> for AppError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::Open { ref source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::NotFound(err.to_string())
            }
            DatasetError::UnknownState { .. }
            | DatasetError::BadAmount { .. }
            | DatasetError::InvalidRecord { .. }
            | DatasetError::MissingColumn(_) => Self::Validation(err.to_string()),
            DatasetError::Open { .. } | DatasetError::Malformed(_) => Self::Input(err.to_string()),
        }
    }
}

impl From<BoundaryError> for AppError {
    fn from(err: BoundaryError) -> Self {
        match err {
            BoundaryError::Read { ref source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::NotFound(err.to_string())
            }
            _ => Self::Input(err.to_string()),
        }
    }
}
