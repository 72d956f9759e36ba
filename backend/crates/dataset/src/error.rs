//! Data Set Error Types
//!
//! This module provides data-set-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::either::Either;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Result alias for the repository seam (infrastructure channel)
pub type DataSetResult<T> = Result<T, DataSetError>;

/// Outcome alias for use cases (expected-failure channel)
///
/// Use cases return `Either` so callers branch on business failures
/// without a `match` on panics or opaque error chains.
pub type DataSetOutcome<T> = Either<DataSetError, T>;

/// Data-set-specific error variants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSetError {
    /// Data set not found
    #[error("Data set not found")]
    DataSetNotFound,

    /// Data set version not found
    #[error("Data set version not found")]
    VersionNotFound,

    /// Import not found
    #[error("Import not found")]
    ImportNotFound,

    /// Requester may not edit data for this publication
    #[error("Not authorised to edit data for this publication")]
    Forbidden,

    /// Raw payload exceeds the configured size cap
    #[error("Data file exceeds the {max_bytes} byte limit")]
    PayloadTooLarge { max_bytes: usize },

    /// Parsed file exceeds the configured row cap
    #[error("Data file exceeds the {max_rows} row limit")]
    TooManyRows { max_rows: usize },

    /// Data file content failed validation
    #[error("Data file rejected: {0}")]
    InvalidDataFile(String),

    /// Import is not in a claimable state
    #[error("Import has already been claimed or finished")]
    ImportNotClaimable,

    /// Version mapping requires a published source version
    #[error("Source version is not published")]
    VersionNotPublished,

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DataSetError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DataSetError::DataSetNotFound
            | DataSetError::VersionNotFound
            | DataSetError::ImportNotFound => ErrorKind::NotFound,
            DataSetError::Forbidden => ErrorKind::Forbidden,
            DataSetError::PayloadTooLarge { .. } | DataSetError::TooManyRows { .. } => {
                ErrorKind::BadRequest
            }
            DataSetError::InvalidDataFile(_) => ErrorKind::UnprocessableEntity,
            DataSetError::ImportNotClaimable | DataSetError::VersionNotPublished => {
                ErrorKind::Conflict
            }
            DataSetError::Storage(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }
}

impl From<AppError> for DataSetError {
    fn from(err: AppError) -> Self {
        DataSetError::Storage(err.to_string())
    }
}
