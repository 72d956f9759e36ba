//! Release Error Types
//!
//! This module provides release-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::either::Either;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_objects::ApprovalStatus;

/// Result alias for the repository seam (infrastructure channel)
pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Outcome alias for use cases (expected-failure channel)
pub type ReleaseOutcome<T> = Either<ReleaseError, T>;

/// Release-specific error variants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReleaseError {
    /// Release not found
    #[error("Release not found")]
    ReleaseNotFound,

    /// Publication not found
    #[error("Publication not found")]
    PublicationNotFound,

    /// Requester lacks the role the operation needs
    #[error("Not authorised to perform this action on the release")]
    Forbidden,

    /// Requested approval transition is not legal
    #[error("Cannot move release from {from} to {to}")]
    InvalidTransition {
        from: ApprovalStatus,
        to: ApprovalStatus,
    },

    /// Publishing requires an approved release
    #[error("Release has not been approved")]
    NotApproved,

    /// Release is already live
    #[error("Release has already been published")]
    AlreadyPublished,

    /// Approval blocked by unfinished data imports
    #[error("Release has {pending} data imports still pending")]
    DataNotReady { pending: u64 },

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ReleaseError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReleaseError::ReleaseNotFound | ReleaseError::PublicationNotFound => {
                ErrorKind::NotFound
            }
            ReleaseError::Forbidden => ErrorKind::Forbidden,
            ReleaseError::InvalidTransition { .. }
            | ReleaseError::NotApproved
            | ReleaseError::AlreadyPublished => ErrorKind::Conflict,
            ReleaseError::DataNotReady { .. } => ErrorKind::UnprocessableEntity,
            ReleaseError::Storage(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }
}

impl From<AppError> for ReleaseError {
    fn from(err: AppError) -> Self {
        ReleaseError::Storage(err.to_string())
    }
}
