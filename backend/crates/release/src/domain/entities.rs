//! Domain Entities
//!
//! Core business entities for the release domain.

use chrono::{DateTime, Utc};
use kernel::id::{Id, PublicationId, ReleaseId, UserId};

use crate::domain::value_objects::ApprovalStatus;

/// Publication entity - a series of statistical releases
#[derive(Debug, Clone)]
pub struct Publication {
    pub id: PublicationId,
    pub title: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl Publication {
    /// Create a new publication
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            title: title.into(),
            slug: slug.into(),
            created_at: Utc::now(),
        }
    }
}

/// Release entity - one period's release of a publication
#[derive(Debug, Clone)]
pub struct Release {
    pub id: ReleaseId,
    pub publication_id: PublicationId,
    /// Human-readable period, e.g. "Academic year 2025/26"
    pub period_label: String,
    pub approval_status: ApprovalStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub created_by: UserId,
    /// Release this one amends, if any
    pub amendment_of: Option<ReleaseId>,
}

impl Release {
    /// Create a new draft release
    pub fn new(
        publication_id: PublicationId,
        period_label: impl Into<String>,
        created_by: UserId,
    ) -> Self {
        Self {
            id: Id::new(),
            publication_id,
            period_label: period_label.into(),
            approval_status: ApprovalStatus::Draft,
            published_at: None,
            created_at: Utc::now(),
            created_by,
            amendment_of: None,
        }
    }

    /// Create a draft amendment of a published release
    pub fn amendment_of(source: &Release, created_by: UserId) -> Self {
        Self {
            amendment_of: Some(source.id),
            ..Self::new(source.publication_id, source.period_label.clone(), created_by)
        }
    }

    /// Whether the release is publicly visible
    #[inline]
    pub fn is_live(&self) -> bool {
        self.published_at.is_some()
    }

    /// Apply an already-validated approval transition
    pub fn transition_to(&mut self, next: ApprovalStatus) {
        self.approval_status = next;
    }

    /// Stamp the release as published and return the stamp
    pub fn publish(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        self.published_at = Some(now);
        now
    }
}
