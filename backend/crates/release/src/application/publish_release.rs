//! Publish Release Use Case
//!
//! The publishing workflow step, invoked by the scheduler once a
//! release's go-live time arrives. Only approved, unpublished releases
//! go live; repeating the step is a conflict, not a panic.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::either::{Either, Left, Right};
use kernel::id::ReleaseId;

use crate::domain::entities::Release;
use crate::domain::repository::ReleaseRepository;
use crate::domain::value_objects::ApprovalStatus;
use crate::error::{ReleaseError, ReleaseOutcome};

/// Input DTO for publish release
#[derive(Debug, Clone)]
pub struct PublishReleaseInput {
    pub release_id: ReleaseId,
}

/// Output DTO for publish release
#[derive(Debug, Clone)]
pub struct PublishReleaseOutput {
    pub release_id: ReleaseId,
    pub published_at: DateTime<Utc>,
}

/// Publish Release Use Case
pub struct PublishReleaseUseCase<R>
where
    R: ReleaseRepository,
{
    releases: Arc<R>,
}

impl<R> PublishReleaseUseCase<R>
where
    R: ReleaseRepository,
{
    pub fn new(releases: Arc<R>) -> Self {
        Self { releases }
    }

    pub async fn execute(
        &self,
        input: PublishReleaseInput,
    ) -> ReleaseOutcome<PublishReleaseOutput> {
        self.load_release(input.release_id)
            .await
            .and_then(Self::check_publishable)
            .and_then_async(|release| self.go_live(release))
            .await
    }

    async fn load_release(&self, release_id: ReleaseId) -> ReleaseOutcome<Release> {
        let found = self
            .releases
            .find(release_id)
            .await
            .and_then(|release| release.ok_or(ReleaseError::ReleaseNotFound));
        Either::from_result(found)
    }

    fn check_publishable(release: Release) -> ReleaseOutcome<Release> {
        if release.is_live() {
            return Left(ReleaseError::AlreadyPublished);
        }
        if release.approval_status != ApprovalStatus::Approved {
            return Left(ReleaseError::NotApproved);
        }
        Right(release)
    }

    async fn go_live(&self, mut release: Release) -> ReleaseOutcome<PublishReleaseOutput> {
        let published_at = release.publish();
        if let Err(e) = self.releases.update(&release).await {
            return Left(e);
        }

        tracing::info!(
            release_id = %release.id,
            publication_id = %release.publication_id,
            "Release published"
        );

        Right(PublishReleaseOutput {
            release_id: release.id,
            published_at,
        })
    }
}
