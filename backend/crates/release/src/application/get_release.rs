//! Get Release Use Case
//!
//! Fetches a release for display. Published releases are public;
//! unpublished releases require a per-release role or Admin.

use std::sync::Arc;

use kernel::either::{Either, Left, Right};
use kernel::id::ReleaseId;

use crate::domain::entities::Release;
use crate::domain::repository::{
    PublicationRepository, ReleaseRepository, ReleaseRoleRepository,
};
use crate::domain::value_objects::Requester;
use crate::error::{ReleaseError, ReleaseOutcome};

/// Input DTO for get release
#[derive(Debug, Clone)]
pub struct GetReleaseInput {
    pub release_id: ReleaseId,
}

/// Output DTO for get release
#[derive(Debug, Clone)]
pub struct GetReleaseOutput {
    pub release: Release,
    pub publication_title: String,
}

/// Get Release Use Case
pub struct GetReleaseUseCase<R, P, A>
where
    R: ReleaseRepository,
    P: PublicationRepository,
    A: ReleaseRoleRepository,
{
    releases: Arc<R>,
    publications: Arc<P>,
    roles: Arc<A>,
}

impl<R, P, A> GetReleaseUseCase<R, P, A>
where
    R: ReleaseRepository,
    P: PublicationRepository,
    A: ReleaseRoleRepository,
{
    pub fn new(releases: Arc<R>, publications: Arc<P>, roles: Arc<A>) -> Self {
        Self {
            releases,
            publications,
            roles,
        }
    }

    pub async fn execute(
        &self,
        input: GetReleaseInput,
        requester: &Requester,
    ) -> ReleaseOutcome<GetReleaseOutput> {
        self.load_release(input.release_id)
            .await
            .and_then_async(|release| self.check_view_access(requester, release))
            .await
            .and_then_async(|release| self.attach_publication(release))
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

    async fn check_view_access(
        &self,
        requester: &Requester,
        release: Release,
    ) -> ReleaseOutcome<Release> {
        if release.is_live() || requester.global_role.is_admin() {
            return Right(release);
        }

        match self.roles.find_role(requester.user_id, release.id).await {
            Ok(Some(_)) => Right(release),
            Ok(None) => {
                tracing::warn!(
                    user_id = %requester.user_id,
                    release_id = %release.id,
                    "Unpublished release access denied"
                );
                Left(ReleaseError::Forbidden)
            }
            Err(e) => Left(e),
        }
    }

    async fn attach_publication(&self, release: Release) -> ReleaseOutcome<GetReleaseOutput> {
        let found = match self.publications.find(release.publication_id).await {
            Ok(found) => found,
            Err(e) => return Left(e),
        };

        match found {
            Some(publication) => Right(GetReleaseOutput {
                release,
                publication_title: publication.title,
            }),
            None => Left(ReleaseError::PublicationNotFound),
        }
    }
}
