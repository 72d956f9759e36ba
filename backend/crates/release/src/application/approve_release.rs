//! Approve Release Use Case
//!
//! Moves a release through the approval state machine. Submitting for
//! review needs a Contributor; approving or sending back needs an
//! Approver. Approval is blocked while data imports are pending.

use std::sync::Arc;

use kernel::either::{Either, Left, Right};
use kernel::id::ReleaseId;

use crate::application::config::ReleaseConfig;
use crate::domain::entities::Release;
use crate::domain::repository::{DataReadiness, ReleaseRepository, ReleaseRoleRepository};
use crate::domain::value_objects::{ApprovalStatus, Requester};
use crate::error::{ReleaseError, ReleaseOutcome};

/// Input DTO for approve release
#[derive(Debug, Clone)]
pub struct ApproveReleaseInput {
    pub release_id: ReleaseId,
    /// Target approval state
    pub target: ApprovalStatus,
}

/// Output DTO for approve release
#[derive(Debug, Clone)]
pub struct ApproveReleaseOutput {
    pub release_id: ReleaseId,
    pub status: ApprovalStatus,
}

/// Approve Release Use Case
pub struct ApproveReleaseUseCase<R, A, D>
where
    R: ReleaseRepository,
    A: ReleaseRoleRepository,
    D: DataReadiness,
{
    releases: Arc<R>,
    roles: Arc<A>,
    data_readiness: Arc<D>,
    config: Arc<ReleaseConfig>,
}

impl<R, A, D> ApproveReleaseUseCase<R, A, D>
where
    R: ReleaseRepository,
    A: ReleaseRoleRepository,
    D: DataReadiness,
{
    pub fn new(
        releases: Arc<R>,
        roles: Arc<A>,
        data_readiness: Arc<D>,
        config: Arc<ReleaseConfig>,
    ) -> Self {
        Self {
            releases,
            roles,
            data_readiness,
            config,
        }
    }

    pub async fn execute(
        &self,
        input: ApproveReleaseInput,
        requester: &Requester,
    ) -> ReleaseOutcome<ApproveReleaseOutput> {
        self.load_release(input.release_id)
            .await
            .and_then_async(|release| self.check_role(requester, release, input.target))
            .await
            .and_then(|release| Self::check_transition(release, input.target))
            .and_then_async(|release| self.check_data_ready(release, input.target))
            .await
            .and_then_async(|release| self.apply(release, input.target))
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

    async fn check_role(
        &self,
        requester: &Requester,
        release: Release,
        target: ApprovalStatus,
    ) -> ReleaseOutcome<Release> {
        if requester.global_role.is_admin() {
            return Right(release);
        }

        let role = match self.roles.find_role(requester.user_id, release.id).await {
            Ok(role) => role,
            Err(e) => return Left(e),
        };

        let allowed = match role {
            None => false,
            // Approving or sending back is an Approver act; submitting
            // for review only needs edit rights.
            Some(role) => {
                if target == ApprovalStatus::HigherLevelReview {
                    role.can_edit_content()
                } else {
                    role.can_approve()
                }
            }
        };

        if allowed {
            Right(release)
        } else {
            tracing::warn!(
                user_id = %requester.user_id,
                release_id = %release.id,
                target = %target,
                "Approval transition forbidden"
            );
            Left(ReleaseError::Forbidden)
        }
    }

    fn check_transition(release: Release, target: ApprovalStatus) -> ReleaseOutcome<Release> {
        if release.is_live() {
            return Left(ReleaseError::AlreadyPublished);
        }
        if !release.approval_status.can_transition_to(target) {
            return Left(ReleaseError::InvalidTransition {
                from: release.approval_status,
                to: target,
            });
        }
        Right(release)
    }

    async fn check_data_ready(
        &self,
        release: Release,
        target: ApprovalStatus,
    ) -> ReleaseOutcome<Release> {
        if target != ApprovalStatus::Approved || !self.config.require_data_ready {
            return Right(release);
        }

        match self.data_readiness.pending_imports(release.id).await {
            Ok(0) => Right(release),
            Ok(pending) => Left(ReleaseError::DataNotReady { pending }),
            Err(e) => Left(e),
        }
    }

    async fn apply(
        &self,
        mut release: Release,
        target: ApprovalStatus,
    ) -> ReleaseOutcome<ApproveReleaseOutput> {
        release.transition_to(target);
        if let Err(e) = self.releases.update(&release).await {
            return Left(e);
        }

        tracing::info!(
            release_id = %release.id,
            status = %target,
            "Release approval status changed"
        );

        Right(ApproveReleaseOutput {
            release_id: release.id,
            status: target,
        })
    }
}
