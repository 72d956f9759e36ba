//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{PublicationId, ReleaseId, UserId};

use crate::domain::entities::{Publication, Release};
use crate::domain::value_objects::ReleaseRole;
use crate::error::ReleaseResult;

/// Publication repository trait
#[trait_variant::make(PublicationRepository: Send)]
pub trait LocalPublicationRepository {
    /// Create a new publication
    async fn create(&self, publication: &Publication) -> ReleaseResult<()>;

    /// Get a publication by ID
    async fn find(&self, publication_id: PublicationId) -> ReleaseResult<Option<Publication>>;
}

/// Release repository trait
#[trait_variant::make(ReleaseRepository: Send)]
pub trait LocalReleaseRepository {
    /// Create a new release
    async fn create(&self, release: &Release) -> ReleaseResult<()>;

    /// Get a release by ID
    async fn find(&self, release_id: ReleaseId) -> ReleaseResult<Option<Release>>;

    /// Persist changes to an existing release
    async fn update(&self, release: &Release) -> ReleaseResult<()>;
}

/// Release role repository trait
#[trait_variant::make(ReleaseRoleRepository: Send)]
pub trait LocalReleaseRoleRepository {
    /// Get the user's role on a release, if any
    async fn find_role(
        &self,
        user_id: UserId,
        release_id: ReleaseId,
    ) -> ReleaseResult<Option<ReleaseRole>>;
}

/// Data readiness port - answered by the data-set context
#[trait_variant::make(DataReadiness: Send)]
pub trait LocalDataReadiness {
    /// Number of data imports for the release not yet complete
    async fn pending_imports(&self, release_id: ReleaseId) -> ReleaseResult<u64>;
}
