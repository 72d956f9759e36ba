//! In-Memory Repository Implementations
//!
//! A non-durable store backing tests and embedding hosts. Durable
//! persistence lives behind the same traits in the host process.

use std::collections::HashMap;

use kernel::id::{PublicationId, ReleaseId, UserId};
use tokio::sync::RwLock;

use crate::domain::entities::{Publication, Release};
use crate::domain::repository::{
    DataReadiness, PublicationRepository, ReleaseRepository, ReleaseRoleRepository,
};
use crate::domain::value_objects::ReleaseRole;
use crate::error::ReleaseResult;

/// In-memory backed repository
#[derive(Default)]
pub struct InMemoryReleaseStore {
    publications: RwLock<HashMap<PublicationId, Publication>>,
    releases: RwLock<HashMap<ReleaseId, Release>>,
    roles: RwLock<HashMap<(UserId, ReleaseId), ReleaseRole>>,
    pending_imports: RwLock<HashMap<ReleaseId, u64>>,
}

impl InMemoryReleaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a user a role on a release
    pub async fn grant_role(&self, user_id: UserId, release_id: ReleaseId, role: ReleaseRole) {
        self.roles.write().await.insert((user_id, release_id), role);
    }

    /// Record the number of pending data imports for a release
    pub async fn set_pending_imports(&self, release_id: ReleaseId, pending: u64) {
        self.pending_imports.write().await.insert(release_id, pending);
    }
}

impl PublicationRepository for InMemoryReleaseStore {
    async fn create(&self, publication: &Publication) -> ReleaseResult<()> {
        self.publications
            .write()
            .await
            .insert(publication.id, publication.clone());
        Ok(())
    }

    async fn find(&self, publication_id: PublicationId) -> ReleaseResult<Option<Publication>> {
        Ok(self.publications.read().await.get(&publication_id).cloned())
    }
}

impl ReleaseRepository for InMemoryReleaseStore {
    async fn create(&self, release: &Release) -> ReleaseResult<()> {
        self.releases.write().await.insert(release.id, release.clone());
        Ok(())
    }

    async fn find(&self, release_id: ReleaseId) -> ReleaseResult<Option<Release>> {
        Ok(self.releases.read().await.get(&release_id).cloned())
    }

    async fn update(&self, release: &Release) -> ReleaseResult<()> {
        self.releases.write().await.insert(release.id, release.clone());
        Ok(())
    }
}

impl ReleaseRoleRepository for InMemoryReleaseStore {
    async fn find_role(
        &self,
        user_id: UserId,
        release_id: ReleaseId,
    ) -> ReleaseResult<Option<ReleaseRole>> {
        Ok(self.roles.read().await.get(&(user_id, release_id)).copied())
    }
}

impl DataReadiness for InMemoryReleaseStore {
    async fn pending_imports(&self, release_id: ReleaseId) -> ReleaseResult<u64> {
        Ok(self
            .pending_imports
            .read()
            .await
            .get(&release_id)
            .copied()
            .unwrap_or(0))
    }
}
