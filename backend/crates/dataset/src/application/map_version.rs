//! Map Version Use Case
//!
//! The data-set version mapping step of an amendment: creates the next
//! draft version of a data set for a new release, carrying the
//! published source version's metadata forward.

use std::sync::Arc;

use kernel::either::{Either, Left, Right};
use kernel::id::{DataSetVersionId, ReleaseId, UserId};

use crate::domain::entities::DataSetVersion;
use crate::domain::repository::{DataSetRepository, DataSetVersionRepository, PublicationAccess};
use crate::domain::value_objects::VersionNumber;
use crate::error::{DataSetError, DataSetOutcome};

/// Input DTO for map version
#[derive(Debug, Clone)]
pub struct MapVersionInput {
    pub source_version_id: DataSetVersionId,
    /// Release the mapped version will ship with
    pub target_release_id: ReleaseId,
    /// Breaking changes bump the major component
    pub breaking: bool,
}

/// Output DTO for map version
#[derive(Debug, Clone)]
pub struct MapVersionOutput {
    pub data_set_version_id: DataSetVersionId,
    pub version: VersionNumber,
}

/// Map Version Use Case
pub struct MapVersionUseCase<D, V, P>
where
    D: DataSetRepository,
    V: DataSetVersionRepository,
    P: PublicationAccess,
{
    data_sets: Arc<D>,
    versions: Arc<V>,
    access: Arc<P>,
}

impl<D, V, P> MapVersionUseCase<D, V, P>
where
    D: DataSetRepository,
    V: DataSetVersionRepository,
    P: PublicationAccess,
{
    pub fn new(data_sets: Arc<D>, versions: Arc<V>, access: Arc<P>) -> Self {
        Self {
            data_sets,
            versions,
            access,
        }
    }

    pub async fn execute(
        &self,
        input: MapVersionInput,
        requester: UserId,
    ) -> DataSetOutcome<MapVersionOutput> {
        self.load_source(input.source_version_id)
            .await
            .and_then(|source| {
                if source.is_published() {
                    Right(source)
                } else {
                    Left(DataSetError::VersionNotPublished)
                }
            })
            .and_then_async(|source| self.check_access(requester, source))
            .await
            .and_then_async(|source| {
                self.create_mapped(source, input.target_release_id, input.breaking)
            })
            .await
    }

    async fn load_source(&self, version_id: DataSetVersionId) -> DataSetOutcome<DataSetVersion> {
        let found = self
            .versions
            .find(version_id)
            .await
            .and_then(|version| version.ok_or(DataSetError::VersionNotFound));
        Either::from_result(found)
    }

    async fn check_access(
        &self,
        requester: UserId,
        source: DataSetVersion,
    ) -> DataSetOutcome<DataSetVersion> {
        let found = match self.data_sets.find(source.data_set_id).await {
            Ok(found) => found,
            Err(e) => return Left(e),
        };
        let data_set = match found {
            Some(data_set) => data_set,
            None => return Left(DataSetError::DataSetNotFound),
        };

        match self
            .access
            .can_edit_data(requester, data_set.publication_id)
            .await
        {
            Ok(true) => Right(source),
            Ok(false) => {
                tracing::warn!(
                    user_id = %requester,
                    data_set_id = %data_set.id,
                    "Version mapping forbidden"
                );
                Left(DataSetError::Forbidden)
            }
            Err(e) => Left(e),
        }
    }

    async fn create_mapped(
        &self,
        source: DataSetVersion,
        release_id: ReleaseId,
        breaking: bool,
    ) -> DataSetOutcome<MapVersionOutput> {
        let mapped = DataSetVersion::next_from(&source, release_id, breaking);
        if let Err(e) = self.versions.create(&mapped).await {
            return Left(e);
        }

        tracing::info!(
            data_set_id = %mapped.data_set_id,
            source_version = %source.version,
            mapped_version = %mapped.version,
            "Data set version mapped"
        );

        Right(MapVersionOutput {
            data_set_version_id: mapped.id,
            version: mapped.version,
        })
    }
}
