//! Queue Import Use Case
//!
//! Stages a raw data file against a fresh draft version and enqueues
//! the background import job.

use std::sync::Arc;

use kernel::either::{Either, Left, Right};
use kernel::id::{DataSetId, DataSetVersionId, ImportId, ReleaseId, UserId};

use crate::application::config::ImportConfig;
use crate::domain::entities::{DataFileImport, DataSet, DataSetVersion};
use crate::domain::repository::{
    DataSetRepository, DataSetVersionRepository, ImportRepository, PublicationAccess,
};
use crate::domain::value_objects::VersionNumber;
use crate::error::{DataSetError, DataSetOutcome};

/// Input DTO for queue import
#[derive(Debug, Clone)]
pub struct QueueImportInput {
    pub data_set_id: DataSetId,
    /// Release the staged version will ship with
    pub release_id: ReleaseId,
    /// Raw JSON data file content
    pub payload: String,
}

/// Output DTO for queue import
#[derive(Debug, Clone)]
pub struct QueueImportOutput {
    pub import_id: ImportId,
    pub data_set_version_id: DataSetVersionId,
    pub version: VersionNumber,
}

/// Queue Import Use Case
pub struct QueueImportUseCase<D, V, I, P>
where
    D: DataSetRepository,
    V: DataSetVersionRepository,
    I: ImportRepository,
    P: PublicationAccess,
{
    data_sets: Arc<D>,
    versions: Arc<V>,
    imports: Arc<I>,
    access: Arc<P>,
    config: Arc<ImportConfig>,
}

impl<D, V, I, P> QueueImportUseCase<D, V, I, P>
where
    D: DataSetRepository,
    V: DataSetVersionRepository,
    I: ImportRepository,
    P: PublicationAccess,
{
    pub fn new(
        data_sets: Arc<D>,
        versions: Arc<V>,
        imports: Arc<I>,
        access: Arc<P>,
        config: Arc<ImportConfig>,
    ) -> Self {
        Self {
            data_sets,
            versions,
            imports,
            access,
            config,
        }
    }

    pub async fn execute(
        &self,
        input: QueueImportInput,
        requester: UserId,
    ) -> DataSetOutcome<QueueImportOutput> {
        self.load_data_set(input.data_set_id)
            .await
            .and_then_async(|data_set| self.check_access(requester, data_set))
            .await
            .and_then(|data_set| self.check_envelope(&input.payload).map(|_| data_set))
            .and_then_async(|data_set| self.stage_version(data_set.id, input.release_id))
            .await
            .and_then_async(|version| self.enqueue(version, input.payload))
            .await
    }

    async fn load_data_set(&self, data_set_id: DataSetId) -> DataSetOutcome<DataSet> {
        let found = self
            .data_sets
            .find(data_set_id)
            .await
            .and_then(|data_set| data_set.ok_or(DataSetError::DataSetNotFound));
        Either::from_result(found)
    }

    async fn check_access(&self, requester: UserId, data_set: DataSet) -> DataSetOutcome<DataSet> {
        match self
            .access
            .can_edit_data(requester, data_set.publication_id)
            .await
        {
            Ok(true) => Right(data_set),
            Ok(false) => {
                tracing::warn!(
                    user_id = %requester,
                    data_set_id = %data_set.id,
                    "Data file upload forbidden"
                );
                Left(DataSetError::Forbidden)
            }
            Err(e) => Left(e),
        }
    }

    fn check_envelope(&self, payload: &str) -> DataSetOutcome<()> {
        if payload.len() > self.config.max_payload_bytes {
            Left(DataSetError::PayloadTooLarge {
                max_bytes: self.config.max_payload_bytes,
            })
        } else {
            Right(())
        }
    }

    async fn stage_version(
        &self,
        data_set_id: DataSetId,
        release_id: ReleaseId,
    ) -> DataSetOutcome<DataSetVersion> {
        let latest = match self.versions.latest_for(data_set_id).await {
            Ok(latest) => latest,
            Err(e) => return Left(e),
        };

        let version = match latest {
            None => DataSetVersion::first(data_set_id, release_id),
            Some(latest) => DataSetVersion::next_from(&latest, release_id, false),
        };

        match self.versions.create(&version).await {
            Ok(()) => Right(version),
            Err(e) => Left(e),
        }
    }

    async fn enqueue(
        &self,
        version: DataSetVersion,
        payload: String,
    ) -> DataSetOutcome<QueueImportOutput> {
        let import = DataFileImport::queued(version.id, payload);
        if let Err(e) = self.imports.create(&import).await {
            return Left(e);
        }

        tracing::info!(
            import_id = %import.id,
            data_set_version_id = %version.id,
            version = %version.version,
            "Data file import queued"
        );

        Right(QueueImportOutput {
            import_id: import.id,
            data_set_version_id: version.id,
            version: version.version,
        })
    }
}
