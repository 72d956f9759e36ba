//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{DataSetId, DataSetVersionId, ImportId, PublicationId, UserId};

use crate::domain::entities::{DataFileImport, DataSet, DataSetVersion};
use crate::error::DataSetResult;

/// DataSet repository trait
#[trait_variant::make(DataSetRepository: Send)]
pub trait LocalDataSetRepository {
    /// Create a new data set
    async fn create(&self, data_set: &DataSet) -> DataSetResult<()>;

    /// Get a data set by ID
    async fn find(&self, data_set_id: DataSetId) -> DataSetResult<Option<DataSet>>;
}

/// DataSetVersion repository trait
#[trait_variant::make(DataSetVersionRepository: Send)]
pub trait LocalDataSetVersionRepository {
    /// Create a new version
    async fn create(&self, version: &DataSetVersion) -> DataSetResult<()>;

    /// Get a version by ID
    async fn find(&self, version_id: DataSetVersionId) -> DataSetResult<Option<DataSetVersion>>;

    /// Get the highest-numbered version of a data set, if any
    async fn latest_for(&self, data_set_id: DataSetId) -> DataSetResult<Option<DataSetVersion>>;

    /// Persist changes to an existing version
    async fn update(&self, version: &DataSetVersion) -> DataSetResult<()>;
}

/// DataFileImport repository trait
#[trait_variant::make(ImportRepository: Send)]
pub trait LocalImportRepository {
    /// Enqueue a new import job
    async fn create(&self, import: &DataFileImport) -> DataSetResult<()>;

    /// Get an import job by ID
    async fn find(&self, import_id: ImportId) -> DataSetResult<Option<DataFileImport>>;

    /// Persist changes to an existing import job
    async fn update(&self, import: &DataFileImport) -> DataSetResult<()>;
}

/// Authorization port - answered by the host's identity system
#[trait_variant::make(PublicationAccess: Send)]
pub trait LocalPublicationAccess {
    /// Whether the user may edit data for the publication
    async fn can_edit_data(
        &self,
        user_id: UserId,
        publication_id: PublicationId,
    ) -> DataSetResult<bool>;
}
