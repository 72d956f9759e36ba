//! In-Memory Repository Implementations
//!
//! A non-durable store backing tests and embedding hosts. Durable
//! persistence lives behind the same traits in the host process.

use std::collections::{HashMap, HashSet};

use kernel::id::{DataSetId, DataSetVersionId, ImportId, PublicationId, UserId};
use tokio::sync::RwLock;

use crate::domain::entities::{DataFileImport, DataSet, DataSetVersion};
use crate::domain::repository::{
    DataSetRepository, DataSetVersionRepository, ImportRepository, PublicationAccess,
};
use crate::error::DataSetResult;

/// In-memory backed repository
#[derive(Default)]
pub struct InMemoryDataSetStore {
    data_sets: RwLock<HashMap<DataSetId, DataSet>>,
    versions: RwLock<HashMap<DataSetVersionId, DataSetVersion>>,
    imports: RwLock<HashMap<ImportId, DataFileImport>>,
    editors: RwLock<HashSet<(UserId, PublicationId)>>,
}

impl InMemoryDataSetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a user data-editing rights on a publication
    pub async fn grant_editor(&self, user_id: UserId, publication_id: PublicationId) {
        self.editors.write().await.insert((user_id, publication_id));
    }
}

impl DataSetRepository for InMemoryDataSetStore {
    async fn create(&self, data_set: &DataSet) -> DataSetResult<()> {
        self.data_sets
            .write()
            .await
            .insert(data_set.id, data_set.clone());
        Ok(())
    }

    async fn find(&self, data_set_id: DataSetId) -> DataSetResult<Option<DataSet>> {
        Ok(self.data_sets.read().await.get(&data_set_id).cloned())
    }
}

impl DataSetVersionRepository for InMemoryDataSetStore {
    async fn create(&self, version: &DataSetVersion) -> DataSetResult<()> {
        self.versions
            .write()
            .await
            .insert(version.id, version.clone());
        Ok(())
    }

    async fn find(&self, version_id: DataSetVersionId) -> DataSetResult<Option<DataSetVersion>> {
        Ok(self.versions.read().await.get(&version_id).cloned())
    }

    async fn latest_for(&self, data_set_id: DataSetId) -> DataSetResult<Option<DataSetVersion>> {
        Ok(self
            .versions
            .read()
            .await
            .values()
            .filter(|version| version.data_set_id == data_set_id)
            .max_by_key(|version| version.version)
            .cloned())
    }

    async fn update(&self, version: &DataSetVersion) -> DataSetResult<()> {
        self.versions
            .write()
            .await
            .insert(version.id, version.clone());
        Ok(())
    }
}

impl ImportRepository for InMemoryDataSetStore {
    async fn create(&self, import: &DataFileImport) -> DataSetResult<()> {
        self.imports.write().await.insert(import.id, import.clone());
        Ok(())
    }

    async fn find(&self, import_id: ImportId) -> DataSetResult<Option<DataFileImport>> {
        Ok(self.imports.read().await.get(&import_id).cloned())
    }

    async fn update(&self, import: &DataFileImport) -> DataSetResult<()> {
        self.imports.write().await.insert(import.id, import.clone());
        Ok(())
    }
}

impl PublicationAccess for InMemoryDataSetStore {
    async fn can_edit_data(
        &self,
        user_id: UserId,
        publication_id: PublicationId,
    ) -> DataSetResult<bool> {
        Ok(self
            .editors
            .read()
            .await
            .contains(&(user_id, publication_id)))
    }
}
