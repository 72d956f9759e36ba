//! Process Import Use Case
//!
//! The background processor step: claims a queued import, parses the
//! staged payload and records the outcome on the job and its draft
//! version. Rejected files mark the job Failed with the reason
//! preserved; they never panic the processor.

use std::sync::Arc;

use kernel::either::{Left, Right};
use kernel::id::ImportId;
use serde::Deserialize;

use crate::application::config::ImportConfig;
use crate::domain::entities::DataFileImport;
use crate::domain::repository::{DataSetVersionRepository, ImportRepository};
use crate::error::{DataSetError, DataSetOutcome};

/// One observation row of a staged data file
#[derive(Debug, Deserialize)]
pub struct DataRow {
    pub time_period: String,
    pub geographic_level: String,
    pub value: f64,
}

/// Input DTO for process import
#[derive(Debug, Clone)]
pub struct ProcessImportInput {
    pub import_id: ImportId,
}

/// Output DTO for process import
#[derive(Debug, Clone)]
pub struct ProcessImportOutput {
    pub import_id: ImportId,
    pub rows_imported: u64,
}

/// Process Import Use Case
pub struct ProcessImportUseCase<V, I>
where
    V: DataSetVersionRepository,
    I: ImportRepository,
{
    versions: Arc<V>,
    imports: Arc<I>,
    config: Arc<ImportConfig>,
}

impl<V, I> ProcessImportUseCase<V, I>
where
    V: DataSetVersionRepository,
    I: ImportRepository,
{
    pub fn new(versions: Arc<V>, imports: Arc<I>, config: Arc<ImportConfig>) -> Self {
        Self {
            versions,
            imports,
            config,
        }
    }

    pub async fn execute(&self, input: ProcessImportInput) -> DataSetOutcome<ProcessImportOutput> {
        self.claim(input.import_id)
            .await
            .and_then_async(|import| self.run(import))
            .await
    }

    /// Claim a queued job, marking it Processing
    async fn claim(&self, import_id: ImportId) -> DataSetOutcome<DataFileImport> {
        let found = match self.imports.find(import_id).await {
            Ok(found) => found,
            Err(e) => return Left(e),
        };
        let mut import = match found {
            Some(import) => import,
            None => return Left(DataSetError::ImportNotFound),
        };

        if !import.is_claimable() {
            return Left(DataSetError::ImportNotClaimable);
        }

        import.begin();
        if let Err(e) = self.imports.update(&import).await {
            return Left(e);
        }

        tracing::info!(import_id = %import.id, "Import claimed");
        Right(import)
    }

    async fn run(&self, mut import: DataFileImport) -> DataSetOutcome<ProcessImportOutput> {
        match self.parse_rows(&import.payload) {
            Ok(rows) => self.finish(import, rows.len() as u64).await,
            Err(reason) => {
                tracing::warn!(
                    import_id = %import.id,
                    reason = %reason,
                    "Import rejected"
                );
                import.fail(reason.to_string());
                if let Err(e) = self.imports.update(&import).await {
                    return Left(e);
                }
                Left(reason)
            }
        }
    }

    async fn finish(
        &self,
        mut import: DataFileImport,
        rows: u64,
    ) -> DataSetOutcome<ProcessImportOutput> {
        let found = match self.versions.find(import.data_set_version_id).await {
            Ok(found) => found,
            Err(e) => return Left(e),
        };
        let mut version = match found {
            Some(version) => version,
            None => return Left(DataSetError::VersionNotFound),
        };

        version.record_rows(rows);
        if let Err(e) = self.versions.update(&version).await {
            return Left(e);
        }

        import.complete(rows);
        if let Err(e) = self.imports.update(&import).await {
            return Left(e);
        }

        tracing::info!(
            import_id = %import.id,
            data_set_version_id = %version.id,
            rows_imported = rows,
            "Import complete"
        );

        Right(ProcessImportOutput {
            import_id: import.id,
            rows_imported: rows,
        })
    }

    /// Parse and validate the staged payload
    fn parse_rows(&self, payload: &str) -> Result<Vec<DataRow>, DataSetError> {
        let rows: Vec<DataRow> = serde_json::from_str(payload)
            .map_err(|e| DataSetError::InvalidDataFile(format!("malformed data file: {}", e)))?;

        if rows.len() > self.config.max_rows {
            return Err(DataSetError::TooManyRows {
                max_rows: self.config.max_rows,
            });
        }

        for (index, row) in rows.iter().enumerate() {
            if row.time_period.is_empty() {
                return Err(DataSetError::InvalidDataFile(format!(
                    "row {}: time_period is empty",
                    index
                )));
            }
            if row.geographic_level.is_empty() {
                return Err(DataSetError::InvalidDataFile(format!(
                    "row {}: geographic_level is empty",
                    index
                )));
            }
            if !row.value.is_finite() {
                return Err(DataSetError::InvalidDataFile(format!(
                    "row {}: value is not a finite number",
                    index
                )));
            }
        }

        Ok(rows)
    }
}
