//! Domain Entities
//!
//! Core business entities for the data-set domain.

use chrono::{DateTime, Utc};
use kernel::id::{DataSetId, DataSetVersionId, Id, ImportId, PublicationId, ReleaseId};

use crate::domain::value_objects::{ImportStatus, VersionNumber, VersionStatus};

/// DataSet entity - a named statistical data set owned by a publication
#[derive(Debug, Clone)]
pub struct DataSet {
    pub id: DataSetId,
    pub publication_id: PublicationId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl DataSet {
    /// Create a new data set
    pub fn new(publication_id: PublicationId, title: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            publication_id,
            title: title.into(),
            created_at: Utc::now(),
        }
    }
}

/// DataSetVersion entity - one versioned cut of a data set's figures
///
/// Draft versions are the write target of imports; published versions
/// are immutable.
#[derive(Debug, Clone)]
pub struct DataSetVersion {
    pub id: DataSetVersionId,
    pub data_set_id: DataSetId,
    /// Release this version ships with
    pub release_id: ReleaseId,
    pub version: VersionNumber,
    pub status: VersionStatus,
    pub row_count: u64,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl DataSetVersion {
    /// Create the initial `1.0` draft of a data set
    pub fn first(data_set_id: DataSetId, release_id: ReleaseId) -> Self {
        Self::draft(data_set_id, release_id, VersionNumber::FIRST, 0)
    }

    /// Create a draft successor of `source` for a new release,
    /// carrying the source metadata forward until a fresh import
    /// overwrites it.
    pub fn next_from(source: &DataSetVersion, release_id: ReleaseId, breaking: bool) -> Self {
        let version = if breaking {
            source.version.next_major()
        } else {
            source.version.next_minor()
        };
        Self::draft(source.data_set_id, release_id, version, source.row_count)
    }

    fn draft(
        data_set_id: DataSetId,
        release_id: ReleaseId,
        version: VersionNumber,
        row_count: u64,
    ) -> Self {
        Self {
            id: Id::new(),
            data_set_id,
            release_id,
            version,
            status: VersionStatus::Draft,
            row_count,
            created_at: Utc::now(),
            published_at: None,
        }
    }

    #[inline]
    pub fn is_draft(&self) -> bool {
        self.status == VersionStatus::Draft
    }

    #[inline]
    pub fn is_published(&self) -> bool {
        self.status == VersionStatus::Published
    }

    /// Record the row count of a completed import
    pub fn record_rows(&mut self, rows: u64) {
        self.row_count = rows;
    }
}

/// DataFileImport entity - a queued background import job
///
/// The raw payload is staged on the job at queue time and parsed by
/// the background processor.
#[derive(Debug, Clone)]
pub struct DataFileImport {
    pub id: ImportId,
    pub data_set_version_id: DataSetVersionId,
    pub status: ImportStatus,
    pub payload: String,
    pub rows_imported: u64,
    pub failure_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl DataFileImport {
    /// Create a queued import for a draft version
    pub fn queued(data_set_version_id: DataSetVersionId, payload: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            data_set_version_id,
            status: ImportStatus::Queued,
            payload: payload.into(),
            rows_imported: 0,
            failure_reason: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Whether a processor may claim this job
    #[inline]
    pub fn is_claimable(&self) -> bool {
        self.status == ImportStatus::Queued
    }

    /// Claim the job for processing
    pub fn begin(&mut self) {
        self.status = ImportStatus::Processing;
    }

    /// Mark the job complete with the number of rows imported
    pub fn complete(&mut self, rows: u64) {
        self.status = ImportStatus::Complete;
        self.rows_imported = rows;
        self.completed_at = Some(Utc::now());
    }

    /// Mark the job failed, preserving the reason
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.status = ImportStatus::Failed;
        self.failure_reason = Some(reason.into());
        self.completed_at = Some(Utc::now());
    }

    /// Cancel a job that has not reached a terminal state
    pub fn cancel(&mut self) {
        if !self.status.is_terminal() {
            self.status = ImportStatus::Cancelled;
            self.completed_at = Some(Utc::now());
        }
    }
}
