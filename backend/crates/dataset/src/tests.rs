//! Unit tests for the data-set crate

#[cfg(test)]
mod value_object_tests {
    use crate::domain::value_objects::*;

    #[test]
    fn test_version_number_parse_and_display() {
        let version: VersionNumber = "2.3".parse().unwrap();
        assert_eq!(version, VersionNumber::new(2, 3));
        assert_eq!(version.to_string(), "2.3");
    }

    #[test]
    fn test_version_number_parse_rejects_garbage() {
        assert!("2".parse::<VersionNumber>().is_err());
        assert!("a.b".parse::<VersionNumber>().is_err());
        assert!("1.2.3".parse::<VersionNumber>().is_err());
        assert!("".parse::<VersionNumber>().is_err());
    }

    #[test]
    fn test_version_number_ordering() {
        assert!(VersionNumber::new(1, 2) < VersionNumber::new(1, 10));
        assert!(VersionNumber::new(1, 10) < VersionNumber::new(2, 0));
        assert_eq!(VersionNumber::FIRST, VersionNumber::new(1, 0));
    }

    #[test]
    fn test_version_number_bumps() {
        assert_eq!(VersionNumber::new(2, 1).next_minor(), VersionNumber::new(2, 2));
        assert_eq!(VersionNumber::new(2, 1).next_major(), VersionNumber::new(3, 0));
    }

    #[test]
    fn test_import_status_terminal() {
        assert!(!ImportStatus::Queued.is_terminal());
        assert!(!ImportStatus::Processing.is_terminal());
        assert!(ImportStatus::Complete.is_terminal());
        assert!(ImportStatus::Failed.is_terminal());
        assert!(ImportStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(VersionStatus::Draft.to_string(), "draft");
        assert_eq!(ImportStatus::Processing.to_string(), "processing");
    }
}

#[cfg(test)]
mod entity_tests {
    use kernel::id::Id;

    use crate::domain::entities::*;
    use crate::domain::value_objects::{ImportStatus, VersionNumber, VersionStatus};

    #[test]
    fn test_first_version_is_draft_one_zero() {
        let version = DataSetVersion::first(Id::new(), Id::new());
        assert_eq!(version.version, VersionNumber::FIRST);
        assert_eq!(version.status, VersionStatus::Draft);
        assert_eq!(version.row_count, 0);
        assert!(version.published_at.is_none());
    }

    #[test]
    fn test_next_from_carries_metadata_forward() {
        let mut source = DataSetVersion::first(Id::new(), Id::new());
        source.record_rows(120);
        source.status = VersionStatus::Published;

        let mapped = DataSetVersion::next_from(&source, Id::new(), false);
        assert_eq!(mapped.version, VersionNumber::new(1, 1));
        assert_eq!(mapped.data_set_id, source.data_set_id);
        assert_eq!(mapped.row_count, 120);
        assert!(mapped.is_draft());

        let breaking = DataSetVersion::next_from(&source, Id::new(), true);
        assert_eq!(breaking.version, VersionNumber::new(2, 0));
    }

    #[test]
    fn test_import_lifecycle() {
        let mut import = DataFileImport::queued(Id::new(), "[]");
        assert!(import.is_claimable());

        import.begin();
        assert_eq!(import.status, ImportStatus::Processing);
        assert!(!import.is_claimable());

        import.complete(42);
        assert_eq!(import.status, ImportStatus::Complete);
        assert_eq!(import.rows_imported, 42);
        assert!(import.completed_at.is_some());
    }

    #[test]
    fn test_import_failure_preserves_reason() {
        let mut import = DataFileImport::queued(Id::new(), "nonsense");
        import.begin();
        import.fail("row 3: value is not a finite number");
        assert_eq!(import.status, ImportStatus::Failed);
        assert_eq!(
            import.failure_reason.as_deref(),
            Some("row 3: value is not a finite number")
        );
    }

    #[test]
    fn test_cancel_is_ignored_on_terminal_import() {
        let mut import = DataFileImport::queued(Id::new(), "[]");
        import.begin();
        import.complete(1);
        import.cancel();
        assert_eq!(import.status, ImportStatus::Complete);

        let mut import = DataFileImport::queued(Id::new(), "[]");
        import.cancel();
        assert_eq!(import.status, ImportStatus::Cancelled);
    }
}

#[cfg(test)]
mod error_tests {
    use kernel::error::kind::ErrorKind;

    use crate::error::DataSetError;

    #[test]
    fn test_error_kinds() {
        assert_eq!(DataSetError::DataSetNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(DataSetError::VersionNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(DataSetError::Forbidden.kind(), ErrorKind::Forbidden);
        assert_eq!(
            DataSetError::PayloadTooLarge { max_bytes: 1 }.kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(
            DataSetError::InvalidDataFile("row 0".into()).kind(),
            ErrorKind::UnprocessableEntity
        );
        assert_eq!(DataSetError::ImportNotClaimable.kind(), ErrorKind::Conflict);
        assert_eq!(
            DataSetError::Storage("down".into()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_to_app_error() {
        let app_err = DataSetError::VersionNotPublished.to_app_error();
        assert_eq!(app_err.status_code(), 409);
        assert_eq!(app_err.message(), "Source version is not published");
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use kernel::either::Left;
    use kernel::id::{Id, PublicationId, UserId};

    use crate::application::config::ImportConfig;
    use crate::application::map_version::{MapVersionInput, MapVersionUseCase};
    use crate::application::process_import::{ProcessImportInput, ProcessImportUseCase};
    use crate::application::queue_import::{QueueImportInput, QueueImportUseCase};
    use crate::domain::entities::{DataSet, DataSetVersion};
    use crate::domain::repository::{
        DataSetRepository, DataSetVersionRepository, ImportRepository,
    };
    use crate::domain::value_objects::{ImportStatus, VersionNumber, VersionStatus};
    use crate::error::DataSetError;
    use crate::infra::memory::InMemoryDataSetStore;

    type Store = InMemoryDataSetStore;

    fn queue_use_case(
        store: &Arc<Store>,
        config: ImportConfig,
    ) -> QueueImportUseCase<Store, Store, Store, Store> {
        QueueImportUseCase::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(config),
        )
    }

    fn process_use_case(
        store: &Arc<Store>,
        config: ImportConfig,
    ) -> ProcessImportUseCase<Store, Store> {
        ProcessImportUseCase::new(store.clone(), store.clone(), Arc::new(config))
    }

    fn map_use_case(store: &Arc<Store>) -> MapVersionUseCase<Store, Store, Store> {
        MapVersionUseCase::new(store.clone(), store.clone(), store.clone())
    }

    async fn seed_data_set(store: &Store, publication_id: PublicationId) -> DataSet {
        let data_set = DataSet::new(publication_id, "Pupil absence rates");
        DataSetRepository::create(store, &data_set).await.unwrap();
        data_set
    }

    fn payload(rows: usize) -> String {
        let rows: Vec<serde_json::Value> = (0..rows)
            .map(|i| {
                serde_json::json!({
                    "time_period": format!("20{:02}", 10 + i),
                    "geographic_level": "country",
                    "value": i as f64,
                })
            })
            .collect();
        serde_json::to_string(&rows).unwrap()
    }

    #[tokio::test]
    async fn test_queue_import_stages_first_version() {
        let store = Arc::new(Store::new());
        let publication_id: PublicationId = Id::new();
        let requester: UserId = Id::new();
        let data_set = seed_data_set(&store, publication_id).await;
        store.grant_editor(requester, publication_id).await;

        let use_case = queue_use_case(&store, ImportConfig::default());
        let output = use_case
            .execute(
                QueueImportInput {
                    data_set_id: data_set.id,
                    release_id: Id::new(),
                    payload: payload(2),
                },
                requester,
            )
            .await
            .unwrap_right();

        assert_eq!(output.version, VersionNumber::FIRST);

        let import = ImportRepository::find(store.as_ref(), output.import_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(import.status, ImportStatus::Queued);
        assert_eq!(import.data_set_version_id, output.data_set_version_id);

        let version = DataSetVersionRepository::find(store.as_ref(), output.data_set_version_id)
            .await
            .unwrap()
            .unwrap();
        assert!(version.is_draft());
    }

    #[tokio::test]
    async fn test_queue_import_bumps_minor_version() {
        let store = Arc::new(Store::new());
        let publication_id: PublicationId = Id::new();
        let requester: UserId = Id::new();
        let data_set = seed_data_set(&store, publication_id).await;
        store.grant_editor(requester, publication_id).await;

        let use_case = queue_use_case(&store, ImportConfig::default());
        let input = |payload| QueueImportInput {
            data_set_id: data_set.id,
            release_id: Id::new(),
            payload,
        };

        let first = use_case
            .execute(input(payload(1)), requester)
            .await
            .unwrap_right();
        let second = use_case
            .execute(input(payload(1)), requester)
            .await
            .unwrap_right();

        assert_eq!(first.version, VersionNumber::new(1, 0));
        assert_eq!(second.version, VersionNumber::new(1, 1));
    }

    #[tokio::test]
    async fn test_queue_import_forbidden_without_grant() {
        let store = Arc::new(Store::new());
        let data_set = seed_data_set(&store, Id::new()).await;

        let use_case = queue_use_case(&store, ImportConfig::default());
        let outcome = use_case
            .execute(
                QueueImportInput {
                    data_set_id: data_set.id,
                    release_id: Id::new(),
                    payload: payload(1),
                },
                Id::new(),
            )
            .await;

        assert_eq!(outcome.left(), Some(DataSetError::Forbidden));
    }

    #[tokio::test]
    async fn test_queue_import_unknown_data_set() {
        let store = Arc::new(Store::new());
        let use_case = queue_use_case(&store, ImportConfig::default());

        let outcome = use_case
            .execute(
                QueueImportInput {
                    data_set_id: Id::new(),
                    release_id: Id::new(),
                    payload: payload(1),
                },
                Id::new(),
            )
            .await;

        assert_eq!(outcome.left(), Some(DataSetError::DataSetNotFound));
    }

    #[tokio::test]
    async fn test_queue_import_rejects_oversized_payload() {
        let store = Arc::new(Store::new());
        let publication_id: PublicationId = Id::new();
        let requester: UserId = Id::new();
        let data_set = seed_data_set(&store, publication_id).await;
        store.grant_editor(requester, publication_id).await;

        let use_case = queue_use_case(&store, ImportConfig::with_caps(16, 100));
        let outcome = use_case
            .execute(
                QueueImportInput {
                    data_set_id: data_set.id,
                    release_id: Id::new(),
                    payload: payload(10),
                },
                requester,
            )
            .await;

        assert_eq!(
            outcome.left(),
            Some(DataSetError::PayloadTooLarge { max_bytes: 16 })
        );
    }

    #[tokio::test]
    async fn test_process_import_completes_and_records_rows() {
        let store = Arc::new(Store::new());
        let publication_id: PublicationId = Id::new();
        let requester: UserId = Id::new();
        let data_set = seed_data_set(&store, publication_id).await;
        store.grant_editor(requester, publication_id).await;

        let queued = queue_use_case(&store, ImportConfig::default())
            .execute(
                QueueImportInput {
                    data_set_id: data_set.id,
                    release_id: Id::new(),
                    payload: payload(3),
                },
                requester,
            )
            .await
            .unwrap_right();

        let output = process_use_case(&store, ImportConfig::default())
            .execute(ProcessImportInput {
                import_id: queued.import_id,
            })
            .await
            .unwrap_right();

        assert_eq!(output.rows_imported, 3);

        let import = ImportRepository::find(store.as_ref(), queued.import_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(import.status, ImportStatus::Complete);

        let version = DataSetVersionRepository::find(store.as_ref(), queued.data_set_version_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(version.row_count, 3);
    }

    #[tokio::test]
    async fn test_process_import_marks_malformed_file_failed() {
        let store = Arc::new(Store::new());
        let publication_id: PublicationId = Id::new();
        let requester: UserId = Id::new();
        let data_set = seed_data_set(&store, publication_id).await;
        store.grant_editor(requester, publication_id).await;

        let queued = queue_use_case(&store, ImportConfig::default())
            .execute(
                QueueImportInput {
                    data_set_id: data_set.id,
                    release_id: Id::new(),
                    payload: "not json".to_string(),
                },
                requester,
            )
            .await
            .unwrap_right();

        let outcome = process_use_case(&store, ImportConfig::default())
            .execute(ProcessImportInput {
                import_id: queued.import_id,
            })
            .await;

        assert!(matches!(outcome, Left(DataSetError::InvalidDataFile(_))));

        let import = ImportRepository::find(store.as_ref(), queued.import_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(import.status, ImportStatus::Failed);
        assert!(import.failure_reason.is_some());
    }

    #[tokio::test]
    async fn test_process_import_validates_row_content() {
        let store = Arc::new(Store::new());
        let publication_id: PublicationId = Id::new();
        let requester: UserId = Id::new();
        let data_set = seed_data_set(&store, publication_id).await;
        store.grant_editor(requester, publication_id).await;

        let bad_rows = serde_json::json!([
            {"time_period": "", "geographic_level": "country", "value": 1.0}
        ]);
        let queued = queue_use_case(&store, ImportConfig::default())
            .execute(
                QueueImportInput {
                    data_set_id: data_set.id,
                    release_id: Id::new(),
                    payload: bad_rows.to_string(),
                },
                requester,
            )
            .await
            .unwrap_right();

        let outcome = process_use_case(&store, ImportConfig::default())
            .execute(ProcessImportInput {
                import_id: queued.import_id,
            })
            .await;

        match outcome.left() {
            Some(DataSetError::InvalidDataFile(reason)) => {
                assert!(reason.contains("row 0"));
            }
            other => panic!("expected InvalidDataFile, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_process_import_enforces_row_cap() {
        let store = Arc::new(Store::new());
        let publication_id: PublicationId = Id::new();
        let requester: UserId = Id::new();
        let data_set = seed_data_set(&store, publication_id).await;
        store.grant_editor(requester, publication_id).await;

        let queued = queue_use_case(&store, ImportConfig::default())
            .execute(
                QueueImportInput {
                    data_set_id: data_set.id,
                    release_id: Id::new(),
                    payload: payload(3),
                },
                requester,
            )
            .await
            .unwrap_right();

        let outcome = process_use_case(&store, ImportConfig::with_caps(usize::MAX, 2))
            .execute(ProcessImportInput {
                import_id: queued.import_id,
            })
            .await;

        assert_eq!(
            outcome.left(),
            Some(DataSetError::TooManyRows { max_rows: 2 })
        );
    }

    #[tokio::test]
    async fn test_process_import_cannot_claim_twice() {
        let store = Arc::new(Store::new());
        let publication_id: PublicationId = Id::new();
        let requester: UserId = Id::new();
        let data_set = seed_data_set(&store, publication_id).await;
        store.grant_editor(requester, publication_id).await;

        let queued = queue_use_case(&store, ImportConfig::default())
            .execute(
                QueueImportInput {
                    data_set_id: data_set.id,
                    release_id: Id::new(),
                    payload: payload(1),
                },
                requester,
            )
            .await
            .unwrap_right();

        let process = process_use_case(&store, ImportConfig::default());
        let input = ProcessImportInput {
            import_id: queued.import_id,
        };
        process.execute(input.clone()).await.unwrap_right();

        let outcome = process.execute(input).await;
        assert_eq!(outcome.left(), Some(DataSetError::ImportNotClaimable));
    }

    #[tokio::test]
    async fn test_process_import_unknown_import() {
        let store = Arc::new(Store::new());
        let outcome = process_use_case(&store, ImportConfig::default())
            .execute(ProcessImportInput { import_id: Id::new() })
            .await;
        assert_eq!(outcome.left(), Some(DataSetError::ImportNotFound));
    }

    #[tokio::test]
    async fn test_map_version_creates_draft_successor() {
        let store = Arc::new(Store::new());
        let publication_id: PublicationId = Id::new();
        let requester: UserId = Id::new();
        let data_set = seed_data_set(&store, publication_id).await;
        store.grant_editor(requester, publication_id).await;

        let mut source = DataSetVersion::first(data_set.id, Id::new());
        source.record_rows(50);
        source.status = VersionStatus::Published;
        DataSetVersionRepository::create(store.as_ref(), &source)
            .await
            .unwrap();

        let output = map_use_case(&store)
            .execute(
                MapVersionInput {
                    source_version_id: source.id,
                    target_release_id: Id::new(),
                    breaking: false,
                },
                requester,
            )
            .await
            .unwrap_right();

        assert_eq!(output.version, VersionNumber::new(1, 1));

        let mapped = DataSetVersionRepository::find(store.as_ref(), output.data_set_version_id)
            .await
            .unwrap()
            .unwrap();
        assert!(mapped.is_draft());
        assert_eq!(mapped.row_count, 50);
    }

    #[tokio::test]
    async fn test_map_version_breaking_bumps_major() {
        let store = Arc::new(Store::new());
        let publication_id: PublicationId = Id::new();
        let requester: UserId = Id::new();
        let data_set = seed_data_set(&store, publication_id).await;
        store.grant_editor(requester, publication_id).await;

        let mut source = DataSetVersion::first(data_set.id, Id::new());
        source.status = VersionStatus::Published;
        DataSetVersionRepository::create(store.as_ref(), &source)
            .await
            .unwrap();

        let output = map_use_case(&store)
            .execute(
                MapVersionInput {
                    source_version_id: source.id,
                    target_release_id: Id::new(),
                    breaking: true,
                },
                requester,
            )
            .await
            .unwrap_right();

        assert_eq!(output.version, VersionNumber::new(2, 0));
    }

    #[tokio::test]
    async fn test_map_version_requires_published_source() {
        let store = Arc::new(Store::new());
        let publication_id: PublicationId = Id::new();
        let requester: UserId = Id::new();
        let data_set = seed_data_set(&store, publication_id).await;
        store.grant_editor(requester, publication_id).await;

        let source = DataSetVersion::first(data_set.id, Id::new());
        DataSetVersionRepository::create(store.as_ref(), &source)
            .await
            .unwrap();

        let outcome = map_use_case(&store)
            .execute(
                MapVersionInput {
                    source_version_id: source.id,
                    target_release_id: Id::new(),
                    breaking: false,
                },
                requester,
            )
            .await;

        assert_eq!(outcome.left(), Some(DataSetError::VersionNotPublished));
    }

    #[tokio::test]
    async fn test_map_version_forbidden_without_grant() {
        let store = Arc::new(Store::new());
        let data_set = seed_data_set(&store, Id::new()).await;

        let mut source = DataSetVersion::first(data_set.id, Id::new());
        source.status = VersionStatus::Published;
        DataSetVersionRepository::create(store.as_ref(), &source)
            .await
            .unwrap();

        let outcome = map_use_case(&store)
            .execute(
                MapVersionInput {
                    source_version_id: source.id,
                    target_release_id: Id::new(),
                    breaking: false,
                },
                Id::new(),
            )
            .await;

        assert_eq!(outcome.left(), Some(DataSetError::Forbidden));
    }
}
