use chrono::Utc;
use futures::future::join_all;
use uuid::Uuid;

use crate::backends::traits::{ContentStore, ObjectStore};
use crate::errors::CoreError;
use crate::models::chart::{BatchSaveReport, ChartEdit};
use crate::models::document::{DocumentRecord, NewDocument};
use crate::models::session::AuthSession;

/// Folder inside the bucket where letter files live.
const DOCUMENTS_PREFIX: &str = "cartas";

/// Write path of the content synchronization surface. Every operation
/// requires an authenticated session, which is forwarded to the backends.
pub struct AdminService;

impl AdminService {
    pub fn new() -> Self {
        Self
    }

    /// Apply one "save" user action over the full edited set.
    ///
    /// Every edit is attempted and the outcomes are collected per point
    /// (all-settled): points that saved stay saved, failures are reported,
    /// nothing is rolled back. This never returns `Err` — a partially
    /// failed batch is a warning in the report, not a fatal error.
    pub async fn save_chart(
        &self,
        store: &dyn ContentStore,
        session: &AuthSession,
        edits: &[ChartEdit],
    ) -> BatchSaveReport {
        let results = join_all(edits.iter().map(|edit| async move {
            let outcome = store.update_chart_value(session, edit.id, edit.value).await;
            (edit.id, outcome)
        }))
        .await;

        let mut report = BatchSaveReport::default();
        for (id, outcome) in results {
            match outcome {
                Ok(()) => report.applied.push(id),
                Err(e) => report.failed.push((id, e.to_string())),
            }
        }
        report
    }

    /// Upload a monthly letter and register it.
    ///
    /// The storage path embeds the upload timestamp so a re-upload of the
    /// same filename never collides with an earlier one. The record insert
    /// only runs after the storage write succeeded; a failed upload leaves
    /// no partial state behind.
    pub async fn upload_document(
        &self,
        store: &dyn ContentStore,
        objects: &dyn ObjectStore,
        session: &AuthSession,
        filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<DocumentRecord, CoreError> {
        let name = filename.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("filename must not be empty".into()));
        }

        let path = format!("{DOCUMENTS_PREFIX}/{}_{name}", Utc::now().timestamp_millis());
        objects.upload(session, &path, bytes, content_type).await?;

        let file_url = objects.public_url(&path);
        store
            .insert_document(
                session,
                NewDocument {
                    name: name.to_string(),
                    file_path: path,
                    file_url,
                },
            )
            .await
    }

    /// Delete a letter: storage object first, then the record.
    ///
    /// A storage object that is already gone does not block the record
    /// delete (idempotent on storage-not-found). An empty `storage_path`
    /// skips the storage call entirely and removes only the record — the
    /// blob store is never asked to remove an empty key.
    pub async fn delete_document(
        &self,
        store: &dyn ContentStore,
        objects: &dyn ObjectStore,
        session: &AuthSession,
        id: Uuid,
        storage_path: &str,
    ) -> Result<(), CoreError> {
        if !storage_path.is_empty() {
            match objects.remove(session, storage_path).await {
                Ok(()) | Err(CoreError::StorageObjectMissing(_)) => {}
                Err(e) => return Err(e),
            }
        }
        store.delete_document(session, id).await
    }
}

impl Default for AdminService {
    fn default() -> Self {
        Self::new()
    }
}
