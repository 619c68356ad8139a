use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata for one uploaded monthly-letter file.
///
/// The "current" letter is always the record with the maximum `created_at`,
/// computed at query time. There is no separate "current" pointer to drift
/// out of sync with the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Unique identifier
    pub id: Uuid,

    /// Original filename, shown to the public
    pub name: String,

    /// Opaque locator inside the storage bucket
    pub file_path: String,

    /// Public retrieval URL derived from `file_path`
    pub file_url: String,

    /// Upload timestamp; newest wins
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a document record. The store assigns `id` and
/// `created_at` on insert.
#[derive(Debug, Clone, Serialize)]
pub struct NewDocument {
    pub name: String,
    pub file_path: String,
    pub file_url: String,
}
