use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::chart::ChartPoint;
use crate::models::document::{DocumentRecord, NewDocument};
use crate::models::session::{AuthSession, UserInfo};

/// Identity boundary: credential exchange and session introspection.
///
/// The library never designs authentication itself — it only needs
/// "sign in / sign out" and "is there a valid session" as black-box calls.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait IdentityProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Exchange email+password for a session.
    /// Wrong credentials yield `CoreError::InvalidCredentials`.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, CoreError>;

    /// Invalidate a session.
    async fn sign_out(&self, session: &AuthSession) -> Result<(), CoreError>;

    /// Resolve the user behind a session, or `None` if the session is no
    /// longer valid. Invalidity is an answer, not an error.
    async fn current_user(&self, session: &AuthSession) -> Result<Option<UserInfo>, CoreError>;
}

/// Structured-data boundary: the two externally-owned collections.
///
/// Reads run under the public (anon) role; writes forward the admin's
/// session token and are enforced remotely by row-level security.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ContentStore: Send + Sync {
    /// Human-readable name of this store (for logs/errors).
    fn name(&self) -> &str;

    /// All chart points, in whatever order the store returns them.
    /// Callers re-sort by `month_order`; an empty collection is an empty
    /// vec, never an error.
    async fn fetch_chart_points(&self) -> Result<Vec<ChartPoint>, CoreError>;

    /// Overwrite the value of one existing point. Never creates points and
    /// never touches `month` or `month_order`.
    async fn update_chart_value(
        &self,
        session: &AuthSession,
        id: Uuid,
        value: f64,
    ) -> Result<(), CoreError>;

    /// All document records, in whatever order the store returns them.
    async fn list_documents(&self) -> Result<Vec<DocumentRecord>, CoreError>;

    /// Insert a record for a freshly uploaded file. The store assigns the
    /// id and creation timestamp.
    async fn insert_document(
        &self,
        session: &AuthSession,
        doc: NewDocument,
    ) -> Result<DocumentRecord, CoreError>;

    /// Delete one record by id.
    async fn delete_document(&self, session: &AuthSession, id: Uuid) -> Result<(), CoreError>;
}

/// Object-storage boundary: upload-by-path, public-URL derivation, and
/// remove-by-path against a remote blob store.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ObjectStore: Send + Sync {
    /// Human-readable name of this store (for logs/errors).
    fn name(&self) -> &str;

    /// Store `bytes` under `path`. Fails if an object already exists there.
    async fn upload(
        &self,
        session: &AuthSession,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), CoreError>;

    /// The public retrieval URL for `path`. Pure derivation, no I/O.
    fn public_url(&self, path: &str) -> String;

    /// Remove the object at `path`. A missing object yields
    /// `CoreError::StorageObjectMissing` so callers can treat removal as
    /// idempotent.
    async fn remove(&self, session: &AuthSession, path: &str) -> Result<(), CoreError>;
}
