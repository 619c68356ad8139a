pub mod backends;
pub mod errors;
pub mod i18n;
pub mod models;
pub mod services;

use uuid::Uuid;

use backends::supabase::{SupabaseAuth, SupabaseContent, SupabaseStorage};
use backends::traits::{ContentStore, IdentityProvider, ObjectStore};
use errors::CoreError;
use i18n::{Locale, LocaleListener, Translator};
use models::chart::{BatchSaveReport, ChartEdit, ChartPoint};
use models::config::SiteConfig;
use models::document::DocumentRecord;
use models::session::{AuthSession, PanelSession, PanelState, StatusLevel, StatusMessage};
use services::admin_service::AdminService;
use services::content_service::{ContentService, Overview};

/// Main entry point for the Cretum site core library.
/// Holds the translator, the backend boundaries, and the admin panel state.
#[must_use]
pub struct SiteCore {
    config: SiteConfig,
    translator: Translator,
    content_service: ContentService,
    admin_service: AdminService,
    identity: Box<dyn IdentityProvider>,
    store: Box<dyn ContentStore>,
    objects: Box<dyn ObjectStore>,
    session: Option<AuthSession>,
    panel: PanelSession,
}

impl std::fmt::Debug for SiteCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteCore")
            .field("locale", &self.translator.locale())
            .field("identity", &self.identity.name())
            .field("store", &self.store.name())
            .field("signed_in", &self.session.is_some())
            .field("panel", &self.panel.state())
            .finish()
    }
}

impl SiteCore {
    /// Wire up a core against the configured Supabase project.
    pub fn new(config: SiteConfig) -> Self {
        let identity = Box::new(SupabaseAuth::new(&config));
        let store = Box::new(SupabaseContent::new(&config));
        let objects = Box::new(SupabaseStorage::new(&config));
        Self::with_backends(config, identity, store, objects)
    }

    /// Wire up a core against caller-supplied backends (tests, alternate
    /// stores).
    pub fn with_backends(
        config: SiteConfig,
        identity: Box<dyn IdentityProvider>,
        store: Box<dyn ContentStore>,
        objects: Box<dyn ObjectStore>,
    ) -> Self {
        let translator = Translator::with_locale(config.default_locale);
        Self {
            config,
            translator,
            content_service: ContentService::new(),
            admin_service: AdminService::new(),
            identity,
            store,
            objects,
            session: None,
            panel: PanelSession::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    // ── Translation ─────────────────────────────────────────────────

    /// The currently active display locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.translator.locale()
    }

    /// Switch the display locale; listeners are notified synchronously.
    pub fn set_locale(&mut self, locale: Locale) {
        self.translator.set_locale(locale);
    }

    /// Resolve one copy key in the active locale (key itself on absence).
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        self.translator.resolve(key)
    }

    /// Resolve an ordered list of copy keys, preserving order.
    #[must_use]
    pub fn resolve_all<'a, I>(&self, keys: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.translator.resolve_all(keys)
    }

    /// Register a listener for locale changes.
    pub fn subscribe_locale(&mut self, listener: LocaleListener) {
        self.translator.subscribe(listener);
    }

    /// Direct access to the resolver.
    #[must_use]
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    // ── Public reads ────────────────────────────────────────────────

    /// The chart series, ascending by month order. Empty vec when no data
    /// has been seeded yet.
    pub async fn fetch_chart_series(&self) -> Result<Vec<ChartPoint>, CoreError> {
        self.content_service
            .fetch_chart_series(self.store.as_ref())
            .await
    }

    /// The newest monthly letter, or `None` when nothing was uploaded yet.
    pub async fn fetch_latest_document(&self) -> Result<Option<DocumentRecord>, CoreError> {
        self.content_service
            .fetch_latest_document(self.store.as_ref())
            .await
    }

    /// Chart and letter together, fetched concurrently, each side degrading
    /// independently on failure.
    pub async fn fetch_overview(&self) -> Overview {
        self.content_service.fetch_overview(self.store.as_ref()).await
    }

    // ── Admin: authentication ───────────────────────────────────────

    /// Exchange credentials for a session and move the panel to Idle.
    /// Wrong credentials yield `CoreError::InvalidCredentials` and leave
    /// the panel unauthenticated (the caller re-prompts).
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<(), CoreError> {
        let session = self.identity.sign_in(email, password).await?;
        self.session = Some(session);
        self.panel.authenticate();
        Ok(())
    }

    /// Invalidate the session. The panel is abandoned either way.
    pub async fn sign_out(&mut self) -> Result<(), CoreError> {
        self.panel.deauthenticate();
        if let Some(session) = self.session.take() {
            self.identity.sign_out(&session).await?;
        }
        Ok(())
    }

    /// On-mount auth check. `true` promotes the panel to Idle; `false`
    /// means the caller redirects away (the view is abandoned, not
    /// retried).
    pub async fn check_auth(&mut self) -> Result<bool, CoreError> {
        let valid = match &self.session {
            Some(session) => self.identity.current_user(session).await?.is_some(),
            None => false,
        };
        if valid {
            self.panel.authenticate();
        } else {
            self.session = None;
            self.panel.deauthenticate();
        }
        Ok(valid)
    }

    /// `true` while a session is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    // ── Admin: chart editing ────────────────────────────────────────

    /// Apply a batch of value edits as one save action.
    ///
    /// All edits are attempted (all-settled, no rollback). Full success
    /// leaves an info message on the panel; partial failure leaves a
    /// warning naming how much saved. Both outcomes return `Ok(report)` —
    /// only being signed out or mid-operation is an `Err`. An empty batch
    /// is a no-op: it touches nothing and leaves no message.
    pub async fn save_chart(&mut self, edits: &[ChartEdit]) -> Result<BatchSaveReport, CoreError> {
        let session = self.session.clone().ok_or(CoreError::NotAuthenticated)?;

        // Nothing edited: no requests, no transient "saved" message
        if edits.is_empty() {
            return Ok(BatchSaveReport::default());
        }

        self.panel.begin_saving()?;

        let report = self
            .admin_service
            .save_chart(self.store.as_ref(), &session, edits)
            .await;

        if report.is_complete() {
            self.panel
                .settle(StatusLevel::Info, "✓ Gráfica guardada correctamente.");
        } else {
            self.panel.settle(
                StatusLevel::Warning,
                format!(
                    "No se guardaron todos los valores: {} de {} aplicados.",
                    report.applied.len(),
                    report.total()
                ),
            );
        }
        Ok(report)
    }

    // ── Admin: documents ────────────────────────────────────────────

    /// Upload a monthly letter and register its record. The panel passes
    /// through Uploading and returns to Idle on success and failure alike.
    pub async fn upload_document(
        &mut self,
        filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<DocumentRecord, CoreError> {
        let session = self.session.clone().ok_or(CoreError::NotAuthenticated)?;
        self.panel.begin_uploading()?;

        let result = self
            .admin_service
            .upload_document(
                self.store.as_ref(),
                self.objects.as_ref(),
                &session,
                filename,
                bytes,
                content_type,
            )
            .await;

        match result {
            Ok(doc) => {
                self.panel
                    .settle(StatusLevel::Info, "✓ Carta subida correctamente.");
                Ok(doc)
            }
            Err(e) => {
                self.panel
                    .settle(StatusLevel::Error, "Error al subir el archivo.");
                Err(e)
            }
        }
    }

    /// Delete a letter (storage object, then record). Idempotent when the
    /// storage object is already gone; an empty path deletes the record
    /// only.
    pub async fn delete_document(&mut self, id: Uuid, storage_path: &str) -> Result<(), CoreError> {
        let session = self.session.clone().ok_or(CoreError::NotAuthenticated)?;
        self.admin_service
            .delete_document(
                self.store.as_ref(),
                self.objects.as_ref(),
                &session,
                id,
                storage_path,
            )
            .await
    }

    /// All letters, newest first (the admin list view).
    pub async fn list_documents(&self) -> Result<Vec<DocumentRecord>, CoreError> {
        self.content_service.list_documents(self.store.as_ref()).await
    }

    // ── Panel state ─────────────────────────────────────────────────

    #[must_use]
    pub fn panel_state(&self) -> PanelState {
        self.panel.state()
    }

    /// The transient status message, if one is still within its display
    /// duration.
    #[must_use]
    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.panel.status()
    }

    /// Drop the status message once its display duration has elapsed.
    /// Returns `true` if a message was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        self.panel.clear_expired(chrono::Utc::now())
    }
}
