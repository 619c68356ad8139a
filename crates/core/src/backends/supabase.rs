use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use uuid::Uuid;

use super::traits::{ContentStore, IdentityProvider, ObjectStore};
use crate::errors::CoreError;
use crate::models::chart::ChartPoint;
use crate::models::config::SiteConfig;
use crate::models::document::{DocumentRecord, NewDocument};
use crate::models::session::{AuthSession, UserInfo};

const PROVIDER: &str = "Supabase";

fn build_client() -> Client {
    let builder = Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(Duration::from_secs(30));
    builder.build().unwrap_or_else(|_| Client::new())
}

fn trim_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn api_error(context: &str, status: StatusCode, body: &str) -> CoreError {
    CoreError::Api {
        provider: PROVIDER.into(),
        message: format!("{context}: HTTP {status} — {body}"),
    }
}

async fn body_text(resp: Response) -> String {
    resp.text().await.unwrap_or_default()
}

// ── Identity (GoTrue) ───────────────────────────────────────────────

/// Email+password identity provider over the Supabase auth endpoint.
pub struct SupabaseAuth {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseAuth {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            client: build_client(),
            base_url: trim_base(&config.project_url),
            anon_key: config.anon_key.clone(),
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: ApiUser,
}

#[derive(Deserialize)]
struct ApiUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

impl From<ApiUser> for UserInfo {
    fn from(u: ApiUser) -> Self {
        UserInfo {
            id: u.id,
            email: u.email.unwrap_or_default(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl IdentityProvider for SupabaseAuth {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, CoreError> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
            // Rejected credentials, not a transport failure
            return Err(CoreError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(api_error("sign-in", status, &body_text(resp).await));
        }

        let token: TokenResponse = resp.json().await.map_err(|e| CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Failed to parse sign-in response: {e}"),
        })?;

        Ok(AuthSession {
            access_token: token.access_token,
            user: token.user.into(),
        })
    }

    async fn sign_out(&self, session: &AuthSession) -> Result<(), CoreError> {
        let url = format!("{}/auth/v1/logout", self.base_url);
        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        let status = resp.status();
        // An already-dead token is a successful sign-out
        if status.is_success() || status == StatusCode::UNAUTHORIZED {
            return Ok(());
        }
        Err(api_error("sign-out", status, &body_text(resp).await))
    }

    async fn current_user(&self, session: &AuthSession) -> Result<Option<UserInfo>, CoreError> {
        let url = format!("{}/auth/v1/user", self.base_url);
        let resp = self
            .client
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(api_error("auth check", status, &body_text(resp).await));
        }

        let user: ApiUser = resp.json().await.map_err(|e| CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Failed to parse user response: {e}"),
        })?;
        Ok(Some(user.into()))
    }
}

// ── Structured data (PostgREST) ─────────────────────────────────────

/// Chart and document collections over the Supabase REST endpoint.
///
/// Reads carry the anon key only; writes additionally forward the admin's
/// access token so row-level security on the tables can authorize them.
pub struct SupabaseContent {
    client: Client,
    base_url: String,
    anon_key: String,
    chart_table: String,
    documents_table: String,
}

impl SupabaseContent {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            client: build_client(),
            base_url: trim_base(&config.project_url),
            anon_key: config.anon_key.clone(),
            chart_table: config.chart_table.clone(),
            documents_table: config.documents_table.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn with_keys(&self, req: RequestBuilder, session: Option<&AuthSession>) -> RequestBuilder {
        let req = req.header("apikey", &self.anon_key);
        match session {
            Some(s) => req.bearer_auth(&s.access_token),
            None => req.bearer_auth(&self.anon_key),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ContentStore for SupabaseContent {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn fetch_chart_points(&self) -> Result<Vec<ChartPoint>, CoreError> {
        let url = format!(
            "{}?select=*&order=month_order.asc",
            self.table_url(&self.chart_table)
        );
        let resp = self.with_keys(self.client.get(&url), None).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(api_error("chart fetch", status, &body_text(resp).await));
        }

        resp.json().await.map_err(|e| CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Failed to parse chart rows: {e}"),
        })
    }

    async fn update_chart_value(
        &self,
        session: &AuthSession,
        id: Uuid,
        value: f64,
    ) -> Result<(), CoreError> {
        let url = format!("{}?id=eq.{id}", self.table_url(&self.chart_table));
        let resp = self
            .with_keys(self.client.patch(&url), Some(session))
            .header("Prefer", "return=representation")
            .json(&json!({ "valor": value }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(api_error("chart update", status, &body_text(resp).await));
        }

        // return=representation echoes the touched rows; zero rows means
        // the id matched nothing (or RLS filtered it out).
        let rows: Vec<ChartPoint> = resp.json().await.map_err(|e| CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Failed to parse update response: {e}"),
        })?;
        if rows.is_empty() {
            return Err(CoreError::NotFound(format!("chart point {id}")));
        }
        Ok(())
    }

    async fn list_documents(&self) -> Result<Vec<DocumentRecord>, CoreError> {
        let url = format!(
            "{}?select=*&order=created_at.desc",
            self.table_url(&self.documents_table)
        );
        let resp = self.with_keys(self.client.get(&url), None).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(api_error("document fetch", status, &body_text(resp).await));
        }

        resp.json().await.map_err(|e| CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Failed to parse document rows: {e}"),
        })
    }

    async fn insert_document(
        &self,
        session: &AuthSession,
        doc: NewDocument,
    ) -> Result<DocumentRecord, CoreError> {
        let url = self.table_url(&self.documents_table);
        let resp = self
            .with_keys(self.client.post(&url), Some(session))
            .header("Prefer", "return=representation")
            .json(&doc)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(api_error("document insert", status, &body_text(resp).await));
        }

        let mut rows: Vec<DocumentRecord> = resp.json().await.map_err(|e| CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Failed to parse insert response: {e}"),
        })?;
        rows.pop().ok_or_else(|| CoreError::Api {
            provider: PROVIDER.into(),
            message: "Insert returned no row".into(),
        })
    }

    async fn delete_document(&self, session: &AuthSession, id: Uuid) -> Result<(), CoreError> {
        let url = format!("{}?id=eq.{id}", self.table_url(&self.documents_table));
        let resp = self
            .with_keys(self.client.delete(&url), Some(session))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(api_error("document delete", status, &body_text(resp).await));
        }
        Ok(())
    }
}

// ── Object storage ──────────────────────────────────────────────────

/// Monthly-letter files in a Supabase storage bucket.
pub struct SupabaseStorage {
    client: Client,
    base_url: String,
    anon_key: String,
    bucket: String,
}

impl SupabaseStorage {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            client: build_client(),
            base_url: trim_base(&config.project_url),
            anon_key: config.anon_key.clone(),
            bucket: config.documents_bucket.clone(),
        }
    }

    fn object_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{path}", self.base_url, self.bucket)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ObjectStore for SupabaseStorage {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn upload(
        &self,
        session: &AuthSession,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), CoreError> {
        let resp = self
            .client
            .post(self.object_url(path))
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .header("Content-Type", content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Storage(format!(
                "upload of '{path}' failed: HTTP {status} — {}",
                body_text(resp).await
            )));
        }
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{path}",
            self.base_url, self.bucket
        )
    }

    async fn remove(&self, session: &AuthSession, path: &str) -> Result<(), CoreError> {
        let resp = self
            .client
            .delete(self.object_url(path))
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CoreError::StorageObjectMissing(path.to_string()));
        }
        if !status.is_success() {
            return Err(CoreError::Storage(format!(
                "removal of '{path}' failed: HTTP {status} — {}",
                body_text(resp).await
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig::new("https://example.supabase.co/", "anon-key")
    }

    #[test]
    fn public_url_is_derived_from_bucket_and_path() {
        let storage = SupabaseStorage::new(&config());
        assert_eq!(
            storage.public_url("cartas/170_carta.pdf"),
            "https://example.supabase.co/storage/v1/object/public/gvv-documents/cartas/170_carta.pdf"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let content = SupabaseContent::new(&config());
        assert_eq!(
            content.table_url("gvv_chart_data"),
            "https://example.supabase.co/rest/v1/gvv_chart_data"
        );
    }
}
