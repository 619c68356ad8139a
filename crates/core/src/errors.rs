use thiserror::Error;

/// Unified error type for the entire cretum-site-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Authentication ──────────────────────────────────────────────
    #[error("Invalid credentials — email or password is incorrect")]
    InvalidCredentials,

    #[error("Not signed in — this operation requires an authenticated session")]
    NotAuthenticated,

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    // ── Object storage ──────────────────────────────────────────────
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Storage object not found: {0}")]
    StorageObjectMissing(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        CoreError::Network(redact_query(&e.to_string()))
    }
}

/// Strip query parameters from URLs embedded in error messages so the
/// project anon key never leaks into logs or user-visible messages.
fn redact_query(msg: &str) -> String {
    match msg.find('?') {
        Some(idx) => format!("{}?<query redacted>", &msg[..idx]),
        None => msg.to_string(),
    }
}
