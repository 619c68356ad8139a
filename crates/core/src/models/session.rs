use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// How long a transient status message stays visible before it is
/// considered expired (the frontend auto-clears after this).
pub const STATUS_TTL_SECS: i64 = 3;

/// The signed-in admin user, as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
}

/// An authenticated session handle. Opaque to this library beyond the
/// bearer token it forwards to the structured-data and storage boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user: UserInfo,
}

/// Admin panel lifecycle states.
///
/// `Unauthenticated` is terminal for the view: the caller redirects away
/// rather than retrying. `Saving` and `Uploading` are transient and always
/// return to `Idle`, success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// No valid session; the view is abandoned
    Unauthenticated,
    /// Signed in, no operation outstanding
    Idle,
    /// A batch chart save is in flight
    Saving,
    /// A document upload is in flight
    Uploading,
}

/// Severity of a transient status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// A short-lived message shown after an admin operation settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    set_at: DateTime<Utc>,
}

impl StatusMessage {
    pub fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level,
            set_at: Utc::now(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_set_at(level: StatusLevel, text: impl Into<String>, set_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            level,
            set_at,
        }
    }

    /// `true` once the fixed display duration has elapsed.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.set_at >= Duration::seconds(STATUS_TTL_SECS)
    }
}

/// Tracks the admin panel state machine and its transient status message.
#[derive(Debug, Clone)]
pub struct PanelSession {
    state: PanelState,
    status: Option<StatusMessage>,
}

impl PanelSession {
    /// A fresh panel starts unauthenticated; `check_auth` promotes it.
    pub fn new() -> Self {
        Self {
            state: PanelState::Unauthenticated,
            status: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// The current status message, if one is set (expired or not —
    /// call `clear_expired` first to honor the display duration).
    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Session established (sign-in or successful auth check).
    pub fn authenticate(&mut self) {
        self.state = PanelState::Idle;
    }

    /// Session lost or signed out. Clears any pending message.
    pub fn deauthenticate(&mut self) {
        self.state = PanelState::Unauthenticated;
        self.status = None;
    }

    /// Enter the Saving state. Only legal from Idle.
    pub fn begin_saving(&mut self) -> Result<(), CoreError> {
        self.begin(PanelState::Saving)
    }

    /// Enter the Uploading state. Only legal from Idle.
    pub fn begin_uploading(&mut self) -> Result<(), CoreError> {
        self.begin(PanelState::Uploading)
    }

    fn begin(&mut self, target: PanelState) -> Result<(), CoreError> {
        match self.state {
            PanelState::Idle => {
                self.status = None;
                self.state = target;
                Ok(())
            }
            PanelState::Unauthenticated => Err(CoreError::NotAuthenticated),
            other => Err(CoreError::Validation(format!(
                "an operation is already in flight (state: {other:?})"
            ))),
        }
    }

    /// Leave a transient state, back to Idle, with a message for the user.
    /// Called on success and on failure alike.
    pub fn settle(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.state = PanelState::Idle;
        self.status = Some(StatusMessage::new(level, text));
    }

    /// Drop the status message once its display duration has elapsed.
    /// Returns `true` if a message was cleared.
    pub fn clear_expired(&mut self, now: DateTime<Utc>) -> bool {
        if self.status.as_ref().is_some_and(|s| s.is_expired(now)) {
            self.status = None;
            return true;
        }
        false
    }

    #[cfg(test)]
    pub(crate) fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }
}

impl Default for PanelSession {
    fn default() -> Self {
        Self::new()
    }
}
