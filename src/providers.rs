//! Collaborator interfaces consumed by the contacts screen.
//!
//! The screen never talks to the hosted backend, the router, or the
//! notification system directly; it goes through these traits so the
//! workflow can run against substitutable fakes in tests. `backend.rs`
//! provides the production implementation of the two async traits.

use async_trait::async_trait;
use thiserror::Error;

use crate::error::UiNotification;
use crate::types::{Principal, Profile};

/// Error reported by the profile store. Carries the backend's message text;
/// transport and API failures are distinguished for logging only.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Backend error: {0}")]
    Backend(String),
    #[error("Network error: {0}")]
    Transport(String),
}

/// Identity provider for the current session.
///
/// A provider failure while reading the principal is not distinguished from
/// "no session": implementations return `None` for both.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_principal(&self) -> Option<Principal>;

    /// End the current session. Best effort; the caller navigates to login
    /// regardless of the outcome.
    async fn sign_out(&self) -> Result<(), StoreError>;
}

/// Read-only access to the backend's profile rows.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// All profiles, ordered ascending by display name. Ordering is the
    /// store's responsibility; callers preserve it.
    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError>;

    /// Exact single-row lookup by phone key. Phone keys are unique in the
    /// store, so at most one row can come back.
    async fn find_by_phone_key(&self, key: &str) -> Result<Option<Profile>, StoreError>;
}

/// Navigation targets the screen can route to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Login entry point.
    Login,
    /// Conversation view for the given profile id.
    Chat(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/auth".to_string(),
            Route::Chat(id) => format!("/chat/{}", id),
        }
    }
}

/// Navigation seam owned by the host UI.
pub trait Router: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Sink for user-visible notifications.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: UiNotification);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths() {
        assert_eq!(Route::Login.path(), "/auth");
        assert_eq!(Route::Chat("abc123".into()).path(), "/chat/abc123");
    }
}
