//! Error types for the contacts-screen workflow.
//!
//! Errors are classified by how they surface to the user:
//! - Silent: missing session (redirect, no notification)
//! - Notified: fetch/validation/lookup failures (notification, view stays up)
//!
//! Every error is terminal for its triggering operation only; nothing is
//! retried automatically and nothing crashes the view.

use thiserror::Error;

use crate::phone::PhoneError;
use crate::providers::StoreError;

/// Error types for contacts-screen operations.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// No authenticated principal; the guard redirects to login.
    #[error("No authenticated session")]
    AuthAbsent,

    /// The contact-list fetch failed; carries the backend's message.
    #[error("Failed to load contacts: {0}")]
    Fetch(StoreError),

    /// Phone input rejected before any backend call.
    #[error("{0}")]
    Validation(#[from] PhoneError),

    /// Phone lookup matched nothing (or the backend errored on it).
    #[error("No user found for that phone number")]
    Lookup,

    /// Anything else that escaped the search path.
    #[error("{0}")]
    Unexpected(String),
}

impl ScreenError {
    /// Returns true if this error surfaces as a user-visible notification.
    pub fn is_notified(&self) -> bool {
        !matches!(self, ScreenError::AuthAbsent)
    }

    /// Notification title for this error.
    pub fn title(&self) -> &'static str {
        match self {
            ScreenError::AuthAbsent => "Signed out",
            ScreenError::Fetch(_) => "Error",
            ScreenError::Validation(_) => "Invalid phone number",
            ScreenError::Lookup => "Not Found",
            ScreenError::Unexpected(_) => "Error",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ScreenError::Validation(_) | ScreenError::Lookup => Severity::Info,
            _ => Severity::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

/// Serializable notification payload handed to the notification sink.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiNotification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl From<&ScreenError> for UiNotification {
    fn from(err: &ScreenError) -> Self {
        UiNotification {
            title: err.title().to_string(),
            message: err.to_string(),
            severity: err.severity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_absent_is_silent() {
        assert!(!ScreenError::AuthAbsent.is_notified());
        assert!(ScreenError::Lookup.is_notified());
    }

    #[test]
    fn lookup_maps_to_not_found_notification() {
        let n = UiNotification::from(&ScreenError::Lookup);
        assert_eq!(n.title, "Not Found");
        assert_eq!(n.severity, Severity::Info);
    }

    #[test]
    fn fetch_carries_backend_message() {
        let err = ScreenError::Fetch(StoreError::Backend("permission denied".into()));
        assert!(err.to_string().contains("permission denied"));
        assert_eq!(err.severity(), Severity::Error);
    }
}
