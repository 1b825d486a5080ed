//! HTTP adapter for the hosted backend.
//!
//! Implements `IdentityProvider` and `ProfileStore` against the backend's
//! REST surface:
//! - `GET  /auth/v1/user` — current principal
//! - `POST /auth/v1/logout` — end session
//! - `GET  /rest/v1/profiles?order=display_name.asc` — full profile set
//! - `GET  /rest/v1/profiles?phone_number=eq.{key}&limit=1` — phone lookup
//!
//! Every request carries the project API key; authenticated requests add a
//! bearer token. No retries: errors here are terminal for the operation
//! that issued them.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use crate::config::ScreenConfig;
use crate::providers::{IdentityProvider, ProfileStore, StoreError};
use crate::types::{Principal, Profile};

// ============================================================================
// API response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// A profile row as the REST API returns it. Column names are snake_case on
/// the wire; camelCase aliases are accepted for older backend versions that
/// proxied rows through the JS client.
#[derive(Debug, Deserialize)]
struct ProfileRow {
    id: String,
    #[serde(default, alias = "displayName")]
    display_name: Option<String>,
    #[serde(default, alias = "phoneNumber")]
    phone_number: String,
    #[serde(default, alias = "lastSeen")]
    last_seen: Option<DateTime<Utc>>,
    #[serde(default, alias = "isOnline")]
    is_online: bool,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            display_name: row.display_name,
            phone_number: row.phone_number,
            last_seen: row.last_seen,
            is_online: row.is_online,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "msg", alias = "error_description")]
    message: String,
}

// ============================================================================
// Client
// ============================================================================

/// Reqwest-backed client for the hosted backend.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
    /// Session bearer token, set after the host app signs in.
    access_token: Mutex<Option<String>>,
}

impl HttpBackend {
    pub fn new(config: &ScreenConfig) -> Result<Self, String> {
        if config.backend_url.is_empty() {
            return Err("Backend URL not configured".to_string());
        }
        let base_url = Url::parse(&config.backend_url)
            .map_err(|e| format!("Invalid backend URL: {}", e))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
            access_token: Mutex::new(None),
        })
    }

    /// Install the session token obtained by the host app's login flow.
    pub fn set_access_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.access_token.lock() {
            *guard = token;
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(path)
            .map_err(|e| StoreError::Backend(format!("Bad endpoint {}: {}", path, e)))
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("apikey", &self.api_key);
        let token = self
            .access_token
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default();
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Map a non-success response to a `StoreError` carrying the backend's
    /// own message when it sent one.
    async fn error_from(response: reqwest::Response) -> StoreError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .map(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or(body);
        if message.is_empty() {
            StoreError::Backend(format!("HTTP {}", status))
        } else {
            StoreError::Backend(format!("HTTP {}: {}", status, message))
        }
    }

    fn transport(err: reqwest::Error) -> StoreError {
        StoreError::Transport(err.to_string())
    }

    async fn fetch_profiles(&self, query: &[(&str, &str)]) -> Result<Vec<Profile>, StoreError> {
        let url = self.endpoint("rest/v1/profiles")?;
        let response = self
            .authed(self.client.get(url))
            .query(query)
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let rows: Vec<ProfileRow> = response.json().await.map_err(Self::transport)?;
        Ok(rows.into_iter().map(Profile::from).collect())
    }
}

#[async_trait]
impl IdentityProvider for HttpBackend {
    async fn current_principal(&self) -> Option<Principal> {
        let url = self.endpoint("auth/v1/user").ok()?;
        let response = match self.authed(self.client.get(url)).send().await {
            Ok(r) => r,
            Err(e) => {
                // Unreachable identity provider reads as "no session".
                log::warn!("backend: principal check failed: {}", e);
                return None;
            }
        };
        if !response.status().is_success() {
            log::info!("backend: no active session (HTTP {})", response.status());
            return None;
        }
        let user: UserResponse = response.json().await.ok()?;
        Some(Principal {
            id: user.id,
            email: user.email,
        })
    }

    async fn sign_out(&self) -> Result<(), StoreError> {
        let url = self.endpoint("auth/v1/logout")?;
        let response = self
            .authed(self.client.post(url))
            .send()
            .await
            .map_err(Self::transport)?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        self.set_access_token(None);
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for HttpBackend {
    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        self.fetch_profiles(&[("select", "*"), ("order", "display_name.asc")])
            .await
    }

    async fn find_by_phone_key(&self, key: &str) -> Result<Option<Profile>, StoreError> {
        let filter = format!("eq.{}", key);
        let rows = self
            .fetch_profiles(&[
                ("select", "*"),
                ("phone_number", filter.as_str()),
                ("limit", "1"),
            ])
            .await?;
        Ok(rows.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_row_snake_case() {
        let row: ProfileRow = serde_json::from_str(
            r#"{
                "id": "u1",
                "display_name": "Jane Doe",
                "phone_number": "5551234567@chatlist.app",
                "last_seen": "2026-08-01T10:00:00Z",
                "is_online": true
            }"#,
        )
        .unwrap();
        let profile = Profile::from(row);
        assert_eq!(profile.display_name.as_deref(), Some("Jane Doe"));
        assert!(profile.is_online);
    }

    #[test]
    fn test_profile_row_camel_case_alias() {
        let row: ProfileRow = serde_json::from_str(
            r#"{ "id": "u2", "displayName": "Bob", "phoneNumber": "1112223333@chatlist.app" }"#,
        )
        .unwrap();
        assert_eq!(row.display_name.as_deref(), Some("Bob"));
        assert!(!row.is_online);
        assert!(row.last_seen.is_none());
    }

    #[test]
    fn test_profile_row_tolerates_missing_optionals() {
        let row: ProfileRow = serde_json::from_str(r#"{ "id": "u3" }"#).unwrap();
        assert!(row.display_name.is_none());
        assert_eq!(row.phone_number, "");
    }

    #[test]
    fn test_new_requires_backend_url() {
        let config = ScreenConfig::default();
        assert!(HttpBackend::new(&config).is_err());

        let config = ScreenConfig {
            backend_url: "https://acme.backend.example".into(),
            ..Default::default()
        };
        assert!(HttpBackend::new(&config).is_ok());
    }

    #[test]
    fn test_endpoint_join() {
        let config = ScreenConfig {
            backend_url: "https://acme.backend.example/".into(),
            ..Default::default()
        };
        let backend = HttpBackend::new(&config).unwrap();
        let url = backend.endpoint("rest/v1/profiles").unwrap();
        assert_eq!(url.as_str(), "https://acme.backend.example/rest/v1/profiles");
    }

    #[test]
    fn test_error_body_aliases() {
        let body: ErrorBody = serde_json::from_str(r#"{ "msg": "JWT expired" }"#).unwrap();
        assert_eq!(body.message, "JWT expired");
    }
}
