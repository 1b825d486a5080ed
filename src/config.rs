//! Screen configuration, loaded from `~/.chatlist/config.json`.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::phone::DEFAULT_PHONE_DOMAIN;

/// Configuration for the contacts screen and its backend adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenConfig {
    /// Base URL of the hosted backend, e.g. `https://acme.backend.example`.
    #[serde(default)]
    pub backend_url: String,
    /// Project API key sent with every request.
    #[serde(default)]
    pub api_key: String,
    /// Domain suffix for phone-key encoding.
    #[serde(default = "default_phone_domain")]
    pub phone_domain: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_phone_domain() -> String {
    DEFAULT_PHONE_DOMAIN.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            api_key: String::new(),
            phone_domain: default_phone_domain(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

/// Canonical config file path (`~/.chatlist/config.json`).
pub fn config_path() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or("Could not find home directory")?;
    Ok(home.join(".chatlist").join("config.json"))
}

/// Load configuration from `~/.chatlist/config.json`.
///
/// A missing file yields defaults; the backend adapter then refuses to
/// construct until a backend URL is configured.
pub fn load_config() -> Result<ScreenConfig, String> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(ScreenConfig::default());
    }
    load_config_from(&path)
}

fn load_config_from(path: &std::path::Path) -> Result<ScreenConfig, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
    serde_json::from_str(&content).map_err(|e| format!("Failed to parse config: {}", e))
}

/// Create or update the config file, creating `~/.chatlist/` if needed.
pub fn save_config(config: &ScreenConfig) -> Result<(), String> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config dir: {}", e))?;
        }
    }
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    fs::write(&path, content).map_err(|e| format!("Failed to write config: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: ScreenConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.phone_domain, DEFAULT_PHONE_DOMAIN);
        assert_eq!(config.request_timeout_secs, 15);
        assert!(config.backend_url.is_empty());
    }

    #[test]
    fn test_camel_case_field_names() {
        let config: ScreenConfig = serde_json::from_str(
            r#"{ "backendUrl": "https://acme.example", "apiKey": "k", "phoneDomain": "acme.app" }"#,
        )
        .unwrap();
        assert_eq!(config.backend_url, "https://acme.example");
        assert_eq!(config.phone_domain, "acme.app");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "backendUrl": "https://x.example" }"#).unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.backend_url, "https://x.example");
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(load_config_from(&path).is_err());
    }
}
