//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the application
//! configuration from the configuration file (~/.config/aura/config.toml),
//! with environment-variable overrides for deployment settings.

use crate::paths::AuraPaths;
use aura_core::{AuraError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

const DEFAULT_API_BASE_URL: &str = "https://aura-wellness-api.onrender.com";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 300;
const DEFAULT_USER_ID: &str = "default-user";

/// Settings for the remote API collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the backend API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Settings for the periodic wellness refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshSettings {
    /// Interval between dashboard refreshes in seconds
    #[serde(default = "default_refresh_interval_secs")]
    pub interval_secs: u64,
}

/// Root application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub refresh: RefreshSettings,
    /// User identifier forwarded to the activity source
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_refresh_interval_secs() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            interval_secs: default_refresh_interval_secs(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            refresh: RefreshSettings::default(),
            user_id: default_user_id(),
        }
    }
}

impl AppConfig {
    /// Applies environment-variable overrides.
    ///
    /// `AURA_API_BASE_URL` and `AURA_USER_ID` take precedence over the
    /// values loaded from the configuration file.
    fn with_env_overrides(mut self) -> Self {
        if let Ok(base_url) = std::env::var("AURA_API_BASE_URL") {
            self.api.base_url = base_url;
        }
        if let Ok(user_id) = std::env::var("AURA_USER_ID") {
            self.user_id = user_id;
        }
        self
    }
}

/// Configuration service that loads and caches the application configuration.
///
/// This implementation reads the configuration from config.toml
/// and caches it to avoid repeated file I/O operations.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a new ConfigService.
    ///
    /// The configuration is loaded lazily on first access to avoid blocking
    /// during initialization.
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the application configuration, loading from file if not cached.
    ///
    /// A missing or unreadable file yields the defaults; a present but
    /// invalid file is reported once and also falls back to the defaults.
    pub fn get_config(&self) -> AppConfig {
        // Check if already cached
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = Self::load_config().unwrap_or_else(|e| {
            tracing::warn!("[ConfigService] Falling back to defaults: {}", e);
            AppConfig::default().with_env_overrides()
        });

        // Cache it
        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    /// Loads AppConfig from the default configuration file.
    fn load_config() -> Result<AppConfig> {
        let config_path = AuraPaths::config_file()
            .map_err(|e| AuraError::config(format!("Failed to resolve config path: {}", e)))?;
        Self::load_from_path(&config_path)
    }

    /// Loads AppConfig from a specific path, applying environment overrides.
    ///
    /// A missing file is not an error; it yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<AppConfig> {
        let config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            toml::from_str::<AppConfig>(&raw)?
        } else {
            tracing::debug!(
                "[ConfigService] No config file at {}, using defaults",
                path.display()
            );
            AppConfig::default()
        };
        Ok(config.with_env_overrides())
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigService::load_from_path(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.refresh.interval_secs, 300);
        assert_eq!(config.user_id, "default-user");
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
user_id = "user-42"

[api]
base_url = "https://wellness.example.com"
"#,
        )
        .unwrap();

        let config = ConfigService::load_from_path(&path).unwrap();
        assert_eq!(config.api.base_url, "https://wellness.example.com");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.refresh.interval_secs, 300);
        assert_eq!(config.user_id, "user-42");
    }

    #[test]
    fn invalid_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api = 12").unwrap();

        let err = ConfigService::load_from_path(&path).unwrap_err();
        assert!(matches!(err, AuraError::Serialization { .. }));
    }
}
