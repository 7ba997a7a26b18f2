use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::MinoriError;
use crate::models::ListName;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub services: ServicesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// List new items land in when the caller doesn't say.
    pub default_list: ListName,
    pub results_per_search: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    pub tmdb: TmdbConfig,
    pub jikan: ServiceToggle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    pub enabled: bool,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceToggle {
    pub enabled: bool,
}

impl AppConfig {
    /// Load config: user file (if it exists) over built-in defaults.
    pub fn load() -> Result<Self, MinoriError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            let user_str = std::fs::read_to_string(&user_path)?;
            toml::from_str(&user_str).map_err(|e| MinoriError::Config(e.to_string()))
        } else {
            toml::from_str(DEFAULT_CONFIG).map_err(|e| MinoriError::Config(e.to_string()))
        }
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), MinoriError> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| MinoriError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Path to the user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Path to the wishlist blob.
    pub fn wishlist_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.data_dir().join("wishlist.json"))
            .unwrap_or_else(|| PathBuf::from("wishlist.json"))
    }

    /// Ensure the data directory exists and return the blob path.
    pub fn ensure_wishlist_path() -> Result<PathBuf, MinoriError> {
        let path = Self::wishlist_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(path)
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "minori")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.general.default_list, ListName::ToWatch);
        assert_eq!(config.general.results_per_search, 10);
        assert!(config.services.tmdb.enabled);
        assert!(config.services.tmdb.api_key.is_none());
        assert!(config.services.jikan.enabled);
    }

    #[test]
    fn test_roundtrip() {
        let mut config = AppConfig::default();
        config.services.tmdb.api_key = Some("abc123".into());
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.services.tmdb.api_key.as_deref(), Some("abc123"));
        assert_eq!(deserialized.general.default_list, ListName::ToWatch);
    }
}
