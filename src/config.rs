//! Configuration handling for the landing page

use crate::state::forms::DEFAULT_SUBMIT_DELAY;
use crate::state::Site;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration, stored as JSON in the platform config directory
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Display name cached after the first welcome prompt
    pub guest_name: Option<String>,
    /// Which landing page to show
    pub site: Option<Site>,
    /// Override for the simulated submission delay
    pub submit_delay_ms: Option<u64>,
}

impl SiteConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "landing", "landing-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn site(&self) -> Site {
        self.site.unwrap_or_default()
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMIT_DELAY)
    }

    /// Cached name, ignoring blank values
    pub fn guest_name(&self) -> Option<String> {
        self.guest_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn temp_config_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("landing-tui-test-{}", Uuid::new_v4()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.guest_name.is_none());
        assert!(config.site.is_none());
        assert!(config.submit_delay_ms.is_none());
        assert_eq!(config.site(), Site::Zenith);
        assert_eq!(config.submit_delay(), DEFAULT_SUBMIT_DELAY);
    }

    #[test]
    fn test_serialization() {
        let config = SiteConfig {
            guest_name: Some("Jo".to_string()),
            site: Some(Site::Bmw),
            submit_delay_ms: Some(250),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
        assert!(json.contains("\"site\":\"bmw\""));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"guest_name": "Jo", "unknown_field": "value"}"#;
        let parsed: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.guest_name, Some("Jo".to_string()));
    }

    #[test]
    fn test_submit_delay_override() {
        let config = SiteConfig {
            submit_delay_ms: Some(10),
            ..Default::default()
        };
        assert_eq!(config.submit_delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_blank_guest_name_is_ignored() {
        let config = SiteConfig {
            guest_name: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.guest_name(), None);
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let config = SiteConfig::load_from(&temp_config_path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path();
        let config = SiteConfig {
            guest_name: Some("Jo".to_string()),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        let loaded = SiteConfig::load_from(&path).unwrap();

        assert_eq!(loaded, config);
        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_from_invalid_json_is_error() {
        let path = temp_config_path();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).unwrap();
        }
        fs::write(&path, "not json").unwrap();

        assert!(SiteConfig::load_from(&path).is_err());
        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_config_path_is_config_json() {
        if let Some(path) = SiteConfig::config_path() {
            assert!(path.ends_with("config.json"));
        }
    }
}
