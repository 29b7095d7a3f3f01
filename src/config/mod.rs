// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The webhook endpoint deliberately has no built-in default: without a
//! configured URL, forwarded submissions resolve to the funnel's retryable
//! error state instead of silently going nowhere.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Vernissage";

pub const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Automation endpoint that receives forwarded participation payloads.
    pub webhook_url: Option<String>,
    /// Timeout applied to the gateway call, in seconds.
    #[serde(default)]
    pub submit_timeout_secs: Option<u64>,
    /// Whether the media runtime is allowed to autoplay without a gesture.
    #[serde(default)]
    pub autoplay: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: None,
            submit_timeout_secs: Some(DEFAULT_SUBMIT_TIMEOUT_SECS),
            autoplay: Some(true),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_webhook_url() {
        let config = Config {
            webhook_url: Some("https://hook.example.com/participate".to_string()),
            submit_timeout_secs: Some(5),
            autoplay: Some(false),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.webhook_url, config.webhook_url);
        assert_eq!(loaded.submit_timeout_secs, config.submit_timeout_secs);
        assert_eq!(loaded.autoplay, config.autoplay);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.webhook_url.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_has_timeout_but_no_endpoint() {
        let config = Config::default();
        assert!(config.webhook_url.is_none());
        assert_eq!(config.submit_timeout_secs, Some(DEFAULT_SUBMIT_TIMEOUT_SECS));
    }
}
