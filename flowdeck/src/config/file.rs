//! Configuration file handling for ~/.flowdeck/config.ini.
//!
//! Loads and saves user configuration with sensible defaults: a missing
//! file yields `ConfigFile::default()`, a present file overrides only the
//! keys it sets.

use super::settings::ConfigFile;
use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.flowdeck/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        parse_ini(&ini)
    }

    /// Save configuration to the default path (~/.flowdeck/config.ini).
    pub fn save(&self) -> Result<(), ConfigFileError> {
        let path = config_file_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Create the default config file if it doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
        }
        Ok(path)
    }
}

/// Get the path to the config directory (~/.flowdeck).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".flowdeck")
}

/// Get the path to the config file (~/.flowdeck/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    if let Some(section) = ini.section(Some("node")) {
        if let Some(address) = section.get("address") {
            config.node.address = address.trim_end_matches('/').to_string();
        }
        if let Some(instance) = section.get("instance") {
            config.node.instance = if instance.is_empty() {
                None
            } else {
                Some(instance.to_string())
            };
        }
        if let Some(timeout) = section.get("timeout") {
            config.node.timeout = parse_integer("node", "timeout", timeout)?;
        }
    }

    if let Some(section) = ini.section(Some("panel")) {
        if let Some(interval) = section.get("refresh_interval") {
            config.panel.refresh_interval = parse_integer("panel", "refresh_interval", interval)?;
        }
        if let Some(history) = section.get("notification_history") {
            config.panel.notification_history =
                parse_integer("panel", "notification_history", history)? as usize;
        }
    }

    if let Some(section) = ini.section(Some("logging")) {
        if let Some(file) = section.get("file") {
            config.logging.file = PathBuf::from(file);
        }
    }

    Ok(config)
}

fn parse_integer(section: &str, key: &str, value: &str) -> Result<u64, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected a non-negative integer".to_string(),
        })
}

fn to_config_string(config: &ConfigFile) -> String {
    let instance = config.node.instance.as_deref().unwrap_or("");
    format!(
        "[node]\n\
         address = {}\n\
         instance = {}\n\
         timeout = {}\n\
         \n\
         [panel]\n\
         refresh_interval = {}\n\
         notification_history = {}\n\
         \n\
         [logging]\n\
         file = {}\n",
        config.node.address,
        instance,
        config.node.timeout,
        config.panel.refresh_interval,
        config.panel.notification_history,
        config.logging.file.display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert_eq!(config.node.address, DEFAULT_NODE_ADDRESS);
        assert!(config.node.instance.is_none());
        assert_eq!(config.node.timeout, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(config.panel.refresh_interval, DEFAULT_REFRESH_INTERVAL_SECS);
        assert_eq!(
            config.panel.notification_history,
            DEFAULT_NOTIFICATION_HISTORY
        );
    }

    #[test]
    fn test_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigFile::load_from(&dir.path().join("missing.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let mut config = ConfigFile::default();
        config.node.address = "http://node.example:9000".to_string();
        config.node.instance = Some("writer".to_string());
        config.node.timeout = 30;
        config.panel.refresh_interval = 5;
        config.save_to(&path).unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[node]\naddress = http://other:8000\n").unwrap();

        let config = ConfigFile::load_from(&path).unwrap();
        assert_eq!(config.node.address, "http://other:8000");
        assert_eq!(config.node.timeout, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(config.panel.refresh_interval, DEFAULT_REFRESH_INTERVAL_SECS);
    }

    #[test]
    fn test_empty_instance_parses_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[node]\ninstance = \n").unwrap();

        let config = ConfigFile::load_from(&path).unwrap();
        assert!(config.node.instance.is_none());
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[node]\ntimeout = soon\n").unwrap();

        let err = ConfigFile::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { .. }));
        assert!(err.to_string().contains("node.timeout"));
    }

    #[test]
    fn test_address_trailing_slash_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[node]\naddress = http://node:8080/\n").unwrap();

        let config = ConfigFile::load_from(&path).unwrap();
        assert_eq!(config.node.address, "http://node:8080");
    }
}
