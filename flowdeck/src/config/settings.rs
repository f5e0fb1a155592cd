//! Settings structs for the configuration file.

use super::defaults::*;
use super::file::config_directory;
use crate::client::ApiLayout;
use std::path::PathBuf;

/// Top-level configuration, one struct per INI section.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub node: NodeSettings,
    pub panel: PanelSettings,
    pub logging: LoggingSettings,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            node: NodeSettings::default(),
            panel: PanelSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// `[node]` section: how to reach the controlled node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSettings {
    /// REST API address, e.g. `http://127.0.0.1:8080`.
    pub address: String,
    /// Instance name; set for namespaced deployments, absent for plain.
    pub instance: Option<String>,
    /// Request timeout in seconds; 0 disables the timeout.
    pub timeout: u64,
}

impl NodeSettings {
    /// Resolve the API layout these settings describe.
    pub fn layout(&self) -> ApiLayout {
        ApiLayout::from_instance(self.address.clone(), self.instance.clone())
    }
}

impl Default for NodeSettings {
    fn default() -> Self {
        Self {
            address: DEFAULT_NODE_ADDRESS.to_string(),
            instance: None,
            timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// `[panel]` section: interactive panel behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSettings {
    /// Auto-refresh interval for status/statistics in seconds; 0 disables.
    pub refresh_interval: u64,
    /// Notification history capacity.
    pub notification_history: usize,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH_INTERVAL_SECS,
            notification_history: DEFAULT_NOTIFICATION_HISTORY,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path.
    pub file: PathBuf,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: config_directory().join(DEFAULT_LOG_FILE_NAME),
        }
    }
}
