//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization, client
//! construction and the Tokio runtime, to reduce duplication across
//! command handlers.

use crate::error::CliError;
use flowdeck::client::{NodeClient, ReqwestClient};
use flowdeck::config::ConfigFile;
use flowdeck::logging::{init_logging, LoggingGuard};
use tracing::info;

/// Connection settings taken from the command line, overriding the
/// configuration file.
#[derive(Debug, Default)]
pub struct ConnectionOverrides {
    pub address: Option<String>,
    pub instance: Option<String>,
    pub timeout: Option<u64>,
}

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration with CLI overrides applied
    config: ConfigFile,
    /// Runtime for blocking on client operations
    runtime: tokio::runtime::Runtime,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// When stdout is a TTY, stdout logging is disabled to prevent
    /// interference with the panel display.
    ///
    /// # Arguments
    ///
    /// * `overrides` - Connection settings from the command line
    /// * `debug_mode` - When true, enables debug-level logging regardless of RUST_LOG
    pub fn new(overrides: ConnectionOverrides, debug_mode: bool) -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let mut config = ConfigFile::load()?;
        apply_overrides(&mut config, overrides);

        // Use log path from config
        let log_path = &config.logging.file;
        let log_dir = log_path
            .parent()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());
        let log_file = log_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "flowdeck.log".to_string());

        // Disable stdout logging when running in a TTY since the panel
        // will take over; log lines would corrupt the display
        let stdout_enabled = !atty::is(atty::Stream::Stdout);

        let logging_guard = init_logging(&log_dir, &log_file, stdout_enabled, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| CliError::Runtime(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
            runtime,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Get the Tokio runtime handle for spawning tasks.
    pub fn runtime_handle(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }

    /// Block on a client operation.
    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("flowdeck v{}", flowdeck::VERSION);
        info!(
            command = command,
            address = %self.config.node.address,
            instance = self.config.node.instance.as_deref().unwrap_or("-"),
            "flowdeck CLI command"
        );
    }

    /// Create a node client from the resolved connection settings.
    pub fn create_client(&self) -> Result<NodeClient<ReqwestClient>, CliError> {
        let http = ReqwestClient::with_timeout(self.config.node.timeout)?;
        Ok(NodeClient::new(http, self.config.node.layout()))
    }
}

fn apply_overrides(config: &mut ConfigFile, overrides: ConnectionOverrides) {
    if let Some(address) = overrides.address {
        config.node.address = address.trim_end_matches('/').to_string();
    }
    if let Some(instance) = overrides.instance {
        config.node.instance = if instance.is_empty() {
            None
        } else {
            Some(instance)
        };
    }
    if let Some(timeout) = overrides.timeout {
        config.node.timeout = timeout;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let mut config = ConfigFile::default();
        apply_overrides(
            &mut config,
            ConnectionOverrides {
                address: Some("http://other:9000/".to_string()),
                instance: Some("writer".to_string()),
                timeout: Some(0),
            },
        );

        assert_eq!(config.node.address, "http://other:9000");
        assert_eq!(config.node.instance.as_deref(), Some("writer"));
        assert_eq!(config.node.timeout, 0);
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let mut config = ConfigFile::default();
        let original = config.clone();
        apply_overrides(&mut config, ConnectionOverrides::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_empty_instance_override_clears_namespace() {
        let mut config = ConfigFile::default();
        config.node.instance = Some("writer".to_string());
        apply_overrides(
            &mut config,
            ConnectionOverrides {
                instance: Some(String::new()),
                ..Default::default()
            },
        );
        assert!(config.node.instance.is_none());
    }
}
