//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use flowdeck::client::ClientError;
use flowdeck::config::ConfigFileError;
use std::fmt;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to create the Tokio runtime
    Runtime(String),
    /// A client operation failed
    Client(ClientError),
    /// Panel terminal error
    Panel(String),
    /// Failed to read an input file
    FileRead { path: String, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Client(ClientError::Transport(_)) => {
                eprintln!();
                eprintln!("Could not reach the node. Make sure:");
                eprintln!("  1. The node process is running");
                eprintln!("  2. The address is correct (--address or node.address in config.ini)");
                eprintln!("  3. For namespaced deployments, the instance name matches");
            }
            CliError::Client(ClientError::Unsupported { .. }) => {
                eprintln!();
                eprintln!(
                    "This operation needs a namespaced deployment. \
                     Set an instance name with --instance or node.instance in config.ini."
                );
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Runtime(msg) => write!(f, "Failed to create runtime: {}", msg),
            CliError::Client(e) => write!(f, "{}", e),
            CliError::Panel(msg) => write!(f, "Panel error: {}", msg),
            CliError::FileRead { path, error } => {
                write!(f, "Failed to read file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Client(e) => Some(e),
            CliError::FileRead { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ClientError> for CliError {
    fn from(e: ClientError) -> Self {
        CliError::Client(e)
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_displays_message_only() {
        let err = CliError::Client(ClientError::Api("Processor already running.".to_string()));
        assert_eq!(err.to_string(), "Processor already running.");
    }

    #[test]
    fn test_config_error_display() {
        let err = CliError::Config("bad timeout".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_from_client_error() {
        let err: CliError = ClientError::Transport("boom".to_string()).into();
        assert!(matches!(err, CliError::Client(_)));
    }
}
