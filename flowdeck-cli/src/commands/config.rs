//! Configuration file management commands.

use crate::error::CliError;
use clap::Subcommand;
use flowdeck::config::{config_file_path, ConfigFile};

/// Config action subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Create the configuration file with defaults if it does not exist
    Init,
}

/// Run a config subcommand.
pub fn run(action: ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Path => {
            println!("{}", config_file_path().display());
            Ok(())
        }
        ConfigAction::Init => {
            let path = ConfigFile::ensure_exists()?;
            println!("Configuration file: {}", path.display());
            Ok(())
        }
    }
}
