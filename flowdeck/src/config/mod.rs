//! Configuration for the flowdeck client and panel.
//!
//! User configuration lives in `~/.flowdeck/config.ini`. Settings structs
//! live in [`settings`], constants in [`defaults`], file handling in
//! [`file`].

mod defaults;
mod file;
mod settings;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LoggingSettings, NodeSettings, PanelSettings};
