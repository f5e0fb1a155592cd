//! Parameter management commands.

use crate::error::CliError;
use crate::runner::CliRunner;
use clap::Subcommand;
use flowdeck::format;
use std::fs;
use std::path::PathBuf;

/// Parameter action subcommands.
#[derive(Debug, Subcommand)]
pub enum ParametersAction {
    /// Print the processor parameters as pretty JSON
    Get,
    /// Send raw JSON text as the new parameters.
    ///
    /// The text is sent to the node unmodified - no validation happens on
    /// the client side, so malformed JSON is rejected by the server.
    Set {
        /// Raw JSON text
        json: Option<String>,
        /// Read the raw JSON text from a file instead
        #[arg(long, conflicts_with = "json")]
        file: Option<PathBuf>,
    },
}

/// Run a parameters subcommand.
pub fn run(runner: &CliRunner, action: ParametersAction) -> Result<(), CliError> {
    let client = runner.create_client()?;

    match action {
        ParametersAction::Get => {
            let parameters = runner.block_on(client.get_parameters())?;
            println!("{}", format::to_pretty_json(&parameters));
            Ok(())
        }
        ParametersAction::Set { json, file } => {
            let raw = match (json, file) {
                (Some(json), None) => json,
                (None, Some(path)) => fs::read_to_string(&path).map_err(|e| CliError::FileRead {
                    path: path.display().to_string(),
                    error: e,
                })?,
                _ => {
                    return Err(CliError::Config(
                        "provide raw JSON text or --file <path>".to_string(),
                    ))
                }
            };

            runner.block_on(client.set_parameters(&raw))?;
            println!("Parameters updated.");
            Ok(())
        }
    }
}
