//! Processor lifecycle commands.

use crate::error::CliError;
use crate::runner::CliRunner;
use flowdeck::format;
use std::fs;
use std::path::PathBuf;

/// Run the start command.
///
/// With `--parameters` the file's raw text is applied before starting
/// (namespaced deployments only); the text is sent unvalidated.
pub fn start(runner: &CliRunner, parameters: Option<PathBuf>) -> Result<(), CliError> {
    let client = runner.create_client()?;

    match parameters {
        Some(path) => {
            let raw = fs::read_to_string(&path).map_err(|e| CliError::FileRead {
                path: path.display().to_string(),
                error: e,
            })?;
            runner.block_on(client.start_with_parameters(&raw))?;
        }
        None => runner.block_on(client.start())?,
    }

    println!("Processor started.");
    Ok(())
}

/// Run the stop command.
pub fn stop(runner: &CliRunner) -> Result<(), CliError> {
    let client = runner.create_client()?;
    runner.block_on(client.stop())?;

    println!("Processor stopped.");
    Ok(())
}

/// Run the reset command. Prints the parameters after the reset.
pub fn reset(runner: &CliRunner) -> Result<(), CliError> {
    let client = runner.create_client()?;
    let parameters = runner.block_on(client.reset())?;

    println!("Processor reset.");
    println!("{}", format::to_pretty_json(&parameters));
    Ok(())
}

/// Run the kill command: stop the processor and terminate the node.
pub fn kill(runner: &CliRunner) -> Result<(), CliError> {
    let client = runner.create_client()?;
    runner.block_on(client.kill())?;

    println!("Node terminated.");
    Ok(())
}
