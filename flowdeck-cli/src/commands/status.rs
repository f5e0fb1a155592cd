//! Read-only query commands.

use crate::error::CliError;
use crate::runner::CliRunner;
use flowdeck::format;

/// Run the status command.
pub fn status(runner: &CliRunner) -> Result<(), CliError> {
    let client = runner.create_client()?;
    let status = runner.block_on(client.get_status())?;

    println!("Processor: {}", status.processor_name);
    println!("State:     {}", format::run_state_label(status.is_running));
    println!("Parameters:");
    println!("{}", format::to_pretty_json(&status.parameters));
    Ok(())
}

/// Run the statistics command.
///
/// With `--raw` the implementation-defined raw payload is fetched instead
/// (namespaced deployments only) and pretty-printed as-is.
pub fn statistics(runner: &CliRunner, raw: bool) -> Result<(), CliError> {
    let client = runner.create_client()?;

    if raw {
        let payload = runner.block_on(client.get_statistics_raw())?;
        println!("{}", format::to_pretty_json(&payload));
        return Ok(());
    }

    let statistics = runner.block_on(client.get_statistics())?;
    if statistics.is_empty() {
        println!("No statistics reported.");
        return Ok(());
    }
    for line in format::statistics_lines(&statistics) {
        println!("{}", line);
    }
    Ok(())
}

/// Run the doc command: print the processor help text.
pub fn doc(runner: &CliRunner) -> Result<(), CliError> {
    let client = runner.create_client()?;
    let help = runner.block_on(client.get_help())?;

    println!("{}", help);
    Ok(())
}
