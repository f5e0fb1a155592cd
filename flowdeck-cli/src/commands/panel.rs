//! Panel command - interactive terminal control panel.

use crate::error::CliError;
use crate::runner::CliRunner;
use crate::tui_app;

/// Run the panel command.
pub fn run(runner: &CliRunner) -> Result<(), CliError> {
    runner.log_startup("panel");
    tui_app::run_panel(runner)
}
