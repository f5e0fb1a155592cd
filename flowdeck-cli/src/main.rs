//! Flowdeck CLI - operator control panel for stream-processing nodes.
//!
//! This binary provides one-shot control commands plus an interactive
//! terminal panel against a node's REST control interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod error;
mod runner;
mod tui_app;
mod ui;

use commands::config::ConfigAction;
use commands::parameters::ParametersAction;
use error::CliError;
use runner::{CliRunner, ConnectionOverrides};

#[derive(Parser)]
#[command(name = "flowdeck")]
#[command(version, about = "Control panel for REST-managed stream processors", long_about = None)]
struct Cli {
    /// REST API address of the node (overrides config)
    #[arg(long, global = true)]
    address: Option<String>,

    /// Instance name for namespaced deployments (overrides config;
    /// pass an empty string to force the plain layout)
    #[arg(long, global = true)]
    instance: Option<String>,

    /// Request timeout in seconds, 0 disables (overrides config)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal control panel (default)
    Panel,
    /// Start the processor
    Start {
        /// Apply raw JSON parameters from this file before starting
        /// (namespaced deployments)
        #[arg(long)]
        parameters: Option<PathBuf>,
    },
    /// Stop the processor
    Stop,
    /// Show processor status
    Status,
    /// Show processor statistics
    Statistics {
        /// Fetch the raw statistics payload instead (namespaced deployments)
        #[arg(long)]
        raw: bool,
    },
    /// Show the processor help text
    Doc,
    /// Get or set processor parameters
    Parameters {
        #[command(subcommand)]
        action: ParametersAction,
    },
    /// Reset processor state (namespaced deployments)
    Reset,
    /// Stop the processor and terminate the node (namespaced deployments)
    Kill,
    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() {
    let Cli {
        address,
        instance,
        timeout,
        debug,
        command,
    } = Cli::parse();

    // Config management needs no logging or network setup
    let command = match command {
        Some(Commands::Config { action }) => {
            if let Err(e) = commands::config::run(action) {
                e.exit();
            }
            return;
        }
        other => other,
    };

    let overrides = ConnectionOverrides {
        address,
        instance,
        timeout,
    };

    let result = CliRunner::new(overrides, debug).and_then(|runner| {
        match command.unwrap_or(Commands::Panel) {
            Commands::Panel => commands::panel::run(&runner),
            Commands::Start { parameters } => {
                runner.log_startup("start");
                commands::control::start(&runner, parameters)
            }
            Commands::Stop => {
                runner.log_startup("stop");
                commands::control::stop(&runner)
            }
            Commands::Status => {
                runner.log_startup("status");
                commands::status::status(&runner)
            }
            Commands::Statistics { raw } => {
                runner.log_startup("statistics");
                commands::status::statistics(&runner, raw)
            }
            Commands::Doc => {
                runner.log_startup("doc");
                commands::status::doc(&runner)
            }
            Commands::Parameters { action } => {
                runner.log_startup("parameters");
                commands::parameters::run(&runner, action)
            }
            Commands::Reset => {
                runner.log_startup("reset");
                commands::control::reset(&runner)
            }
            Commands::Kill => {
                runner.log_startup("kill");
                commands::control::kill(&runner)
            }
            Commands::Config { .. } => unreachable!("handled above"),
        }
    });

    if let Err(e) = result {
        e.exit();
    }
}
