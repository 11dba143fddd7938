// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `taskqueue`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskqueue",
    version,
    about = "Order prioritised, interdependent tasks and deal them out to nodes.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the scenario file (TOML).
    ///
    /// Default: `Taskqueue.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Taskqueue.toml")]
    pub config: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKQUEUE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate and print the scenario, but don't apply it.
    #[arg(long)]
    pub dry_run: bool,

    /// Print only the execution order, not the assignment table.
    #[arg(long)]
    pub order_only: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
