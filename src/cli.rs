// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `tasksort`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tasksort",
    version,
    about = "Order dependent tasks into batches that can run together.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the dependency document (`.json` or `.toml`).
    ///
    /// If omitted, the path is read interactively from stdin.
    #[arg(value_name = "PATH")]
    pub input: Option<String>,

    /// Where to write the task sequence.
    ///
    /// Default: `<input stem>_output.JSON` next to a JSON input, or
    /// `<input stem>_output.toml` next to a TOML input.
    #[arg(long, short, value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<String>,

    /// Print the task sequence to stdout instead of writing a file.
    #[arg(long)]
    pub stdout: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKSORT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load the document and print the task graph without sorting.
    #[arg(long)]
    pub dry_run: bool,
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
