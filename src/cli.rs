// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Value-carrying flags are `Option`s so that an unset flag falls through to
//! the config file and then to the built-in default.

use clap::{Parser, ValueEnum};

use crate::types::{ConflictPolicy, ReceiveMode};

/// Command-line arguments for `dropcatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dropcatch",
    version,
    about = "Keep an external file-transfer tool receiving files into a directory.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory to save received files into (created if missing).
    ///
    /// Default: the current working directory.
    #[arg(long, value_name = "PATH")]
    pub dir: Option<String>,

    /// Conflict policy handed to the receiving tool.
    ///
    /// Default: `rename`.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub conflict: Option<ConflictPolicy>,

    /// Ask the receiving tool for verbose output.
    #[arg(long)]
    pub verbose: bool,

    /// `wait` re-invokes the tool after every batch; `loop` lets the tool
    /// keep itself running.
    #[arg(long, value_enum, value_name = "MODE")]
    pub mode: Option<ReceiveMode>,

    /// Program implementing the actual transfer (`<tool> file get ...`).
    ///
    /// Default: `tailscale`.
    #[arg(long, value_name = "PROGRAM")]
    pub tool: Option<String>,

    /// Stop with an error when the tool fails, even in `wait` mode.
    #[arg(long)]
    pub exit_on_error: bool,

    /// Don't list the directory contents after each batch.
    #[arg(long)]
    pub no_list: bool,

    /// Invoke the tool a single time, then exit.
    #[arg(long)]
    pub once: bool,

    /// Optional config file (TOML) with a `[receive]` section.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DROPCATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve settings and print the command, but don't run anything.
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
