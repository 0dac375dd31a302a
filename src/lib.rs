// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod receive;
pub mod signal;
pub mod types;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{ReceiveSettings, load_and_validate};
use crate::engine::{Supervisor, SupervisorEvent};
use crate::exec::{Invocation, ProcessReceiver};
use crate::fs::{FileSystem, RealFileSystem};
use crate::receive::ensure_target_dir;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI layering
/// - target directory creation
/// - SIGINT / SIGTERM handling
/// - the supervisor loop around the real receiving tool
pub async fn run(args: CliArgs) -> Result<()> {
    let file_config = match args.config.as_deref() {
        Some(path) => Some(
            load_and_validate(path).with_context(|| format!("loading config file {path}"))?,
        ),
        None => None,
    };

    let cwd = std::env::current_dir().context("reading current directory")?;
    let settings = ReceiveSettings::from_sources(&args, file_config.as_ref(), &cwd)?;

    if args.dry_run {
        print_dry_run(&settings);
        return Ok(());
    }

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    ensure_target_dir(fs.as_ref(), &settings.dir)?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel::<SupervisorEvent>(4);
    let _listener = signal::spawn_shutdown_listener(shutdown_tx);

    let supervisor = Supervisor::new(
        settings,
        ProcessReceiver::new(),
        fs,
        shutdown_rx,
        Box::new(std::io::stdout()),
    );
    supervisor.run().await?;
    Ok(())
}

/// Print the resolved settings and the command that would be run.
fn print_dry_run(settings: &ReceiveSettings) {
    println!("dropcatch dry-run");
    println!("  dir = {}", settings.dir.display());
    println!("  conflict = {}", settings.conflict);
    println!("  mode = {}", settings.mode);
    println!("  error_policy = {:?}", settings.error_policy);
    println!("  verbose = {}", settings.verbose);
    println!("  list_after_cycle = {}", settings.list_after_cycle);
    match settings.max_cycles {
        Some(max) => println!("  max_cycles = {max}"),
        None => println!("  max_cycles = unlimited"),
    }
    println!();
    println!("command: {}", Invocation::from_settings(settings));

    debug!("dry-run complete (nothing executed)");
}
