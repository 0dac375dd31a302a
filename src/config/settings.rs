// src/config/settings.rs

//! Effective settings for one `dropcatch` run.
//!
//! Layering, lowest to highest priority:
//! 1. built-in defaults
//! 2. `[receive]` section of the config file
//! 3. CLI flags
//!
//! Boolean CLI flags can only switch a behaviour on; leaving one off defers
//! to the config file.

use std::path::{Path, PathBuf};

use crate::cli::CliArgs;
use crate::config::model::{ConfigFile, ReceiveSection};
use crate::engine::CoreOptions;
use crate::errors::{DropcatchError, Result};
use crate::receive::resolve_target_dir;
use crate::types::{ConflictPolicy, ErrorPolicy, ReceiveMode};

/// Receiving tool used when nothing else is configured.
pub const DEFAULT_TOOL: &str = "tailscale";

/// Directory used when nothing else is configured.
pub const DEFAULT_DIR: &str = ".";

/// Fully resolved, read-only settings handed to the supervisor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiveSettings {
    /// Absolute, normalised target directory.
    pub dir: PathBuf,
    pub conflict: ConflictPolicy,
    pub mode: ReceiveMode,
    pub error_policy: ErrorPolicy,
    pub verbose: bool,
    pub tool: String,
    pub list_after_cycle: bool,
    pub max_cycles: Option<u32>,
}

impl ReceiveSettings {
    /// Merge CLI flags over an optional config file.
    ///
    /// `cwd` anchors a relative `dir`. Nothing is created on disk here.
    pub fn from_sources(args: &CliArgs, file: Option<&ConfigFile>, cwd: &Path) -> Result<Self> {
        let empty = ReceiveSection::default();
        let section = file.map(|f| &f.receive).unwrap_or(&empty);

        let raw_dir = args
            .dir
            .as_deref()
            .or(section.dir.as_deref())
            .unwrap_or(DEFAULT_DIR);
        let dir = resolve_target_dir(raw_dir, cwd)?;

        let tool = args
            .tool
            .clone()
            .or_else(|| section.tool.clone())
            .unwrap_or_else(|| DEFAULT_TOOL.to_string());
        if tool.trim().is_empty() {
            return Err(DropcatchError::ConfigError(
                "receiving tool must not be empty".to_string(),
            ));
        }

        let mode = args.mode.or(section.mode).unwrap_or_default();
        let exit_on_error = args.exit_on_error || section.exit_on_error.unwrap_or(false);
        let error_policy = if exit_on_error {
            ErrorPolicy::Exit
        } else {
            mode.default_error_policy()
        };

        let max_cycles = if args.once { Some(1) } else { section.max_cycles };

        Ok(Self {
            dir,
            conflict: args.conflict.or(section.conflict).unwrap_or_default(),
            mode,
            error_policy,
            verbose: args.verbose || section.verbose.unwrap_or(false),
            tool,
            list_after_cycle: !args.no_list && section.list_after_cycle.unwrap_or(true),
            max_cycles,
        })
    }

    /// Options for the pure supervisor core.
    pub fn core_options(&self) -> CoreOptions {
        CoreOptions {
            error_policy: self.error_policy,
            list_after_cycle: self.list_after_cycle,
            max_cycles: self.max_cycles,
        }
    }
}
