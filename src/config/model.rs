// src/config/model.rs

use serde::Deserialize;

use crate::types::{ConflictPolicy, ReceiveMode};

/// Raw configuration as read from a TOML file (unvalidated).
///
/// ```toml
/// [receive]
/// dir = "/srv/drops"
/// conflict = "rename"
/// mode = "wait"
/// verbose = false
/// tool = "tailscale"
/// list_after_cycle = true
/// exit_on_error = false
/// ```
///
/// Every key is optional; anything missing falls back to the CLI flag or
/// the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub receive: ReceiveSection,
}

/// Validated configuration.
///
/// Construct it with `ConfigFile::try_from(raw)` or
/// [`crate::config::load_and_validate`].
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub receive: ReceiveSection,
}

impl ConfigFile {
    /// Wrap an already-validated section. Used by `TryFrom<RawConfigFile>`.
    pub(crate) fn new_unchecked(receive: ReceiveSection) -> Self {
        Self { receive }
    }
}

/// `[receive]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReceiveSection {
    /// Directory to save received files into.
    pub dir: Option<String>,

    /// `"skip"`, `"overwrite"` or `"rename"`.
    pub conflict: Option<ConflictPolicy>,

    /// `"wait"` or `"loop"`.
    pub mode: Option<ReceiveMode>,

    /// Pass `--verbose` to the receiving tool.
    pub verbose: Option<bool>,

    /// Receiving tool program name or path.
    pub tool: Option<String>,

    /// List the directory after each batch (default true).
    pub list_after_cycle: Option<bool>,

    /// Treat a failing tool as fatal regardless of mode.
    pub exit_on_error: Option<bool>,

    /// Stop after this many invocations. Unlimited when absent.
    pub max_cycles: Option<u32>,
}
