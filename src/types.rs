use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// What the receiving tool should do when an incoming file collides with an
/// existing name in the target directory.
///
/// Passed through verbatim as `--conflict=<value>`; `dropcatch` never
/// resolves conflicts itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Leave the existing file alone and drop the incoming one.
    Skip,
    /// Replace the existing file.
    Overwrite,
    /// Keep both, renaming the incoming file.
    #[default]
    Rename,
}

impl ConflictPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ConflictPolicy::Skip => "skip",
            ConflictPolicy::Overwrite => "overwrite",
            ConflictPolicy::Rename => "rename",
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the receiving tool is asked to wait for files.
///
/// - `Wait`: `file get --wait`, returns after one batch; we loop.
/// - `Loop`: `file get --loop`, the tool loops on its own and only returns
///   when something goes wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReceiveMode {
    #[default]
    Wait,
    Loop,
}

impl ReceiveMode {
    pub fn as_flag(self) -> &'static str {
        match self {
            ReceiveMode::Wait => "--wait",
            ReceiveMode::Loop => "--loop",
        }
    }

    /// Error policy used when neither the config nor the CLI picks one.
    pub fn default_error_policy(self) -> ErrorPolicy {
        match self {
            ReceiveMode::Wait => ErrorPolicy::Continue,
            ReceiveMode::Loop => ErrorPolicy::Exit,
        }
    }
}

impl fmt::Display for ReceiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiveMode::Wait => f.write_str("wait"),
            ReceiveMode::Loop => f.write_str("loop"),
        }
    }
}

/// What to do after the receiving tool fails with an unexpected exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Log the failure and invoke the tool again.
    Continue,
    /// Log the failure and stop with a nonzero exit.
    Exit,
}
