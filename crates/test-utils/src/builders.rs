use std::path::{Path, PathBuf};

use dropcatch::config::{DEFAULT_TOOL, ReceiveSettings};
use dropcatch::types::{ConflictPolicy, ErrorPolicy, ReceiveMode};

/// Builder for `ReceiveSettings` to simplify test setup.
///
/// Starts from the same defaults as the CLI: `rename`, `wait` mode,
/// continue-on-error, listing enabled, no cycle limit.
pub struct SettingsBuilder {
    settings: ReceiveSettings,
}

impl SettingsBuilder {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            settings: ReceiveSettings {
                dir: PathBuf::from(dir.as_ref()),
                conflict: ConflictPolicy::Rename,
                mode: ReceiveMode::Wait,
                error_policy: ErrorPolicy::Continue,
                verbose: false,
                tool: DEFAULT_TOOL.to_string(),
                list_after_cycle: true,
                max_cycles: None,
            },
        }
    }

    pub fn conflict(mut self, conflict: ConflictPolicy) -> Self {
        self.settings.conflict = conflict;
        self
    }

    pub fn mode(mut self, mode: ReceiveMode) -> Self {
        self.settings.mode = mode;
        self.settings.error_policy = mode.default_error_policy();
        self
    }

    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.settings.error_policy = policy;
        self
    }

    pub fn verbose(mut self, val: bool) -> Self {
        self.settings.verbose = val;
        self
    }

    pub fn tool(mut self, tool: &str) -> Self {
        self.settings.tool = tool.to_string();
        self
    }

    pub fn list_after_cycle(mut self, val: bool) -> Self {
        self.settings.list_after_cycle = val;
        self
    }

    pub fn max_cycles(mut self, max: u32) -> Self {
        self.settings.max_cycles = Some(max);
        self
    }

    pub fn build(self) -> ReceiveSettings {
        self.settings
    }
}
