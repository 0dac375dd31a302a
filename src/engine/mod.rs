// src/engine/mod.rs

//! Receive loop engine.
//!
//! The pure decision logic lives in [`core`]: it consumes
//! [`SupervisorEvent`]s and tells the shell what to do next. The async shell
//! in [`supervisor`] runs the receiver backend, races it against shutdown
//! and performs the listing/printing.

use crate::types::ErrorPolicy;

/// Exit code the receiving tool uses when no files were waiting.
///
/// Inherited assumption about `tailscale file get`; not a documented
/// contract of the tool.
pub const NO_FILES_EXIT_CODE: i32 = 1;

/// How one invocation of the receiving tool ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiveOutcome {
    /// Exit 0: files were (possibly) received.
    Received,
    /// Benign exit: nothing to receive.
    NoFiles,
    /// Any other exit. `-1` when the tool was killed by a signal.
    Failed(i32),
}

impl ReceiveOutcome {
    /// Classify a process exit code (`None` means terminated by a signal).
    pub fn from_exit_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => ReceiveOutcome::Received,
            Some(NO_FILES_EXIT_CODE) => ReceiveOutcome::NoFiles,
            Some(other) => ReceiveOutcome::Failed(other),
            None => ReceiveOutcome::Failed(-1),
        }
    }
}

/// Events flowing into the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupervisorEvent {
    /// One invocation of the tool returned.
    CycleFinished(ReceiveOutcome),
    /// SIGINT / SIGTERM (or a test) asked us to stop.
    ShutdownRequested,
}

/// Knobs the core needs; derived from `ReceiveSettings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreOptions {
    pub error_policy: ErrorPolicy,
    pub list_after_cycle: bool,
    /// Stop after this many invocations; `None` runs until shutdown.
    pub max_cycles: Option<u32>,
}

pub mod core;
pub mod supervisor;

pub use self::core::{CoreCommand, CoreStep, ExitReason, SupervisorCore};
pub use self::supervisor::Supervisor;
