// src/engine/core.rs

//! Pure supervisor state machine.
//!
//! No Tokio, no processes, no filesystem: the core only counts cycles and
//! maps events to [`CoreCommand`]s, which keeps the loop semantics testable
//! in isolation.

use super::{CoreOptions, ReceiveOutcome, SupervisorEvent};
use crate::types::ErrorPolicy;

/// Command produced by the core, executed by the async shell in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreCommand {
    /// Run the receiving tool once more.
    Invoke,
    /// Print the non-directory entries of the target directory.
    ListDirectory,
    /// Print "Waiting for more files...".
    AnnounceWaiting,
    /// Log an unexpected exit code.
    ReportFailure(i32),
    /// Stop the loop.
    Exit(ExitReason),
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Shutdown,
    CycleLimit,
    ReceiverFailed(i32),
}

/// Decision returned by the core after handling a single event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreStep {
    pub commands: Vec<CoreCommand>,
    pub keep_running: bool,
}

#[derive(Debug)]
pub struct SupervisorCore {
    options: CoreOptions,
    cycles_started: u32,
}

impl SupervisorCore {
    pub fn new(options: CoreOptions) -> Self {
        Self {
            options,
            cycles_started: 0,
        }
    }

    /// Number of `Invoke` commands issued so far.
    pub fn cycles_started(&self) -> u32 {
        self.cycles_started
    }

    /// First step of the loop: invoke the tool.
    pub fn start(&mut self) -> CoreStep {
        CoreStep {
            commands: vec![self.invoke()],
            keep_running: true,
        }
    }

    pub fn step(&mut self, event: SupervisorEvent) -> CoreStep {
        match event {
            SupervisorEvent::ShutdownRequested => stop(Vec::new(), ExitReason::Shutdown),
            SupervisorEvent::CycleFinished(outcome) => self.handle_outcome(outcome),
        }
    }

    fn handle_outcome(&mut self, outcome: ReceiveOutcome) -> CoreStep {
        let mut commands = Vec::new();

        match outcome {
            // Nothing arrived: go straight back to waiting, no output.
            ReceiveOutcome::NoFiles => {}
            ReceiveOutcome::Received => {
                if self.options.list_after_cycle {
                    commands.push(CoreCommand::ListDirectory);
                }
            }
            ReceiveOutcome::Failed(code) => {
                commands.push(CoreCommand::ReportFailure(code));
                if self.options.error_policy == ErrorPolicy::Exit {
                    return stop(commands, ExitReason::ReceiverFailed(code));
                }
                if self.options.list_after_cycle {
                    commands.push(CoreCommand::ListDirectory);
                }
            }
        }

        if self.limit_reached() {
            return stop(commands, ExitReason::CycleLimit);
        }

        if outcome != ReceiveOutcome::NoFiles {
            commands.push(CoreCommand::AnnounceWaiting);
        }
        commands.push(self.invoke());

        CoreStep {
            commands,
            keep_running: true,
        }
    }

    fn invoke(&mut self) -> CoreCommand {
        self.cycles_started += 1;
        CoreCommand::Invoke
    }

    fn limit_reached(&self) -> bool {
        self.options
            .max_cycles
            .is_some_and(|max| self.cycles_started >= max)
    }
}

fn stop(mut commands: Vec<CoreCommand>, reason: ExitReason) -> CoreStep {
    commands.push(CoreCommand::Exit(reason));
    CoreStep {
        commands,
        keep_running: false,
    }
}
