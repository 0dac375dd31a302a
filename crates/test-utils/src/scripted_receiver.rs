use std::collections::VecDeque;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use dropcatch::engine::ReceiveOutcome;
use dropcatch::errors::{DropcatchError, Result};
use dropcatch::exec::{Invocation, ReceiverBackend};

/// What the fake tool does on one call.
#[derive(Debug, Clone)]
pub enum ScriptedStep {
    /// Return this outcome immediately.
    Outcome(ReceiveOutcome),
    /// Write a file into the target directory, then report `Received`.
    Deliver { name: String, contents: Vec<u8> },
    /// Never return (simulates a tool blocked waiting for peers).
    Hang,
    /// Fail as if the program could not be started.
    SpawnFailure,
}

/// One recorded call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub invocation: Invocation,
    /// Whether the last argument (the target dir) existed as a directory
    /// at call time.
    pub dir_existed: bool,
}

/// A fake receiver that:
/// - records each invocation
/// - plays back a script of steps, then hangs once the script runs out.
pub struct ScriptedReceiver {
    script: VecDeque<ScriptedStep>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedReceiver {
    pub fn new(script: impl IntoIterator<Item = ScriptedStep>) -> Self {
        Self {
            script: script.into_iter().collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the recorded calls; stays valid after the receiver
    /// is moved into a supervisor.
    pub fn calls(&self) -> Arc<Mutex<Vec<RecordedCall>>> {
        Arc::clone(&self.calls)
    }
}

impl ReceiverBackend for ScriptedReceiver {
    fn receive<'a>(
        &'a mut self,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ReceiveOutcome>> + Send + 'a>> {
        let dir = invocation.args.last().cloned().unwrap_or_default();
        let dir_existed = Path::new(&dir).is_dir();
        self.calls.lock().unwrap().push(RecordedCall {
            invocation: invocation.clone(),
            dir_existed,
        });

        let step = self.script.pop_front().unwrap_or(ScriptedStep::Hang);

        Box::pin(async move {
            match step {
                ScriptedStep::Outcome(outcome) => Ok(outcome),
                ScriptedStep::Deliver { name, contents } => {
                    std::fs::write(Path::new(&dir).join(name), contents)?;
                    Ok(ReceiveOutcome::Received)
                }
                ScriptedStep::Hang => std::future::pending().await,
                ScriptedStep::SpawnFailure => Err(DropcatchError::SpawnError {
                    program: invocation.program.clone(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "scripted"),
                }),
            }
        })
    }
}
