// src/exec/process.rs

//! Real receiver backend: runs the external tool as a child process.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::engine::ReceiveOutcome;
use crate::errors::{DropcatchError, Result};

use super::{Invocation, ReceiverBackend};

/// Spawns the receiving tool with stdout/stderr inherited, so its output is
/// streamed straight to our own terminal.
#[derive(Debug, Clone, Default)]
pub struct ProcessReceiver;

impl ProcessReceiver {
    pub fn new() -> Self {
        Self
    }
}

impl ReceiverBackend for ProcessReceiver {
    fn receive<'a>(
        &'a mut self,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ReceiveOutcome>> + Send + 'a>> {
        Box::pin(run_tool(invocation))
    }
}

async fn run_tool(invocation: &Invocation) -> Result<ReceiveOutcome> {
    debug!(command = %invocation, "starting receiving tool");

    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        // Dropping the wait future (shutdown) takes the child down with it.
        .kill_on_drop(true);

    let mut child = cmd.spawn().map_err(|source| DropcatchError::SpawnError {
        program: invocation.program.clone(),
        source,
    })?;

    let status = child.wait().await?;
    let outcome = ReceiveOutcome::from_exit_code(status.code());

    let exit_code = status.code().unwrap_or(-1);
    if outcome == ReceiveOutcome::NoFiles {
        debug!(program = %invocation.program, exit_code, "receiving tool found no files");
    } else {
        info!(
            program = %invocation.program,
            exit_code,
            ?outcome,
            "receiving tool exited"
        );
    }

    Ok(outcome)
}
