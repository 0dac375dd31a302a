// src/engine/supervisor.rs

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::config::ReceiveSettings;
use crate::errors::{DropcatchError, Result};
use crate::exec::{Invocation, ReceiverBackend};
use crate::fs::FileSystem;
use crate::receive::{list_received, render_listing};

use super::core::SupervisorCore;
use super::{CoreCommand, ExitReason, SupervisorEvent};

/// Async shell around [`SupervisorCore`].
///
/// Runs the receiving tool through a [`ReceiverBackend`], races every call
/// against the shutdown channel, and writes the banner and listings to
/// `out` (stdout in production).
pub struct Supervisor<B: ReceiverBackend> {
    core: SupervisorCore,
    settings: ReceiveSettings,
    invocation: Invocation,
    backend: B,
    fs: Arc<dyn FileSystem>,
    shutdown_rx: mpsc::Receiver<SupervisorEvent>,
    shutdown_open: bool,
    out: Box<dyn Write + Send>,
}

impl<B: ReceiverBackend> fmt::Debug for Supervisor<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Supervisor")
            .field("core", &self.core)
            .field("invocation", &self.invocation)
            .finish_non_exhaustive()
    }
}

impl<B: ReceiverBackend> Supervisor<B> {
    pub fn new(
        settings: ReceiveSettings,
        backend: B,
        fs: Arc<dyn FileSystem>,
        shutdown_rx: mpsc::Receiver<SupervisorEvent>,
        out: Box<dyn Write + Send>,
    ) -> Self {
        let core = SupervisorCore::new(settings.core_options());
        let invocation = Invocation::from_settings(&settings);
        Self {
            core,
            settings,
            invocation,
            backend,
            fs,
            shutdown_rx,
            shutdown_open: true,
            out,
        }
    }

    /// Main loop. Returns `Ok(())` on shutdown or when the cycle limit is
    /// reached, and an error for fatal receiver failures.
    pub async fn run(mut self) -> Result<()> {
        info!(
            dir = %self.settings.dir.display(),
            command = %self.invocation,
            mode = %self.settings.mode,
            "receive loop started"
        );
        self.say(&format!("Listening for files in {}", self.settings.dir.display()))?;
        self.say("Press Ctrl+C to stop")?;

        let mut step = self.core.start();
        loop {
            let mut next_event = None;

            for command in step.commands {
                match command {
                    CoreCommand::Invoke => next_event = Some(self.invoke().await?),
                    CoreCommand::ListDirectory => self.list_directory()?,
                    CoreCommand::AnnounceWaiting => self.say("Waiting for more files...")?,
                    CoreCommand::ReportFailure(code) => {
                        error!(exit_code = code, command = %self.invocation, "receiving tool failed");
                    }
                    CoreCommand::Exit(reason) => return self.finish(reason),
                }
            }

            let Some(event) = next_event else {
                warn!("core issued neither an invocation nor an exit; stopping");
                return Ok(());
            };
            debug!(?event, "supervisor received event");
            step = self.core.step(event);
        }
    }

    /// Run the tool once, unless shutdown arrives first.
    async fn invoke(&mut self) -> Result<SupervisorEvent> {
        debug!(cycle = self.core.cycles_started(), "invoking receiving tool");

        let mut receive = self.backend.receive(&self.invocation);
        loop {
            tokio::select! {
                biased;

                event = self.shutdown_rx.recv(), if self.shutdown_open => match event {
                    // Returning drops `receive`, which kills the child.
                    Some(event) => return Ok(event),
                    None => {
                        warn!("shutdown channel closed; signals will no longer stop the loop");
                        self.shutdown_open = false;
                    }
                },
                outcome = &mut receive => {
                    return Ok(SupervisorEvent::CycleFinished(outcome?));
                }
            }
        }
    }

    fn list_directory(&mut self) -> Result<()> {
        let dir = &self.settings.dir;
        match list_received(self.fs.as_ref(), dir) {
            Ok(entries) => {
                debug!(dir = %dir.display(), files = entries.len(), "listing target directory");
                render_listing(&mut self.out, dir, &entries)?;
                self.out.flush()?;
            }
            Err(err) => {
                warn!(dir = %dir.display(), error = %format!("{err:#}"), "failed to list target directory");
            }
        }
        Ok(())
    }

    fn finish(mut self, reason: ExitReason) -> Result<()> {
        match reason {
            ExitReason::Shutdown => {
                self.say("\nShutting down...")?;
                info!(cycles = self.core.cycles_started(), "shutdown requested; stopping");
                Ok(())
            }
            ExitReason::CycleLimit => {
                info!(cycles = self.core.cycles_started(), "cycle limit reached; stopping");
                Ok(())
            }
            ExitReason::ReceiverFailed(code) => Err(DropcatchError::ReceiverFailed(code)),
        }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}
