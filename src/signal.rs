// src/signal.rs

//! SIGINT / SIGTERM listener.
//!
//! Runs as a background Tokio task next to the supervisor loop and turns the
//! first shutdown signal into a `SupervisorEvent::ShutdownRequested`.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use crate::engine::SupervisorEvent;

/// Spawn the listener. If installing the handlers fails, the sender is
/// dropped and the supervisor keeps running without signal-driven shutdown.
pub fn spawn_shutdown_listener(tx: mpsc::Sender<SupervisorEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_shutdown_signal().await {
            Ok(signal) => {
                info!(signal, "shutdown signal received");
                let _ = tx.send(SupervisorEvent::ShutdownRequested).await;
            }
            Err(e) => {
                eprintln!("failed to listen for shutdown signals: {e}");
            }
        }
    })
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        res = tokio::signal::ctrl_c() => {
            res?;
            Ok("SIGINT")
        }
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("ctrl-c")
}
