// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the external receiving
//! tool, using `tokio::process::Command`, and reporting how it exited.
//!
//! - [`invocation`] builds the program + argument vector from settings.
//! - [`process`] spawns the tool with inherited stdio and waits for it.
//! - [`backend`] provides the `ReceiverBackend` trait the supervisor talks
//!   to, so tests can replace the real process with a scripted fake.

pub mod backend;
pub mod invocation;
pub mod process;

pub use backend::ReceiverBackend;
pub use invocation::Invocation;
pub use process::ProcessReceiver;
