// src/exec/backend.rs

//! Pluggable receiver backend abstraction.
//!
//! The supervisor talks to a `ReceiverBackend` instead of spawning processes
//! directly. Production code uses [`super::ProcessReceiver`]; tests provide
//! their own implementation that returns scripted outcomes.

use std::future::Future;
use std::pin::Pin;

use crate::engine::ReceiveOutcome;
use crate::errors::Result;

use super::Invocation;

/// Trait abstracting one blocking call of the receiving tool.
pub trait ReceiverBackend: Send {
    /// Run the tool once and report how it exited.
    ///
    /// The returned future may be dropped mid-flight (shutdown); the
    /// implementation must not leave the child running when that happens.
    fn receive<'a>(
        &'a mut self,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ReceiveOutcome>> + Send + 'a>>;
}
