// src/receive/mod.rs

//! Target directory handling.
//!
//! - [`dir`] resolves the user-supplied path and makes sure it exists.
//! - [`listing`] reports what ended up in it after each batch.

pub mod dir;
pub mod listing;

pub use dir::{ensure_target_dir, resolve_target_dir};
pub use listing::{list_received, render_listing};
