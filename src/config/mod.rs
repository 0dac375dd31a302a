// src/config/mod.rs

//! Configuration loading and validation for dropcatch.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants (`validate.rs`).
//! - Layer defaults, config file and CLI flags into [`ReceiveSettings`]
//!   (`settings.rs`).

pub mod loader;
pub mod model;
pub mod settings;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{ConfigFile, RawConfigFile, ReceiveSection};
pub use settings::{DEFAULT_TOOL, ReceiveSettings};
