// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DropcatchError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Directory error for {path:?}: {message}")]
    DirectoryError { path: PathBuf, message: String },

    #[error("Failed to start receiving tool '{program}': {source}")]
    SpawnError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Receiving tool failed with exit code {0}")]
    ReceiverFailed(i32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DropcatchError {
    pub(crate) fn directory(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        DropcatchError::DirectoryError {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, DropcatchError>;
