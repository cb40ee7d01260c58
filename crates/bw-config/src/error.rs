use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure while reading, writing or validating `config.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error in {path}: {reason}")]
    Serde { path: PathBuf, reason: String },

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
