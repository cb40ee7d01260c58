use thiserror::Error;

use bw_config::ConfigError;
use bw_core::{CoreError, StoreError};
use bw_domain::PeriodError;

/// Top-level failure surfaced by the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid period: {0}")]
    Period(#[from] PeriodError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("{0}")]
    Command(String),
}

pub type CommandResult = Result<(), AppError>;
