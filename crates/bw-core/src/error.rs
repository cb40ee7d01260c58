use std::io;

use thiserror::Error;
use uuid::Uuid;

/// Read or write failure reported by a ledger or notification store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Record not found: {0}")]
    NotFound(String),
}

/// Failure while persisting or delivering a notification.
///
/// Persistence happens first; a `Delivery` error means the record was stored.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to persist notification: {0}")]
    Persistence(#[from] StoreError),
    #[error("failed to deliver notification {notification_id}: {reason}")]
    Delivery { notification_id: Uuid, reason: String },
}

/// Classifying against a non-positive limit. Indicates a caller defect.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("limit must be a positive amount, got {limit}")]
pub struct PreconditionViolation {
    pub limit: f64,
}

/// Errors raised by ledger mutation services.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Limit not found: {0}")]
    LimitNotFound(Uuid),
    #[error("Planned expense not found: {0}")]
    PlannedExpenseNotFound(Uuid),
    #[error("Validation failed: {0}")]
    Validation(String),
}
