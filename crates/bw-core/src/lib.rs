//! bw-core
//!
//! Budget aggregation, limit classification and notification decisions.
//! Depends on bw-domain. No CLI, no terminal I/O; stores and sinks are injected traits.

pub mod aggregator;
pub mod classifier;
pub mod engine;
pub mod error;
pub mod format;
pub mod ledger_service;
pub mod service;
pub mod sink;
pub mod store;
pub mod templates;
pub mod time;

pub use aggregator::Aggregator;
pub use classifier::{classify, LimitClassification, LimitState, WARNING_THRESHOLD};
pub use engine::NotificationEngine;
pub use error::{CoreError, PreconditionViolation, SinkError, StoreError};
pub use format::{CurrencyFormatter, PlainCurrencyFormatter};
pub use ledger_service::*;
pub use service::{CheckReport, NotificationService};
pub use sink::{
    MemoryNotificationRepository, Messenger, NotificationRepository, NotificationSink,
    PersistingSink, TracingMessenger,
};
pub use store::{LedgerStore, MemoryLedgerStore};
pub use templates::ReminderTemplates;
pub use time::{Clock, FixedClock, SystemClock};

#[cfg(test)]
mod tests;
