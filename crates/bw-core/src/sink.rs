//! Where notification requests go: a repository for records and a messenger for delivery.

use std::sync::{Arc, Mutex};

use tracing::info;
use uuid::Uuid;

use bw_domain::{Notification, NotificationRequest, NotificationStats};

use crate::{Clock, SinkError, StoreError};

/// Consumes notification requests produced by checks.
pub trait NotificationSink: Send + Sync {
    fn emit(&self, request: &NotificationRequest) -> Result<Notification, SinkError>;
}

/// Persistence for notification records.
pub trait NotificationRepository: Send + Sync {
    fn insert(&self, notification: &Notification) -> Result<(), StoreError>;

    /// All records, newest first.
    fn list(&self) -> Result<Vec<Notification>, StoreError>;

    fn mark_read(&self, id: Uuid) -> Result<(), StoreError>;

    fn stats(&self) -> Result<NotificationStats, StoreError> {
        let all = self.list()?;
        Ok(NotificationStats::tally(&all))
    }
}

/// Outbound channel for a persisted notification.
pub trait Messenger: Send + Sync {
    fn deliver(&self, notification: &Notification) -> Result<(), SinkError>;
}

/// Persists each request, then hands the stored record to an optional messenger.
///
/// A delivery failure does not remove the stored record.
pub struct PersistingSink {
    repository: Arc<dyn NotificationRepository>,
    messenger: Option<Arc<dyn Messenger>>,
    clock: Arc<dyn Clock>,
}

impl PersistingSink {
    pub fn new(repository: Arc<dyn NotificationRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            messenger: None,
            clock,
        }
    }

    pub fn with_messenger(mut self, messenger: Arc<dyn Messenger>) -> Self {
        self.messenger = Some(messenger);
        self
    }
}

impl NotificationSink for PersistingSink {
    fn emit(&self, request: &NotificationRequest) -> Result<Notification, SinkError> {
        let notification = Notification::from_request(request, self.clock.now());
        self.repository.insert(&notification)?;
        if let Some(messenger) = &self.messenger {
            messenger.deliver(&notification)?;
        }
        Ok(notification)
    }
}

/// Delivers by writing the notification to the tracing log.
#[derive(Debug, Clone, Default)]
pub struct TracingMessenger {
    chat_id: Option<i64>,
}

impl TracingMessenger {
    pub fn new(chat_id: Option<i64>) -> Self {
        Self { chat_id }
    }
}

impl Messenger for TracingMessenger {
    fn deliver(&self, notification: &Notification) -> Result<(), SinkError> {
        info!(
            chat_id = ?self.chat_id,
            kind = %notification.kind,
            title = %notification.title,
            "{}",
            notification.message
        );
        Ok(())
    }
}

/// Notification records held in process memory.
#[derive(Debug, Default)]
pub struct MemoryNotificationRepository {
    records: Mutex<Vec<Notification>>,
}

impl MemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NotificationRepository for MemoryNotificationRepository {
    fn insert(&self, notification: &Notification) -> Result<(), StoreError> {
        let mut records = self.records.lock().map_err(|_| poisoned())?;
        records.push(notification.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<Notification>, StoreError> {
        let records = self.records.lock().map_err(|_| poisoned())?;
        let mut all = records.clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    fn mark_read(&self, id: Uuid) -> Result<(), StoreError> {
        let mut records = self.records.lock().map_err(|_| poisoned())?;
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("notification {id}")))?;
        record.is_read = true;
        Ok(())
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("notification lock poisoned".into())
}
