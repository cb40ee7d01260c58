use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bw_core::{NotificationRepository, StoreError};
use bw_domain::Notification;

use crate::{read_document, write_document};

#[derive(Debug, Default, Serialize, Deserialize)]
struct NotificationLog {
    #[serde(default)]
    notifications: Vec<Notification>,
}

/// Notification records appended to a JSON document.
pub struct JsonNotificationStore {
    path: PathBuf,
    writer: Mutex<()>,
}

impl JsonNotificationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn modify<T>(
        &self,
        apply: impl FnOnce(&mut Vec<Notification>) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let _guard = self
            .writer
            .lock()
            .map_err(|_| StoreError::Unavailable("notification writer lock poisoned".into()))?;
        let mut log: NotificationLog = read_document(&self.path)?;
        let value = apply(&mut log.notifications)?;
        write_document(&self.path, &log)?;
        Ok(value)
    }
}

impl NotificationRepository for JsonNotificationStore {
    fn insert(&self, notification: &Notification) -> Result<(), StoreError> {
        self.modify(|records| {
            records.push(notification.clone());
            Ok(())
        })
    }

    fn list(&self) -> Result<Vec<Notification>, StoreError> {
        let log: NotificationLog = read_document(&self.path)?;
        let mut all = log.notifications;
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    fn mark_read(&self, id: Uuid) -> Result<(), StoreError> {
        self.modify(|records| {
            let record = records
                .iter_mut()
                .find(|record| record.id == id)
                .ok_or_else(|| StoreError::NotFound(format!("notification {id}")))?;
            record.is_read = true;
            Ok(())
        })
    }
}
