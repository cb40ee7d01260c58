//! Wires config, stores and the notification pipeline for one invocation.

use std::{path::PathBuf, sync::Arc};

use tracing::debug;

use bw_config::{Config, ConfigManager, DeliveryMode};
use bw_core::{
    Aggregator, Clock, CoreError, NotificationEngine, NotificationRepository, NotificationService,
    PersistingSink, PlainCurrencyFormatter, ReminderTemplates, SystemClock, TracingMessenger,
};
use bw_domain::Ledger;
use bw_storage_json::{JsonLedgerStore, JsonNotificationStore};

use crate::AppError;

pub struct App {
    base_dir: PathBuf,
    config: Config,
    ledger: Arc<JsonLedgerStore>,
    notifications: Arc<JsonNotificationStore>,
    clock: Arc<dyn Clock>,
}

impl App {
    /// Loads the config under the manager's base directory and opens both stores.
    pub fn open(manager: &ConfigManager) -> Result<Self, AppError> {
        let config = manager.load()?;
        let base_dir = manager.base_dir().to_path_buf();
        let ledger = Arc::new(JsonLedgerStore::new(config.ledger_path(&base_dir)));
        let notifications =
            Arc::new(JsonNotificationStore::new(config.notifications_path(&base_dir)));
        debug!(
            base = %base_dir.display(),
            ledger = %ledger.path().display(),
            notifications = %notifications.path().display(),
            "stores opened"
        );
        Ok(Self {
            base_dir,
            config,
            ledger,
            notifications,
            clock: Arc::new(SystemClock),
        })
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn base_dir(&self) -> &std::path::Path {
        &self.base_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn load_ledger(&self) -> Result<Ledger, AppError> {
        Ok(self.ledger.load()?)
    }

    /// Applies a ledger mutation and persists it when it succeeds.
    pub fn update_ledger<T>(
        &self,
        apply: impl FnOnce(&mut Ledger) -> Result<T, CoreError>,
    ) -> Result<T, AppError> {
        Ok(self.ledger.update(apply)?)
    }

    pub fn aggregator(&self) -> Aggregator {
        Aggregator::new(self.ledger.clone())
    }

    pub fn notifications(&self) -> &dyn NotificationRepository {
        self.notifications.as_ref()
    }

    pub fn formatter(&self) -> PlainCurrencyFormatter {
        PlainCurrencyFormatter::new(self.config.currency.clone())
    }

    /// Engine plus a persisting sink; delivery depends on [`DeliveryMode`].
    pub fn notification_service(&self) -> NotificationService {
        let templates = ReminderTemplates::new(self.config.reminder_templates.clone());
        let engine = NotificationEngine::new(self.ledger.clone()).with_templates(templates);
        let mut sink = PersistingSink::new(self.notifications.clone(), self.clock.clone());
        if self.config.delivery == DeliveryMode::Log {
            sink = sink.with_messenger(Arc::new(TracingMessenger::new(self.config.chat_id)));
        }
        NotificationService::new(engine, Arc::new(sink))
    }
}
