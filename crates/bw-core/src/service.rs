//! Runs engine checks and forwards their requests to a sink.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use bw_domain::{Notification, NotificationRequest};

use crate::{NotificationEngine, NotificationSink, StoreError};

/// Outcome of one check invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    /// Requests the engine decided on.
    pub requested: usize,
    /// Records the sink accepted.
    pub delivered: Vec<Notification>,
    /// Requests the sink rejected.
    pub failed: usize,
}

impl CheckReport {
    pub fn is_empty(&self) -> bool {
        self.requested == 0
    }

    fn merge(&mut self, other: CheckReport) {
        self.requested += other.requested;
        self.delivered.extend(other.delivered);
        self.failed += other.failed;
    }
}

pub struct NotificationService {
    engine: NotificationEngine,
    sink: Arc<dyn NotificationSink>,
}

impl NotificationService {
    pub fn new(engine: NotificationEngine, sink: Arc<dyn NotificationSink>) -> Self {
        Self { engine, sink }
    }

    pub fn engine(&self) -> &NotificationEngine {
        &self.engine
    }

    pub fn check_limit_warnings(&self, now: DateTime<Utc>) -> Result<CheckReport, StoreError> {
        let requests = self.engine.limit_warnings(now)?;
        Ok(self.dispatch("limit", requests))
    }

    pub fn check_daily_reminder(&self, now: DateTime<Utc>) -> Result<CheckReport, StoreError> {
        let requests = self.engine.daily_reminder(now)?.into_iter().collect();
        Ok(self.dispatch("daily reminder", requests))
    }

    pub fn check_income_reminder(&self, now: DateTime<Utc>) -> Result<CheckReport, StoreError> {
        let requests = self.engine.income_reminder(now)?.into_iter().collect();
        Ok(self.dispatch("income reminder", requests))
    }

    /// Runs every check in turn, stopping at the first store failure.
    pub fn check_all(&self, now: DateTime<Utc>) -> Result<CheckReport, StoreError> {
        let mut report = self.check_limit_warnings(now)?;
        report.merge(self.check_daily_reminder(now)?);
        report.merge(self.check_income_reminder(now)?);
        Ok(report)
    }

    fn dispatch(&self, check: &str, requests: Vec<NotificationRequest>) -> CheckReport {
        let mut report = CheckReport {
            requested: requests.len(),
            ..CheckReport::default()
        };
        for request in &requests {
            match self.sink.emit(request) {
                Ok(notification) => report.delivered.push(notification),
                Err(err) => {
                    warn!(check, kind = %request.kind(), error = %err, "notification not emitted");
                    report.failed += 1;
                }
            }
        }
        info!(
            check,
            requested = report.requested,
            delivered = report.delivered.len(),
            failed = report.failed,
            "check completed"
        );
        report
    }
}
