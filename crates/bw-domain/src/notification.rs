//! Notification requests produced by checks and the records the sink persists.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::Identifiable, period::Period};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    DailyReminder,
    LimitWarning,
    LimitExceeded,
    IncomeReminder,
}

impl NotificationKind {
    /// Wire name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::DailyReminder => "daily_reminder",
            NotificationKind::LimitWarning => "limit_warning",
            NotificationKind::LimitExceeded => "limit_exceeded",
            NotificationKind::IncomeReminder => "income_reminder",
        }
    }

    /// Fixed title used for every notification of this kind.
    pub fn title(self) -> &'static str {
        match self {
            NotificationKind::DailyReminder => "Daily Reminder",
            NotificationKind::LimitWarning => "Limit Warning",
            NotificationKind::LimitExceeded => "Limit Exceeded",
            NotificationKind::IncomeReminder => "Income Reminder",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Period and category a request refers to, when it refers to one.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
}

/// A decision to notify. Built once by the engine and handed to a sink unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationRequest {
    kind: NotificationKind,
    title: String,
    message: String,
    #[serde(default)]
    context: NotificationContext,
}

impl NotificationRequest {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            message: message.into(),
            context: NotificationContext::default(),
        }
    }

    pub fn for_period(mut self, period: Period) -> Self {
        self.context.period = Some(period);
        self
    }

    pub fn for_category(mut self, category_id: Uuid) -> Self {
        self.context.category_id = Some(category_id);
        self
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> NotificationContext {
        self.context
    }
}

/// Persisted notification record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Materializes a request into an unread record.
    pub fn from_request(request: &NotificationRequest, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: request.kind(),
            title: request.title().to_string(),
            message: request.message().to_string(),
            is_read: false,
            created_at: now,
        }
    }
}

impl Identifiable for Notification {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationStats {
    pub unread_count: usize,
    pub total_count: usize,
}

impl NotificationStats {
    pub fn tally<'a>(notifications: impl IntoIterator<Item = &'a Notification>) -> Self {
        notifications
            .into_iter()
            .fold(Self::default(), |mut stats, notification| {
                stats.total_count += 1;
                if !notification.is_read {
                    stats.unread_count += 1;
                }
                stats
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&NotificationKind::LimitExceeded).unwrap();
        assert_eq!(json, "\"limit_exceeded\"");
        assert_eq!(NotificationKind::DailyReminder.to_string(), "daily_reminder");
    }

    #[test]
    fn record_starts_unread_with_request_text() {
        let request = NotificationRequest::new(NotificationKind::LimitWarning, "close to limit");
        let now = Utc::now();
        let record = Notification::from_request(&request, now);
        assert_eq!(record.kind, NotificationKind::LimitWarning);
        assert_eq!(record.title, "Limit Warning");
        assert_eq!(record.message, "close to limit");
        assert!(!record.is_read);
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn stats_count_unread() {
        let request = NotificationRequest::new(NotificationKind::DailyReminder, "log it");
        let mut read = Notification::from_request(&request, Utc::now());
        read.is_read = true;
        let unread = Notification::from_request(&request, Utc::now());
        let stats = NotificationStats::tally([&read, &unread]);
        assert_eq!(stats.total_count, 2);
        assert_eq!(stats.unread_count, 1);
    }
}
