//! Rotating message bodies for the daily reminder.

use chrono::{DateTime, Utc};

const DEFAULT_TEMPLATES: [&str; 6] = [
    "You have not logged any transactions today. Don't forget to record your expenses!",
    "Hey! No entries yet today. Add today's spending while you still remember it.",
    "Financial discipline starts with daily tracking. Add today's expenses now.",
    "Money likes to be counted. Record today's purchases before the day is over.",
    "Tracking expenses is the foundation of healthy finances. Add today's transactions.",
    "Small purchases add up to big sums. Don't skip any of today's spending.",
];

/// Ordered set of reminder messages; selection is a pure function of the instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderTemplates {
    messages: Vec<String>,
}

impl Default for ReminderTemplates {
    fn default() -> Self {
        Self {
            messages: DEFAULT_TEMPLATES.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl ReminderTemplates {
    /// Uses `messages` when non-empty, the built-in set otherwise.
    pub fn new(messages: Vec<String>) -> Self {
        let messages: Vec<String> = messages
            .into_iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();
        if messages.is_empty() {
            Self::default()
        } else {
            Self { messages }
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Index chosen for `now`: unix seconds modulo the template count.
    pub fn index_for(&self, now: DateTime<Utc>) -> usize {
        now.timestamp().rem_euclid(self.messages.len() as i64) as usize
    }

    pub fn select(&self, now: DateTime<Utc>) -> &str {
        &self.messages[self.index_for(now)]
    }
}
