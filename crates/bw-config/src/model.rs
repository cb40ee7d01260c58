use serde::{de::Deserializer, Deserialize, Serialize};
use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::ConfigError;

/// User settings read from `config.json`. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Ledger document, relative to the base directory unless absolute.
    #[serde(default = "Config::default_ledger_file")]
    pub ledger_file: PathBuf,
    #[serde(default = "Config::default_notifications_file")]
    pub notifications_file: PathBuf,
    /// Default tracing directive; `RUST_LOG` takes precedence.
    #[serde(default = "Config::default_log_filter")]
    pub log_filter: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default)]
    pub delivery: DeliveryMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
    /// Daily reminder wording. Empty means the built-in messages.
    #[serde(default)]
    pub reminder_templates: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_file: Self::default_ledger_file(),
            notifications_file: Self::default_notifications_file(),
            log_filter: Self::default_log_filter(),
            currency: Self::default_currency(),
            delivery: DeliveryMode::default(),
            chat_id: None,
            reminder_templates: Vec::new(),
        }
    }
}

impl Config {
    pub fn default_ledger_file() -> PathBuf {
        PathBuf::from("ledger.json")
    }

    pub fn default_notifications_file() -> PathBuf {
        PathBuf::from("notifications.json")
    }

    pub fn default_log_filter() -> String {
        "budget_watch=info,bw_core=info".into()
    }

    pub fn default_currency() -> String {
        "RUB".into()
    }

    pub fn ledger_path(&self, base: &Path) -> PathBuf {
        base.join(&self.ledger_file)
    }

    pub fn notifications_path(&self, base: &Path) -> PathBuf {
        base.join(&self.notifications_file)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ledger_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "ledger_file",
                reason: "path cannot be empty".into(),
            });
        }
        if self.notifications_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "notifications_file",
                reason: "path cannot be empty".into(),
            });
        }
        if self.ledger_file == self.notifications_file {
            return Err(ConfigError::Invalid {
                field: "notifications_file",
                reason: "must differ from ledger_file".into(),
            });
        }
        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "currency",
                reason: "currency code cannot be empty".into(),
            });
        }
        Ok(())
    }
}

/// What happens to a notification after it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Emit the notification to the log.
    #[default]
    Log,
    /// Store only.
    Silent,
}

impl DeliveryMode {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| DeliveryMode::parse(v.trim()))
            .unwrap_or_default()
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "silent" | "none" | "off" => DeliveryMode::Silent,
            _ => DeliveryMode::Log,
        }
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeliveryMode::Log => "log",
            DeliveryMode::Silent => "silent",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for DeliveryMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(DeliveryMode::from_value(value))
    }
}
