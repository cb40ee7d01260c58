use std::{fs, path::PathBuf};

use bw_config::{Config, ConfigError, ConfigManager, DeliveryMode};
use tempfile::tempdir;

#[test]
fn default_config_has_expected_values() {
    let cfg = Config::default();

    assert_eq!(cfg.ledger_file, PathBuf::from("ledger.json"));
    assert_eq!(cfg.notifications_file, PathBuf::from("notifications.json"));
    assert_eq!(cfg.log_filter, "budget_watch=info,bw_core=info");
    assert_eq!(cfg.currency, "RUB");
    assert_eq!(cfg.delivery, DeliveryMode::Log);
    assert!(cfg.chat_id.is_none());
    assert!(cfg.reminder_templates.is_empty());
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("home")).expect("manager");

    assert_eq!(manager.config_path(), dir.path().join("home").join("config.json"));
    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let cfg = Config {
        currency: "EUR".into(),
        delivery: DeliveryMode::Silent,
        chat_id: Some(42),
        reminder_templates: vec!["Log your day".into()],
        ..Config::default()
    };
    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    fs::write(
        manager.config_path(),
        r#"{ "currency": "USD", "delivery": "whatever" }"#,
    )
    .expect("write");

    let loaded = manager.load().expect("load");
    assert_eq!(loaded.currency, "USD");
    assert_eq!(loaded.delivery, DeliveryMode::Log);
    assert_eq!(loaded.ledger_file, PathBuf::from("ledger.json"));
}

#[test]
fn invalid_settings_are_rejected() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let cfg = Config {
        notifications_file: PathBuf::from("ledger.json"),
        ..Config::default()
    };
    assert!(matches!(
        manager.save(&cfg),
        Err(ConfigError::Invalid { field: "notifications_file", .. })
    ));

    fs::write(manager.config_path(), "not json").expect("write");
    assert!(matches!(manager.load(), Err(ConfigError::Serde { .. })));
}

#[test]
fn paths_resolve_against_base_dir() {
    let cfg = Config::default();
    let base = PathBuf::from("/srv/budget");
    assert_eq!(cfg.ledger_path(&base), base.join("ledger.json"));
    assert_eq!(cfg.notifications_path(&base), base.join("notifications.json"));
}
