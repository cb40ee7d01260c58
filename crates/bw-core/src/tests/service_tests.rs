use std::sync::Arc;

use bw_domain::{Notification, NotificationKind, NotificationRequest, Period};

use super::support::{at, date, LedgerFixture, RecordingSink};
use crate::{
    FixedClock, MemoryNotificationRepository, Messenger, NotificationEngine,
    NotificationRepository, NotificationService, NotificationSink, PersistingSink, SinkError,
};

/// Messenger whose transport is always down.
struct OfflineMessenger;

impl Messenger for OfflineMessenger {
    fn deliver(&self, notification: &Notification) -> Result<(), SinkError> {
        Err(SinkError::Delivery {
            notification_id: notification.id,
            reason: "connection refused".into(),
        })
    }
}

fn over_limit_fixture() -> LedgerFixture {
    let mut fx = LedgerFixture::new();
    let period = Period::new(6, 2024).unwrap();
    let food = fx.category("Food");
    let fuel = fx.category("Fuel");
    fx.limit(food, 100.0, period)
        .limit(fuel, 100.0, period)
        .spend(food, 90.0, date(2024, 6, 2))
        .spend(fuel, 150.0, date(2024, 6, 3));
    fx
}

#[test]
fn rejected_requests_are_counted_and_the_rest_delivered() {
    let sink = Arc::new(RecordingSink::rejecting(NotificationKind::LimitWarning));
    let engine = NotificationEngine::new(over_limit_fixture().store());
    let service = NotificationService::new(engine, sink.clone());

    let report = service.check_limit_warnings(at(2024, 6, 10, 12)).unwrap();
    assert_eq!(report.requested, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.delivered.len(), 1);
    assert_eq!(report.delivered[0].kind, NotificationKind::LimitExceeded);
    assert_eq!(
        sink.kinds(),
        vec![NotificationKind::LimitWarning, NotificationKind::LimitExceeded]
    );
}

#[test]
fn check_all_runs_every_check() {
    let sink = Arc::new(RecordingSink::default());
    let engine = NotificationEngine::new(over_limit_fixture().store());
    let service = NotificationService::new(engine, sink.clone());

    let report = service.check_all(at(2024, 6, 10, 12)).unwrap();
    assert_eq!(report.requested, 4);
    assert_eq!(report.failed, 0);
    assert_eq!(
        sink.kinds(),
        vec![
            NotificationKind::LimitWarning,
            NotificationKind::LimitExceeded,
            NotificationKind::DailyReminder,
            NotificationKind::IncomeReminder,
        ]
    );
}

#[test]
fn quiet_ledger_produces_empty_report() {
    let mut fx = LedgerFixture::new();
    let food = fx.category("Food");
    fx.spend(food, 3.0, date(2024, 6, 10))
        .income(2500.0, Period::new(6, 2024).unwrap());
    let sink = Arc::new(RecordingSink::default());
    let service = NotificationService::new(NotificationEngine::new(fx.store()), sink.clone());

    let report = service.check_all(at(2024, 6, 10, 20)).unwrap();
    assert!(report.is_empty());
    assert!(sink.kinds().is_empty());
}

#[test]
fn persisting_sink_keeps_record_when_delivery_fails() {
    let repository = Arc::new(MemoryNotificationRepository::new());
    let clock = Arc::new(FixedClock(at(2024, 6, 10, 12)));
    let sink = PersistingSink::new(repository.clone(), clock)
        .with_messenger(Arc::new(OfflineMessenger));

    let request = NotificationRequest::new(NotificationKind::DailyReminder, "log it");
    let err = sink.emit(&request).unwrap_err();
    assert!(matches!(err, SinkError::Delivery { .. }));

    let stored = repository.list().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].message, "log it");
    assert_eq!(stored[0].created_at, at(2024, 6, 10, 12));
    assert!(!stored[0].is_read);
}

#[test]
fn repository_lists_newest_first_and_tracks_reads() {
    let repository = Arc::new(MemoryNotificationRepository::new());
    let early = PersistingSink::new(repository.clone(), Arc::new(FixedClock(at(2024, 6, 1, 8))));
    let late = PersistingSink::new(repository.clone(), Arc::new(FixedClock(at(2024, 6, 2, 8))));

    let first = early
        .emit(&NotificationRequest::new(NotificationKind::LimitWarning, "first"))
        .unwrap();
    late.emit(&NotificationRequest::new(NotificationKind::LimitExceeded, "second"))
        .unwrap();

    let listed = repository.list().unwrap();
    assert_eq!(listed[0].message, "second");
    assert_eq!(listed[1].message, "first");

    repository.mark_read(first.id).unwrap();
    let stats = repository.stats().unwrap();
    assert_eq!(stats.total_count, 2);
    assert_eq!(stats.unread_count, 1);
    assert!(repository.mark_read(uuid::Uuid::new_v4()).is_err());
}
