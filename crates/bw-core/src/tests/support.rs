//! Fakes and fixtures shared by the core test modules.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use bw_domain::{
    Category, CategoryLimit, CategoryRef, CategoryTotal, Ledger, LimitRow, Notification,
    NotificationKind, NotificationRequest, Period, PlannedIncome, Transaction, TransactionFilter,
};

use crate::{LedgerStore, MemoryLedgerStore, NotificationSink, SinkError, StoreError};

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builder over an in-memory ledger.
#[derive(Default)]
pub struct LedgerFixture {
    pub ledger: Ledger,
}

impl LedgerFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&mut self, name: &str) -> Uuid {
        self.ledger.add_category(Category::new(name, "", Utc::now()))
    }

    pub fn spend(&mut self, category_id: Uuid, amount: f64, on: NaiveDate) -> &mut Self {
        self.ledger
            .add_transaction(Transaction::new(category_id, amount, on, Utc::now()));
        self
    }

    pub fn limit(&mut self, category_id: Uuid, limit: f64, period: Period) -> &mut Self {
        self.ledger
            .add_limit(CategoryLimit::new(category_id, limit, period, Utc::now()));
        self
    }

    pub fn income(&mut self, amount: f64, period: Period) -> &mut Self {
        self.ledger
            .planned_income
            .push(PlannedIncome::new(amount, period, "salary", Utc::now()));
        self
    }

    pub fn store(&self) -> Arc<MemoryLedgerStore> {
        Arc::new(MemoryLedgerStore::new(self.ledger.clone()))
    }
}

/// Store wrapper that fails selected reads on demand.
pub struct FlakyStore {
    inner: MemoryLedgerStore,
    pub fail_categories: bool,
    pub fail_limits: bool,
    pub fail_count: bool,
    pub fail_sum_for: Option<Uuid>,
}

impl FlakyStore {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: MemoryLedgerStore::new(ledger),
            fail_categories: false,
            fail_limits: false,
            fail_count: false,
            fail_sum_for: None,
        }
    }
}

fn outage() -> StoreError {
    StoreError::Unavailable("simulated outage".into())
}

impl LedgerStore for FlakyStore {
    fn list_categories(&self) -> Result<Vec<CategoryRef>, StoreError> {
        if self.fail_categories {
            return Err(outage());
        }
        self.inner.list_categories()
    }

    fn list_limits(&self, period: Period) -> Result<Vec<LimitRow>, StoreError> {
        if self.fail_limits {
            return Err(outage());
        }
        self.inner.list_limits(period)
    }

    fn sum_transactions(&self, filter: &TransactionFilter) -> Result<f64, StoreError> {
        self.inner.sum_transactions(filter)
    }

    fn category_totals(&self, filter: &TransactionFilter) -> Result<Vec<CategoryTotal>, StoreError> {
        self.inner.category_totals(filter)
    }

    fn count_transactions_on(&self, date: NaiveDate) -> Result<usize, StoreError> {
        if self.fail_count {
            return Err(outage());
        }
        self.inner.count_transactions_on(date)
    }

    fn count_planned_income(&self, period: Period) -> Result<usize, StoreError> {
        self.inner.count_planned_income(period)
    }

    fn sum_for_category_period(
        &self,
        category_id: Uuid,
        period: Period,
    ) -> Result<f64, StoreError> {
        if self.fail_sum_for == Some(category_id) {
            return Err(outage());
        }
        self.inner.sum_for_category_period(category_id, period)
    }
}

/// Sink that records every request and can reject one kind.
#[derive(Default)]
pub struct RecordingSink {
    pub received: Mutex<Vec<NotificationRequest>>,
    pub reject: Option<NotificationKind>,
}

impl RecordingSink {
    pub fn rejecting(kind: NotificationKind) -> Self {
        Self {
            received: Mutex::new(Vec::new()),
            reject: Some(kind),
        }
    }

    pub fn kinds(&self) -> Vec<NotificationKind> {
        self.received
            .lock()
            .unwrap()
            .iter()
            .map(NotificationRequest::kind)
            .collect()
    }
}

impl NotificationSink for RecordingSink {
    fn emit(&self, request: &NotificationRequest) -> Result<Notification, SinkError> {
        self.received.lock().unwrap().push(request.clone());
        if self.reject == Some(request.kind()) {
            return Err(SinkError::Persistence(StoreError::Unavailable(
                "sink offline".into(),
            )));
        }
        Ok(Notification::from_request(request, Utc::now()))
    }
}
