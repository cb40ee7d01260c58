//! Read interface over the ledger, plus an in-memory implementation.

use std::sync::RwLock;

use chrono::NaiveDate;
use uuid::Uuid;

use bw_domain::{CategoryRef, CategoryTotal, Ledger, LimitRow, Period, TransactionFilter};

use crate::StoreError;

/// Abstraction over ledger backends able to answer the aggregation queries.
///
/// Implementations must not cache: every call reflects the latest persisted state.
pub trait LedgerStore: Send + Sync {
    fn list_categories(&self) -> Result<Vec<CategoryRef>, StoreError>;

    /// Limit rows for `period`, in the backend's stable order.
    fn list_limits(&self, period: Period) -> Result<Vec<LimitRow>, StoreError>;

    fn sum_transactions(&self, filter: &TransactionFilter) -> Result<f64, StoreError>;

    /// Per-category totals for `filter`, in no particular order.
    fn category_totals(&self, filter: &TransactionFilter) -> Result<Vec<CategoryTotal>, StoreError>;

    fn count_transactions_on(&self, date: NaiveDate) -> Result<usize, StoreError>;

    fn count_planned_income(&self, period: Period) -> Result<usize, StoreError>;

    /// Sum of a category's transactions dated inside `period`.
    fn sum_for_category_period(
        &self,
        category_id: Uuid,
        period: Period,
    ) -> Result<f64, StoreError> {
        let filter = TransactionFilter::default()
            .for_category(category_id)
            .between(period.first_day(), period.last_day());
        self.sum_transactions(&filter)
    }
}

/// Ledger held in process memory. Used by tests and by embedders without a file.
#[derive(Debug, Default)]
pub struct MemoryLedgerStore {
    ledger: RwLock<Ledger>,
}

impl MemoryLedgerStore {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: RwLock::new(ledger),
        }
    }

    /// Applies a mutation to the held ledger.
    pub fn update<T>(&self, apply: impl FnOnce(&mut Ledger) -> T) -> Result<T, StoreError> {
        let mut ledger = self.ledger.write().map_err(|_| poisoned())?;
        Ok(apply(&mut ledger))
    }

    pub fn snapshot(&self) -> Result<Ledger, StoreError> {
        self.read(Ledger::clone)
    }

    fn read<T>(&self, query: impl FnOnce(&Ledger) -> T) -> Result<T, StoreError> {
        let ledger = self.ledger.read().map_err(|_| poisoned())?;
        Ok(query(&ledger))
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("in-memory ledger lock poisoned".into())
}

impl LedgerStore for MemoryLedgerStore {
    fn list_categories(&self) -> Result<Vec<CategoryRef>, StoreError> {
        self.read(Ledger::category_refs)
    }

    fn list_limits(&self, period: Period) -> Result<Vec<LimitRow>, StoreError> {
        self.read(|ledger| ledger.limits_for(period))
    }

    fn sum_transactions(&self, filter: &TransactionFilter) -> Result<f64, StoreError> {
        self.read(|ledger| ledger.sum_transactions(filter))
    }

    fn category_totals(&self, filter: &TransactionFilter) -> Result<Vec<CategoryTotal>, StoreError> {
        self.read(|ledger| ledger.category_totals(filter))
    }

    fn count_transactions_on(&self, date: NaiveDate) -> Result<usize, StoreError> {
        self.read(|ledger| ledger.count_transactions_on(date))
    }

    fn count_planned_income(&self, period: Period) -> Result<usize, StoreError> {
        self.read(|ledger| ledger.planned_income_for(period).count())
    }
}
