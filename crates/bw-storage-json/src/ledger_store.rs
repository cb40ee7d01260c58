use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::NaiveDate;
use tracing::{debug, warn};

use bw_core::{CoreError, LedgerStore, StoreError};
use bw_domain::{CategoryRef, CategoryTotal, Ledger, LimitRow, Period, TransactionFilter};

use crate::{read_document, write_document};

/// Ledger kept as a single JSON document on disk.
///
/// Every query re-reads the file, so readers always see the last committed write.
pub struct JsonLedgerStore {
    path: PathBuf,
    writer: Mutex<()>,
}

impl JsonLedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document; a missing file yields an empty ledger.
    pub fn load(&self) -> Result<Ledger, StoreError> {
        let ledger: Ledger = read_document(&self.path)?;
        for warning in ledger.warnings() {
            warn!(path = %self.path.display(), "{}", warning);
        }
        Ok(ledger)
    }

    pub fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        let _guard = self.lock()?;
        write_document(&self.path, ledger)?;
        debug!(path = %self.path.display(), "ledger saved");
        Ok(())
    }

    /// Loads, applies `apply`, and writes back only when it succeeds.
    pub fn update<T>(
        &self,
        apply: impl FnOnce(&mut Ledger) -> Result<T, CoreError>,
    ) -> Result<T, CoreError> {
        let _guard = self.lock()?;
        let mut ledger: Ledger = read_document(&self.path)?;
        let value = apply(&mut ledger)?;
        write_document(&self.path, &ledger)?;
        debug!(path = %self.path.display(), "ledger updated");
        Ok(value)
    }

    fn read<T>(&self, query: impl FnOnce(&Ledger) -> T) -> Result<T, StoreError> {
        let ledger: Ledger = read_document(&self.path)?;
        Ok(query(&ledger))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>, StoreError> {
        self.writer
            .lock()
            .map_err(|_| StoreError::Unavailable("ledger writer lock poisoned".into()))
    }
}

impl LedgerStore for JsonLedgerStore {
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
