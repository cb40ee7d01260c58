//! Per-category and per-period spending totals read from a [`LedgerStore`].

use std::{cmp::Ordering, collections::HashMap, sync::Arc};

use chrono::NaiveDate;
use tracing::warn;
use uuid::Uuid;

use bw_domain::{
    CategorySpendSnapshot, CategoryTotal, LimitRow, MonthlySummary, Period, TransactionFilter,
};

use crate::{LedgerStore, StoreError};

/// Read-only aggregation over an injected ledger store.
#[derive(Clone)]
pub struct Aggregator {
    store: Arc<dyn LedgerStore>,
}

impl Aggregator {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Total of the category's transactions dated within `period`; zero when none match.
    pub fn sum_for_category_period(
        &self,
        category_id: Uuid,
        period: Period,
    ) -> Result<f64, StoreError> {
        self.store.sum_for_category_period(category_id, period)
    }

    /// Total over an arbitrary range. Each bound constrains only when present.
    pub fn sum_for_category_range(
        &self,
        category_id: Option<Uuid>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<f64, StoreError> {
        self.store
            .sum_transactions(&TransactionFilter::new(category_id, start, end))
    }

    /// Spend per category for `filter`, largest total first.
    pub fn category_breakdown(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<CategoryTotal>, StoreError> {
        let mut totals = self.store.category_totals(filter)?;
        totals.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.category_name.cmp(&b.category_name))
        });
        Ok(totals)
    }

    /// One snapshot per category for `period`, each measured against its resolved limit.
    pub fn spend_snapshots(
        &self,
        period: Period,
    ) -> Result<Vec<CategorySpendSnapshot>, StoreError> {
        let filter = TransactionFilter::default().between(period.first_day(), period.last_day());
        let totals = self.category_breakdown(&filter)?;
        let limits = group_limits(self.store.list_limits(period)?);
        Ok(totals
            .into_iter()
            .map(|total| {
                let limit = limits
                    .get(&total.category_id)
                    .and_then(|rows| resolve_limit(total.category_id, rows));
                CategorySpendSnapshot::new(
                    total.category_id,
                    total.category_name,
                    period,
                    total.total,
                    limit,
                )
            })
            .collect())
    }

    pub fn monthly_summary(&self, period: Period) -> Result<MonthlySummary, StoreError> {
        let categories = self.spend_snapshots(period)?;
        let total = categories.iter().map(|snapshot| snapshot.spent).sum();
        Ok(MonthlySummary {
            period,
            categories,
            total,
        })
    }
}

/// Groups limit rows by category, preserving the store's row order within each group.
pub(crate) fn group_limits(rows: Vec<LimitRow>) -> HashMap<Uuid, Vec<f64>> {
    let mut grouped: HashMap<Uuid, Vec<f64>> = HashMap::new();
    for row in rows {
        grouped.entry(row.category_id).or_default().push(row.limit);
    }
    grouped
}

/// Picks the single limit that applies to a category.
///
/// Only positive rows count. When several remain, the first in store order wins and the
/// duplication is logged as a configuration problem.
pub fn resolve_limit(category_id: Uuid, rows: &[f64]) -> Option<f64> {
    let mut positive = rows.iter().copied().filter(|limit| limit.is_finite() && *limit > 0.0);
    let chosen = positive.next()?;
    let extra = positive.count();
    if extra > 0 {
        warn!(
            category = %category_id,
            rows = extra + 1,
            chosen,
            "multiple limits configured for the same period; using the first"
        );
    }
    Some(chosen)
}
