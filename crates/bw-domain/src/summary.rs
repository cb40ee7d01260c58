//! Derived spending views. None of these are persisted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::period::Period;

/// Total spent per category for an arbitrary transaction filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category_id: Uuid,
    pub category_name: String,
    pub total: f64,
}

/// Spending of one category within one period, measured against its limit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySpendSnapshot {
    pub category_id: Uuid,
    pub category_name: String,
    pub period: Period,
    pub spent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
    pub exceeded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<i64>,
}

impl CategorySpendSnapshot {
    /// Builds a snapshot; `percentage` is only derived for a positive limit.
    pub fn new(
        category_id: Uuid,
        category_name: impl Into<String>,
        period: Period,
        spent: f64,
        limit: Option<f64>,
    ) -> Self {
        let exceeded = limit.map_or(false, |limit| spent >= limit);
        let percentage = limit
            .filter(|limit| limit.is_finite() && *limit > 0.0)
            .map(|limit| percent_of(spent, limit));
        Self {
            category_id,
            category_name: category_name.into(),
            period,
            spent,
            limit,
            exceeded,
            percentage,
        }
    }

    pub fn remaining(&self) -> Option<f64> {
        self.limit.map(|limit| limit - self.spent)
    }
}

/// Truncated share of `limit` consumed by `spent`. Caller guarantees `limit > 0`.
pub fn percent_of(spent: f64, limit: f64) -> i64 {
    (spent * 100.0 / limit).trunc() as i64
}

/// Per-category spending for one calendar month, largest spenders first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    pub period: Period,
    pub categories: Vec<CategorySpendSnapshot>,
    pub total: f64,
}

impl MonthlySummary {
    pub fn exceeded(&self) -> impl Iterator<Item = &CategorySpendSnapshot> {
        self.categories.iter().filter(|snapshot| snapshot.exceeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period() -> Period {
        Period::new(5, 2024).unwrap()
    }

    #[test]
    fn exceeded_when_spent_reaches_limit() {
        let at_limit = CategorySpendSnapshot::new(Uuid::nil(), "Food", period(), 500.0, Some(500.0));
        assert!(at_limit.exceeded);
        assert_eq!(at_limit.percentage, Some(100));

        let below = CategorySpendSnapshot::new(Uuid::nil(), "Food", period(), 499.99, Some(500.0));
        assert!(!below.exceeded);
        assert_eq!(below.percentage, Some(99));
    }

    #[test]
    fn percentage_absent_without_positive_limit() {
        let unlimited = CategorySpendSnapshot::new(Uuid::nil(), "Fun", period(), 50.0, None);
        assert!(!unlimited.exceeded);
        assert_eq!(unlimited.percentage, None);
        assert_eq!(unlimited.remaining(), None);

        let zero = CategorySpendSnapshot::new(Uuid::nil(), "Fun", period(), 50.0, Some(0.0));
        assert!(zero.exceeded);
        assert_eq!(zero.percentage, None);
    }
}
