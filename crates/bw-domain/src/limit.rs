//! Monthly spending limits configured per category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::*, period::Period};

/// A configured maximum spend for one category within one calendar month.
///
/// Several rows may exist for the same category and period; nothing in the
/// ledger enforces uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryLimit {
    pub id: Uuid,
    pub category_id: Uuid,
    pub limit: f64,
    pub month: u32,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryLimit {
    pub fn new(category_id: Uuid, limit: f64, period: Period, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            limit,
            month: period.month,
            year: period.year,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn applies_to(&self, period: Period) -> bool {
        self.month == period.month && self.year == period.year
    }

    pub fn row(&self) -> LimitRow {
        LimitRow {
            category_id: self.category_id,
            limit: self.limit,
        }
    }
}

impl Identifiable for CategoryLimit {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl BelongsToCategory for CategoryLimit {
    fn category_id(&self) -> Uuid {
        self.category_id
    }
}

/// Projection returned by limit listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LimitRow {
    pub category_id: Uuid,
    pub limit: f64,
}
