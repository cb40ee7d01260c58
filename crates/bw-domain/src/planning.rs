//! Planned expenses and planned monthly income.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::*, period::Period};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedExpense {
    pub id: Uuid,
    pub category_id: Uuid,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    pub planned_date: NaiveDate,
    #[serde(default)]
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlannedExpense {
    pub fn new(
        category_id: Uuid,
        amount: f64,
        planned_date: NaiveDate,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            amount,
            description: description.into(),
            planned_date,
            is_completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn mark_completed(&mut self, now: DateTime<Utc>) {
        self.is_completed = true;
        self.updated_at = now;
    }
}

impl Identifiable for PlannedExpense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl BelongsToCategory for PlannedExpense {
    fn category_id(&self) -> Uuid {
        self.category_id
    }
}

impl Amounted for PlannedExpense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Income expected for a calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedIncome {
    pub id: Uuid,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    pub month: u32,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlannedIncome {
    pub fn new(
        amount: f64,
        period: Period,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            description: description.into(),
            month: period.month,
            year: period.year,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn applies_to(&self, period: Period) -> bool {
        self.month == period.month && self.year == period.year
    }
}

impl Identifiable for PlannedIncome {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for PlannedIncome {
    fn amount(&self) -> f64 {
        self.amount
    }
}
