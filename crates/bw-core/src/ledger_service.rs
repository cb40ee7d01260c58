//! Validated mutations over a [`Ledger`] document.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use bw_domain::{
    references, Category, CategoryLimit, Ledger, Period, PlannedExpense, PlannedIncome,
    Transaction,
};

use crate::CoreError;

/// Provides validated operations for [`Category`] entities.
pub struct CategoryService;

impl CategoryService {
    /// Adds a category after checking its name is present and unique.
    pub fn add(
        ledger: &mut Ledger,
        name: &str,
        description: &str,
        now: DateTime<Utc>,
    ) -> Result<Uuid, CoreError> {
        let name = Self::validate_name(ledger, None, name)?;
        Ok(ledger.add_category(Category::new(name, description.trim(), now)))
    }

    pub fn update(
        ledger: &mut Ledger,
        id: Uuid,
        name: &str,
        description: &str,
        now: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        let name = Self::validate_name(ledger, Some(id), name)?;
        let category = ledger
            .category_mut(id)
            .ok_or_else(|| CoreError::CategoryNotFound(id.to_string()))?;
        category.rename(name, description.trim(), now);
        Ok(())
    }

    /// Removes a category that nothing in the ledger refers to.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> Result<(), CoreError> {
        if references(&ledger.transactions, id) {
            return Err(CoreError::Validation(
                "Category has linked transactions".into(),
            ));
        }
        if references(&ledger.limits, id) || references(&ledger.planned_expenses, id) {
            return Err(CoreError::Validation(
                "Category has configured limits or planned expenses".into(),
            ));
        }
        let before = ledger.categories.len();
        ledger.categories.retain(|category| category.id != id);
        if ledger.categories.len() == before {
            return Err(CoreError::CategoryNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Categories sorted by case-insensitive name.
    pub fn list(ledger: &Ledger) -> Vec<&Category> {
        let mut categories: Vec<&Category> = ledger.categories.iter().collect();
        categories.sort_by_key(|category| category.name.to_lowercase());
        categories
    }

    /// Resolves a category by case-insensitive name, or by id when `key` parses as one.
    pub fn resolve(ledger: &Ledger, key: &str) -> Result<Uuid, CoreError> {
        if let Ok(id) = Uuid::parse_str(key.trim()) {
            if ledger.category(id).is_some() {
                return Ok(id);
            }
        }
        ledger
            .category_by_name(key)
            .map(|category| category.id)
            .ok_or_else(|| CoreError::CategoryNotFound(key.to_string()))
    }

    fn validate_name(
        ledger: &Ledger,
        exclude: Option<Uuid>,
        candidate: &str,
    ) -> Result<String, CoreError> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation("Category name cannot be empty".into()));
        }
        match ledger.category_by_name(trimmed) {
            Some(existing) if Some(existing.id) != exclude => Err(CoreError::Validation(
                format!("Category `{}` already exists", trimmed),
            )),
            _ => Ok(trimmed.to_string()),
        }
    }
}

/// Provides validated operations for [`Transaction`] entities.
pub struct TransactionService;

impl TransactionService {
    pub fn add(
        ledger: &mut Ledger,
        category_id: Uuid,
        amount: f64,
        date: NaiveDate,
        description: &str,
        now: DateTime<Utc>,
    ) -> Result<Uuid, CoreError> {
        ensure_category(ledger, category_id)?;
        ensure_amount(amount)?;
        let txn =
            Transaction::new(category_id, amount, date, now).with_description(description.trim());
        Ok(ledger.add_transaction(txn))
    }

    /// Replaces the mutable fields of a transaction; identity and creation time are kept.
    pub fn update(
        ledger: &mut Ledger,
        id: Uuid,
        category_id: Uuid,
        amount: f64,
        date: NaiveDate,
        description: &str,
        now: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        ensure_category(ledger, category_id)?;
        ensure_amount(amount)?;
        let txn = ledger
            .transaction_mut(id)
            .ok_or(CoreError::TransactionNotFound(id))?;
        txn.category_id = category_id;
        txn.amount = amount;
        txn.date = date;
        txn.description = description.trim().to_string();
        txn.updated_at = now;
        Ok(())
    }

    pub fn remove(ledger: &mut Ledger, id: Uuid) -> Result<(), CoreError> {
        let before = ledger.transactions.len();
        ledger.transactions.retain(|txn| txn.id != id);
        if ledger.transactions.len() == before {
            return Err(CoreError::TransactionNotFound(id));
        }
        Ok(())
    }
}

/// Provides operations for [`CategoryLimit`] rows.
pub struct LimitService;

impl LimitService {
    /// Appends a limit row. Existing rows for the same period are left in place.
    pub fn set(
        ledger: &mut Ledger,
        category_id: Uuid,
        limit: f64,
        period: Period,
        now: DateTime<Utc>,
    ) -> Result<Uuid, CoreError> {
        ensure_category(ledger, category_id)?;
        ensure_amount(limit)?;
        Ok(ledger.add_limit(CategoryLimit::new(category_id, limit, period, now)))
    }

    pub fn remove(ledger: &mut Ledger, id: Uuid) -> Result<(), CoreError> {
        let before = ledger.limits.len();
        ledger.limits.retain(|limit| limit.id != id);
        if ledger.limits.len() == before {
            return Err(CoreError::LimitNotFound(id));
        }
        Ok(())
    }
}

/// Provides operations for planned expenses and planned income.
pub struct PlanningService;

impl PlanningService {
    pub fn add_expense(
        ledger: &mut Ledger,
        category_id: Uuid,
        amount: f64,
        planned_date: NaiveDate,
        description: &str,
        now: DateTime<Utc>,
    ) -> Result<Uuid, CoreError> {
        ensure_category(ledger, category_id)?;
        ensure_amount(amount)?;
        let expense =
            PlannedExpense::new(category_id, amount, planned_date, description.trim(), now);
        let id = expense.id;
        ledger.planned_expenses.push(expense);
        Ok(id)
    }

    pub fn complete_expense(
        ledger: &mut Ledger,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        let expense = ledger
            .planned_expenses
            .iter_mut()
            .find(|expense| expense.id == id)
            .ok_or(CoreError::PlannedExpenseNotFound(id))?;
        expense.mark_completed(now);
        Ok(())
    }

    pub fn add_income(
        ledger: &mut Ledger,
        amount: f64,
        period: Period,
        description: &str,
        now: DateTime<Utc>,
    ) -> Result<Uuid, CoreError> {
        ensure_amount(amount)?;
        let income = PlannedIncome::new(amount, period, description.trim(), now);
        let id = income.id;
        ledger.planned_income.push(income);
        Ok(id)
    }
}

fn ensure_category(ledger: &Ledger, id: Uuid) -> Result<(), CoreError> {
    ledger
        .category(id)
        .map(|_| ())
        .ok_or_else(|| CoreError::CategoryNotFound(id.to_string()))
}

fn ensure_amount(amount: f64) -> Result<(), CoreError> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Amount `{amount}` is not a number")))
    }
}
