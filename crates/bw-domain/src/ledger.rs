//! The ledger document and the read queries every store answers from it.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    category::{Category, CategoryRef},
    common::{find_by_id, find_by_id_mut, Amounted, BelongsToCategory, Identifiable, NamedEntity},
    limit::{CategoryLimit, LimitRow},
    period::Period,
    planning::{PlannedExpense, PlannedIncome},
    summary::CategoryTotal,
    transaction::{Transaction, TransactionFilter},
};

/// Complete set of categories, transactions, limits and plans.
///
/// Collections keep insertion order, which is the stable order queries return.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub limits: Vec<CategoryLimit>,
    #[serde(default)]
    pub planned_expenses: Vec<PlannedExpense>,
    #[serde(default)]
    pub planned_income: Vec<PlannedIncome>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        find_by_id(&self.categories, id)
    }

    pub fn category_mut(&mut self, id: Uuid) -> Option<&mut Category> {
        find_by_id_mut(&mut self.categories, id)
    }

    /// Case-insensitive lookup by trimmed name.
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        let needle = name.trim().to_lowercase();
        self.categories
            .iter()
            .find(|category| category.name().trim().to_lowercase() == needle)
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        find_by_id(&self.transactions, id)
    }

    pub fn transaction_mut(&mut self, id: Uuid) -> Option<&mut Transaction> {
        find_by_id_mut(&mut self.transactions, id)
    }

    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        id
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    pub fn add_limit(&mut self, limit: CategoryLimit) -> Uuid {
        let id = limit.id;
        self.limits.push(limit);
        id
    }

    pub fn category_refs(&self) -> Vec<CategoryRef> {
        self.categories.iter().map(Category::to_ref).collect()
    }

    pub fn limits_for(&self, period: Period) -> Vec<LimitRow> {
        self.limits
            .iter()
            .filter(|limit| limit.applies_to(period))
            .map(CategoryLimit::row)
            .collect()
    }

    pub fn sum_transactions(&self, filter: &TransactionFilter) -> f64 {
        self.transactions
            .iter()
            .filter(|txn| filter.matches(txn))
            .map(Amounted::amount)
            .sum()
    }

    /// Totals per known category. Categories without matching transactions report zero;
    /// transactions pointing at unknown categories are left out.
    pub fn category_totals(&self, filter: &TransactionFilter) -> Vec<CategoryTotal> {
        let mut sums: HashMap<Uuid, f64> = HashMap::new();
        for txn in self.transactions.iter().filter(|txn| filter.matches(txn)) {
            *sums.entry(txn.category_id).or_default() += txn.amount;
        }
        self.categories
            .iter()
            .filter(|category| filter.category_id.map_or(true, |id| id == category.id))
            .map(|category| CategoryTotal {
                category_id: category.id,
                category_name: category.name.clone(),
                total: sums.get(&category.id).copied().unwrap_or(0.0),
            })
            .collect()
    }

    pub fn count_transactions_on(&self, date: NaiveDate) -> usize {
        self.transactions.iter().filter(|txn| txn.date == date).count()
    }

    pub fn planned_income_for(&self, period: Period) -> impl Iterator<Item = &PlannedIncome> {
        self.planned_income
            .iter()
            .filter(move |income| income.applies_to(period))
    }

    /// Detects dangling category references left behind by external edits.
    pub fn warnings(&self) -> Vec<String> {
        let known: HashSet<Uuid> = self.categories.iter().map(|c| c.id).collect();
        let mut warnings = Vec::new();
        dangling(&mut warnings, "transaction", &self.transactions, &known);
        dangling(&mut warnings, "limit", &self.limits, &known);
        dangling(&mut warnings, "planned expense", &self.planned_expenses, &known);
        warnings
    }
}

fn dangling<T: Identifiable + BelongsToCategory>(
    out: &mut Vec<String>,
    label: &str,
    items: &[T],
    known: &HashSet<Uuid>,
) {
    for item in items {
        if !known.contains(&item.category_id()) {
            out.push(format!(
                "{} {} references missing category {}",
                label,
                item.id(),
                item.category_id()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> (Ledger, Uuid, Uuid) {
        let now = Utc::now();
        let mut ledger = Ledger::new();
        let food = ledger.add_category(Category::new("Food", "", now));
        let rent = ledger.add_category(Category::new("Rent", "", now));
        ledger.add_transaction(Transaction::new(food, 120.0, date(2024, 3, 2), now));
        ledger.add_transaction(Transaction::new(food, 30.5, date(2024, 3, 20), now));
        ledger.add_transaction(Transaction::new(rent, 900.0, date(2024, 3, 1), now));
        ledger.add_transaction(Transaction::new(food, 40.0, date(2024, 4, 1), now));
        (ledger, food, rent)
    }

    #[test]
    fn sums_respect_each_filter_independently() {
        let (ledger, food, _) = sample();
        assert_eq!(ledger.sum_transactions(&TransactionFilter::default()), 1090.5);
        assert_eq!(
            ledger.sum_transactions(&TransactionFilter::default().for_category(food)),
            190.5
        );
        let march = Period::new(3, 2024).unwrap();
        let filter = TransactionFilter::default()
            .for_category(food)
            .between(march.first_day(), march.last_day());
        assert_eq!(ledger.sum_transactions(&filter), 150.5);
        let open_start = TransactionFilter::new(None, None, Some(date(2024, 3, 1)));
        assert_eq!(ledger.sum_transactions(&open_start), 900.0);
    }

    #[test]
    fn category_totals_include_idle_categories() {
        let (ledger, food, rent) = sample();
        let filter = TransactionFilter::on(date(2024, 4, 1));
        let totals = ledger.category_totals(&filter);
        assert_eq!(totals.len(), 2);
        let food_total = totals.iter().find(|t| t.category_id == food).unwrap();
        let rent_total = totals.iter().find(|t| t.category_id == rent).unwrap();
        assert_eq!(food_total.total, 40.0);
        assert_eq!(rent_total.total, 0.0);
    }

    #[test]
    fn counts_transactions_by_exact_date() {
        let (ledger, _, _) = sample();
        assert_eq!(ledger.count_transactions_on(date(2024, 3, 1)), 1);
        assert_eq!(ledger.count_transactions_on(date(2024, 3, 3)), 0);
    }

    #[test]
    fn limits_keep_insertion_order() {
        let (mut ledger, food, _) = sample();
        let march = Period::new(3, 2024).unwrap();
        let now = Utc::now();
        ledger.add_limit(CategoryLimit::new(food, 300.0, march, now));
        ledger.add_limit(CategoryLimit::new(food, 100.0, march, now));
        ledger.add_limit(CategoryLimit::new(food, 999.0, march.next(), now));
        let rows = ledger.limits_for(march);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].limit, 300.0);
        assert_eq!(rows[1].limit, 100.0);
    }

    #[test]
    fn warnings_flag_dangling_references() {
        let (mut ledger, _, _) = sample();
        ledger.add_transaction(Transaction::new(Uuid::new_v4(), 1.0, date(2024, 3, 5), Utc::now()));
        assert_eq!(ledger.warnings().len(), 1);
    }
}
