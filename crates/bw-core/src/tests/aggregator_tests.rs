use uuid::Uuid;

use bw_domain::{Period, TransactionFilter};

use super::support::{date, LedgerFixture};
use crate::{aggregator::resolve_limit, Aggregator};

fn march() -> Period {
    Period::new(3, 2024).unwrap()
}

fn fixture() -> (LedgerFixture, Uuid, Uuid, Uuid) {
    let mut fx = LedgerFixture::new();
    let food = fx.category("Food");
    let rent = fx.category("Rent");
    let fun = fx.category("Fun");
    fx.spend(food, 100.0, date(2024, 3, 1))
        .spend(food, 50.25, date(2024, 3, 15))
        .spend(food, 20.0, date(2024, 3, 31))
        .spend(food, 999.0, date(2024, 4, 1))
        .spend(rent, 800.0, date(2024, 3, 5))
        .spend(fun, 10.0, date(2024, 2, 29));
    (fx, food, rent, fun)
}

#[test]
fn period_sum_covers_whole_calendar_month() {
    let (fx, food, _, _) = fixture();
    let aggregator = Aggregator::new(fx.store());
    assert_eq!(aggregator.sum_for_category_period(food, march()).unwrap(), 170.25);
}

#[test]
fn period_sum_is_zero_without_matches() {
    let (fx, _, _, fun) = fixture();
    let aggregator = Aggregator::new(fx.store());
    assert_eq!(aggregator.sum_for_category_period(fun, march()).unwrap(), 0.0);
    assert_eq!(
        aggregator
            .sum_for_category_period(Uuid::new_v4(), march())
            .unwrap(),
        0.0
    );
}

#[test]
fn period_sum_is_idempotent() {
    let (fx, food, _, _) = fixture();
    let aggregator = Aggregator::new(fx.store());
    let first = aggregator.sum_for_category_period(food, march()).unwrap();
    let second = aggregator.sum_for_category_period(food, march()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn disjoint_ranges_add_up_to_the_period() {
    let (fx, food, _, _) = fixture();
    let aggregator = Aggregator::new(fx.store());
    let early = aggregator
        .sum_for_category_range(Some(food), Some(date(2024, 3, 1)), Some(date(2024, 3, 14)))
        .unwrap();
    let late = aggregator
        .sum_for_category_range(Some(food), Some(date(2024, 3, 15)), Some(date(2024, 3, 31)))
        .unwrap();
    let whole = aggregator.sum_for_category_period(food, march()).unwrap();
    assert_eq!(early + late, whole);
}

#[test]
fn range_filters_are_independent() {
    let (fx, _, _, _) = fixture();
    let aggregator = Aggregator::new(fx.store());
    assert_eq!(aggregator.sum_for_category_range(None, None, None).unwrap(), 1979.25);
    assert_eq!(
        aggregator
            .sum_for_category_range(None, Some(date(2024, 4, 1)), None)
            .unwrap(),
        999.0
    );
    assert_eq!(
        aggregator
            .sum_for_category_range(None, None, Some(date(2024, 2, 29)))
            .unwrap(),
        10.0
    );
}

#[test]
fn breakdown_orders_by_descending_total() {
    let (fx, food, rent, fun) = fixture();
    let aggregator = Aggregator::new(fx.store());
    let filter = TransactionFilter::default().between(march().first_day(), march().last_day());
    let rows = aggregator.category_breakdown(&filter).unwrap();
    let ids: Vec<Uuid> = rows.iter().map(|row| row.category_id).collect();
    assert_eq!(ids, vec![rent, food, fun]);
    assert_eq!(rows[2].total, 0.0);
}

#[test]
fn snapshots_carry_limits_and_percentages() {
    let (mut fx, food, rent, fun) = fixture();
    fx.limit(food, 200.0, march()).limit(rent, 800.0, march());
    let aggregator = Aggregator::new(fx.store());
    let summary = aggregator.monthly_summary(march()).unwrap();

    assert_eq!(summary.total, 970.25);
    let rent_row = summary.categories.iter().find(|s| s.category_id == rent).unwrap();
    assert!(rent_row.exceeded);
    assert_eq!(rent_row.percentage, Some(100));

    let food_row = summary.categories.iter().find(|s| s.category_id == food).unwrap();
    assert!(!food_row.exceeded);
    assert_eq!(food_row.percentage, Some(85));

    let fun_row = summary.categories.iter().find(|s| s.category_id == fun).unwrap();
    assert_eq!(fun_row.limit, None);
    assert_eq!(fun_row.percentage, None);
    assert_eq!(summary.exceeded().count(), 1);
}

#[test]
fn duplicate_limits_resolve_to_first_positive_row() {
    let id = Uuid::new_v4();
    assert_eq!(resolve_limit(id, &[300.0, 100.0]), Some(300.0));
    assert_eq!(resolve_limit(id, &[0.0, -5.0, 250.0]), Some(250.0));
    assert_eq!(resolve_limit(id, &[0.0]), None);
    assert_eq!(resolve_limit(id, &[]), None);
}
