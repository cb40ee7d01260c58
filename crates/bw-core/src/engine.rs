//! Decides which notifications a check should produce.
//!
//! Every call re-derives its inputs from the store; nothing is remembered between
//! calls, so a category that stays above its threshold is reported on every pass.

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};
use uuid::Uuid;

use bw_domain::{NotificationKind, NotificationRequest, Period};

use crate::{
    aggregator::{group_limits, resolve_limit},
    classifier::{at_warning_threshold, classify, LimitState},
    LedgerStore, ReminderTemplates, StoreError,
};

pub struct NotificationEngine {
    store: Arc<dyn LedgerStore>,
    templates: ReminderTemplates,
}

impl NotificationEngine {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self {
            store,
            templates: ReminderTemplates::default(),
        }
    }

    pub fn with_templates(mut self, templates: ReminderTemplates) -> Self {
        self.templates = templates;
        self
    }

    pub fn templates(&self) -> &ReminderTemplates {
        &self.templates
    }

    /// Warning/exceeded requests for every limited category of the month containing `now`.
    ///
    /// Fails only when the initial category or limit listing fails; a category whose
    /// spend cannot be read is skipped.
    pub fn limit_warnings(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<NotificationRequest>, StoreError> {
        let period = Period::containing(now.date_naive());
        let names: HashMap<Uuid, String> = self
            .store
            .list_categories()?
            .into_iter()
            .map(|category| (category.id, category.name))
            .collect();
        let limits = self.store.list_limits(period)?;

        // Keep first-seen category order so output is stable across runs.
        let mut order: Vec<Uuid> = Vec::new();
        for row in &limits {
            if !order.contains(&row.category_id) {
                order.push(row.category_id);
            }
        }
        let grouped = group_limits(limits);

        let mut requests = Vec::new();
        for category_id in order {
            let Some(name) = names.get(&category_id) else {
                debug!(category = %category_id, %period, "limit references unknown category; skipping");
                continue;
            };
            let Some(limit) = grouped
                .get(&category_id)
                .and_then(|rows| resolve_limit(category_id, rows))
            else {
                debug!(category = %name, %period, "no positive limit; skipping");
                continue;
            };
            let spent = match self.store.sum_for_category_period(category_id, period) {
                Ok(spent) => spent,
                Err(err) => {
                    warn!(category = %name, %period, error = %err, "failed to read category spend; skipping");
                    continue;
                }
            };
            if !at_warning_threshold(spent, limit) {
                continue;
            }
            if let Some(request) = limit_request(category_id, name, period, spent, limit) {
                requests.push(request);
            }
        }
        Ok(requests)
    }

    /// A reminder when nothing has been logged on the calendar date of `now`.
    pub fn daily_reminder(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Option<NotificationRequest>, StoreError> {
        let today = now.date_naive();
        let count = self.store.count_transactions_on(today)?;
        if count > 0 {
            debug!(%today, count, "transactions already logged today");
            return Ok(None);
        }
        let message = self.templates.select(now);
        let request = NotificationRequest::new(NotificationKind::DailyReminder, message)
            .for_period(Period::containing(today));
        Ok(Some(request))
    }

    /// A reminder when no income has been planned for the month containing `now`.
    pub fn income_reminder(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Option<NotificationRequest>, StoreError> {
        let period = Period::containing(now.date_naive());
        if self.store.count_planned_income(period)? > 0 {
            return Ok(None);
        }
        let message = format!(
            "No income has been planned for {period} yet. Add your expected income to keep the budget balanced."
        );
        Ok(Some(
            NotificationRequest::new(NotificationKind::IncomeReminder, message).for_period(period),
        ))
    }
}

fn limit_request(
    category_id: Uuid,
    name: &str,
    period: Period,
    spent: f64,
    limit: f64,
) -> Option<NotificationRequest> {
    let classification = match classify(spent, limit) {
        Ok(classification) => classification,
        Err(violation) => {
            error!(category = %name, error = %violation, "classified against a non-positive limit");
            return None;
        }
    };
    let kind = match classification.state {
        LimitState::Exceeded => NotificationKind::LimitExceeded,
        LimitState::Warning | LimitState::Normal => NotificationKind::LimitWarning,
    };
    let message = format!(
        "Category '{}' has reached {}% of its limit ({:.2}/{:.2})",
        name, classification.percentage, spent, limit
    );
    Some(
        NotificationRequest::new(kind, message)
            .for_period(period)
            .for_category(category_id),
    )
}
