use bw_core::{CategoryService, CurrencyFormatter, LimitService, PlanningService, TransactionService};
use bw_domain::Period;

use super::{parse_amount, parse_date, parse_period, required, rest};
use crate::cli::{context::CliContext, output, registry::CommandEntry};
use crate::errors::CommandResult;
use crate::AppError;

pub(super) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "category",
            "Add or list categories",
            "category add <NAME> [DESCRIPTION] | category list",
            cmd_category,
        ),
        CommandEntry::new(
            "txn",
            "Record a transaction (date defaults to today)",
            "txn add <CATEGORY> <AMOUNT> [YYYY-MM-DD] [DESCRIPTION]",
            cmd_txn,
        ),
        CommandEntry::new(
            "limit",
            "Set a monthly category limit (month defaults to the current one)",
            "limit set <CATEGORY> <AMOUNT> [YYYY-MM]",
            cmd_limit,
        ),
        CommandEntry::new(
            "income",
            "Plan income for a month",
            "income add <AMOUNT> [YYYY-MM] [DESCRIPTION]",
            cmd_income,
        ),
        CommandEntry::new(
            "expense",
            "Plan a future expense",
            "expense plan <CATEGORY> <AMOUNT> <YYYY-MM-DD> [DESCRIPTION]",
            cmd_expense,
        ),
    ]
}

fn subcommand<'a>(args: &[&'a str], expected: &[&str]) -> Result<&'a str, AppError> {
    let action = required(args, 0, "action")?;
    if expected.contains(&action) {
        Ok(action)
    } else {
        Err(AppError::Input(format!(
            "unknown action `{action}` (expected {})",
            expected.join(" or ")
        )))
    }
}

fn cmd_category(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let app = context.app()?;
    match subcommand(args, &["add", "list"])? {
        "add" => {
            let name = required(args, 1, "NAME")?;
            let description = rest(args, 2);
            let now = app.clock().now();
            app.update_ledger(|ledger| CategoryService::add(ledger, name, &description, now))?;
            output::success(format!("Category `{}` added", name.trim()));
        }
        _ => {
            let ledger = app.load_ledger()?;
            output::section("Categories");
            let categories = CategoryService::list(&ledger);
            if categories.is_empty() {
                output::info("No categories yet");
            }
            for category in categories {
                if category.description.is_empty() {
                    output::info(&category.name);
                } else {
                    output::info(format!("{} ({})", category.name, category.description));
                }
            }
        }
    }
    Ok(())
}

fn cmd_txn(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let app = context.app()?;
    subcommand(args, &["add"])?;
    let key = required(args, 1, "CATEGORY")?;
    let amount = parse_amount(required(args, 2, "AMOUNT")?)?;
    let now = app.clock().now();
    let date = match args.get(3) {
        Some(raw) => parse_date(raw)?,
        None => now.date_naive(),
    };
    let description = rest(args, 4);
    app.update_ledger(|ledger| {
        let category_id = CategoryService::resolve(ledger, key)?;
        TransactionService::add(ledger, category_id, amount, date, &description, now)
    })?;
    output::success(format!(
        "Recorded {} in `{}` on {}",
        app.formatter().format_amount(amount),
        key,
        date
    ));
    Ok(())
}

fn cmd_limit(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let app = context.app()?;
    subcommand(args, &["set"])?;
    let key = required(args, 1, "CATEGORY")?;
    let limit = parse_amount(required(args, 2, "AMOUNT")?)?;
    if limit <= 0.0 {
        return Err(AppError::Input("limit must be greater than zero".into()));
    }
    let now = app.clock().now();
    let period = match args.get(3) {
        Some(raw) => parse_period(raw)?,
        None => Period::containing(now.date_naive()),
    };
    app.update_ledger(|ledger| {
        let category_id = CategoryService::resolve(ledger, key)?;
        LimitService::set(ledger, category_id, limit, period, now)
    })?;
    output::success(format!(
        "Limit for `{}` in {} set to {}",
        key,
        period,
        app.formatter().format_amount(limit)
    ));
    Ok(())
}

fn cmd_income(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let app = context.app()?;
    subcommand(args, &["add"])?;
    let amount = parse_amount(required(args, 1, "AMOUNT")?)?;
    let now = app.clock().now();
    let period = match args.get(2) {
        Some(raw) => parse_period(raw)?,
        None => Period::containing(now.date_naive()),
    };
    let description = rest(args, 3);
    app.update_ledger(|ledger| {
        PlanningService::add_income(ledger, amount, period, &description, now)
    })?;
    output::success(format!(
        "Planned income of {} for {}",
        app.formatter().format_amount(amount),
        period
    ));
    Ok(())
}

fn cmd_expense(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let app = context.app()?;
    subcommand(args, &["plan"])?;
    let key = required(args, 1, "CATEGORY")?;
    let amount = parse_amount(required(args, 2, "AMOUNT")?)?;
    let planned_date = parse_date(required(args, 3, "DATE")?)?;
    let description = rest(args, 4);
    let now = app.clock().now();
    app.update_ledger(|ledger| {
        let category_id = CategoryService::resolve(ledger, key)?;
        PlanningService::add_expense(ledger, category_id, amount, planned_date, &description, now)
    })?;
    output::success(format!(
        "Planned {} in `{}` for {}",
        app.formatter().format_amount(amount),
        key,
        planned_date
    ));
    Ok(())
}
