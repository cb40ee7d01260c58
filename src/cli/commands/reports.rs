use uuid::Uuid;

use bw_core::{CategoryService, CurrencyFormatter};
use bw_domain::{Period, TransactionFilter};

use super::{parse_date, parse_period, required};
use crate::cli::{context::CliContext, output, registry::CommandEntry};
use crate::errors::CommandResult;
use crate::AppError;

pub(super) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Spending against limits for a month",
            "summary [YYYY-MM]",
            cmd_summary,
        ),
        CommandEntry::new(
            "breakdown",
            "Totals per category for a date range",
            "breakdown [--category NAME] [--from YYYY-MM-DD] [--to YYYY-MM-DD]",
            cmd_breakdown,
        ),
        CommandEntry::new(
            "notifications",
            "List stored notifications, newest first",
            "notifications",
            cmd_notifications,
        ),
        CommandEntry::new("read", "Mark a notification as read", "read <ID>", cmd_read),
        CommandEntry::new("stats", "Notification counters", "stats", cmd_stats),
    ]
}

fn cmd_summary(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let app = context.app()?;
    let period = match args.first() {
        Some(raw) => parse_period(raw)?,
        None => Period::containing(app.clock().today()),
    };
    let summary = app.aggregator().monthly_summary(period)?;
    let fmt = app.formatter();

    output::section(format!("Summary {}", summary.period));
    if summary.categories.is_empty() {
        output::info("No categories yet");
        return Ok(());
    }
    for snapshot in &summary.categories {
        let spent = fmt.format_amount(snapshot.spent);
        let line = match (snapshot.limit, snapshot.percentage) {
            (Some(limit), Some(pct)) => format!(
                "{}: {} of {} ({}%)",
                snapshot.category_name,
                spent,
                fmt.format_amount(limit),
                pct
            ),
            _ => format!("{}: {} (no limit)", snapshot.category_name, spent),
        };
        if snapshot.exceeded {
            output::warning(line);
        } else {
            output::info(line);
        }
    }
    output::info(format!("Total: {}", fmt.format_amount(summary.total)));
    Ok(())
}

fn cmd_breakdown(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let app = context.app()?;
    let mut category = None;
    let mut start = None;
    let mut end = None;
    let mut index = 0;
    while index < args.len() {
        let flag = args[index];
        let value = required(args, index + 1, flag.trim_start_matches('-'))?;
        match flag {
            "--category" => {
                let ledger = app.load_ledger()?;
                category = Some(CategoryService::resolve(&ledger, value)?);
            }
            "--from" => start = Some(parse_date(value)?),
            "--to" => end = Some(parse_date(value)?),
            other => return Err(AppError::Input(format!("unknown option `{other}`"))),
        }
        index += 2;
    }
    if let (Some(from), Some(to)) = (start, end) {
        if from > to {
            return Err(AppError::Input("--from must not be after --to".into()));
        }
    }

    let filter = TransactionFilter::new(category, start, end);
    let rows = app.aggregator().category_breakdown(&filter)?;
    let fmt = app.formatter();

    output::section("Breakdown");
    if rows.is_empty() {
        output::info("No categories match");
        return Ok(());
    }
    let table: Vec<(String, String)> = rows
        .iter()
        .map(|row| (row.category_name.clone(), fmt.format_amount(row.total)))
        .collect();
    output::two_column(&table);
    let total: f64 = rows.iter().map(|row| row.total).sum();
    output::info(format!("Total: {}", fmt.format_amount(total)));
    Ok(())
}

fn cmd_notifications(context: &mut CliContext, _args: &[&str]) -> CommandResult {
    let app = context.app()?;
    let all = app.notifications().list()?;
    output::section("Notifications");
    if all.is_empty() {
        output::info("No notifications");
        return Ok(());
    }
    for notification in all {
        let marker = if notification.is_read { " " } else { "*" };
        output::info(format!(
            "{} {} {} {}: {}",
            marker,
            notification.id,
            notification.created_at.format("%Y-%m-%d %H:%M"),
            notification.title,
            notification.message
        ));
    }
    Ok(())
}

fn cmd_read(context: &mut CliContext, args: &[&str]) -> CommandResult {
    let raw = required(args, 0, "ID")?;
    let id = Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::Input(format!("`{raw}` is not a notification id")))?;
    context.app()?.notifications().mark_read(id)?;
    output::success(format!("Notification {id} marked as read"));
    Ok(())
}

fn cmd_stats(context: &mut CliContext, _args: &[&str]) -> CommandResult {
    let stats = context.app()?.notifications().stats()?;
    output::section("Notification stats");
    output::two_column(&[
        ("Unread", stats.unread_count),
        ("Total", stats.total_count),
    ]);
    Ok(())
}
