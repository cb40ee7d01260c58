use chrono::{DateTime, Utc};

use bw_core::{CheckReport, NotificationService, StoreError};
use bw_domain::NotificationKind;

use crate::cli::{context::CliContext, output, registry::CommandEntry};
use crate::errors::CommandResult;

type Check = fn(&NotificationService, DateTime<Utc>) -> Result<CheckReport, StoreError>;

pub(super) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "check-limits",
            "Notify about categories at 80% or more of this month's limit",
            "check-limits",
            cmd_check_limits,
        ),
        CommandEntry::new(
            "check-reminder",
            "Remind when nothing has been logged today",
            "check-reminder",
            cmd_check_reminder,
        ),
        CommandEntry::new(
            "check-income",
            "Remind when no income is planned for this month",
            "check-income",
            cmd_check_income,
        ),
        CommandEntry::new(
            "check-all",
            "Run every check",
            "check-all",
            cmd_check_all,
        ),
    ]
}

fn cmd_check_limits(context: &mut CliContext, _args: &[&str]) -> CommandResult {
    run_check(context, "Limit check", NotificationService::check_limit_warnings)
}

fn cmd_check_reminder(context: &mut CliContext, _args: &[&str]) -> CommandResult {
    run_check(context, "Daily reminder", NotificationService::check_daily_reminder)
}

fn cmd_check_income(context: &mut CliContext, _args: &[&str]) -> CommandResult {
    run_check(context, "Income reminder", NotificationService::check_income_reminder)
}

fn cmd_check_all(context: &mut CliContext, _args: &[&str]) -> CommandResult {
    run_check(context, "All checks", NotificationService::check_all)
}

fn run_check(context: &mut CliContext, title: &str, check: Check) -> CommandResult {
    let app = context.app()?;
    let service = app.notification_service();
    let report = check(&service, app.clock().now())?;
    print_report(title, &report);
    Ok(())
}

fn print_report(title: &str, report: &CheckReport) {
    output::section(title);
    if report.is_empty() {
        output::success("Nothing to report");
        return;
    }
    for notification in &report.delivered {
        let line = format!("{}: {}", notification.title, notification.message);
        match notification.kind {
            NotificationKind::LimitWarning | NotificationKind::LimitExceeded => {
                output::warning(line)
            }
            NotificationKind::DailyReminder | NotificationKind::IncomeReminder => {
                output::info(line)
            }
        }
    }
    if report.failed > 0 {
        output::warning(format!(
            "{} of {} notifications could not be emitted",
            report.failed, report.requested
        ));
    }
}
