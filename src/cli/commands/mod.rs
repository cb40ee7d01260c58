//! Command tables and the argument parsing they share.

mod checks;
mod records;
mod reports;
mod system;

use chrono::NaiveDate;

use bw_domain::Period;

use crate::{cli::registry::CommandEntry, AppError};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Every command, in the order `help` lists them.
pub fn all_entries() -> Vec<CommandEntry> {
    let mut entries = system::definitions();
    entries.extend(checks::definitions());
    entries.extend(reports::definitions());
    entries.extend(records::definitions());
    entries
}

pub(crate) fn required<'a>(args: &[&'a str], index: usize, name: &str) -> Result<&'a str, AppError> {
    args.get(index)
        .copied()
        .ok_or_else(|| AppError::Input(format!("missing <{name}>")))
}

pub(crate) fn parse_amount(raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| AppError::Input(format!("`{raw}` is not an amount")))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| AppError::Input(format!("`{raw}` is not a date (expected YYYY-MM-DD)")))
}

pub(crate) fn parse_period(raw: &str) -> Result<Period, AppError> {
    Ok(raw.parse::<Period>()?)
}

/// Remaining words joined into one free-text value.
pub(crate) fn rest(args: &[&str], from: usize) -> String {
    args.iter().skip(from).copied().collect::<Vec<_>>().join(" ")
}
