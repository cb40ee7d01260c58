//! Calendar-month budgeting periods.

use std::{fmt, str::FromStr};

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A `(month, year)` pair identifying a calendar-month budgeting window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(month: u32, year: i32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(PeriodError::OutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// Returns the period the supplied date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next()
            .first_day()
            .checked_sub_signed(Duration::days(1))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    /// Parses `YYYY-MM`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let raw = value.trim();
        let (year, month) = raw
            .split_once('-')
            .ok_or_else(|| PeriodError::Malformed(raw.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| PeriodError::Malformed(raw.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodError::Malformed(raw.to_string()))?;
        Self::new(month, year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors that can occur when constructing [`Period`] values.
pub enum PeriodError {
    InvalidMonth(u32),
    OutOfRange(i32),
    Malformed(String),
}

impl fmt::Display for PeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodError::InvalidMonth(month) => {
                write!(f, "month must be between 1 and 12, got {month}")
            }
            PeriodError::OutOfRange(year) => write!(f, "year {year} is out of range"),
            PeriodError::Malformed(raw) => write!(f, "expected YYYY-MM, got `{raw}`"),
        }
    }
}

impl std::error::Error for PeriodError {}
