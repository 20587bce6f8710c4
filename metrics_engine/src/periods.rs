//! Period label parsing and monthly continuation
//!
//! Period labels are free-form strings. The formats below are recognised so
//! forecasts can continue the calendar and the quality assessor can measure
//! data age; anything else is treated as an opaque label.

use chrono::{Datelike, Months, NaiveDate};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Recognised shape of a period label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodFormat {
    /// `2024-03`
    YearMonth(NaiveDate),
    /// `2024-03-15`
    YearMonthDay(NaiveDate),
    /// `Mar 2024` or `March 2024`
    MonthNameYear(NaiveDate),
    /// `Mar` or `March`, zero-based month index
    MonthName(u32),
    /// Anything else
    Opaque,
}

impl PeriodFormat {
    /// Classify a period label
    pub fn parse(label: &str) -> Self {
        let label = label.trim();

        if let Ok(date) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
            return PeriodFormat::YearMonthDay(date);
        }
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", label), "%Y-%m-%d") {
            return PeriodFormat::YearMonth(date);
        }
        for pattern in ["%d %b %Y", "%d %B %Y"] {
            if let Ok(date) = NaiveDate::parse_from_str(&format!("01 {}", label), pattern) {
                return PeriodFormat::MonthNameYear(date);
            }
        }
        if let Some(month) = month_index(label) {
            return PeriodFormat::MonthName(month);
        }

        PeriodFormat::Opaque
    }

    /// Calendar date of the label, when it names a specific month
    ///
    /// Month-only labels map to the first day of the month.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            PeriodFormat::YearMonth(date)
            | PeriodFormat::YearMonthDay(date)
            | PeriodFormat::MonthNameYear(date) => Some(*date),
            PeriodFormat::MonthName(_) | PeriodFormat::Opaque => None,
        }
    }
}

fn month_index(label: &str) -> Option<u32> {
    let lower = label.to_lowercase();
    MONTH_ABBREVIATIONS
        .iter()
        .zip(MONTH_NAMES.iter())
        .position(|(abbr, name)| lower == abbr.to_lowercase() || lower == name.to_lowercase())
        .map(|i| i as u32)
}

/// Parse a period label into a calendar date, if it carries a year
pub fn parse_period_date(label: &str) -> Option<NaiveDate> {
    PeriodFormat::parse(label).date()
}

/// Labels for the `count` periods following `last`
///
/// Recognised formats continue month by month in the same format. Unknown
/// labels, or no label at all, yield `Next 1`, `Next 2`, ...
pub fn next_period_labels(last: Option<&str>, count: usize) -> Vec<String> {
    let format = last.map(PeriodFormat::parse).unwrap_or(PeriodFormat::Opaque);

    (1..=count)
        .map(|step| match format {
            PeriodFormat::YearMonth(date) => add_months(date, step).format("%Y-%m").to_string(),
            PeriodFormat::YearMonthDay(date) => add_months(first_of_month(date), step)
                .format("%Y-%m-%d")
                .to_string(),
            PeriodFormat::MonthNameYear(date) => {
                add_months(date, step).format("%b %Y").to_string()
            }
            PeriodFormat::MonthName(month) => {
                MONTH_ABBREVIATIONS[(month as usize + step) % 12].to_string()
            }
            PeriodFormat::Opaque => format!("Next {}", step),
        })
        .collect()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn add_months(date: NaiveDate, months: usize) -> NaiveDate {
    date.checked_add_months(Months::new(months as u32))
        .unwrap_or(NaiveDate::MAX)
}
