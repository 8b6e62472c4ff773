// src/tdnet/date.rs
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

use crate::utils::AppError;

// Date-only shapes accepted on the command line, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y%m%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Zero-padded date parts used in listing URLs and output file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureDate {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl DisclosureDate {
    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            year: format!("{:04}", date.year()),
            month: format!("{:02}", date.month()),
            day: format!("{:02}", date.day()),
        }
    }

    /// `yyyyMMdd`, as embedded in listing page names.
    pub fn compact(&self) -> String {
        format!("{}{}{}", self.year, self.month, self.day)
    }

    /// `yyyy-MM-dd`
    pub fn dashed(&self) -> String {
        format!("{}-{}-{}", self.year, self.month, self.day)
    }
}

/// Turns the optional command-line date into a [`DisclosureDate`].
/// `None` means today in the local timezone.
pub fn parse_date_arg(raw: Option<&str>) -> Result<DisclosureDate, AppError> {
    let date = match raw {
        None => Local::now().date_naive(),
        Some(input) => parse_calendar_date(input)
            .ok_or_else(|| AppError::InvalidDateFormat(input.to_string()))?,
    };
    Ok(DisclosureDate::from_naive(date))
}

fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
    {
        return Some(date);
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Some(dt.date());
    }

    // Offset-carrying timestamps are read in local time, like the rest of the tool.
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.with_timezone(&Local).date_naive())
}
