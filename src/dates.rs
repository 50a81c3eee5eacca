//! Date helpers producing the `yyyy-MM-dd` strings the API expects in query strings
//! and request bodies.
//!
//! Only numeric chrono specifiers are used, so the output never depends on the host
//! locale or timezone.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a calendar date as `yyyy-MM-dd`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

/// Parses a strict `yyyy-MM-dd` string.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let invalid = |reason: String| Error::InvalidDate {
        value: value.to_string(),
        reason,
    };

    // chrono accepts single digit months and days, the API does not
    if value.len() != 10 {
        return Err(invalid(format!("expected 10 characters, got {}", value.len())));
    }

    NaiveDate::parse_from_str(value, API_DATE_FORMAT).map_err(|e| invalid(e.to_string()))
}

/// Extension trait for anything that has a calendar date.
pub trait ApiDate {
    fn to_api_date(&self) -> String;
}

impl ApiDate for NaiveDate {
    fn to_api_date(&self) -> String {
        format_date(*self)
    }
}

impl ApiDate for NaiveDateTime {
    fn to_api_date(&self) -> String {
        format_date(self.date())
    }
}

/// Uses the calendar date in the value's own offset, not the host's.
impl<Tz: TimeZone> ApiDate for DateTime<Tz> {
    fn to_api_date(&self) -> String {
        format_date(self.date_naive())
    }
}

/// Builds the `from_date` / `to_date` query pairs accepted by list endpoints.
/// Unset bounds are left out.
pub fn date_range_query(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<(&'static str, String)> {
    let mut query = Vec::with_capacity(2);
    if let Some(from) = from {
        query.push(("from_date", format_date(from)));
    }
    if let Some(to) = to {
        query.push(("to_date", format_date(to)));
    }
    query
}
