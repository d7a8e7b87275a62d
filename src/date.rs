//! Splits ISO dates into the three parts legal forms print in separate
//! blanks: "this the 5 day of March 20 24".

use chrono::{Datelike, NaiveDate};

/// Day, English month name and two-digit year of a date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateParts {
    /// Day of month without padding.
    pub day: String,
    pub month: String,
    pub year2: String,
}

/// Parse `YYYY-MM-DD`.
///
/// Empty or unparsable input yields three empty parts so the form still
/// renders with blank underlines.
pub fn split(iso_date: &str) -> DateParts {
    let trimmed = iso_date.trim();
    if trimmed.is_empty() {
        return DateParts::default();
    }

    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => DateParts {
            day: date.day().to_string(),
            month: date.format("%B").to_string(),
            year2: format!("{:02}", date.year().rem_euclid(100)),
        },
        Err(e) => {
            tracing::warn!(value = trimmed, error = %e, "unparsable date left blank");
            DateParts::default()
        }
    }
}
