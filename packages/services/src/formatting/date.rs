use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::Serialize;

/// Calendar components of a date in local time. Every field except `year` is
/// a zero-padded two digit string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DateParts {
    pub year: Option<i32>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub hours: Option<String>,
    pub minutes: Option<String>,
    pub seconds: Option<String>,
}

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a date string into local time.
///
/// Offset-qualified input is converted, date-only input is UTC midnight, and
/// date-time input without an offset is taken as local time.
pub fn parse_date(input: &str) -> Option<DateTime<Local>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(date.with_timezone(&Local));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight).with_timezone(&Local));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

pub fn format_date(input: Option<&str>) -> DateParts {
    let Some(date) = input.and_then(parse_date) else {
        if input.is_some_and(|s| !s.trim().is_empty()) {
            tracing::debug!(?input, "unparseable date");
        }
        return DateParts::default();
    };

    DateParts {
        year: Some(date.year()),
        month: Some(format!("{:02}", date.month())),
        day: Some(format!("{:02}", date.day())),
        hours: Some(format!("{:02}", date.hour())),
        minutes: Some(format!("{:02}", date.minute())),
        seconds: Some(format!("{:02}", date.second())),
    }
}
