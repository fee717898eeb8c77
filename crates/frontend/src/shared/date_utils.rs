/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application

use chrono::{DateTime, Utc};
use contracts::domain::common::wire_date;

/// Format a datetime as "Aug 05, 2025".
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%b %d, %Y").to_string()
}

/// Format a datetime as "Aug 05, 2025 12:30".
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%b %d, %Y %H:%M").to_string()
}

/// Format a raw backend datetime string, passing it through unchanged when
/// it does not parse.
pub fn format_wire_date(value: &str) -> String {
    match wire_date::parse(value) {
        Some(dt) => format_date(&dt),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DateTime<Utc> {
        wire_date::parse("2025-08-05T12:30:00").unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&sample()), "Aug 05, 2025");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(&sample()), "Aug 05, 2025 12:30");
    }

    #[test]
    fn test_format_wire_date() {
        assert_eq!(
            format_wire_date("Tue, 05 Aug 2025 12:30:00 GMT"),
            "Aug 05, 2025"
        );
        assert_eq!(format_wire_date("not a date"), "not a date");
    }
}
