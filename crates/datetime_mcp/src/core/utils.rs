use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

use crate::core::error::{DateTimeServerError, DateTimeServerResult};
use crate::core::zone::ResolvedZone;

// Constants for format strings
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";
pub const OFFSET_FORMAT: &str = "%z";
pub const DAY_FORMAT: &str = "%A";
pub const MONTH_NAME_FORMAT: &str = "%B";
pub const HUMAN_FORMAT: &str = "%A, %B %d, %Y at %I:%M %p";

/// Naive datetime formats accepted for caller-supplied dates, tried in order.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Available resource URIs for the DateTime MCP Server
pub const AVAILABLE_RESOURCES: &[&str] = &[
    "datetime://status",
    "datetime://help",
    "datetime://timezones",
];

/// Parse a caller-supplied date or datetime without timezone information.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS`, and bare
/// `YYYY-MM-DD` (interpreted as midnight).
pub fn parse_naive_datetime(value: &str) -> Option<NaiveDateTime> {
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime);
        }
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()?
        .and_hms_opt(0, 0, 0)
}

/// Parse a caller-supplied instant, resolving naive forms against `zone`.
///
/// RFC 3339 strings keep their own offset; naive strings are interpreted as
/// wall-clock time in `zone`.
pub fn parse_instant(
    value: &str,
    zone: &ResolvedZone,
) -> DateTimeServerResult<DateTime<FixedOffset>> {
    let value = value.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime);
    }
    let naive = parse_naive_datetime(value).ok_or_else(|| DateTimeServerError::InvalidDateFormat {
        date: value.to_string(),
    })?;
    Ok(zone.from_wall_clock(&naive, value)?.datetime())
}

/// Format a time difference in hours
///
/// # Arguments
///
/// * `hours_difference` - The time difference in hours
///
/// # Returns
///
/// A formatted string representing the time difference
pub fn format_time_difference(hours_difference: f64) -> String {
    match hours_difference.fract() {
        0.0 => format!("{:+.0}h", hours_difference),
        _ => {
            let formatted = format!("{:+}", hours_difference);
            let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
            format!("{}h", trimmed)
        }
    }
}

/// Calculate the UTC-offset difference between two resolved instants
///
/// # Arguments
///
/// * `source_time` - The source time
/// * `target_time` - The target time
///
/// # Returns
///
/// A formatted string representing the time difference
pub fn calculate_time_difference(
    source_time: &DateTime<FixedOffset>,
    target_time: &DateTime<FixedOffset>,
) -> String {
    let source_offset = source_time.offset().local_minus_utc();
    let target_offset = target_time.offset().local_minus_utc();
    let hours_difference = (target_offset - source_offset) as f64 / 3600.0;

    format_time_difference(hours_difference)
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::{format_time_difference, parse_instant, parse_naive_datetime};
    use crate::core::zone::{self, ResolvedZone};

    #[test]
    fn test_parse_naive_datetime_formats() {
        let datetime = parse_naive_datetime("2026-02-02T15:04:05").unwrap();
        assert_eq!(datetime.hour(), 15);

        let datetime = parse_naive_datetime("2026-02-02 15:04:05").unwrap();
        assert_eq!(datetime.minute(), 4);

        // Bare dates parse as midnight
        let datetime = parse_naive_datetime("2026-02-02").unwrap();
        assert_eq!(datetime.hour(), 0);
        assert_eq!(datetime.second(), 0);
    }

    #[test]
    fn test_parse_naive_datetime_rejects_garbage() {
        assert!(parse_naive_datetime("02/10/2026").is_none());
        assert!(parse_naive_datetime("next tuesday").is_none());
        assert!(parse_naive_datetime("2026-13-01").is_none());
    }

    #[test]
    fn test_parse_instant_keeps_rfc3339_offset() {
        let zone = zone::resolve(Some("UTC")).unwrap();
        let instant = parse_instant("2026-02-02T15:04:05-05:00", &zone).unwrap();
        assert_eq!(instant.offset().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn test_parse_instant_localizes_naive_input() {
        let zone = ResolvedZone::Named(chrono_tz::America::New_York);
        let instant = parse_instant("2026-02-02 15:04:05", &zone).unwrap();
        // February in New York is EST (UTC-5)
        assert_eq!(instant.offset().local_minus_utc(), -5 * 3600);
        assert_eq!(instant.hour(), 15);
    }

    #[test]
    fn test_format_time_difference() {
        // Test whole hours (formatted without decimal)
        assert_eq!(format_time_difference(5.0), "+5h");
        assert_eq!(format_time_difference(-3.0), "-3h");

        // Test fractional hours
        assert_eq!(format_time_difference(5.5), "+5.5h");
        assert_eq!(format_time_difference(-2.75), "-2.75h");

        // Test Nepal timezone (UTC+5:45)
        assert_eq!(format_time_difference(5.75), "+5.75h");
    }
}
