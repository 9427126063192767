use chrono::{DateTime, FixedOffset};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
// Months and years are fixed-size approximations (30 and 365 days). The
// phrase is a rough description, not calendar-exact: a 31-day gap reads as
// "1 month". Callers needing exact values use the accompanying
// `days_difference` and `total_seconds` fields.
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Signed duration between two instants plus its natural-language phrasing.
#[derive(Debug, Clone)]
pub struct DurationPhrase {
    /// Phrase like "in 2 weeks", "3 days ago", or "just now".
    pub relative: String,
    /// Exact signed seconds (positive when the target is in the future).
    pub total_seconds: i64,
    /// Signed whole days by calendar-date subtraction.
    pub days_difference: i64,
}

/// Compute the signed duration from `reference` to `target` and phrase it.
pub fn phrase_between(
    target: &DateTime<FixedOffset>,
    reference: &DateTime<FixedOffset>,
) -> DurationPhrase {
    let total_seconds = target.signed_duration_since(reference).num_seconds();
    let days_difference = (target.date_naive() - reference.date_naive()).num_days();

    let abs_seconds = total_seconds.abs();
    let relative = if abs_seconds < MINUTE {
        "just now".to_string()
    } else if total_seconds > 0 {
        format!("in {}", describe(abs_seconds))
    } else {
        format!("{} ago", describe(abs_seconds))
    };

    DurationPhrase {
        relative,
        total_seconds,
        days_difference,
    }
}

/// Pick the best-fit unit for a positive duration.
fn describe(abs_seconds: i64) -> String {
    let (count, unit) = if abs_seconds < HOUR {
        (abs_seconds / MINUTE, "minute")
    } else if abs_seconds < DAY {
        (abs_seconds / HOUR, "hour")
    } else if abs_seconds < WEEK {
        (abs_seconds / DAY, "day")
    } else if abs_seconds < MONTH {
        (abs_seconds / WEEK, "week")
    } else if abs_seconds < YEAR {
        (abs_seconds / MONTH, "month")
    } else {
        (abs_seconds / YEAR, "year")
    };

    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset};

    use super::{DurationPhrase, phrase_between};

    fn instant(value: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(value).unwrap()
    }

    fn phrase(target: &str, reference: &str) -> DurationPhrase {
        phrase_between(&instant(target), &instant(reference))
    }

    #[test]
    fn test_sub_minute_is_just_now() {
        let result = phrase("2026-02-03T12:00:30+00:00", "2026-02-03T12:00:00+00:00");
        assert_eq!(result.relative, "just now");
        assert_eq!(result.total_seconds, 30);

        let result = phrase("2026-02-03T12:00:00+00:00", "2026-02-03T12:00:00+00:00");
        assert_eq!(result.relative, "just now");
        assert_eq!(result.total_seconds, 0);
    }

    #[test]
    fn test_minutes_and_hours() {
        let result = phrase("2026-02-03T12:01:30+00:00", "2026-02-03T12:00:00+00:00");
        assert_eq!(result.relative, "in 1 minute");

        let result = phrase("2026-02-03T11:15:00+00:00", "2026-02-03T12:00:00+00:00");
        assert_eq!(result.relative, "45 minutes ago");

        let result = phrase("2026-02-03T14:00:00+00:00", "2026-02-03T12:00:00+00:00");
        assert_eq!(result.relative, "in 2 hours");
    }

    #[test]
    fn test_days_and_weeks() {
        let result = phrase("2026-02-06T12:00:00+00:00", "2026-02-03T12:00:00+00:00");
        assert_eq!(result.relative, "in 3 days");
        assert_eq!(result.days_difference, 3);

        let result = phrase("2026-02-10T00:00:00+00:00", "2026-02-03T00:00:00+00:00");
        assert_eq!(result.relative, "in 1 week");
        assert_eq!(result.total_seconds, 604_800);
        assert_eq!(result.days_difference, 7);

        // 29 days is still phrased in weeks
        let result = phrase("2026-03-04T12:00:00+00:00", "2026-02-03T12:00:00+00:00");
        assert_eq!(result.relative, "in 4 weeks");
    }

    #[test]
    fn test_month_and_year_approximation() {
        // 45 days reads as 1 month under the 30-day approximation
        let result = phrase("2026-03-20T12:00:00+00:00", "2026-02-03T12:00:00+00:00");
        assert_eq!(result.relative, "in 1 month");

        // 730 days is exactly 2 approximate years
        let result = phrase("2024-02-03T12:00:00+00:00", "2026-02-03T12:00:00+00:00");
        assert_eq!(result.relative, "2 years ago");
        assert_eq!(result.days_difference, -731);
    }

    #[test]
    fn test_antisymmetry() {
        let forward = phrase("2026-02-10T00:00:00+00:00", "2026-02-03T00:00:00+00:00");
        let backward = phrase("2026-02-03T00:00:00+00:00", "2026-02-10T00:00:00+00:00");

        assert_eq!(forward.total_seconds, -backward.total_seconds);
        assert_eq!(forward.days_difference, -backward.days_difference);
        assert_eq!(forward.relative, "in 1 week");
        assert_eq!(backward.relative, "1 week ago");
    }

    #[test]
    fn test_days_difference_uses_calendar_dates() {
        // 20 hours apart, but the calendar dates differ by one day
        let result = phrase("2026-02-04T06:00:00+00:00", "2026-02-03T10:00:00+00:00");
        assert_eq!(result.relative, "in 20 hours");
        assert_eq!(result.days_difference, 1);
    }
}
