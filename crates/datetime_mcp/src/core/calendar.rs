use chrono::{Datelike, NaiveDate, Weekday};

use crate::core::error::{DateTimeServerError, DateTimeServerResult};

/// Gregorian leap-year rule: divisible by 4, except centuries not divisible
/// by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Validate a caller-supplied month number.
pub fn checked_month(month: i64) -> DateTimeServerResult<u32> {
    if (1..=12).contains(&month) {
        Ok(month as u32)
    } else {
        Err(DateTimeServerError::InvalidMonth { month })
    }
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: i64) -> DateTimeServerResult<u32> {
    let month = checked_month(month)?;
    Ok(match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    })
}

/// First and last calendar day of the given month.
pub fn month_bounds(year: i32, month: i64) -> DateTimeServerResult<(NaiveDate, NaiveDate)> {
    let days = days_in_month(year, month)?;
    let month = month as u32;
    let out_of_range = || DateTimeServerError::InvalidDateFormat {
        date: format!("{year}-{month:02}"),
    };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
    let last = NaiveDate::from_ymd_opt(year, month, days).ok_or_else(out_of_range)?;
    Ok((first, last))
}

/// ISO-8601 week number and week-year.
///
/// Weeks start on Monday; week 1 is the week containing the year's first
/// Thursday, so the week-year can differ from the calendar year near Jan 1
/// and Dec 31.
pub fn iso_week(date: NaiveDate) -> (u32, i32) {
    let week = date.iso_week();
    (week.week(), week.year())
}

/// Simple week-of-year count: `(day_of_year - 1) / 7 + 1`.
///
/// Distinct from [`iso_week`]; week 1 always starts on Jan 1 here.
pub fn week_of_year(date: NaiveDate) -> u32 {
    (date.ordinal() - 1) / 7 + 1
}

/// 1-indexed day of the year.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Days from `date` to Dec 31 of the same year.
pub fn days_remaining_in_year(date: NaiveDate) -> i64 {
    let last = NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date);
    (last - date).num_days()
}

/// Calendar quarter (1-4) of the given month.
pub fn quarter(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
