use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::core::{
    calendar,
    error::{DateTimeServerError, DateTimeServerResult},
    format::{self, FormatMode},
    models::{
        ConversionEndpoint, DateTimeResult, DaysInMonthResult, RelativeTimeResult,
        TimeConversionResult, WeekYearResult,
    },
    relative, utils,
    zone::{self, ZonedInstant},
};

/// DateTime server implementation.
///
/// Stateless: every operation resolves timezones fresh and reads the clock
/// once at the call boundary. The `*_at` siblings take the current instant
/// explicitly so tests can pin it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeServer;

impl DateTimeServer {
    pub fn new() -> Self {
        Self
    }

    /// Current date and time in a timezone, shaped by the requested format.
    pub fn get_datetime(
        &self,
        tz: Option<&str>,
        format: Option<&str>,
    ) -> DateTimeServerResult<DateTimeResult> {
        self.get_datetime_at(Utc::now(), tz, format)
    }

    pub(crate) fn get_datetime_at(
        &self,
        now: DateTime<Utc>,
        tz: Option<&str>,
        format: Option<&str>,
    ) -> DateTimeServerResult<DateTimeResult> {
        let zone = zone::resolve(tz)?;
        let mode = FormatMode::parse(format)?;
        Ok(format::format_instant(&zone.instant_at(now), mode))
    }

    /// Relative-time description between a target date and a reference
    /// (defaulting to now).
    pub fn relative_time(
        &self,
        target: &str,
        reference: Option<&str>,
    ) -> DateTimeServerResult<RelativeTimeResult> {
        self.relative_time_at(Utc::now(), target, reference)
    }

    pub(crate) fn relative_time_at(
        &self,
        now: DateTime<Utc>,
        target: &str,
        reference: Option<&str>,
    ) -> DateTimeServerResult<RelativeTimeResult> {
        // Naive operands are wall-clock times in the host zone
        let local = zone::resolve(None)?;
        let target_datetime = utils::parse_instant(target, &local)?;
        let (reference_datetime, reference_label) = match reference {
            Some(value) if !value.trim().is_empty() => {
                (utils::parse_instant(value, &local)?, value.to_string())
            }
            _ => (local.instant_at(now).datetime(), "now".to_string()),
        };

        let phrase = relative::phrase_between(&target_datetime, &reference_datetime);

        Ok(RelativeTimeResult {
            target: target.to_string(),
            target_day_of_week: target_datetime.format(utils::DAY_FORMAT).to_string(),
            reference: reference_label,
            relative: phrase.relative,
            days_difference: phrase.days_difference,
            total_seconds: phrase.total_seconds,
        })
    }

    /// Calendar facts about a month, defaulting to the current one.
    pub fn days_in_month(
        &self,
        year: Option<i32>,
        month: Option<i64>,
    ) -> DateTimeServerResult<DaysInMonthResult> {
        self.days_in_month_at(Utc::now(), year, month)
    }

    pub(crate) fn days_in_month_at(
        &self,
        now: DateTime<Utc>,
        year: Option<i32>,
        month: Option<i64>,
    ) -> DateTimeServerResult<DaysInMonthResult> {
        let today = zone::resolve(None)?.instant_at(now).datetime().date_naive();
        let year = year.unwrap_or_else(|| today.year());
        let month = month.unwrap_or_else(|| today.month() as i64);

        let days = calendar::days_in_month(year, month)?;
        let (first, last) = calendar::month_bounds(year, month)?;

        Ok(DaysInMonthResult {
            year,
            month: month as u32,
            month_name: first.format(utils::MONTH_NAME_FORMAT).to_string(),
            days_in_month: days,
            first_day: first.format(utils::DATE_FORMAT).to_string(),
            first_day_of_week: first.format(utils::DAY_FORMAT).to_string(),
            last_day: last.format(utils::DATE_FORMAT).to_string(),
            last_day_of_week: last.format(utils::DAY_FORMAT).to_string(),
            is_leap_year: calendar::is_leap_year(year),
        })
    }

    /// Convert a wall-clock time from one timezone to another.
    pub fn convert_time(
        &self,
        time: &str,
        from_tz: &str,
        to_tz: &str,
    ) -> DateTimeServerResult<TimeConversionResult> {
        let source_zone = zone::resolve(Some(from_tz))?;
        let target_zone = zone::resolve(Some(to_tz))?;

        let naive =
            utils::parse_naive_datetime(time).ok_or_else(|| DateTimeServerError::InvalidDateFormat {
                date: time.to_string(),
            })?;

        let source = source_zone.from_wall_clock(&naive, time)?;
        let target = target_zone.instant_at(source.datetime().with_timezone(&Utc));
        let time_difference =
            utils::calculate_time_difference(&source.datetime(), &target.datetime());

        Ok(TimeConversionResult {
            source: conversion_endpoint(&source),
            target: conversion_endpoint(&target),
            time_difference,
        })
    }

    /// Week-number, day-of-year, and related facts for a date (defaulting to
    /// today in the resolved zone).
    pub fn get_week_year(
        &self,
        date: Option<&str>,
        tz: Option<&str>,
    ) -> DateTimeServerResult<WeekYearResult> {
        self.get_week_year_at(Utc::now(), date, tz)
    }

    pub(crate) fn get_week_year_at(
        &self,
        now: DateTime<Utc>,
        date: Option<&str>,
        tz: Option<&str>,
    ) -> DateTimeServerResult<WeekYearResult> {
        let zone = zone::resolve(tz)?;
        let date = match date.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => NaiveDate::parse_from_str(value, utils::DATE_FORMAT).map_err(|_| {
                DateTimeServerError::InvalidDateFormat {
                    date: value.to_string(),
                }
            })?,
            None => zone.instant_at(now).datetime().date_naive(),
        };

        let (iso_week, iso_year) = calendar::iso_week(date);

        Ok(WeekYearResult {
            date: date.format(utils::DATE_FORMAT).to_string(),
            day_of_week: date.format(utils::DAY_FORMAT).to_string(),
            day_of_week_number: date.weekday().number_from_monday(),
            week_number: calendar::week_of_year(date),
            iso_week,
            iso_year,
            day_of_year: calendar::day_of_year(date),
            days_remaining_in_year: calendar::days_remaining_in_year(date),
            is_weekend: calendar::is_weekend(date),
            quarter: calendar::quarter(date.month()),
        })
    }
}

fn conversion_endpoint(instant: &ZonedInstant) -> ConversionEndpoint {
    ConversionEndpoint {
        day_of_week: instant.day_of_week(),
        datetime: instant.datetime().format(utils::DATETIME_FORMAT).to_string(),
        timezone: instant.zone_name().to_string(),
        utc_offset: instant.utc_offset(),
    }
}
