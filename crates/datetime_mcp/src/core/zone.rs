use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::core::error::{DateTimeServerError, DateTimeServerResult};
use crate::core::utils::{DAY_FORMAT, OFFSET_FORMAT};

/// A timezone resolved from caller input.
///
/// Either a named IANA zone with full DST rules, or a fixed numeric UTC
/// offset. Resolution happens fresh on every call; nothing is cached across
/// calls (the host zone and DST rules may differ between calls).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedZone {
    /// A named zone from the IANA database (e.g. `America/New_York`).
    Named(Tz),
    /// A fixed numeric offset (e.g. `+05:30`).
    Fixed(FixedOffset),
}

/// An absolute point in time carrying its resolved offset and zone labels.
#[derive(Debug, Clone)]
pub struct ZonedInstant {
    datetime: DateTime<FixedOffset>,
    zone_name: String,
    abbreviation: String,
}

/// Resolve a caller-supplied timezone string.
///
/// Absent or empty input resolves to the host's local zone; otherwise the
/// input must be an IANA zone name or a fixed offset in `±HH:MM` / `±HHMM`
/// form.
pub fn resolve(spec: Option<&str>) -> DateTimeServerResult<ResolvedZone> {
    match spec.map(str::trim) {
        None | Some("") => Ok(ResolvedZone::Named(detect_local_timezone())),
        Some(name) => {
            if let Some(offset) = parse_fixed_offset(name) {
                return Ok(ResolvedZone::Fixed(offset));
            }
            Tz::from_str(name).map(ResolvedZone::Named).map_err(|_| {
                DateTimeServerError::InvalidTimezone {
                    timezone: name.to_string(),
                }
            })
        }
    }
}

/// Detect the host's local timezone, falling back to UTC.
pub fn detect_local_timezone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(tz_name) => match tz_name.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                tracing::warn!("Could not parse timezone '{}', defaulting to UTC", tz_name);
                chrono_tz::UTC
            }
        },
        Err(_) => {
            tracing::warn!("Could not detect system timezone, defaulting to UTC");
            chrono_tz::UTC
        }
    }
}

/// Parse a fixed numeric offset (`+05:30`, `-0800`). Returns `None` for
/// anything else so IANA lookup can run.
fn parse_fixed_offset(spec: &str) -> Option<FixedOffset> {
    let (sign, rest) = match spec.chars().next()? {
        '+' => (1, &spec[1..]),
        '-' => (-1, &spec[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl ResolvedZone {
    /// Canonical display name: the IANA name, or the offset itself.
    pub fn name(&self) -> String {
        match self {
            ResolvedZone::Named(tz) => tz.to_string(),
            ResolvedZone::Fixed(offset) => offset.to_string(),
        }
    }

    /// Project an absolute UTC instant into this zone.
    pub fn instant_at(&self, utc: DateTime<Utc>) -> ZonedInstant {
        match self {
            ResolvedZone::Named(tz) => {
                let datetime = utc.with_timezone(tz);
                ZonedInstant {
                    abbreviation: datetime.format("%Z").to_string(),
                    zone_name: tz.to_string(),
                    datetime: datetime.fixed_offset(),
                }
            }
            ResolvedZone::Fixed(offset) => {
                let datetime = utc.with_timezone(offset);
                ZonedInstant {
                    abbreviation: datetime.format("%Z").to_string(),
                    zone_name: offset.to_string(),
                    datetime,
                }
            }
        }
    }

    /// Interpret a naive wall-clock time in this zone.
    ///
    /// Wall-clock times that are skipped or repeated by a DST transition do
    /// not map to a single instant and are rejected. `raw` is the caller's
    /// original input, used in the error.
    pub fn from_wall_clock(
        &self,
        naive: &NaiveDateTime,
        raw: &str,
    ) -> DateTimeServerResult<ZonedInstant> {
        let ambiguous = || DateTimeServerError::AmbiguousTime {
            time: raw.to_string(),
        };
        match self {
            ResolvedZone::Named(tz) => {
                let datetime = tz.from_local_datetime(naive).single().ok_or_else(ambiguous)?;
                Ok(ZonedInstant {
                    abbreviation: datetime.format("%Z").to_string(),
                    zone_name: tz.to_string(),
                    datetime: datetime.fixed_offset(),
                })
            }
            ResolvedZone::Fixed(offset) => {
                let datetime = offset
                    .from_local_datetime(naive)
                    .single()
                    .ok_or_else(ambiguous)?;
                Ok(ZonedInstant {
                    abbreviation: datetime.format("%Z").to_string(),
                    zone_name: offset.to_string(),
                    datetime,
                })
            }
        }
    }
}

impl ZonedInstant {
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.datetime
    }

    /// Zone display name (e.g. `America/New_York` or `+05:30`).
    pub fn zone_name(&self) -> &str {
        &self.zone_name
    }

    /// Zone abbreviation at this instant (e.g. `EST`, or the offset for
    /// fixed-offset zones).
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    pub fn day_of_week(&self) -> String {
        self.datetime.format(DAY_FORMAT).to_string()
    }

    /// Signed UTC offset in `±HHMM` form.
    pub fn utc_offset(&self) -> String {
        self.datetime.format(OFFSET_FORMAT).to_string()
    }
}
