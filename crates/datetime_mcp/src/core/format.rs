use crate::core::error::{DateTimeServerError, DateTimeServerResult};
use crate::core::models::DateTimeResult;
use crate::core::utils::{DATE_FORMAT, HUMAN_FORMAT, ISO8601_FORMAT, TIME_FORMAT};
use crate::core::zone::ZonedInstant;

/// Output shape for [`format_instant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatMode {
    /// Every field: date, time, zone, ISO 8601, Unix timestamp, prose.
    #[default]
    Full,
    /// Day of week plus the ISO 8601 string.
    Iso8601,
    /// Day of week plus the Unix timestamp.
    Unix,
    /// Day of week plus the human-readable sentence.
    Human,
}

impl FormatMode {
    /// Parse a caller-supplied format selector. Absent or empty selects
    /// [`FormatMode::Full`].
    pub fn parse(value: Option<&str>) -> DateTimeServerResult<Self> {
        match value.map(str::trim) {
            None | Some("") | Some("full") => Ok(FormatMode::Full),
            Some("iso8601") => Ok(FormatMode::Iso8601),
            Some("unix") => Ok(FormatMode::Unix),
            Some("human") => Ok(FormatMode::Human),
            Some(other) => Err(DateTimeServerError::InvalidFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// Render a resolved instant into the requested output shape.
///
/// Day-of-week leads in every mode.
pub fn format_instant(instant: &ZonedInstant, mode: FormatMode) -> DateTimeResult {
    let datetime = instant.datetime();
    let mut result = DateTimeResult {
        day_of_week: instant.day_of_week(),
        date: None,
        time: None,
        timezone: None,
        utc_offset: None,
        iso8601: None,
        unix_timestamp: None,
        human_readable: None,
    };

    match mode {
        FormatMode::Full => {
            result.date = Some(datetime.format(DATE_FORMAT).to_string());
            result.time = Some(datetime.format(TIME_FORMAT).to_string());
            result.timezone = Some(instant.abbreviation().to_string());
            result.utc_offset = Some(instant.utc_offset());
            result.iso8601 = Some(datetime.format(ISO8601_FORMAT).to_string());
            result.unix_timestamp = Some(datetime.timestamp());
            result.human_readable = Some(datetime.format(HUMAN_FORMAT).to_string());
        }
        FormatMode::Iso8601 => {
            result.iso8601 = Some(datetime.format(ISO8601_FORMAT).to_string());
        }
        FormatMode::Unix => {
            result.unix_timestamp = Some(datetime.timestamp());
        }
        FormatMode::Human => {
            result.human_readable = Some(datetime.format(HUMAN_FORMAT).to_string());
        }
    }

    result
}
