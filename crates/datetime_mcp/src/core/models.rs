use rmcp::schemars;
use serde::{Deserialize, Deserializer, Serialize};

/// Helper function to deserialize and trim strings
fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}

/// Helper function to deserialize and trim optional strings
fn deserialize_optional_trimmed_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()))
}

/// Request to get the current date and time
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetDatetimeRequest {
    /// IANA timezone name (e.g. 'America/New_York') or fixed offset
    /// (e.g. '+05:30'). Defaults to the server's local timezone.
    #[serde(default, deserialize_with = "deserialize_optional_trimmed_string")]
    pub tz: Option<String>,
    /// Output format: 'iso8601', 'unix', 'human', or omit for the full response
    #[serde(default, deserialize_with = "deserialize_optional_trimmed_string")]
    pub format: Option<String>,
}

/// Request for a relative-time description between two dates
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RelativeTimeRequest {
    /// Target date in YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS format
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub target: String,
    /// Reference date (same formats). Defaults to now
    #[serde(default, deserialize_with = "deserialize_optional_trimmed_string")]
    pub reference: Option<String>,
}

/// Request for the number of days in a month
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DaysInMonthRequest {
    /// Year (e.g. 2025). Defaults to the current year
    #[serde(default)]
    pub year: Option<i32>,
    /// Month (1-12). Defaults to the current month
    #[serde(default)]
    pub month: Option<i64>,
}

/// Request to convert a wall-clock time between timezones
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertTimeRequest {
    /// Time in YYYY-MM-DD HH:MM:SS or YYYY-MM-DDTHH:MM:SS format
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub time: String,
    /// Source IANA timezone name or fixed offset
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub from_tz: String,
    /// Target IANA timezone name or fixed offset
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub to_tz: String,
}

/// Request for week-number and day-of-year facts
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetWeekYearRequest {
    /// Date in YYYY-MM-DD format. Defaults to today
    #[serde(default, deserialize_with = "deserialize_optional_trimmed_string")]
    pub date: Option<String>,
    /// IANA timezone name or fixed offset used to determine "today".
    /// Defaults to the server's local timezone
    #[serde(default, deserialize_with = "deserialize_optional_trimmed_string")]
    pub tz: Option<String>,
}

/// Current date and time in a resolved timezone.
///
/// `day_of_week` is always present and always the first field; the remaining
/// fields depend on the requested format and are omitted when not selected.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DateTimeResult {
    /// Day of the week
    pub day_of_week: String,
    /// Calendar date (YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// 24-hour wall-clock time (HH:MM:SS)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Timezone abbreviation at this instant (e.g. 'EST')
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Signed UTC offset (±HHMM)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<String>,
    /// ISO 8601 datetime string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso8601: Option<String>,
    /// Seconds since the Unix epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unix_timestamp: Option<i64>,
    /// Human-readable sentence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_readable: Option<String>,
}

/// Relative-time description between two instants
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RelativeTimeResult {
    /// The target date as supplied by the caller
    pub target: String,
    /// Day of the week of the target date
    pub target_day_of_week: String,
    /// The reference date as supplied, or "now"
    pub reference: String,
    /// Approximate phrase (e.g. "in 2 weeks", "3 days ago", "just now").
    /// Months are approximated as 30 days and years as 365
    pub relative: String,
    /// Signed whole-day difference by calendar-date subtraction
    pub days_difference: i64,
    /// Exact signed difference in seconds
    pub total_seconds: i64,
}

/// Calendar facts about a month
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DaysInMonthResult {
    /// Year
    pub year: i32,
    /// Month (1-12)
    pub month: u32,
    /// English month name
    pub month_name: String,
    /// Number of days in the month
    pub days_in_month: u32,
    /// First calendar day (YYYY-MM-DD)
    pub first_day: String,
    /// Day of the week of the first day
    pub first_day_of_week: String,
    /// Last calendar day (YYYY-MM-DD)
    pub last_day: String,
    /// Day of the week of the last day
    pub last_day_of_week: String,
    /// Whether the year is a leap year
    pub is_leap_year: bool,
}

/// One side of a timezone conversion
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ConversionEndpoint {
    /// Day of the week
    pub day_of_week: String,
    /// Wall-clock datetime (YYYY-MM-DD HH:MM:SS)
    pub datetime: String,
    /// Zone name (IANA name or fixed offset)
    pub timezone: String,
    /// Signed UTC offset (±HHMM)
    pub utc_offset: String,
}

/// Time conversion result with source and target information
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TimeConversionResult {
    /// Source time information
    #[serde(rename = "from")]
    pub source: ConversionEndpoint,
    /// Target time information
    #[serde(rename = "to")]
    pub target: ConversionEndpoint,
    /// Offset difference between the zones (e.g. "+5h", "-3.5h")
    pub time_difference: String,
}

/// Week, day-of-year, and related calendar facts for a date
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct WeekYearResult {
    /// The date (YYYY-MM-DD)
    pub date: String,
    /// Day of the week
    pub day_of_week: String,
    /// Day of the week as a number (1=Monday, 7=Sunday)
    pub day_of_week_number: u32,
    /// Simple week count from Jan 1
    pub week_number: u32,
    /// ISO-8601 week number
    pub iso_week: u32,
    /// ISO-8601 week-year (can differ from the calendar year)
    pub iso_year: i32,
    /// 1-indexed day of the year
    pub day_of_year: u32,
    /// Days until Dec 31
    pub days_remaining_in_year: i64,
    /// Whether the date falls on a Saturday or Sunday
    pub is_weekend: bool,
    /// Calendar quarter (1-4)
    pub quarter: u32,
}
