use rmcp::ErrorData as McpError;
use rmcp::serde_json::json;

use crate::core::utils::AVAILABLE_RESOURCES;

// Error codes
const ERROR_INVALID_TIMEZONE: &str = "invalid_timezone";
const ERROR_INVALID_DATE_FORMAT: &str = "invalid_date_format";
const ERROR_INVALID_MONTH: &str = "invalid_month";
const ERROR_INVALID_FORMAT: &str = "invalid_format";
const ERROR_AMBIGUOUS_TIME: &str = "ambiguous_time";
const ERROR_RESOURCE_NOT_FOUND: &str = "resource_not_found";

/// Custom error types for better error handling
#[derive(Debug, thiserror::Error)]
pub enum DateTimeServerError {
    #[error("Invalid timezone: {timezone}")]
    InvalidTimezone { timezone: String },
    #[error("Invalid date format: {date}. Use YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS")]
    InvalidDateFormat { date: String },
    #[error("Invalid month: {month}. Must be 1-12")]
    InvalidMonth { month: i64 },
    #[error("Invalid format: {format}. Expected one of: full, iso8601, unix, human")]
    InvalidFormat { format: String },
    #[error("Ambiguous or nonexistent wall-clock time during DST transition: {time}")]
    AmbiguousTime { time: String },
    #[error("Resource not found: {uri}")]
    ResourceNotFound { uri: String },
}

impl From<DateTimeServerError> for McpError {
    fn from(err: DateTimeServerError) -> Self {
        match err {
            DateTimeServerError::InvalidTimezone { timezone } => McpError::invalid_params(
                ERROR_INVALID_TIMEZONE,
                Some(json!({"timezone": timezone})),
            ),
            DateTimeServerError::InvalidDateFormat { date } => McpError::invalid_params(
                ERROR_INVALID_DATE_FORMAT,
                Some(json!({
                    "date": date,
                    "valid_formats": ["YYYY-MM-DD", "YYYY-MM-DDTHH:MM:SS", "YYYY-MM-DD HH:MM:SS"]
                })),
            ),
            DateTimeServerError::InvalidMonth { month } => {
                McpError::invalid_params(ERROR_INVALID_MONTH, Some(json!({"month": month})))
            }
            DateTimeServerError::InvalidFormat { format } => McpError::invalid_params(
                ERROR_INVALID_FORMAT,
                Some(json!({
                    "format": format,
                    "accepted_values": ["full", "iso8601", "unix", "human"]
                })),
            ),
            DateTimeServerError::AmbiguousTime { time } => {
                McpError::invalid_params(ERROR_AMBIGUOUS_TIME, Some(json!({"time": time})))
            }
            DateTimeServerError::ResourceNotFound { uri } => McpError::resource_not_found(
                ERROR_RESOURCE_NOT_FOUND,
                Some(json!({
                    "uri": uri,
                    "available_resources": AVAILABLE_RESOURCES
                })),
            ),
        }
    }
}

pub type DateTimeServerResult<T> = Result<T, DateTimeServerError>;
pub type McpResult<T> = Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::DateTimeServerError;
    use crate::core::error::McpError;

    #[test]
    fn test_error_conversion() {
        let error = DateTimeServerError::InvalidTimezone {
            timezone: "Mars/Nowhere".to_string(),
        };
        let mcp_error: McpError = error.into();

        // Should convert to proper MCP error format
        assert!(mcp_error.to_string().contains("invalid_timezone"));
    }

    #[test]
    fn test_invalid_format_error() {
        let error = DateTimeServerError::InvalidFormat {
            format: "yaml".to_string(),
        };
        let mcp_error: McpError = error.into();

        assert!(mcp_error.to_string().contains("invalid_format"));
    }

    #[test]
    fn test_error_messages_name_the_input() {
        let error = DateTimeServerError::InvalidTimezone {
            timezone: "Mars/Nowhere".to_string(),
        };
        assert!(error.to_string().contains("Mars/Nowhere"));

        let error = DateTimeServerError::InvalidDateFormat {
            date: "02/10/2026".to_string(),
        };
        assert!(error.to_string().contains("02/10/2026"));

        let error = DateTimeServerError::InvalidMonth { month: 13 };
        assert!(error.to_string().contains("13"));
    }
}
