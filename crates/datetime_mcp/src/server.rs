use rmcp::{
    RoleServer, ServerHandler,
    handler::server::{
        router::{prompt::PromptRouter, tool::ToolRouter},
        wrapper::Parameters,
    },
    model::*,
    prompt, prompt_handler, prompt_router,
    service::RequestContext,
    tool, tool_handler, tool_router,
};

use crate::core::provider::DateTimeServer;
use crate::core::zone;
use crate::core::{
    error::McpResult,
    models::{
        ConvertTimeRequest, DaysInMonthRequest, GetDatetimeRequest, GetWeekYearRequest,
        RelativeTimeRequest,
    },
};

/// DateTime MCP Server with date, time, and calendar operations
#[derive(Clone)]
pub struct DateTimeService {
    datetime_server: DateTimeServer,
    local_timezone_name: String, // Cache this for display only
    tool_router: ToolRouter<DateTimeService>,
    prompt_router: PromptRouter<DateTimeService>,
}

impl DateTimeService {
    pub fn new() -> Self {
        let datetime_server = DateTimeServer::new();
        let local_timezone_name = zone::detect_local_timezone().to_string();

        Self {
            datetime_server,
            local_timezone_name,
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    fn create_resource_text(&self, uri: &str, name: &str) -> Resource {
        RawResource::new(uri, name.to_string()).no_annotation()
    }

    pub(crate) fn get_local_timezone_name(&self) -> &str {
        &self.local_timezone_name
    }

    fn generate_status_content(&self) -> McpResult<String> {
        let current = self
            .datetime_server
            .get_datetime(Some(&self.local_timezone_name), None)?;

        Ok(format!(
            r#"DateTime MCP Server Status

Server: Running
Local Timezone: {}
Current Local Time: {}
Day of Week: {}
Tools Available: 5
Prompts Available: 1
Resources Available: 3

Capabilities:
- Current date and time for any IANA timezone or fixed offset
- Relative-time phrasing between two dates
- Days-in-month, leap-year, and month-boundary facts
- Wall-clock conversion between timezones
- ISO week, day-of-year, and quarter facts"#,
            self.local_timezone_name,
            current.iso8601.unwrap_or_default(),
            current.day_of_week,
        ))
    }

    fn generate_help_content(&self) -> String {
        format!(
            r#"DateTime MCP Server Help

TOOLS:
- get_datetime: Get current date and time with day of week
  - tz: IANA timezone name or fixed offset (optional, defaults to local)
  - format: "iso8601", "unix", "human", or omit for the full response
  - Example: {{"tz": "America/New_York", "format": "iso8601"}}

- relative_time: Describe the time between two dates
  - target: date in YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS format (required)
  - reference: same formats (optional, defaults to now)
  - Example: {{"target": "2026-02-10", "reference": "2026-02-03"}}

- days_in_month: Number of days in a month, with first/last day info
  - year: e.g. 2026 (optional, defaults to current year)
  - month: 1-12 (optional, defaults to current month)
  - Example: {{"year": 2024, "month": 2}}

- convert_time: Convert a wall-clock time between timezones
  - time: YYYY-MM-DD HH:MM:SS or YYYY-MM-DDTHH:MM:SS (required)
  - from_tz: source timezone (required)
  - to_tz: target timezone (required)
  - Example: {{"time": "2026-02-02 09:00:00", "from_tz": "America/Los_Angeles", "to_tz": "Europe/Paris"}}

- get_week_year: Week number, ISO week, and day-of-year facts
  - date: YYYY-MM-DD (optional, defaults to today)
  - tz: timezone used to determine "today" (optional, defaults to local)
  - Example: {{"date": "2026-02-02"}}

PROMPTS:
- datetime_guidance: Best practices for date and timezone arguments

RESOURCES:
- datetime://status: Current server status and local time
- datetime://help: This help documentation
- datetime://timezones: List of common IANA timezone names

LOCAL TIMEZONE: {}

TIMEZONE FORMAT:
- Use full IANA names ('America/New_York', 'Europe/London') or fixed
  offsets ('+05:30', '-0800')
- Avoid abbreviations: 'EST', 'PST' (ambiguous)

DATE FORMAT:
- YYYY-MM-DD for dates, YYYY-MM-DD HH:MM:SS or YYYY-MM-DDTHH:MM:SS for
  datetimes; 24-hour clock

RELATIVE TIME:
- Phrases use fixed-size buckets: months are approximated as 30 days and
  years as 365. The exact values are always returned alongside the phrase
  as days_difference and total_seconds."#,
            self.local_timezone_name
        )
    }

    fn generate_timezone_list_content(&self) -> &'static str {
        r#"Common IANA Timezone Names

AMERICAS:
- America/New_York (Eastern Time)
- America/Chicago (Central Time)
- America/Denver (Mountain Time)
- America/Los_Angeles (Pacific Time)
- America/Toronto (Eastern Time - Canada)
- America/Mexico_City (Central Time - Mexico)
- America/Sao_Paulo (Brazil Time)

EUROPE:
- Europe/London (Greenwich Mean Time)
- Europe/Paris (Central European Time)
- Europe/Berlin (Central European Time)
- Europe/Madrid (Central European Time)
- Europe/Stockholm (Central European Time)
- Europe/Moscow (Moscow Time)

ASIA:
- Asia/Tokyo (Japan Standard Time)
- Asia/Shanghai (China Standard Time)
- Asia/Singapore (Singapore Time)
- Asia/Seoul (Korea Standard Time)
- Asia/Kolkata (India Standard Time)
- Asia/Dubai (Gulf Standard Time)

OCEANIA:
- Australia/Sydney (Australian Eastern Time)
- Australia/Perth (Australian Western Time)
- Pacific/Auckland (New Zealand Time)

AFRICA:
- Africa/Cairo (Eastern European Time)
- Africa/Johannesburg (South Africa Time)
- Africa/Lagos (West Africa Time)

SPECIAL:
- UTC (Coordinated Universal Time)
- Fixed offsets are also accepted: '+05:30', '-0800'

Note: Many timezones observe Daylight Saving Time (DST) and will
automatically adjust their offsets during DST periods."#
    }
}

impl Default for DateTimeService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl DateTimeService {
    #[tool(description = "Get current date and time with day of week")]
    pub(crate) async fn get_datetime(
        &self,
        Parameters(req): Parameters<GetDatetimeRequest>,
    ) -> McpResult<CallToolResult> {
        let result = self
            .datetime_server
            .get_datetime(req.tz.as_deref(), req.format.as_deref())?;
        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap(),
        )]))
    }

    #[tool(description = "Get relative time description between two dates")]
    pub(crate) async fn relative_time(
        &self,
        Parameters(req): Parameters<RelativeTimeRequest>,
    ) -> McpResult<CallToolResult> {
        let result = self
            .datetime_server
            .relative_time(&req.target, req.reference.as_deref())?;
        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap(),
        )]))
    }

    #[tool(description = "Get the number of days in a month, plus first/last day info")]
    pub(crate) async fn days_in_month(
        &self,
        Parameters(req): Parameters<DaysInMonthRequest>,
    ) -> McpResult<CallToolResult> {
        let result = self.datetime_server.days_in_month(req.year, req.month)?;
        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap(),
        )]))
    }

    #[tool(description = "Convert time between timezones")]
    pub(crate) async fn convert_time(
        &self,
        Parameters(req): Parameters<ConvertTimeRequest>,
    ) -> McpResult<CallToolResult> {
        let result = self
            .datetime_server
            .convert_time(&req.time, &req.from_tz, &req.to_tz)?;
        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap(),
        )]))
    }

    #[tool(description = "Get week number, ISO week, and day of year for a date")]
    pub(crate) async fn get_week_year(
        &self,
        Parameters(req): Parameters<GetWeekYearRequest>,
    ) -> McpResult<CallToolResult> {
        let result = self
            .datetime_server
            .get_week_year(req.date.as_deref(), req.tz.as_deref())?;
        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap(),
        )]))
    }
}

#[prompt_router]
impl DateTimeService {
    /// Generate guidance for effective date and timezone arguments
    #[prompt(name = "datetime_guidance")]
    async fn datetime_guidance(
        &self,
        _ctx: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<Vec<PromptMessage>> {
        let local_tz = self.get_local_timezone_name();
        let guidance = format!(
            r#"Date and Timezone Best Practices:

1. **Timezone Names**
   - Use full IANA timezone names (e.g., 'America/New_York', 'Europe/London')
     or fixed offsets (e.g., '+05:30', '-0800')
   - Avoid abbreviations like 'EST' or 'PST' as they can be ambiguous
   - Your local timezone is detected as: {}

2. **Date Format**
   - Use YYYY-MM-DD for dates and YYYY-MM-DD HH:MM:SS or
     YYYY-MM-DDTHH:MM:SS for datetimes (24-hour clock)
   - Bare dates are treated as midnight

3. **Relative Time**
   - Phrases like "in 2 weeks" use fixed-size buckets; months count as
     30 days and years as 365, so phrasing near month and year boundaries
     is approximate
   - days_difference and total_seconds carry the exact values

4. **Output Formats**
   - get_datetime accepts format = 'iso8601', 'unix', or 'human'; omit it
     for the full response
   - day_of_week is always included first

5. **Error Handling**
   - Invalid timezone names, dates, months, and formats are rejected with
     the offending value named in the error
   - Wall-clock times skipped or repeated by a DST transition are rejected
     as ambiguous"#,
            local_tz
        );

        Ok(vec![PromptMessage {
            role: PromptMessageRole::Assistant,
            content: PromptMessageContent::text(guidance),
        }])
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for DateTimeService {
    fn get_info(&self) -> ServerInfo {
        let local_tz = self.get_local_timezone_name();
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(format!(
                "DateTime MCP Server for date, time, and day-of-week queries. Tools: get_datetime, relative_time, days_in_month, convert_time, get_week_year. Local timezone: {}. Use IANA timezone names.",
                local_tz
            )),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<ListResourcesResult> {
        Ok(ListResourcesResult {
            resources: vec![
                self.create_resource_text("datetime://status", "server-status"),
                self.create_resource_text("datetime://help", "help-documentation"),
                self.create_resource_text("datetime://timezones", "timezone-list"),
            ],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<ReadResourceResult> {
        match uri.as_str() {
            "datetime://status" => {
                let status = self.generate_status_content()?;
                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(status, uri)],
                })
            }
            "datetime://help" => {
                let help = self.generate_help_content();
                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(help, uri)],
                })
            }
            "datetime://timezones" => {
                let common_timezones = self.generate_timezone_list_content();
                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(common_timezones, uri)],
                })
            }
            _ => Err(crate::core::error::DateTimeServerError::ResourceNotFound {
                uri: uri.to_string(),
            }
            .into()),
        }
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<ListResourceTemplatesResult> {
        Ok(ListResourceTemplatesResult {
            next_cursor: None,
            resource_templates: Vec::new(),
        })
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<InitializeResult> {
        tracing::info!("DateTime MCP Server initialized successfully");
        Ok(self.get_info())
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    use rmcp::{ServiceExt, transport::stdio};

    let service = DateTimeService::new().serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    service.waiting().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rmcp::ServerHandler;
    use rmcp::handler::server::wrapper::Parameters;
    use rmcp::model::ProtocolVersion;

    use crate::core::models::{
        ConvertTimeRequest, DaysInMonthRequest, GetDatetimeRequest, GetWeekYearRequest,
        RelativeTimeRequest,
    };
    use crate::server::DateTimeService;

    #[tokio::test]
    async fn test_get_datetime() {
        let service = DateTimeService::new();

        println!(
            "Detected local timezone: {}",
            service.get_local_timezone_name()
        );

        let req = GetDatetimeRequest {
            tz: Some("UTC".to_string()),
            format: None,
        };

        let result = service.get_datetime(Parameters(req)).await;
        assert!(result.is_ok());
        assert!(!result.unwrap().content.is_empty());
    }

    #[tokio::test]
    async fn test_get_datetime_defaults_to_local() {
        let service = DateTimeService::new();

        let req = GetDatetimeRequest {
            tz: None,
            format: None,
        };

        let result = service.get_datetime(Parameters(req)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_datetime_invalid_timezone() {
        let service = DateTimeService::new();

        let req = GetDatetimeRequest {
            tz: Some("Mars/Nowhere".to_string()),
            format: None,
        };

        let result = service.get_datetime(Parameters(req)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_datetime_invalid_format() {
        let service = DateTimeService::new();

        let req = GetDatetimeRequest {
            tz: Some("UTC".to_string()),
            format: Some("yaml".to_string()),
        };

        let result = service.get_datetime(Parameters(req)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_relative_time() {
        let service = DateTimeService::new();

        let req = RelativeTimeRequest {
            target: "2026-02-10".to_string(),
            reference: Some("2026-02-03".to_string()),
        };

        let result = service.relative_time(Parameters(req)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_relative_time_invalid_target() {
        let service = DateTimeService::new();

        let req = RelativeTimeRequest {
            target: "next tuesday".to_string(),
            reference: None,
        };

        let result = service.relative_time(Parameters(req)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_days_in_month() {
        let service = DateTimeService::new();

        let req = DaysInMonthRequest {
            year: Some(2024),
            month: Some(2),
        };

        let result = service.days_in_month(Parameters(req)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_days_in_month_invalid_month() {
        let service = DateTimeService::new();

        let req = DaysInMonthRequest {
            year: Some(2026),
            month: Some(13),
        };

        let result = service.days_in_month(Parameters(req)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_convert_time() {
        let service = DateTimeService::new();

        let req = ConvertTimeRequest {
            time: "2026-02-02 12:00:00".to_string(),
            from_tz: "UTC".to_string(),
            to_tz: "America/New_York".to_string(),
        };

        let result = service.convert_time(Parameters(req)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_convert_time_invalid_timezone() {
        let service = DateTimeService::new();

        let req = ConvertTimeRequest {
            time: "2026-02-02 12:00:00".to_string(),
            from_tz: "Invalid/Timezone".to_string(),
            to_tz: "UTC".to_string(),
        };

        let result = service.convert_time(Parameters(req)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_week_year() {
        let service = DateTimeService::new();

        let req = GetWeekYearRequest {
            date: Some("2026-02-02".to_string()),
            tz: None,
        };

        let result = service.get_week_year(Parameters(req)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_week_year_defaults_to_today() {
        let service = DateTimeService::new();

        let req = GetWeekYearRequest {
            date: None,
            tz: Some("UTC".to_string()),
        };

        let result = service.get_week_year(Parameters(req)).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_service_creation() {
        let service = DateTimeService::new();
        let info = service.get_info();

        assert_eq!(info.protocol_version, ProtocolVersion::V_2024_11_05);
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.instructions.is_some());
    }

    #[test]
    fn test_cached_timezone_name() {
        let service = DateTimeService::new();
        let name1 = service.get_local_timezone_name();
        let name2 = service.get_local_timezone_name();

        // Should return the same reference (cached)
        assert_eq!(name1, name2);
        assert!(!name1.is_empty());
    }
}
