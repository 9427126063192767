use std::env;
use tracing_subscriber::{self, EnvFilter};

mod core;
mod server;

/// DateTime MCP Server
///
/// An MCP server for date, time, and day-of-week queries:
/// - Tools: current datetime, relative time, days-in-month, timezone
///   conversion, week/year facts
/// - Resources: server status and help documentation
///
/// Usage: npx @modelcontextprotocol/inspector cargo run --bin mcp-server-datetimeday
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging only if LOG_LEVEL environment variable is set
    if let Ok(log_level) = env::var("LOG_LEVEL") {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
            )
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .init();

        tracing::info!("Starting DateTime MCP server with log level: {}", log_level);
    }

    if let Err(e) = server::run().await {
        // Only log error if logging is initialized
        if env::var("LOG_LEVEL").is_ok() {
            tracing::error!("Error running DateTime MCP server: {}", e);
        }
        return Err(e);
    }

    Ok(())
}
