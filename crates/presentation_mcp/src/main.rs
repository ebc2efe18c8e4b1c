//! Weather MCP server
//!
//! Serves the `get_current_weather` tool over stdin/stdout.

use presentation_mcp::{AppConfig, AppState, WeatherServer, telemetry};
use rmcp::{ServiceExt, transport::stdio};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::default();
    telemetry::init_tracing(&config)?;

    info!(
        name = %config.server_name,
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.weather.base_url,
        "Starting weather MCP server on stdio"
    );

    let state = AppState::new(config);
    let service = WeatherServer::new(state)
        .serve(stdio())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Failed to start MCP session"))?;

    let reason = service.waiting().await?;
    info!(reason = ?reason, "Weather MCP server stopped");

    Ok(())
}
