//! MCP tool server
//!
//! Registers `get_current_weather` with the host through the rmcp tool
//! router. Tool results are always text; failures inside the lookup are
//! already rendered as the fixed unavailable message.

use std::fmt;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use crate::state::AppState;

/// Arguments of `get_current_weather`
#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
pub struct CurrentWeatherRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
}

/// Weather MCP server
#[derive(Clone)]
pub struct WeatherServer {
    state: AppState,
    tool_router: ToolRouter<Self>,
}

impl fmt::Debug for WeatherServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherServer")
            .field("server_name", &self.state.config.server_name)
            .finish_non_exhaustive()
    }
}

#[tool_router]
impl WeatherServer {
    /// Create a server over the given state
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    /// Names of the registered tools
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }

    #[tool(
        description = "Get current weather for a location.\n\nArgs:\n    latitude: Latitude of the location\n    longitude: Longitude of the location"
    )]
    pub async fn get_current_weather(
        &self,
        Parameters(request): Parameters<CurrentWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            latitude = request.latitude,
            longitude = request.longitude,
            "Dispatching get_current_weather"
        );
        let summary = self
            .state
            .weather
            .fetch_current_weather(request.latitude, request.longitude)
            .await;

        Ok(CallToolResult::success(vec![Content::text(summary)]))
    }
}

#[tool_handler]
impl ServerHandler for WeatherServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name.clone_from(&self.state.config.server_name);

        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            instructions: Some(
                "Current weather lookup by latitude and longitude, backed by Open-Meteo."
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}
