//! Process-wide configuration
//!
//! Built once at startup and handed to [`crate::state::AppState`]. There is
//! no configuration file; every field has a default.

use std::fmt;

use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Structured JSON lines
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name reported to the host during initialization
    #[serde(default = "default_server_name")]
    pub server_name: String,

    /// Default log filter, overridden by `RUST_LOG` when set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Open-Meteo client settings
    #[serde(default)]
    pub weather: WeatherConfig,
}

fn default_server_name() -> String {
    "weathermcp".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_name: default_server_name(),
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
            weather: WeatherConfig::default(),
        }
    }
}
