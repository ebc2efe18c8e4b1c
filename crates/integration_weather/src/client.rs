//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo Weather API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

use crate::models::CURRENT_VARIABLES;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP client could not be initialized
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request did not complete within the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Service is temporarily unavailable
    #[error("Service unavailable: HTTP {status} - {body}")]
    ServiceUnavailable {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Any other non-success status
    #[error("HTTP error: {status} - {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Skip TLS certificate verification (default: true)
    #[serde(default = "default_accept_invalid_certs")]
    pub accept_invalid_certs: bool,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "weather-app/1.0".to_string()
}

const fn default_accept_invalid_certs() -> bool {
    true
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
            accept_invalid_certs: default_accept_invalid_certs(),
        }
    }
}

/// Weather client trait for fetching weather data
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch the decoded response body for current conditions at a location
    async fn fetch_current(&self, latitude: f64, longitude: f64) -> Result<Value, WeatherError>;
}

/// Open-Meteo HTTP client implementation
///
/// Holds configuration only; an HTTP client is built for each request and
/// dropped when the request finishes.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    pub fn new(config: WeatherConfig) -> Self {
        Self { config }
    }

    /// Create a new client with default configuration
    pub fn with_defaults() -> Self {
        Self::new(WeatherConfig::default())
    }

    /// Configuration in use
    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Build the API URL for a current-conditions request
    ///
    /// Coordinates are passed through as given; Open-Meteo reports
    /// out-of-range values itself.
    pub fn build_current_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast?latitude={latitude:?}&longitude={longitude:?}&current={}",
            self.config.base_url.trim_end_matches('/'),
            CURRENT_VARIABLES.join(","),
        )
    }

    fn build_http_client(&self) -> Result<Client, WeatherError> {
        Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .user_agent(self.config.user_agent.as_str())
            .danger_accept_invalid_certs(self.config.accept_invalid_certs)
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))
    }

    fn classify_send_error(&self, err: &reqwest::Error) -> WeatherError {
        if err.is_timeout() {
            WeatherError::Timeout(self.config.timeout_secs)
        } else {
            WeatherError::RequestFailed(err.to_string())
        }
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn fetch_current(&self, latitude: f64, longitude: f64) -> Result<Value, WeatherError> {
        let url = self.build_current_url(latitude, longitude);
        info!(url = %url, "Requesting current weather");
        debug!(
            user_agent = %self.config.user_agent,
            accept = "application/json",
            "Request headers"
        );

        let client = self.build_http_client()?;

        let response = client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                let err = self.classify_send_error(&e);
                error!(error = %err, "Weather request failed");
                err
            })?;

        let status = response.status();
        info!(status = status.as_u16(), "Weather response received");

        let body = response.text().await.map_err(|e| {
            let err = self.classify_send_error(&e);
            error!(error = %err, "Failed to read weather response body");
            err
        })?;
        debug!(body = %body, "Weather response body");

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "Weather service returned an error");
            return Err(if status == StatusCode::TOO_MANY_REQUESTS {
                WeatherError::RateLimitExceeded
            } else if status.is_server_error() {
                WeatherError::ServiceUnavailable {
                    status: status.as_u16(),
                    body,
                }
            } else {
                WeatherError::HttpStatus {
                    status: status.as_u16(),
                    body,
                }
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Weather response is not valid JSON");
            WeatherError::ParseError(e.to_string())
        })
    }
}
