//! Current weather tool
//!
//! Bridges a coordinate pair to a text summary. Every failure collapses to
//! [`UNAVAILABLE_MESSAGE`], so callers always receive a string.

use std::{fmt, sync::Arc};

use tracing::{error, info, instrument};

use crate::{
    client::{OpenMeteoClient, WeatherClient, WeatherConfig},
    models::{CurrentConditions, UNAVAILABLE_MESSAGE},
};

/// Current weather lookup exposed to tool hosts
#[derive(Clone)]
pub struct WeatherTool {
    client: Arc<dyn WeatherClient>,
}

impl fmt::Debug for WeatherTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherTool")
            .field("client", &"dyn WeatherClient")
            .finish()
    }
}

impl WeatherTool {
    /// Create a tool backed by any weather client
    pub fn new(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Create a tool backed by Open-Meteo with the given configuration
    pub fn open_meteo(config: WeatherConfig) -> Self {
        Self::new(Arc::new(OpenMeteoClient::new(config)))
    }

    /// Fetch current conditions and render them as a summary
    ///
    /// Returns [`UNAVAILABLE_MESSAGE`] if the request fails for any reason or
    /// the response carries no `current` block.
    #[instrument(skip(self))]
    pub async fn fetch_current_weather(&self, latitude: f64, longitude: f64) -> String {
        info!(latitude, longitude, "get_current_weather called");

        let data = match self.client.fetch_current(latitude, longitude).await {
            Ok(data) => Some(data),
            Err(e) => {
                error!(error = %e, "Weather fetch failed");
                None
            },
        };

        let Some(current) = data.and_then(CurrentConditions::from_response) else {
            error!("{UNAVAILABLE_MESSAGE}");
            return UNAVAILABLE_MESSAGE.to_string();
        };

        let summary = current.summary();
        info!(summary = %summary, "Weather summary");
        summary
    }
}
