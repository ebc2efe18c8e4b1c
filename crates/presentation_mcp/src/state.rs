//! Application state shared across tool calls

use std::sync::Arc;

use integration_weather::WeatherTool;

use crate::config::AppConfig;

/// Shared application state
///
/// Holds only immutable data; concurrent tool calls share it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Current weather lookup
    pub weather: Arc<WeatherTool>,
}

impl AppState {
    /// Build state from configuration
    pub fn new(config: AppConfig) -> Self {
        let weather = WeatherTool::open_meteo(config.weather.clone());
        Self {
            config: Arc::new(config),
            weather: Arc::new(weather),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_shares_config() {
        let state = AppState::new(AppConfig::default());
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.config, &cloned.config));
        assert!(Arc::ptr_eq(&state.weather, &cloned.weather));
        assert_eq!(cloned.config.server_name, "weathermcp");
    }
}
