//! MCP presentation layer
//!
//! Exposes the current weather lookup as an MCP tool served over stdio.

pub mod config;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::{AppConfig, LogFormat};
pub use server::{CurrentWeatherRequest, WeatherServer};
pub use state::AppState;
