//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo Weather API (<https://open-meteo.com>).
//! Fetches current conditions for a coordinate pair and renders them as a
//! fixed, human-readable summary. No API key is required.

pub mod client;
mod models;
pub mod tool;

pub use client::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{CURRENT_VARIABLES, CurrentConditions, FieldValue, UNAVAILABLE_MESSAGE};
pub use tool::WeatherTool;
