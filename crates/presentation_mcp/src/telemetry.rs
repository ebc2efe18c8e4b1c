//! Tracing initialization
//!
//! Logs go to stderr: stdout carries the MCP stdio transport.

use tracing_subscriber::{
    EnvFilter, filter::ParseError, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{AppConfig, LogFormat};

/// Build the log filter from `RUST_LOG`, falling back to `default_directives`
pub fn build_filter(default_directives: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_directives))
}

/// Install the global tracing subscriber
///
/// Call once at process start.
pub fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let filter = build_filter(&config.log_filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
            .try_init()?,
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
