//! Telemetry for faultline
//!
//! Installs the `tracing` subscriber from logging configuration. Output is
//! plain text or JSON lines; filtering uses env-filter directives.

use faultline_config::{LogConfig, LogFormat};

/// Initialize the global tracing subscriber from configuration
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a subscriber is
/// already installed
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| anyhow::anyhow!("invalid log filter '{}': {e}", config.filter))?;

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);
            registry.with(fmt_layer).try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
            registry.with(fmt_layer).try_init()?;
        }
    }

    Ok(())
}
