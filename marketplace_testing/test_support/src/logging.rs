//! Logging via the tracing crate.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Logging configuration.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Output format for log.
    pub format: LoggingFormat,
    /// Include the module path of the emitting call site.
    pub with_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            format: LoggingFormat::default(),
            with_targets: true,
        }
    }
}

/// Logging output format.
///
/// Defaults to "text".
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggingFormat {
    /// Text format.
    #[default]
    Text,
    /// JSON format.
    Json,
}

/// Initializes the logging system with the default parameters.
///
/// See `init_with_config` for details.
pub fn init() -> anyhow::Result<()> {
    init_with_config(&Default::default())
}

/// Initializes the logging system.
///
/// The installed subscriber is global; any call after the first one returns an error.  Output goes
/// through the test writer so it is captured per test, and is filtered by `RUST_LOG`.
pub fn init_with_config(config: &LoggingConfig) -> anyhow::Result<()> {
    match config.format {
        LoggingFormat::Text => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_test_writer()
                .with_env_filter(EnvFilter::from_default_env())
                .with_target(config.with_targets)
                .finish(),
        )?,
        LoggingFormat::Json => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_test_writer()
                .with_env_filter(EnvFilter::from_default_env())
                .with_target(config.with_targets)
                .json()
                .finish(),
        )?,
    }

    Ok(())
}
