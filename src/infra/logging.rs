use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

/// Default filter directives for the configured level.
///
/// The poll loop issues HTTP requests every few seconds, so the HTTP stack
/// is capped at warn unless the operator overrides the filter through the
/// environment; otherwise its debug output drowns the sync core's own
/// traces.
fn default_directives(level: &str) -> String {
    format!("{level},reqwest=warn,hyper=warn")
}

pub fn init(config: &LogConfig) -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level))),
        )
        .with_target(true)
        .try_init()
        .map_err(AppError::LoggingInit)
}
