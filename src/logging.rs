//! Logging setup
//!
//! Log output goes to a file in the base directory because the TUI owns the
//! terminal while it runs.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Settings, TallyPaths};
use crate::error::{TallyError, TallyResult};

/// Environment variable holding a filter directive that overrides settings
pub const LOG_ENV: &str = "TALLY_LOG";

/// Build the filter: `TALLY_LOG` first, then the settings value
pub fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `paths.log_file()`
pub fn init_logging(paths: &TallyPaths, settings: &Settings) -> TallyResult<()> {
    paths.ensure_directories()?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| TallyError::Io(format!("Failed to open log file: {}", e)))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(build_filter(settings))
        .with(file_layer)
        .try_init()
        .map_err(|e| TallyError::Config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_settings() {
        if std::env::var(LOG_ENV).is_ok() {
            return;
        }
        let settings = Settings {
            log_filter: "debug".into(),
            ..Settings::default()
        };
        assert_eq!(build_filter(&settings).to_string(), "debug");
    }
}
