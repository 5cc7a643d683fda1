//! Global tracing subscriber setup for hosts running the checkers.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::errors::{InsightsError, InsightsResult};

/// Install a fmt subscriber. `RUST_LOG` overrides `config.log_level`.
///
/// Fails instead of panicking when a global subscriber is already set.
pub fn init_tracing(config: &ObservabilityConfig) -> InsightsResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| {
            InsightsError::ConfigError(format!("invalid log level {:?}: {e}", config.log_level))
        })?;

    let builder = fmt().with_env_filter(filter).with_target(true);
    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| InsightsError::ConfigError(format!("tracing init failed: {e}")))
}
