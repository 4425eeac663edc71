//! Structured logging setup
//!
//! Logs go to stderr, which also carries the error envelope, so logging is
//! off unless `KAPSO_LOG` holds a filter such as `debug` or
//! `kapso_observe=trace`.

use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;
use crate::config::{EnvVars, LOG_FORMAT_VAR, LOG_VAR};

/// Filter directives from `KAPSO_LOG`, defaulting to `off`
pub fn filter_directives(vars: &EnvVars) -> String {
    match vars.get(LOG_VAR).map(str::trim) {
        Some(filter) if !filter.is_empty() => filter.to_string(),
        _ => "off".to_string(),
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(vars: &EnvVars) {
    let filter = EnvFilter::try_new(filter_directives(vars)).unwrap_or_else(|_| EnvFilter::new("off"));
    let format = LogFormat::from_env_value(vars.get(LOG_FORMAT_VAR));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}
