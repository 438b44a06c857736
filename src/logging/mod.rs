//! Logging initialization with environment-based formatters
//!
//! - Production: Structured JSON logs for log aggregation
//! - Sandbox: Colorful, human-readable logs for development
//!
//! Logs go to stderr; stdout is reserved for the rendered report.

use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn for_environment(environment: &str) -> Self {
        if is_production(environment) {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

/// Install the global subscriber for `environment`.
///
/// Fails if a subscriber is already installed.
pub fn init_logging(environment: &str) -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (json, pretty) = match LogFormat::for_environment(environment) {
        LogFormat::Json => (
            Some(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            ),
            None,
        ),
        LogFormat::Pretty => (
            None,
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json)
        .with(pretty)
        .try_init()
}
