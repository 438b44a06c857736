//! Runtime configuration read from the environment (and `.env` when present).

use chrono::NaiveDate;
use std::env;
use std::path::PathBuf;

use crate::indicators::IndicatorConfig;

pub const DEFAULT_DATA_PATH: &str = "data/historical_prices.csv";
pub const DEFAULT_INSTRUMENT: &str = "EQUITY";

/// Deployment environment name (`APP_ENV`), defaults to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// How the report binary prints its output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub data_path: PathBuf,
    pub instrument: String,
    pub format: ReportFormat,
    pub period_from: Option<NaiveDate>,
    pub period_to: Option<NaiveDate>,
    pub indicators: IndicatorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            instrument: DEFAULT_INSTRUMENT.to_string(),
            format: ReportFormat::Text,
            period_from: None,
            period_to: None,
            indicators: IndicatorConfig::default(),
        }
    }
}

impl Config {
    /// Build the configuration from environment variables.
    ///
    /// Unparseable values fall back to their defaults with a warning.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let format = match env::var("REPORT_FORMAT") {
            Ok(raw) => ReportFormat::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Unknown REPORT_FORMAT, using text");
                ReportFormat::Text
            }),
            Err(_) => defaults.format,
        };

        Self {
            environment: get_environment(),
            data_path: env::var("PRICE_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            instrument: env::var("INSTRUMENT_NAME").unwrap_or(defaults.instrument),
            format,
            period_from: date_var("PERIOD_FROM"),
            period_to: date_var("PERIOD_TO"),
            indicators: defaults.indicators,
        }
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }
}

fn date_var(name: &str) -> Option<NaiveDate> {
    let raw = env::var(name).ok()?;
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(variable = name, value = %raw, error = %e, "Ignoring unparseable date");
            None
        }
    }
}
