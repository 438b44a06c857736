//! Equitrix Signal Report
//!
//! Loads the price history, evaluates indicators and signals over the
//! configured period and prints the report on stdout.
//!
//! Usage: `signal-report [PRICE_FILE]` (defaults to `PRICE_DATA_PATH`).

use dotenvy::dotenv;
use equitrix::config::{get_environment, Config, ReportFormat};
use equitrix::core::{AnalysisPipeline, AnalysisSession, DateRange};
use equitrix::logging;
use equitrix::reports::{render_json, render_text};
use equitrix::services::CsvPriceSource;
use std::env;
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging(&get_environment())?;

    let mut config = Config::from_env();
    if let Some(path) = env::args().nth(1) {
        config = config.with_data_path(path);
    }

    info!(environment = %config.environment, "Starting Equitrix signal report");
    info!(path = %config.data_path.display(), instrument = %config.instrument, "Price source");

    if let Err(e) = run(&config) {
        error!(error = %e, "Signal report failed");
        return Err(e);
    }
    Ok(())
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = AnalysisPipeline::new(config.instrument.clone(), config.indicators)?;
    let source = CsvPriceSource::new(config.data_path.clone());
    let mut session = AnalysisSession::open(source, pipeline)?;

    let range = DateRange::new(config.period_from, config.period_to);
    let report = session.analyze(range)?;

    let rendered = match config.format {
        ReportFormat::Text => render_text(&report),
        ReportFormat::Json => render_json(&report)?,
    };
    println!("{}", rendered);
    Ok(())
}
