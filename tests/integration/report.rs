//! CSV file to rendered report through the session

use chrono::NaiveDate;
use equitrix::core::{AnalysisPipeline, AnalysisSession, DateRange};
use equitrix::indicators::IndicatorConfig;
use equitrix::models::{Recommendation, SupportResistanceZone, TrendSignal, VolatilityRegime};
use equitrix::reports::{render_json, render_text, AnalysisReport};
use equitrix::services::CsvPriceSource;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/prices.csv")
}

fn open_session() -> AnalysisSession<CsvPriceSource> {
    let pipeline = AnalysisPipeline::new("ACME", IndicatorConfig::default()).unwrap();
    AnalysisSession::open(CsvPriceSource::new(fixture()), pipeline).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

#[test]
fn test_full_history_report() {
    let mut session = open_session();
    let report = session.analyze(DateRange::all()).unwrap();

    assert_eq!(report.instrument, "ACME");
    assert_eq!(report.period.points, 80);
    assert_eq!(Some(report.period.from), date(2024, 1, 2));
    assert_eq!(Some(report.period.to), date(2024, 4, 22));
    assert_eq!(report.indicators.len(), 80);

    // rows arrive newest first and are sorted on load
    assert_eq!(report.snapshot.first_price, 24.0);
    assert_eq!(report.snapshot.current_price, 27.89);
    assert_eq!(report.key_metrics.current_close, 27.89);

    let verdict = &report.verdict;
    assert_ne!(verdict.trend_signal, TrendSignal::InsufficientData);
    assert_ne!(verdict.volatility_regime, VolatilityRegime::InsufficientData);
    assert_ne!(verdict.support_resistance_zone, SupportResistanceZone::InsufficientData);
    assert_ne!(verdict.overall_recommendation, Recommendation::InsufficientData);
    assert!(verdict.aggregate_score.unwrap() <= 5);
}

#[test]
fn test_period_filter() {
    let mut session = open_session();
    let report = session
        .analyze(DateRange::new(date(2024, 2, 1), date(2024, 2, 29)))
        .unwrap();

    assert_eq!(report.period.points, 21);
    // too short for the 50-day average
    assert_eq!(report.verdict.trend_signal, TrendSignal::InsufficientData);
    assert!(report.snapshot.ma_short.is_some());
}

#[test]
fn test_text_report_sections() {
    let mut session = open_session();
    let report = session.analyze(DateRange::all()).unwrap();
    let text = render_text(&report);

    for heading in [
        "Key metrics",
        "Price statistics",
        "Volume statistics",
        "1. Price trend",
        "2. Volatility and risk",
        "3. Trading signals",
        "4. Support and resistance",
        "5. Synthesis",
    ] {
        assert!(text.contains(heading), "missing section {heading}");
    }
    assert!(text.contains("27.89€"));
    assert!(text.contains(report.verdict.overall_recommendation.label()));
}

#[test]
fn test_json_report() {
    let mut session = open_session();
    let report = session.analyze(DateRange::all()).unwrap();
    let json = render_json(&report).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["instrument"], "ACME");
    assert_eq!(value["period"]["points"], 80);
    assert_eq!(value["indicators"]["points"].as_array().unwrap().len(), 80);
    // warm-up values serialize as null
    assert!(value["indicators"]["points"][0]["daily_return_pct"].is_null());

    let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.period, report.period);
    assert_eq!(
        parsed.verdict.overall_recommendation,
        report.verdict.overall_recommendation
    );
}

#[test]
fn test_runs_are_deterministic() {
    let first = open_session().analyze(DateRange::all()).unwrap();
    let second = open_session().analyze(DateRange::all()).unwrap();

    assert_eq!(first, second);
    assert_eq!(render_json(&first).unwrap(), render_json(&second).unwrap());
    assert_eq!(render_text(&first), render_text(&second));
}
