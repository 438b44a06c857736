//! End-to-end verdicts for synthetic price histories

use chrono::{Duration, NaiveDate};
use equitrix::indicators::IndicatorEngine;
use equitrix::models::{
    DirectionLabel, PricePoint, PriceSeries, Recommendation, RiskLabel, SignalVerdict,
    SupportResistanceZone, TrendSignal, VolatilityRegime,
};
use equitrix::signals::SignalEvaluator;

fn create_series(closes: &[f64], spread: f64) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            PricePoint::new(start + Duration::days(i as i64), c, c + spread, c - spread, c)
        })
        .collect();
    PriceSeries::new(points).unwrap()
}

fn evaluate(series: &PriceSeries) -> SignalVerdict {
    let output = IndicatorEngine::default().compute(series);
    SignalEvaluator::new().evaluate_output(&output)
}

#[test]
fn test_constant_series() {
    let verdict = evaluate(&create_series(&[100.0; 60], 0.0));

    assert_eq!(verdict.volatility_regime, VolatilityRegime::Low);
    assert_eq!(verdict.trend_signal, TrendSignal::Neutral);
    assert_eq!(verdict.support_resistance_zone, SupportResistanceZone::NearSupport);
    // only the contained-volatility point is earned
    assert_eq!(verdict.aggregate_score, Some(1));
    assert_eq!(verdict.overall_recommendation, Recommendation::Sell);
    assert_eq!(verdict.risk_label, Some(RiskLabel::Low));
    assert_eq!(verdict.direction_label, Some(DirectionLabel::Bearish));
}

#[test]
fn test_constant_fractional_close() {
    for close in [27.89, 0.3] {
        let series = create_series(&[close; 60], 0.0);
        let output = IndicatorEngine::default().compute(&series);
        let snapshot = output.snapshot.clone().unwrap();
        assert_eq!(snapshot.ma_short, Some(close));
        assert_eq!(snapshot.ma_long, Some(close));

        let verdict = SignalEvaluator::new().evaluate_output(&output);
        assert_eq!(verdict.trend_signal, TrendSignal::Neutral, "close {close}");
        assert_eq!(verdict.aggregate_score, Some(1), "close {close}");
        assert_eq!(verdict.overall_recommendation, Recommendation::Sell);
        assert_eq!(verdict.direction_label, Some(DirectionLabel::Bearish));
    }
}

#[test]
fn test_steady_uptrend() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
    let verdict = evaluate(&create_series(&closes, 0.5));

    assert_eq!(verdict.trend_signal, TrendSignal::StrongBullish);
    assert_eq!(verdict.volatility_regime, VolatilityRegime::Low);
    assert_eq!(verdict.support_resistance_zone, SupportResistanceZone::NearResistance);
    assert_eq!(verdict.aggregate_score, Some(5));
    assert_eq!(verdict.overall_recommendation, Recommendation::Buy);
}

#[test]
fn test_uptrend_bullish_once_long_average_defined() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
    let full = create_series(&closes, 0.5);

    for n in 50..=60 {
        let series = PriceSeries::new(full.points()[..n].to_vec()).unwrap();
        assert_eq!(evaluate(&series).trend_signal, TrendSignal::StrongBullish, "length {n}");
    }

    let short = PriceSeries::new(full.points()[..49].to_vec()).unwrap();
    assert_eq!(evaluate(&short).trend_signal, TrendSignal::InsufficientData);
}

#[test]
fn test_steady_downtrend() {
    let closes: Vec<f64> = (0..60).map(|i| 200.0 - i as f64).collect();
    let verdict = evaluate(&create_series(&closes, 0.5));

    assert_eq!(verdict.trend_signal, TrendSignal::StrongBearish);
    assert_eq!(verdict.support_resistance_zone, SupportResistanceZone::NearSupport);
    assert_eq!(verdict.aggregate_score, Some(1));
    assert_eq!(verdict.overall_recommendation, Recommendation::Sell);
}

#[test]
fn test_wild_swings_are_high_volatility() {
    let closes: Vec<f64> = (0..60)
        .map(|i| if i % 2 == 0 { 100.0 } else { 110.0 })
        .collect();
    let verdict = evaluate(&create_series(&closes, 0.0));

    assert_eq!(verdict.volatility_regime, VolatilityRegime::High);
    assert_eq!(verdict.risk_label, Some(RiskLabel::High));
}

#[test]
fn test_single_point_history() {
    let verdict = evaluate(&create_series(&[42.0], 0.0));

    assert_eq!(verdict.trend_signal, TrendSignal::InsufficientData);
    assert_eq!(verdict.volatility_regime, VolatilityRegime::InsufficientData);
    assert_eq!(verdict.aggregate_score, None);
    assert_eq!(verdict.overall_recommendation, Recommendation::InsufficientData);
}

#[test]
fn test_empty_history() {
    let verdict = evaluate(&PriceSeries::default());
    assert_eq!(verdict.trend_signal, TrendSignal::InsufficientData);
    assert_eq!(verdict.support_resistance_zone, SupportResistanceZone::InsufficientData);
    assert_eq!(verdict.overall_recommendation, Recommendation::InsufficientData);
    assert!(verdict.reasons.is_empty());
}
