//! Unit tests for the signal evaluator

use equitrix::models::{
    DirectionLabel, PerformanceLabel, Recommendation, ReturnLabel, RiskLabel,
    SupportResistanceLevels, SupportResistanceZone, TrendSignal, VolatilityRegime,
};
use equitrix::signals::{EvaluationInput, SignalEvaluator};

fn bullish_input() -> EvaluationInput {
    EvaluationInput {
        points: 60,
        price: 120.0,
        ma_short: Some(115.0),
        ma_long: Some(105.0),
        total_return_pct: Some(20.0),
        mean_abs_return_pct: Some(0.8),
        return_std_pct: Some(1.1),
        support_resistance: Some(SupportResistanceLevels {
            support: 100.0,
            resistance: 130.0,
            window: 30,
        }),
    }
}

#[test]
fn test_bullish_verdict() {
    let verdict = SignalEvaluator::new().evaluate(&bullish_input());

    assert_eq!(verdict.trend_signal, TrendSignal::StrongBullish);
    assert_eq!(verdict.volatility_regime, VolatilityRegime::Low);
    assert_eq!(verdict.support_resistance_zone, SupportResistanceZone::Safe);
    assert_eq!(verdict.aggregate_score, Some(5));
    assert_eq!(verdict.overall_recommendation, Recommendation::Buy);
    assert_eq!(verdict.return_label, Some(ReturnLabel::Positive));
    assert_eq!(verdict.risk_label, Some(RiskLabel::Low));
    assert_eq!(verdict.direction_label, Some(DirectionLabel::Bullish));
    assert_eq!(verdict.period_performance, Some(PerformanceLabel::Positive));
}

#[test]
fn test_distances_reported() {
    let verdict = SignalEvaluator::new().evaluate(&bullish_input());
    let to_support = verdict.distance_to_support_pct.unwrap();
    let to_resistance = verdict.distance_to_resistance_pct.unwrap();
    assert!((to_support - 20.0 / 120.0 * 100.0).abs() < 1e-9);
    assert!((to_resistance - 10.0 / 120.0 * 100.0).abs() < 1e-9);
}

#[test]
fn test_reasons_name_the_rules() {
    let verdict = SignalEvaluator::new().evaluate(&bullish_input());
    let has = |category: &str, rule: &str| {
        verdict
            .reasons
            .iter()
            .any(|r| r.category == category && r.rule == rule)
    };
    assert!(has("trend", "price_above_short_above_long"));
    assert!(has("volatility_regime", "low_mean_abs_return"));
    assert!(has("support_resistance", "inside_buffered_band"));
    assert!(has("score", "positive_total_return"));
    assert!(has("recommendation", "score_buy"));
}

#[test]
fn test_single_point_is_insufficient() {
    let input = EvaluationInput {
        points: 1,
        ..bullish_input()
    };
    let verdict = SignalEvaluator::new().evaluate(&input);

    assert_eq!(verdict.trend_signal, TrendSignal::InsufficientData);
    assert_eq!(verdict.volatility_regime, VolatilityRegime::InsufficientData);
    assert_eq!(verdict.aggregate_score, None);
    assert_eq!(verdict.overall_recommendation, Recommendation::InsufficientData);
    assert_eq!(verdict.period_performance, None);
}

#[test]
fn test_missing_long_average_only_affects_trend() {
    let input = EvaluationInput {
        ma_long: None,
        ..bullish_input()
    };
    let verdict = SignalEvaluator::new().evaluate(&input);

    assert_eq!(verdict.trend_signal, TrendSignal::InsufficientData);
    assert_eq!(verdict.aggregate_score, Some(5));
    assert_eq!(verdict.overall_recommendation, Recommendation::Buy);
}

#[test]
fn test_missing_short_average_leaves_score_undefined() {
    let input = EvaluationInput {
        ma_short: None,
        ..bullish_input()
    };
    let verdict = SignalEvaluator::new().evaluate(&input);

    assert_eq!(verdict.trend_signal, TrendSignal::InsufficientData);
    assert_eq!(verdict.aggregate_score, None);
    assert_eq!(verdict.overall_recommendation, Recommendation::InsufficientData);
    assert_eq!(verdict.return_label, None);
    assert_eq!(verdict.direction_label, None);
}

#[test]
fn test_missing_levels_is_insufficient_zone() {
    let input = EvaluationInput {
        support_resistance: None,
        ..bullish_input()
    };
    let verdict = SignalEvaluator::new().evaluate(&input);

    assert_eq!(verdict.support_resistance_zone, SupportResistanceZone::InsufficientData);
    assert_eq!(verdict.distance_to_support_pct, None);
    assert_eq!(verdict.aggregate_score, None);
}

#[test]
fn test_evaluation_is_deterministic() {
    let evaluator = SignalEvaluator::default();
    let first = evaluator.evaluate(&bullish_input());
    let second = evaluator.evaluate(&bullish_input());

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_verdict_serializes_labels() {
    let verdict = SignalEvaluator::new().evaluate(&bullish_input());
    let json = serde_json::to_value(&verdict).unwrap();

    assert_eq!(json["trend_signal"], "STRONG_BULLISH");
    assert_eq!(json["volatility_regime"], "LOW");
    assert_eq!(json["support_resistance_zone"], "SAFE");
    assert_eq!(json["overall_recommendation"], "BUY");
    assert_eq!(json["aggregate_score"], 5);
}
