//! Threshold constants and the rule tables for each signal category

use crate::models::{
    DirectionLabel, PerformanceLabel, Recommendation, ReturnLabel, RiskLabel,
    SupportResistanceZone, TrendSignal, VolatilityRegime,
};
use crate::signals::rules::RuleTable;

/// Display banding on the mean absolute daily return (percent)
pub const REGIME_LOW_MAX: f64 = 2.0;
pub const REGIME_MEDIUM_MAX: f64 = 4.0;

/// Risk sub-label banding on the daily return standard deviation (percent).
/// Kept separate from the regime banding above.
pub const RISK_LOW_MAX: f64 = 3.0;
pub const RISK_MEDIUM_MAX: f64 = 5.0;

/// Buffer applied to support/resistance before classifying proximity
pub const SUPPORT_BUFFER: f64 = 1.02;
pub const RESISTANCE_BUFFER: f64 = 0.98;

/// Score bands for the recommendation and the return sub-label
pub const SCORE_BUY_MIN: u8 = 4;
pub const SCORE_HOLD_MIN: u8 = 2;

/// Latest price against both moving averages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendContext {
    pub price: f64,
    pub ma_short: f64,
    pub ma_long: f64,
}

/// Latest price against the buffered support/resistance band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneContext {
    pub price: f64,
    pub support: f64,
    pub resistance: f64,
}

impl ZoneContext {
    pub fn support_band(&self) -> f64 {
        self.support * SUPPORT_BUFFER
    }

    pub fn resistance_band(&self) -> f64 {
        self.resistance * RESISTANCE_BUFFER
    }
}

pub fn trend_rules() -> RuleTable<TrendContext, TrendSignal> {
    RuleTable::<TrendContext, TrendSignal>::new("trend", "near_averages", TrendSignal::Neutral)
        .rule(
            "price_above_short_above_long",
            |c| c.price > c.ma_short && c.ma_short > c.ma_long,
            TrendSignal::StrongBullish,
        )
        .rule(
            "price_above_short",
            |c| c.price > c.ma_short,
            TrendSignal::MixedBullish,
        )
        .rule(
            "price_below_short_below_long",
            |c| c.price < c.ma_short && c.ma_short < c.ma_long,
            TrendSignal::StrongBearish,
        )
}

pub fn volatility_regime_rules() -> RuleTable<f64, VolatilityRegime> {
    RuleTable::<f64, VolatilityRegime>::new(
        "volatility_regime",
        "high_mean_abs_return",
        VolatilityRegime::High,
    )
    .rule(
        "low_mean_abs_return",
        |v| *v < REGIME_LOW_MAX,
        VolatilityRegime::Low,
    )
    .rule(
        "medium_mean_abs_return",
        |v| *v < REGIME_MEDIUM_MAX,
        VolatilityRegime::Medium,
    )
}

pub fn risk_rules() -> RuleTable<f64, RiskLabel> {
    RuleTable::<f64, RiskLabel>::new("risk", "high_return_std", RiskLabel::High)
        .rule("low_return_std", |v| *v < RISK_LOW_MAX, RiskLabel::Low)
        .rule("medium_return_std", |v| *v < RISK_MEDIUM_MAX, RiskLabel::Medium)
}

pub fn zone_rules() -> RuleTable<ZoneContext, SupportResistanceZone> {
    RuleTable::<ZoneContext, SupportResistanceZone>::new(
        "support_resistance",
        "near_resistance",
        SupportResistanceZone::NearResistance,
    )
    .rule(
        "inside_buffered_band",
        |c| c.price > c.support_band() && c.price < c.resistance_band(),
        SupportResistanceZone::Safe,
    )
    .rule(
        "at_or_below_support_band",
        |c| c.price <= c.support_band(),
        SupportResistanceZone::NearSupport,
    )
}

pub fn recommendation_rules() -> RuleTable<u8, Recommendation> {
    RuleTable::<u8, Recommendation>::new("recommendation", "low_score", Recommendation::Sell)
        .rule("score_buy", |s| *s >= SCORE_BUY_MIN, Recommendation::Buy)
        .rule("score_hold", |s| *s >= SCORE_HOLD_MIN, Recommendation::Hold)
}

pub fn return_label_rules() -> RuleTable<u8, ReturnLabel> {
    RuleTable::<u8, ReturnLabel>::new("return", "low_score", ReturnLabel::Negative)
        .rule("score_buy", |s| *s >= SCORE_BUY_MIN, ReturnLabel::Positive)
        .rule("score_hold", |s| *s >= SCORE_HOLD_MIN, ReturnLabel::Mixed)
}

/// Price strictly above the short moving average reads as bullish
pub fn direction_label(price: f64, ma_short: f64) -> DirectionLabel {
    if price > ma_short {
        DirectionLabel::Bullish
    } else {
        DirectionLabel::Bearish
    }
}

pub fn performance_label(total_return_pct: f64) -> PerformanceLabel {
    if total_return_pct > 0.0 {
        PerformanceLabel::Positive
    } else {
        PerformanceLabel::Negative
    }
}
