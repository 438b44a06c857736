//! Categorical verdicts produced by the signal evaluator.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! display_as_label {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

/// Price position relative to the short and long moving averages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendSignal {
    StrongBullish,
    MixedBullish,
    StrongBearish,
    Neutral,
    InsufficientData,
}

impl TrendSignal {
    pub fn label(&self) -> &'static str {
        match self {
            Self::StrongBullish => "STRONG_BULLISH",
            Self::MixedBullish => "MIXED_BULLISH",
            Self::StrongBearish => "STRONG_BEARISH",
            Self::Neutral => "NEUTRAL",
            Self::InsufficientData => "INSUFFICIENT_DATA",
        }
    }
}

/// Display banding of the mean absolute daily return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolatilityRegime {
    Low,
    Medium,
    High,
    InsufficientData,
}

impl VolatilityRegime {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::InsufficientData => "INSUFFICIENT_DATA",
        }
    }
}

/// Where the price sits inside the buffered support/resistance band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupportResistanceZone {
    Safe,
    NearSupport,
    NearResistance,
    InsufficientData,
}

impl SupportResistanceZone {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::NearSupport => "NEAR_SUPPORT",
            Self::NearResistance => "NEAR_RESISTANCE",
            Self::InsufficientData => "INSUFFICIENT_DATA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Buy,
    Hold,
    Sell,
    InsufficientData,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Hold => "HOLD",
            Self::Sell => "SELL",
            Self::InsufficientData => "INSUFFICIENT_DATA",
        }
    }
}

/// Return sub-label shown next to the score, banded like the recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnLabel {
    Positive,
    Mixed,
    Negative,
}

impl ReturnLabel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Mixed => "MIXED",
            Self::Negative => "NEGATIVE",
        }
    }
}

/// Risk sub-label on the return standard deviation (scoring-side banding)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLabel {
    Low,
    Medium,
    High,
}

impl RiskLabel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectionLabel {
    Bullish,
    Bearish,
}

impl DirectionLabel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bullish => "BULLISH",
            Self::Bearish => "BEARISH",
        }
    }
}

/// Sign of the whole-period return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PerformanceLabel {
    Positive,
    Negative,
}

impl PerformanceLabel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
        }
    }
}

display_as_label!(TrendSignal);
display_as_label!(VolatilityRegime);
display_as_label!(SupportResistanceZone);
display_as_label!(Recommendation);
display_as_label!(ReturnLabel);
display_as_label!(RiskLabel);
display_as_label!(DirectionLabel);
display_as_label!(PerformanceLabel);

/// Which rule decided a category, for explainability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalReason {
    pub category: String,
    pub rule: String,
}

/// Snapshot verdict for the latest point of a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalVerdict {
    pub trend_signal: TrendSignal,
    pub volatility_regime: VolatilityRegime,
    pub support_resistance_zone: SupportResistanceZone,
    /// 0..=5, undefined when any scored input is undefined
    pub aggregate_score: Option<u8>,
    pub overall_recommendation: Recommendation,
    pub return_label: Option<ReturnLabel>,
    pub risk_label: Option<RiskLabel>,
    pub direction_label: Option<DirectionLabel>,
    pub period_performance: Option<PerformanceLabel>,
    pub distance_to_support_pct: Option<f64>,
    pub distance_to_resistance_pct: Option<f64>,
    pub reasons: Vec<SignalReason>,
}
