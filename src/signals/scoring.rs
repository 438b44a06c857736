//! Aggregate 0-5 score from four boolean checks

use serde::{Deserialize, Serialize};

use crate::signals::categories::SUPPORT_BUFFER;

pub const POSITIVE_RETURN_POINTS: u8 = 2;
pub const CONTAINED_VOLATILITY_POINTS: u8 = 1;
pub const ABOVE_SHORT_AVERAGE_POINTS: u8 = 1;
pub const ABOVE_SUPPORT_POINTS: u8 = 1;

/// Return standard deviation (percent) under which volatility earns a point
pub const SCORE_VOLATILITY_MAX: f64 = 4.0;

pub const MAX_SCORE: u8 = POSITIVE_RETURN_POINTS
    + CONTAINED_VOLATILITY_POINTS
    + ABOVE_SHORT_AVERAGE_POINTS
    + ABOVE_SUPPORT_POINTS;

/// Fully defined inputs for the score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    pub total_return_pct: f64,
    pub return_std_pct: f64,
    pub price: f64,
    pub ma_short: f64,
    pub support: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub name: String,
    pub points: u8,
    pub awarded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub components: Vec<ScoreComponent>,
    pub total: u8,
}

/// Score the four checks. All-or-nothing per check, no weighting.
pub fn score(inputs: &ScoreInputs) -> ScoreCard {
    let checks = [
        (
            "positive_total_return",
            POSITIVE_RETURN_POINTS,
            inputs.total_return_pct > 0.0,
        ),
        (
            "contained_volatility",
            CONTAINED_VOLATILITY_POINTS,
            inputs.return_std_pct < SCORE_VOLATILITY_MAX,
        ),
        (
            "price_above_short_average",
            ABOVE_SHORT_AVERAGE_POINTS,
            inputs.price > inputs.ma_short,
        ),
        (
            "price_above_support_band",
            ABOVE_SUPPORT_POINTS,
            inputs.price > inputs.support * SUPPORT_BUFFER,
        ),
    ];

    let components: Vec<ScoreComponent> = checks
        .iter()
        .map(|&(name, points, awarded)| ScoreComponent {
            name: name.to_string(),
            points,
            awarded,
        })
        .collect();
    let total = components
        .iter()
        .filter(|c| c.awarded)
        .map(|c| c.points)
        .sum();

    ScoreCard { components, total }
}

/// Shortcut returning only the total
pub fn aggregate_score(inputs: &ScoreInputs) -> u8 {
    score(inputs).total
}
