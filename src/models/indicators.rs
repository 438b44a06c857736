use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Derived values for one point of the price series.
///
/// `None` marks a value that is undefined at this index (rolling window not
/// yet full, or a zero divisor); it serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    pub close: f64,
    pub ma_short: Option<f64>,
    pub ma_long: Option<f64>,
    pub daily_return_pct: Option<f64>,
    pub volatility_20d: Option<f64>,
    pub cumulative_return: Option<f64>,
    pub price_std_20d: Option<f64>,
    pub vwap_deviation_pct: Option<f64>,
}

/// Indicator table aligned by index with the source `PriceSeries`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorSeries {
    pub points: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&IndicatorPoint> {
        self.points.last()
    }

    /// Every defined daily return, in order
    pub fn defined_returns(&self) -> Vec<f64> {
        self.points.iter().filter_map(|p| p.daily_return_pct).collect()
    }
}

/// Support (lowest low) and resistance (highest high) over a trailing window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportResistanceLevels {
    pub support: f64,
    pub resistance: f64,
    /// Number of points the levels were taken over, after clipping
    pub window: usize,
}

impl SupportResistanceLevels {
    /// Distance from `price` down to support, as a percentage of `price`
    pub fn distance_to_support_pct(&self, price: f64) -> Option<f64> {
        if price == 0.0 {
            return None;
        }
        Some((price - self.support) / price * 100.0)
    }

    /// Distance from `price` up to resistance, as a percentage of `price`
    pub fn distance_to_resistance_pct(&self, price: f64) -> Option<f64> {
        if price == 0.0 {
            return None;
        }
        Some((self.resistance - price) / price * 100.0)
    }
}

/// Scalar summaries for the final point of the series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub date: NaiveDate,
    pub current_price: f64,
    pub first_price: f64,
    pub vwap: f64,
    pub ma_short: Option<f64>,
    pub ma_long: Option<f64>,
    /// Whole-period return in percent, undefined below two points
    pub total_return_pct: Option<f64>,
    /// Sample standard deviation of every defined daily return
    pub return_std_pct: Option<f64>,
    /// Mean of the absolute daily returns
    pub mean_abs_return_pct: Option<f64>,
    /// Mean of the defined rolling close-price standard deviations
    pub mean_price_std: Option<f64>,
    pub support_resistance: Option<SupportResistanceLevels>,
}
