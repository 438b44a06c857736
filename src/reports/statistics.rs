//! Descriptive statistics over price and volume columns

use serde::{Deserialize, Serialize};

use crate::common::math;
use crate::models::{PricePoint, PriceSeries};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub column: String,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation; only reported for price columns and
    /// undefined below two points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStatistics {
    pub price: Vec<ColumnStats>,
    pub volume: Vec<ColumnStats>,
}

type Extractor = fn(&PricePoint) -> f64;

fn open(p: &PricePoint) -> f64 {
    p.open
}
fn high(p: &PricePoint) -> f64 {
    p.high
}
fn low(p: &PricePoint) -> f64 {
    p.low
}
fn close(p: &PricePoint) -> f64 {
    p.close
}
fn shares(p: &PricePoint) -> f64 {
    p.volume_shares
}
fn trades(p: &PricePoint) -> f64 {
    p.volume_trades
}
fn turnover(p: &PricePoint) -> f64 {
    p.turnover
}

const PRICE_COLUMNS: [(&str, Extractor); 4] =
    [("Open", open), ("High", high), ("Low", low), ("Close", close)];

const VOLUME_COLUMNS: [(&str, Extractor); 3] = [
    ("Number of Shares", shares),
    ("Number of Trades", trades),
    ("Turnover", turnover),
];

fn column_stats(
    series: &PriceSeries,
    name: &str,
    extract: Extractor,
    with_std: bool,
) -> Option<ColumnStats> {
    let values: Vec<f64> = series.points().iter().map(extract).collect();
    Some(ColumnStats {
        column: name.to_string(),
        mean: math::mean(&values)?,
        min: math::min(&values)?,
        max: math::max(&values)?,
        std: if with_std { math::sample_std(&values) } else { None },
    })
}

impl SeriesStatistics {
    /// `None` for an empty series
    pub fn describe(series: &PriceSeries) -> Option<Self> {
        let price = PRICE_COLUMNS
            .iter()
            .map(|(name, f)| column_stats(series, name, *f, true))
            .collect::<Option<Vec<_>>>()?;
        let volume = VOLUME_COLUMNS
            .iter()
            .map(|(name, f)| column_stats(series, name, *f, false))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { price, volume })
    }
}
