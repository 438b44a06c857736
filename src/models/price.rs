//! Daily price records and the ordered series they form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invariant violated while building a `PriceSeries`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("duplicate trading day: {0}")]
    DuplicateDate(NaiveDate),
}

/// One trading day of market data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub last: f64,
    pub volume_shares: f64,
    pub volume_trades: f64,
    pub turnover: f64,
    pub vwap: f64,
}

impl PricePoint {
    /// Build a point from OHLC values; `last` and `vwap` default to the close
    /// and the volume fields to zero.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            last: close,
            volume_shares: 0.0,
            volume_trades: 0.0,
            turnover: 0.0,
            vwap: close,
        }
    }

    pub fn with_volume(mut self, shares: f64, trades: f64, turnover: f64) -> Self {
        self.volume_shares = shares;
        self.volume_trades = trades;
        self.turnover = turnover;
        self
    }

    pub fn with_vwap(mut self, vwap: f64) -> Self {
        self.vwap = vwap;
        self
    }

    pub fn with_last(mut self, last: f64) -> Self {
        self.last = last;
        self
    }
}

/// Price history sorted ascending by date, one point per day.
///
/// Immutable once built; filtering produces a new series.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Sort the points by date and reject duplicate days.
    pub fn new(mut points: Vec<PricePoint>) -> Result<Self, SeriesError> {
        points.sort_by_key(|p| p.date);
        if let Some(pair) = points.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(SeriesError::DuplicateDate(pair[0].date));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.first()?.date, self.last()?.date))
    }

    /// Points whose date falls inside `[from, to]`; an open bound keeps
    /// everything on that side.
    pub fn between(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        let points = self
            .points
            .iter()
            .filter(|p| from.map_or(true, |f| p.date >= f) && to.map_or(true, |t| p.date <= t))
            .cloned()
            .collect();
        Self { points }
    }

    /// The trailing `window` points, clipped to the series length.
    pub fn tail(&self, window: usize) -> &[PricePoint] {
        let start = self.points.len().saturating_sub(window);
        &self.points[start..]
    }
}
