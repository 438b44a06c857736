//! Headline metrics for the selected period

use serde::{Deserialize, Serialize};

use crate::common::math;
use crate::models::PriceSeries;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    pub current_close: f64,
    /// Change against the previous close in percent; 0 for a single point,
    /// undefined when the previous close is zero
    pub change_pct: Option<f64>,
    pub period_high: f64,
    pub period_low: f64,
    pub total_volume: f64,
}

impl KeyMetrics {
    pub fn from_series(series: &PriceSeries) -> Option<Self> {
        let points = series.points();
        let current = points.last()?;
        let change_pct = match points.len() {
            1 => Some(0.0),
            n => math::pct_change(points[n - 2].close, current.close).map(|r| r * 100.0),
        };
        let highs: Vec<f64> = points.iter().map(|p| p.high).collect();
        let lows: Vec<f64> = points.iter().map(|p| p.low).collect();

        Some(Self {
            current_close: current.close,
            change_pct,
            period_high: math::max(&highs)?,
            period_low: math::min(&lows)?,
            total_volume: points.iter().map(|p| p.volume_shares).sum(),
        })
    }
}
