//! Close price compared with the session VWAP

use crate::models::PriceSeries;

/// `(close - vwap) / vwap * 100` per point; undefined where vwap is zero.
pub fn vwap_deviation_pct(series: &PriceSeries) -> Vec<Option<f64>> {
    series
        .points()
        .iter()
        .map(|p| {
            if p.vwap == 0.0 {
                None
            } else {
                Some((p.close - p.vwap) / p.vwap * 100.0)
            }
        })
        .collect()
}
