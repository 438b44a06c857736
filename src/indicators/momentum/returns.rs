//! Close-to-close returns

use crate::common::math;
use crate::models::PriceSeries;

/// Percentage change from the previous close.
///
/// Undefined at index 0 and wherever the previous close is zero.
pub fn daily_return_pct(series: &PriceSeries) -> Vec<Option<f64>> {
    let points = series.points();
    (0..points.len())
        .map(|i| {
            if i == 0 {
                return None;
            }
            math::pct_change(points[i - 1].close, points[i].close).map(|r| r * 100.0)
        })
        .collect()
}

/// Compounded growth since the first point: product of `(1 + r)` minus one.
///
/// The first point is the base (0.0). A zero close breaks the chain, so every
/// later value is undefined rather than compounded across the gap.
pub fn cumulative_return(series: &PriceSeries) -> Vec<Option<f64>> {
    let points = series.points();
    let mut growth = Some(1.0_f64);
    let mut out = Vec::with_capacity(points.len());

    for i in 0..points.len() {
        if i > 0 {
            growth = growth.and_then(|g| {
                math::pct_change(points[i - 1].close, points[i].close).map(|r| g * (1.0 + r))
            });
        }
        out.push(growth.map(|g| g - 1.0));
    }
    out
}

/// Whole-period return in percent, first close to last close
pub fn total_return_pct(series: &PriceSeries) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }
    let first = series.first()?.close;
    let last = series.last()?.close;
    math::pct_change(first, last).map(|r| r * 100.0)
}
