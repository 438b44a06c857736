//! Support and resistance levels detection

use crate::common::math;
use crate::models::{PriceSeries, SupportResistanceLevels};

/// Lowest low and highest high over the trailing `window` points.
///
/// Unlike the rolling indicators this clips to the available history: a
/// series shorter than the window uses every point. Undefined only when the
/// series (or the window) is empty.
pub fn support_resistance(series: &PriceSeries, window: usize) -> Option<SupportResistanceLevels> {
    let recent = series.tail(window);
    if recent.is_empty() {
        return None;
    }

    let lows: Vec<f64> = recent.iter().map(|p| p.low).collect();
    let highs: Vec<f64> = recent.iter().map(|p| p.high).collect();

    Some(SupportResistanceLevels {
        support: math::min(&lows)?,
        resistance: math::max(&highs)?,
        window: recent.len(),
    })
}
