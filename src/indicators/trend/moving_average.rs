//! Simple moving average of closing prices

use crate::common::math;
use crate::models::PriceSeries;

/// Trailing mean of the closes over `window` points.
///
/// Undefined for the first `window - 1` indices, and everywhere when the
/// series is shorter than the window.
pub fn moving_average(series: &PriceSeries, window: usize) -> Vec<Option<f64>> {
    let closes: Vec<Option<f64>> = series.closes().into_iter().map(Some).collect();
    math::rolling_apply(&closes, window, math::mean)
}
