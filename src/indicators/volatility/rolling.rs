//! Rolling standard deviations

use crate::common::math;
use crate::indicators::momentum::daily_return_pct;
use crate::models::PriceSeries;

/// Sample standard deviation of the daily return (in percent) over the
/// trailing `window` returns.
///
/// The first return is undefined, so the first defined value sits at index
/// `window`.
pub fn rolling_volatility(series: &PriceSeries, window: usize) -> Vec<Option<f64>> {
    rolling_volatility_of(&daily_return_pct(series), window)
}

/// Same as [`rolling_volatility`] on an already computed return series.
pub fn rolling_volatility_of(returns: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    math::rolling_apply(returns, window, math::sample_std)
}

/// Sample standard deviation of the close price over the trailing window
pub fn rolling_price_std(series: &PriceSeries, window: usize) -> Vec<Option<f64>> {
    let closes: Vec<Option<f64>> = series.closes().into_iter().map(Some).collect();
    math::rolling_apply(&closes, window, math::sample_std)
}
