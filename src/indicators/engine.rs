//! Builds the full indicator table and the latest-point summary.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{cumulative_return, daily_return_pct, total_return_pct};
use crate::indicators::structure::support_resistance;
use crate::indicators::trend::moving_average;
use crate::indicators::volatility::{rolling_price_std, rolling_volatility_of};
use crate::indicators::volume::vwap_deviation_pct;
use crate::models::{IndicatorPoint, IndicatorSeries, IndicatorSnapshot, PriceSeries};

pub const DEFAULT_SHORT_WINDOW: usize = 20;
pub const DEFAULT_LONG_WINDOW: usize = 50;
pub const DEFAULT_VOLATILITY_WINDOW: usize = 20;
pub const DEFAULT_SUPPORT_RESISTANCE_WINDOW: usize = 30;

/// Window sizes for the rolling indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub short_window: usize,
    pub long_window: usize,
    pub volatility_window: usize,
    pub support_resistance_window: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            short_window: DEFAULT_SHORT_WINDOW,
            long_window: DEFAULT_LONG_WINDOW,
            volatility_window: DEFAULT_VOLATILITY_WINDOW,
            support_resistance_window: DEFAULT_SUPPORT_RESISTANCE_WINDOW,
        }
    }
}

impl IndicatorConfig {
    pub fn validate(&self) -> Result<(), IndicatorError> {
        let checks = [
            ("short_window", self.short_window, 1),
            ("long_window", self.long_window, 1),
            // sample standard deviation needs two observations
            ("volatility_window", self.volatility_window, 2),
            ("support_resistance_window", self.support_resistance_window, 1),
        ];
        for (name, value, min) in checks {
            if value < min {
                return Err(IndicatorError::InvalidWindow { name, value, min });
            }
        }
        Ok(())
    }
}

/// Indicator table plus the scalar summary of its final point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorOutput {
    pub series: IndicatorSeries,
    /// `None` only for an empty price series
    pub snapshot: Option<IndicatorSnapshot>,
}

pub struct IndicatorEngine {
    config: IndicatorConfig,
}

impl IndicatorEngine {
    pub fn new(config: IndicatorConfig) -> Result<Self, IndicatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Derive every indicator for `prices`. Pure: no state is kept between calls.
    pub fn compute(&self, prices: &PriceSeries) -> IndicatorOutput {
        let cfg = &self.config;
        debug!(
            points = prices.len(),
            short = cfg.short_window,
            long = cfg.long_window,
            volatility = cfg.volatility_window,
            "Computing indicators"
        );
        if prices.len() < cfg.long_window {
            warn!(
                points = prices.len(),
                required = cfg.long_window,
                "History shorter than the long moving average window"
            );
        }

        let ma_short = moving_average(prices, cfg.short_window);
        let ma_long = moving_average(prices, cfg.long_window);
        let returns = daily_return_pct(prices);
        let volatility = rolling_volatility_of(&returns, cfg.volatility_window);
        let cumulative = cumulative_return(prices);
        let price_std = rolling_price_std(prices, cfg.volatility_window);
        let vwap_deviation = vwap_deviation_pct(prices);

        let points = prices
            .points()
            .iter()
            .enumerate()
            .map(|(i, p)| IndicatorPoint {
                date: p.date,
                close: p.close,
                ma_short: ma_short[i],
                ma_long: ma_long[i],
                daily_return_pct: returns[i],
                volatility_20d: volatility[i],
                cumulative_return: cumulative[i],
                price_std_20d: price_std[i],
                vwap_deviation_pct: vwap_deviation[i],
            })
            .collect();
        let series = IndicatorSeries { points };
        let snapshot = self.snapshot(prices, &series);

        IndicatorOutput { series, snapshot }
    }

    fn snapshot(
        &self,
        prices: &PriceSeries,
        series: &IndicatorSeries,
    ) -> Option<IndicatorSnapshot> {
        let first = prices.first()?;
        let last = prices.last()?;
        let latest = series.latest()?;

        let returns = series.defined_returns();
        let abs_returns: Vec<f64> = returns.iter().map(|r| r.abs()).collect();
        let price_stds: Vec<f64> = series.points.iter().filter_map(|p| p.price_std_20d).collect();

        Some(IndicatorSnapshot {
            date: last.date,
            current_price: last.close,
            first_price: first.close,
            vwap: last.vwap,
            ma_short: latest.ma_short,
            ma_long: latest.ma_long,
            total_return_pct: total_return_pct(prices),
            return_std_pct: math::sample_std(&returns),
            mean_abs_return_pct: math::mean(&abs_returns),
            mean_price_std: math::mean(&price_stds),
            support_resistance: support_resistance(prices, self.config.support_resistance_window),
        })
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self {
            config: IndicatorConfig::default(),
        }
    }
}
