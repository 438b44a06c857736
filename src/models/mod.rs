//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod price;
pub mod signal;

pub use indicators::{IndicatorPoint, IndicatorSeries, IndicatorSnapshot, SupportResistanceLevels};
pub use price::{PricePoint, PriceSeries, SeriesError};
pub use signal::{
    DirectionLabel, PerformanceLabel, Recommendation, ReturnLabel, RiskLabel, SignalVerdict,
    SupportResistanceZone, TrendSignal, VolatilityRegime,
};
