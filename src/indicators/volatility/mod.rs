//! Volatility indicators: rolling standard deviations

pub mod rolling;

pub use rolling::*;
