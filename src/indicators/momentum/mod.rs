//! Momentum indicators: daily and cumulative returns

pub mod returns;

pub use returns::*;
