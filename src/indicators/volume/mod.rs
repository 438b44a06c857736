//! Volume-weighted benchmarks

pub mod vwap;

pub use vwap::*;
