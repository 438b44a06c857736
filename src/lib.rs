//! Indicator and signal pipeline for a single equity's daily price history.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod signals;
