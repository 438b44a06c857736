//! Price source interface the analysis session loads from.

use crate::models::{PricePoint, PriceSeries};
use crate::services::error::DataFormatError;

pub trait PriceSource {
    /// Human-readable origin, used in logs
    fn describe(&self) -> String;

    /// Load the full history, sorted ascending by date
    fn load(&self) -> Result<PriceSeries, DataFormatError>;
}

/// Source backed by points already in memory
pub struct StaticPriceSource {
    points: Vec<PricePoint>,
}

impl StaticPriceSource {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }
}

impl PriceSource for StaticPriceSource {
    fn describe(&self) -> String {
        format!("in-memory ({} points)", self.points.len())
    }

    fn load(&self) -> Result<PriceSeries, DataFormatError> {
        Ok(PriceSeries::new(self.points.clone())?)
    }
}
