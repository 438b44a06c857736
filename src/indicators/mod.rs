pub mod engine;
pub mod error;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use engine::{IndicatorConfig, IndicatorEngine, IndicatorOutput};
pub use error::IndicatorError;
