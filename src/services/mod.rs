//! Price data sources.

pub mod csv_source;
pub mod error;
pub mod market_data;

pub use csv_source::CsvPriceSource;
pub use error::DataFormatError;
pub use market_data::{PriceSource, StaticPriceSource};
