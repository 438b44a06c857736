use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("window '{name}' must be at least {min}, got {value}")]
    InvalidWindow {
        name: &'static str,
        value: usize,
        min: usize,
    },
}
