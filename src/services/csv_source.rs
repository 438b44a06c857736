//! Semicolon-separated price history with decimal-comma numbers.
//!
//! Expected header (order-independent):
//! `Date;Open;High;Low;Last;Close;Number of Shares;Number of Trades;Turnover;vwap`

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::models::{PricePoint, PriceSeries};
use crate::services::error::DataFormatError;
use crate::services::market_data::PriceSource;

pub const COL_DATE: &str = "Date";
pub const COL_OPEN: &str = "Open";
pub const COL_HIGH: &str = "High";
pub const COL_LOW: &str = "Low";
pub const COL_LAST: &str = "Last";
pub const COL_CLOSE: &str = "Close";
pub const COL_SHARES: &str = "Number of Shares";
pub const COL_TRADES: &str = "Number of Trades";
pub const COL_TURNOVER: &str = "Turnover";
pub const COL_VWAP: &str = "vwap";

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub struct CsvPriceSource {
    path: PathBuf,
}

impl CsvPriceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PriceSource for CsvPriceSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<PriceSeries, DataFormatError> {
        let file = File::open(&self.path).map_err(|source| DataFormatError::Io {
            path: self.describe(),
            source,
        })?;
        let series = parse_prices(file)?;
        info!(
            path = %self.path.display(),
            points = series.len(),
            "Loaded price history"
        );
        Ok(series)
    }
}

/// Column positions resolved from the header row
struct Columns {
    indices: HashMap<&'static str, usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, DataFormatError> {
        let wanted = [
            COL_DATE, COL_OPEN, COL_HIGH, COL_LOW, COL_LAST, COL_CLOSE, COL_SHARES, COL_TRADES,
            COL_TURNOVER, COL_VWAP,
        ];
        let mut indices = HashMap::new();
        for name in wanted {
            let position = headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| DataFormatError::MissingColumn(name.to_string()))?;
            indices.insert(name, position);
        }
        Ok(Self { indices })
    }

    fn raw<'r>(&self, record: &'r StringRecord, name: &'static str) -> &'r str {
        self.indices
            .get(name)
            .and_then(|&i| record.get(i))
            .unwrap_or("")
    }

    fn number(
        &self,
        record: &StringRecord,
        name: &'static str,
        line: u64,
    ) -> Result<f64, DataFormatError> {
        let raw = self.raw(record, name);
        parse_decimal(raw).ok_or_else(|| DataFormatError::InvalidNumber {
            line,
            column: name.to_string(),
            value: raw.to_string(),
        })
    }
}

/// Parse a full CSV document into a sorted series.
pub fn parse_prices<R: Read>(reader: R) -> Result<PriceSeries, DataFormatError> {
    let mut csv = ReaderBuilder::new()
        .delimiter(b';')
        .trim(Trim::All)
        .from_reader(reader);

    let columns = Columns::resolve(csv.headers()?)?;

    let mut points = Vec::new();
    for record in csv.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let raw_date = columns.raw(&record, COL_DATE);
        let date = parse_date(raw_date).ok_or_else(|| DataFormatError::InvalidDate {
            line,
            value: raw_date.to_string(),
        })?;

        points.push(PricePoint {
            date,
            open: columns.number(&record, COL_OPEN, line)?,
            high: columns.number(&record, COL_HIGH, line)?,
            low: columns.number(&record, COL_LOW, line)?,
            close: columns.number(&record, COL_CLOSE, line)?,
            last: columns.number(&record, COL_LAST, line)?,
            volume_shares: columns.number(&record, COL_SHARES, line)?,
            volume_trades: columns.number(&record, COL_TRADES, line)?,
            turnover: columns.number(&record, COL_TURNOVER, line)?,
            vwap: columns.number(&record, COL_VWAP, line)?,
        });
    }

    if points.is_empty() {
        return Err(DataFormatError::Empty);
    }
    debug!(rows = points.len(), "Parsed price rows");
    Ok(PriceSeries::new(points)?)
}

/// Decimal-comma number (`"12,34"`), with spaces used as digit grouping.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let normalized: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
