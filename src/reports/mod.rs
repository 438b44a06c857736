//! Report assembled for the presentation layer.

pub mod format;
pub mod kpi;
pub mod render;
pub mod statistics;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::indicators::IndicatorConfig;
use crate::models::{IndicatorSeries, IndicatorSnapshot, SignalVerdict};
use crate::signals::AdviceSet;

pub use kpi::KeyMetrics;
pub use render::{render_json, render_text};
pub use statistics::{ColumnStats, SeriesStatistics};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub points: usize,
}

/// Everything derived from one price series in one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub instrument: String,
    pub period: Period,
    pub windows: IndicatorConfig,
    pub key_metrics: KeyMetrics,
    pub statistics: SeriesStatistics,
    pub snapshot: IndicatorSnapshot,
    pub verdict: SignalVerdict,
    pub advice: AdviceSet,
    pub indicators: IndicatorSeries,
}
