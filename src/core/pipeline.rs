//! Price series to report, in one pass

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::indicators::{IndicatorConfig, IndicatorEngine, IndicatorError};
use crate::models::PriceSeries;
use crate::reports::{AnalysisReport, KeyMetrics, Period, SeriesStatistics};
use crate::services::DataFormatError;
use crate::signals::{advise, SignalEvaluator};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    DataFormat(#[from] DataFormatError),

    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    #[error("no price points in the selected period ({0})")]
    EmptySelection(DateRange),
}

/// Inclusive date filter; an open bound keeps that side of the series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn apply(&self, series: &PriceSeries) -> PriceSeries {
        series.between(self.from, self.to)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bound = |d: Option<NaiveDate>| {
            d.map(|d| d.to_string())
                .unwrap_or_else(|| "*".to_string())
        };
        write!(f, "{} .. {}", bound(self.from), bound(self.to))
    }
}

pub struct AnalysisPipeline {
    instrument: String,
    engine: IndicatorEngine,
    evaluator: SignalEvaluator,
}

impl AnalysisPipeline {
    pub fn new(
        instrument: impl Into<String>,
        config: IndicatorConfig,
    ) -> Result<Self, AnalysisError> {
        Ok(Self {
            instrument: instrument.into(),
            engine: IndicatorEngine::new(config)?,
            evaluator: SignalEvaluator::new(),
        })
    }

    pub fn config(&self) -> &IndicatorConfig {
        self.engine.config()
    }

    /// Filter `series` to `range`, then compute indicators, verdict and texts.
    pub fn run(
        &self,
        series: &PriceSeries,
        range: DateRange,
    ) -> Result<AnalysisReport, AnalysisError> {
        let selected = range.apply(series);
        let empty = || AnalysisError::EmptySelection(range);
        let (from, to) = selected.date_range().ok_or_else(empty)?;

        let output = self.engine.compute(&selected);
        let verdict = self.evaluator.evaluate_output(&output);
        let snapshot = output.snapshot.ok_or_else(empty)?;
        let key_metrics = KeyMetrics::from_series(&selected).ok_or_else(empty)?;
        let statistics = SeriesStatistics::describe(&selected).ok_or_else(empty)?;
        let advice = advise(&verdict, &snapshot);

        info!(
            instrument = %self.instrument,
            points = selected.len(),
            %from,
            %to,
            recommendation = %verdict.overall_recommendation,
            "Analysis complete"
        );

        Ok(AnalysisReport {
            instrument: self.instrument.clone(),
            period: Period {
                from,
                to,
                points: selected.len(),
            },
            windows: *self.engine.config(),
            key_metrics,
            statistics,
            snapshot,
            verdict,
            advice,
            indicators: output.series,
        })
    }
}
