//! A loaded price series plus its report cache

use std::sync::Arc;
use tracing::info;

use crate::core::cache::{AnalysisCache, CacheKey, SeriesFingerprint};
use crate::core::pipeline::{AnalysisError, AnalysisPipeline, DateRange};
use crate::models::PriceSeries;
use crate::reports::AnalysisReport;
use crate::services::PriceSource;

pub struct AnalysisSession<S: PriceSource> {
    source: S,
    pipeline: AnalysisPipeline,
    series: PriceSeries,
    fingerprint: SeriesFingerprint,
    cache: AnalysisCache,
}

impl<S: PriceSource> AnalysisSession<S> {
    /// Load the source once and prepare an empty cache.
    pub fn open(source: S, pipeline: AnalysisPipeline) -> Result<Self, AnalysisError> {
        let series = source.load()?;
        let fingerprint = SeriesFingerprint::of(&series);
        info!(
            source = %source.describe(),
            points = series.len(),
            %fingerprint,
            "Opened analysis session"
        );
        Ok(Self {
            source,
            pipeline,
            series,
            fingerprint,
            cache: AnalysisCache::new(),
        })
    }

    /// Report for `range`, served from the cache when already computed.
    pub fn analyze(&mut self, range: DateRange) -> Result<Arc<AnalysisReport>, AnalysisError> {
        let key = CacheKey {
            fingerprint: self.fingerprint.clone(),
            config: *self.pipeline.config(),
            range,
        };
        let pipeline = &self.pipeline;
        let series = &self.series;
        self.cache.get_or_compute(key, || pipeline.run(series, range))
    }

    /// Re-read the source. Entries for the previous content are invalidated;
    /// returns whether the content changed.
    pub fn reload(&mut self) -> Result<bool, AnalysisError> {
        let series = self.source.load()?;
        let fingerprint = SeriesFingerprint::of(&series);
        let changed = fingerprint != self.fingerprint;

        self.cache.invalidate(&self.fingerprint);
        info!(
            source = %self.source.describe(),
            points = series.len(),
            changed,
            "Reloaded price history"
        );
        self.series = series;
        self.fingerprint = fingerprint;
        Ok(changed)
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    pub fn fingerprint(&self) -> &SeriesFingerprint {
        &self.fingerprint
    }

    pub fn cache(&self) -> &AnalysisCache {
        &self.cache
    }
}
