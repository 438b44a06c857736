//! Memoized reports keyed by series content and analysis parameters

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::core::pipeline::{AnalysisError, DateRange};
use crate::indicators::IndicatorConfig;
use crate::models::PriceSeries;
use crate::reports::AnalysisReport;

/// SHA-256 over every field of every point, hex encoded
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesFingerprint(String);

impl SeriesFingerprint {
    pub fn of(series: &PriceSeries) -> Self {
        let mut hasher = Sha256::new();
        for p in series.points() {
            hasher.update(p.date.to_string().as_bytes());
            for value in [
                p.open,
                p.high,
                p.low,
                p.close,
                p.last,
                p.volume_shares,
                p.volume_trades,
                p.turnover,
                p.vwap,
            ] {
                hasher.update(value.to_bits().to_le_bytes());
            }
        }
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SeriesFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub fingerprint: SeriesFingerprint,
    pub config: IndicatorConfig,
    pub range: DateRange,
}

/// Report cache owned by one session. Purely an optimization: a miss
/// recomputes the same report.
#[derive(Debug, Default)]
pub struct AnalysisCache {
    entries: HashMap<CacheKey, Arc<AnalysisReport>>,
    hits: u64,
    misses: u64,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<AnalysisReport>> {
        self.entries.get(key).cloned()
    }

    pub fn get_or_compute<F>(
        &mut self,
        key: CacheKey,
        compute: F,
    ) -> Result<Arc<AnalysisReport>, AnalysisError>
    where
        F: FnOnce() -> Result<AnalysisReport, AnalysisError>,
    {
        if let Some(report) = self.entries.get(&key) {
            self.hits += 1;
            debug!(fingerprint = %key.fingerprint, range = %key.range, "Report cache hit");
            return Ok(Arc::clone(report));
        }

        self.misses += 1;
        let report = Arc::new(compute()?);
        self.entries.insert(key, Arc::clone(&report));
        Ok(report)
    }

    /// Drop every entry computed from `fingerprint`; returns how many were removed.
    pub fn invalidate(&mut self, fingerprint: &SeriesFingerprint) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| &key.fingerprint != fingerprint);
        let removed = before - self.entries.len();
        debug!(%fingerprint, removed, "Invalidated cached reports");
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
