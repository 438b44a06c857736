//! Unit tests for the report cache and series fingerprints

use chrono::{Duration, NaiveDate};
use equitrix::core::{
    AnalysisCache, AnalysisError, AnalysisPipeline, CacheKey, DateRange, SeriesFingerprint,
};
use equitrix::indicators::IndicatorConfig;
use equitrix::models::{PricePoint, PriceSeries};
use std::sync::Arc;

fn create_series(closes: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| PricePoint::new(start + Duration::days(i as i64), c, c, c, c))
        .collect();
    PriceSeries::new(points).unwrap()
}

fn key(series: &PriceSeries, range: DateRange) -> CacheKey {
    CacheKey {
        fingerprint: SeriesFingerprint::of(series),
        config: IndicatorConfig::default(),
        range,
    }
}

#[test]
fn test_fingerprint_tracks_content() {
    let a = create_series(&[10.0, 11.0, 12.0]);
    let b = create_series(&[10.0, 11.0, 12.0]);
    let c = create_series(&[10.0, 11.0, 12.5]);

    assert_eq!(SeriesFingerprint::of(&a), SeriesFingerprint::of(&b));
    assert_ne!(SeriesFingerprint::of(&a), SeriesFingerprint::of(&c));
    assert_eq!(SeriesFingerprint::of(&a).as_str().len(), 64);
}

#[test]
fn test_get_or_compute_memoizes() {
    let series = create_series(&[10.0, 11.0, 12.0]);
    let pipeline = AnalysisPipeline::new("TEST", IndicatorConfig::default()).unwrap();
    let mut cache = AnalysisCache::new();

    let first = cache
        .get_or_compute(key(&series, DateRange::all()), || pipeline.run(&series, DateRange::all()))
        .unwrap();
    let second = cache
        .get_or_compute(key(&series, DateRange::all()), || {
            panic!("cached report should be reused")
        })
        .unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.hits(), 1);
    assert_eq!(cache.misses(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_errors_are_not_cached() {
    let series = create_series(&[10.0, 11.0]);
    let mut cache = AnalysisCache::new();
    let range = DateRange::all();

    let result = cache.get_or_compute(key(&series, range), || {
        Err(AnalysisError::EmptySelection(range))
    });
    assert!(result.is_err());
    assert!(cache.is_empty());
}

#[test]
fn test_invalidate_by_fingerprint() {
    let pipeline = AnalysisPipeline::new("TEST", IndicatorConfig::default()).unwrap();
    let old = create_series(&[10.0, 11.0, 12.0]);
    let new = create_series(&[20.0, 21.0, 22.0]);
    let mut cache = AnalysisCache::new();

    let last_two = DateRange::new(NaiveDate::from_ymd_opt(2024, 1, 2), None);
    for range in [DateRange::all(), last_two] {
        cache
            .get_or_compute(key(&old, range), || pipeline.run(&old, range))
            .unwrap();
    }
    cache
        .get_or_compute(key(&new, DateRange::all()), || pipeline.run(&new, DateRange::all()))
        .unwrap();
    assert_eq!(cache.len(), 3);

    assert_eq!(cache.invalidate(&SeriesFingerprint::of(&old)), 2);
    assert_eq!(cache.len(), 1);
    assert!(cache.get(&key(&new, DateRange::all())).is_some());
    assert!(cache.get(&key(&old, DateRange::all())).is_none());

    cache.clear();
    assert!(cache.is_empty());
}
