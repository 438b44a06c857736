//! Unit tests for the key metrics block

use chrono::NaiveDate;
use equitrix::models::{PricePoint, PriceSeries};
use equitrix::reports::KeyMetrics;

fn point(day: u32, low: f64, high: f64, close: f64, shares: f64) -> PricePoint {
    PricePoint::new(NaiveDate::from_ymd_opt(2024, 2, day).unwrap(), close, high, low, close)
        .with_volume(shares, 10.0, shares * close)
}

#[test]
fn test_key_metrics() {
    let series = PriceSeries::new(vec![
        point(1, 95.0, 104.0, 100.0, 1_000.0),
        point(2, 99.0, 112.0, 110.0, 2_500.0),
    ])
    .unwrap();
    let km = KeyMetrics::from_series(&series).unwrap();

    assert_eq!(km.current_close, 110.0);
    assert!((km.change_pct.unwrap() - 10.0).abs() < 1e-9);
    assert_eq!(km.period_high, 112.0);
    assert_eq!(km.period_low, 95.0);
    assert_eq!(km.total_volume, 3_500.0);
}

#[test]
fn test_single_point_change_is_zero() {
    let series = PriceSeries::new(vec![point(1, 9.0, 11.0, 10.0, 50.0)]).unwrap();
    let km = KeyMetrics::from_series(&series).unwrap();
    assert_eq!(km.change_pct, Some(0.0));
}

#[test]
fn test_zero_previous_close_leaves_change_undefined() {
    let series = PriceSeries::new(vec![
        point(1, 0.0, 0.0, 0.0, 0.0),
        point(2, 1.0, 2.0, 1.5, 10.0),
    ])
    .unwrap();
    let km = KeyMetrics::from_series(&series).unwrap();
    assert!(km.change_pct.is_none());
}

#[test]
fn test_empty_series() {
    assert!(KeyMetrics::from_series(&PriceSeries::default()).is_none());
}
