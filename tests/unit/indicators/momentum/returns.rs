//! Unit tests for daily and cumulative returns

use chrono::{Duration, NaiveDate};
use equitrix::indicators::momentum::{cumulative_return, daily_return_pct, total_return_pct};
use equitrix::models::{PricePoint, PriceSeries};

fn create_series(closes: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| PricePoint::new(start + Duration::days(i as i64), c, c, c, c))
        .collect();
    PriceSeries::new(points).unwrap()
}

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("value should be defined");
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_daily_return_first_point_undefined() {
    let returns = daily_return_pct(&create_series(&[100.0, 110.0, 99.0]));
    assert_eq!(returns.len(), 3);
    assert!(returns[0].is_none());
    assert_close(returns[1], 10.0);
    assert_close(returns[2], -10.0);
}

#[test]
fn test_cumulative_return_starts_at_zero() {
    let cumulative = cumulative_return(&create_series(&[100.0, 110.0, 99.0]));
    assert_eq!(cumulative[0], Some(0.0));
    assert_close(cumulative[1], 0.1);
    assert_close(cumulative[2], -0.01);
}

#[test]
fn test_cumulative_return_scale_invariant() {
    let closes = [50.0, 51.5, 49.0, 53.25, 60.0];
    let scaled: Vec<f64> = closes.iter().map(|c| c * 3.7).collect();

    let base = cumulative_return(&create_series(&closes));
    let other = cumulative_return(&create_series(&scaled));
    for (a, b) in base.iter().zip(other.iter()) {
        assert!((a.unwrap() - b.unwrap()).abs() < 1e-12);
    }
}

#[test]
fn test_zero_close_guard() {
    let series = create_series(&[0.0, 10.0, 20.0]);

    let returns = daily_return_pct(&series);
    assert!(returns[0].is_none());
    assert!(returns[1].is_none());
    assert_close(returns[2], 100.0);

    let cumulative = cumulative_return(&series);
    assert_eq!(cumulative[0], Some(0.0));
    assert!(cumulative[1].is_none());
    assert!(cumulative[2].is_none());
}

#[test]
fn test_total_return_pct() {
    assert_close(total_return_pct(&create_series(&[80.0, 90.0, 100.0])), 25.0);
    assert!(total_return_pct(&create_series(&[100.0])).is_none());
    assert!(total_return_pct(&create_series(&[0.0, 10.0])).is_none());
}
