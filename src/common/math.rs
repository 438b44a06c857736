//! Slice statistics used by the indicator and report layers.
//!
//! Every function returns `None` instead of a sentinel when the input cannot
//! produce a meaningful value (empty slice, too few samples, zero divisor).

/// Arithmetic mean. A window holding a single repeated value returns that
/// value exactly.
pub fn mean(values: &[f64]) -> Option<f64> {
    let (&first, rest) = values.split_first()?;
    if rest.iter().all(|&v| v == first) {
        return Some(first);
    }
    Some(compensated_sum(values) / values.len() as f64)
}

/// Neumaier summation
fn compensated_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut correction = 0.0_f64;
    for &v in values {
        let t = sum + v;
        if sum.abs() >= v.abs() {
            correction += (sum - t) + v;
        } else {
            correction += (v - t) + sum;
        }
        sum = t;
    }
    sum + correction
}

/// Sample standard deviation (n - 1 denominator)
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let avg = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Relative change from `previous` to `current` as a fraction.
pub fn pct_change(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous)
}

/// Collect a window of optional values, `None` if any member is undefined.
pub fn defined_window(values: &[Option<f64>]) -> Option<Vec<f64>> {
    values.iter().copied().collect()
}

/// Apply `stat` over each trailing window of `values`.
///
/// Index `i` covers `[i + 1 - window, i]`. The output is `None` until the
/// window is full and wherever the window contains an undefined value; it is
/// never computed from a partial window.
pub fn rolling_apply<F>(values: &[Option<f64>], window: usize, stat: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> Option<f64>,
{
    (0..values.len())
        .map(|i| {
            if window == 0 || i + 1 < window {
                return None;
            }
            let slice = defined_window(&values[i + 1 - window..=i])?;
            stat(&slice)
        })
        .collect()
}
