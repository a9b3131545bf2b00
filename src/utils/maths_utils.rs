/// Linear interpolation between `a` and `b`. `t` is not clamped.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Exponential smoothing step: keeps `1 - weight_new` of `previous`.
#[inline]
pub fn blend(previous: f64, new: f64, weight_new: f64) -> f64 {
    previous * (1.0 - weight_new) + new * weight_new
}

/// Rounds to a fixed number of decimal places (e.g. 2 for display billions).
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[inline]
pub fn mean_and_stddev(data: &[f64]) -> (f64, f64) {
    let count = data.len();
    if count == 0 {
        return (0.0, 0.0);
    }

    let sum: f64 = data.iter().sum();
    let mean = sum / count as f64;

    let variance: f64 = data
        .iter()
        .map(|value| {
            let diff = mean - *value;
            diff * diff
        })
        .sum::<f64>()
        / count as f64;

    (mean, variance.sqrt())
}

/// Percentage share of each value in the total. All zeros when the total is not positive.
pub fn shares_pct(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total <= f64::EPSILON {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / total * 100.0).collect()
}
