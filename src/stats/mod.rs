use crate::error::{ModerationError, Result};

/// Linear-interpolation quantile over a sorted copy of `values`.
///
/// `p = 0` yields the minimum and `p = 1` the maximum. Between order
/// statistics the result is interpolated on rank `p * (n - 1)`.
pub fn quantile(values: &[f64], p: f64) -> Result<f64> {
    if values.is_empty() {
        return Err(ModerationError::InvalidInput(
            "quantile of an empty sequence".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(ModerationError::InvalidInput(format!(
            "quantile probability {p} outside [0, 1]"
        )));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ModerationError::InvalidInput(
            "quantile input contains a non-finite value".to_string(),
        ));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(interpolate_sorted(&sorted, p))
}

/// Quantile of already-sorted, non-empty data. `p` must lie in [0, 1].
pub(crate) fn interpolate_sorted(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/mod.rs"]
mod tests;
