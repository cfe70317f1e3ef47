use crate::config::RoundingMode;
use crate::error::{ModerationError, Result};

/// Maps `value` linearly from `[src_min, src_max]` onto `[dst_min, dst_max]`
/// and rounds half-to-even.
pub fn map_segment(
    src_min: f64,
    src_max: f64,
    dst_min: f64,
    dst_max: f64,
    value: f64,
) -> Result<f64> {
    interpolate(src_min, src_max, dst_min, dst_max, value).map(|v| RoundingMode::HalfEven.apply(v))
}

/// Unrounded linear map. The caller chooses the rounding.
pub fn interpolate(
    src_min: f64,
    src_max: f64,
    dst_min: f64,
    dst_max: f64,
    value: f64,
) -> Result<f64> {
    if value < src_min || value > src_max {
        return Err(ModerationError::OutOfRange {
            value,
            min: src_min,
            max: src_max,
        });
    }
    if src_max == src_min {
        return Err(ModerationError::DegenerateRange {
            min: src_min,
            max: src_max,
        });
    }
    Ok((dst_max - dst_min) / (src_max - src_min) * (value - src_min) + dst_min)
}

#[cfg(test)]
#[path = "../../tests/src_inline/moderation/segment.rs"]
mod tests;
