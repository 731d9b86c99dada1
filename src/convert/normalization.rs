/// Largest 8-bit channel value as a float
pub const MAX_CHANNEL: f64 = 255.0;

/// Map an 8-bit channel value into `[0, 1]`
#[inline]
#[must_use]
pub(crate) fn normalize_channel(value: u8) -> f64 {
    f64::from(value) / MAX_CHANNEL
}

/// Clamp to `[0, 1]`. NaN is returned unchanged.
#[inline]
#[must_use]
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value > 1.0 {
        1.0
    } else if value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Map a unit-range value to an 8-bit channel, truncating toward zero
///
/// Out-of-range input is clamped first; NaN becomes 0 through the
/// saturating float cast.
#[inline]
#[must_use]
pub fn quantize_channel(value: f64) -> u8 {
    (clamp_unit(value) * MAX_CHANNEL) as u8
}

/// Smallest and largest finite value, `None` when there are none
#[must_use]
pub fn find_min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, val| match acc {
            None => Some((val, val)),
            Some((min, max)) => Some((min.min(val), max.max(val))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_bounds() {
        assert_eq!(normalize_channel(0), 0.0);
        assert_eq!(normalize_channel(255), 1.0);
        assert_relative_eq!(normalize_channel(51), 0.2);
    }

    #[test]
    fn test_quantize_truncates() {
        assert_eq!(quantize_channel(1.0), 255);
        assert_eq!(quantize_channel(0.5), 127);
        assert_eq!(quantize_channel(0.999), 254);
        assert_eq!(quantize_channel(0.0), 0);
    }

    #[test]
    fn test_quantize_clamps_out_of_range() {
        assert_eq!(quantize_channel(2.0), 255);
        assert_eq!(quantize_channel(f64::INFINITY), 255);
        assert_eq!(quantize_channel(-1.0), 0);
        assert_eq!(quantize_channel(f64::NEG_INFINITY), 0);
        assert_eq!(quantize_channel(f64::NAN), 0);
    }

    #[test]
    fn test_every_channel_survives_normalization() {
        for value in 0..=255u8 {
            let back = quantize_channel(normalize_channel(value));
            assert!(value.abs_diff(back) <= 1, "{value} came back as {back}");
        }
    }

    #[test]
    fn test_find_min_max_skips_non_finite() {
        assert_eq!(find_min_max(&[]), None);
        assert_eq!(find_min_max(&[f64::NAN]), None);
        assert_eq!(find_min_max(&[0.5, f64::INFINITY, -2.0, 3.0]), Some((-2.0, 3.0)));
    }
}
