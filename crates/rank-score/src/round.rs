/// Rounds half away from zero into an integer score.
///
/// Values outside the `i64` range clamp to its bounds and NaN becomes 0.
pub(crate) fn round_score(value: f64) -> i64 {
    let rounded = value.round();
    if rounded.is_nan() || rounded >= i64::MAX as f64 || rounded < i64::MIN as f64 {
        log::warn!("Score {} is outside the integer range, clamping", value);
    }
    rounded as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_score(2.5), 3);
        assert_eq!(round_score(2.4), 2);
        assert_eq!(round_score(-2.5), -3);
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(round_score(1e19), i64::MAX);
        assert_eq!(round_score(-1e19), i64::MIN);
        assert_eq!(round_score(f64::NAN), 0);
    }
}
