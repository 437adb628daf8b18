//! Decimal rounding for presentation values.

/// Round `value` to `places` decimal places, sending exact halves to the even
/// neighbour.
///
/// # Examples
/// ```
/// use quietseat_core::round_to;
///
/// assert_eq!(round_to(0.070_94, 2), 0.07);
/// assert_eq!(round_to(33.333_33, 1), 33.3);
/// assert_eq!(round_to(6.25, 1), 6.2);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "decimal rounding scales, rounds and unscales"
)]
#[must_use]
pub fn round_to(value: f64, places: u8) -> f64 {
    let factor = 10.0_f64.powi(i32::from(places));
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(85.726_6, 2, 85.73)]
    #[case(85.724_9, 2, 85.72)]
    #[case(66.666_6, 1, 66.7)]
    #[case(120.0, 1, 120.0)]
    #[case(0.0, 2, 0.0)]
    #[expect(clippy::float_cmp, reason = "rounded values are exact decimals")]
    fn rounds_to_nearest(#[case] value: f64, #[case] places: u8, #[case] expected: f64) {
        assert_eq!(round_to(value, places), expected);
    }

    #[rstest]
    #[case(6.25, 1, 6.2)]
    #[case(18.75, 1, 18.8)]
    #[case(0.125, 2, 0.12)]
    #[case(0.375, 2, 0.38)]
    #[expect(clippy::float_cmp, reason = "rounded values are exact decimals")]
    fn exact_halves_round_to_even(#[case] value: f64, #[case] places: u8, #[case] expected: f64) {
        assert_eq!(round_to(value, places), expected);
    }
}
