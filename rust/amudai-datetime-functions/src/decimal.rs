//! Fixed-point composition of whole seconds and sub-second fractions.

/// Default number of sub-second digits of a datetime64 value.
pub const DEFAULT_PRECISION: u32 = 3;

/// Largest supported number of sub-second digits.
pub const MAX_PRECISION: u32 = 9;

/// Fraction substituted for rows that saturate to the maximum datetime.
/// Reduced modulo `10^precision` during composition, so it always reads as the
/// largest fraction of the chosen precision.
pub const MAX_SENTINEL_FRACTION: i64 = 999_999_999;

/// Returns `10^precision`.
#[inline]
pub const fn scale_multiplier(precision: u32) -> i64 {
    10_i64.pow(precision)
}

/// Largest fraction representable with `precision` digits (`10^precision - 1`).
#[inline]
pub const fn max_fraction(precision: u32) -> i64 {
    scale_multiplier(precision) - 1
}

/// Packs `whole` seconds and a `fraction` of `10^-precision` units into one
/// fixed-point value: `whole * 10^precision + sign(whole) * (fraction % 10^precision)`,
/// where `sign(whole)` is `-1` for negative `whole` and `1` otherwise.
///
/// The fraction takes the sign of the whole part, so `(-100, 500)` at precision 3
/// is `-100.500`. A negative fraction with a non-negative whole part borrows from
/// the whole part: `(416, -400)` is `415.600`.
///
/// Results outside the `i64` range saturate to `i64::MIN` or `i64::MAX`.
#[inline]
pub fn decimal_from_components(whole: i64, fraction: i64, precision: u32) -> i64 {
    let multiplier = scale_multiplier(precision);
    let fraction_sign = if whole < 0 { -1 } else { 1 };
    whole
        .checked_mul(multiplier)
        .and_then(|value| value.checked_add(fraction_sign * (fraction % multiplier)))
        .unwrap_or(if whole < 0 { i64::MIN } else { i64::MAX })
}

/// Splits a fixed-point value into whole seconds (truncated toward zero) and a
/// non-negative fraction.
///
/// Inverse of [`decimal_from_components`] for every value whose whole part is
/// non-zero or which is itself non-negative.
#[inline]
pub fn decimal_to_components(value: i64, precision: u32) -> (i64, i64) {
    let multiplier = scale_multiplier(precision);
    (value / multiplier, (value % multiplier).abs())
}
