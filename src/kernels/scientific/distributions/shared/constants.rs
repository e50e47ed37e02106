// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants Module** - *Map-Airy Reference Constants*
//!
//! Constants of the standard Map-Airy law (location 0, scale 1), taken from a
//! 50-digit evaluation of the Airy-function closed form and rounded to `f64`.

// ******** Distribution family ***********************************************/
/// Stability index α of the Map-Airy family.
pub const MAPAIRY_ALPHA: f64 = 1.5;

/// Skewness parameter β of the Map-Airy family.
pub const MAPAIRY_BETA: f64 = 1.0;

// ******** Standard-law location statistics ***********************************/
/// Median of the standard law: −0.71671068545502205331700196278067…
pub const MAPAIRY_MEDIAN: f64 = -0.716710685455022;

/// Mode of the standard law: −1.16158727113597068525000008030291…
pub const MAPAIRY_MODE: f64 = -1.1615872711359707;

/// Differential entropy (nats) of the standard law: 2.00727681841065634600030258756…
pub const MAPAIRY_ENTROPY: f64 = 2.007276818410656;

// ******** Asymptotic coefficients ********************************************/
/// Leading coefficient of the upper quantile, `lim_{p→0} Q_upper(p)·p^(2/3) = 1/∛(2π)`.
///
/// Follows from the tail law `P(X > x) ~ x^(-3/2) / √(2π)`.
pub const MAPAIRY_UPPER_QUANTILE_LIMIT: f64 = 0.5419260701392891;

/// Coefficient of the left-tail exponent, `exp(-(2/27)·v³)`.
pub(crate) const MINUS_TAIL_EXPONENT: f64 = 2.0 / 27.0;

/// Exact power of two `2^e` for `-1074 <= e <= 1023`, subnormals included.
#[inline(always)]
pub(crate) const fn exp2i(e: i32) -> f64 {
    if e >= -1022 {
        f64::from_bits(((e + 1023) as u64) << 52)
    } else {
        f64::from_bits(1u64 << (e + 1074))
    }
}
