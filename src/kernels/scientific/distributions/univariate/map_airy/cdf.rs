// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Standard Map-Airy tail probabilities.
//!
//! Each tail is evaluated directly from its own tables. The small tail is
//! never obtained as `1 - (large tail)`, so relative accuracy holds down to
//! the underflow threshold on both sides.

use super::tables::cdf::{CDF_MINUS, CDF_MINUS_TAIL, CDF_PLUS, CDF_PLUS_LIMIT};
use super::tables::find_segment;
use crate::config::MINUS_UNDERFLOW_BOUNDARY;
use crate::kernels::scientific::distributions::shared::constants::MINUS_TAIL_EXPONENT;

/// `P(X > u)` for `u ≥ 0`.
///
/// Beyond the last segment the tail is `limit(w)·w` with `w = u^(-3/2)`.
#[inline]
pub fn plus_value(u: f64) -> f64 {
    if let Some(seg) = find_segment(&CDF_PLUS, u) {
        return seg.at(u);
    }
    let w = 1.0 / (u * u.sqrt());
    CDF_PLUS_LIMIT.eval(w) * w
}

/// `P(X < -v)` for `v ≥ 0`.
///
/// The scaled segments carry `exp(-2v³/27) / v`; past `v = 32` the
/// probability is below the smallest subnormal and returns `0`.
#[inline]
pub fn minus_value(v: f64) -> f64 {
    if let Some(seg) = find_segment(&CDF_MINUS, v) {
        return seg.at(v);
    }
    if v > MINUS_UNDERFLOW_BOUNDARY {
        return 0.0;
    }
    match find_segment(&CDF_MINUS_TAIL, v) {
        Some(seg) => seg.at(v) * (-MINUS_TAIL_EXPONENT * v * v * v).exp() / v,
        None => 0.0,
    }
}

/// `P(X ≤ u)` when `complementary` is false, otherwise `P(X > u)`.
///
/// `NaN` propagates; `+∞` maps to `(1, 0)` and `-∞` to `(0, 1)` for
/// (lower, upper).
#[inline]
pub fn standard_cdf(u: f64, complementary: bool) -> f64 {
    if u.is_nan() {
        return f64::NAN;
    }
    if u.is_infinite() {
        return if (u > 0.0) != complementary { 1.0 } else { 0.0 };
    }
    if u >= 0.0 {
        let q = plus_value(u);
        if complementary { q } else { 1.0 - q }
    } else {
        let p = minus_value(-u);
        if complementary { 1.0 - p } else { p }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::shared::constants::MAPAIRY_MEDIAN;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, assert_rel_close,
    };

    #[test]
    fn origin_splits_one_third_two_thirds() {
        assert_rel_close(standard_cdf(0.0, true), 1.0 / 3.0, 2e-16);
        assert_rel_close(standard_cdf(0.0, false), 2.0 / 3.0, 2e-16);
    }

    #[test]
    fn median_is_half() {
        assert_close(standard_cdf(MAPAIRY_MEDIAN, false), 0.5, 1e-15);
        assert_close(standard_cdf(MAPAIRY_MEDIAN, true), 0.5, 1e-15);
    }

    #[test]
    fn infinite_and_nan_inputs() {
        assert_eq!(standard_cdf(f64::INFINITY, false), 1.0);
        assert_eq!(standard_cdf(f64::INFINITY, true), 0.0);
        assert_eq!(standard_cdf(f64::NEG_INFINITY, false), 0.0);
        assert_eq!(standard_cdf(f64::NEG_INFINITY, true), 1.0);
        assert!(standard_cdf(f64::NAN, false).is_nan());
        assert!(standard_cdf(f64::NAN, true).is_nan());
    }

    #[test]
    fn tails_sum_to_one() {
        for &u in &[-20.0, -5.5, -2.0, -0.3, 0.0, 0.7, 3.0, 50.0, 1e6] {
            let s = standard_cdf(u, false) + standard_cdf(u, true);
            assert_close(s, 1.0, 4.0 * f64::EPSILON);
        }
    }

    #[test]
    fn upper_tail_power_law() {
        // P(X > u) ~ u^(-3/2) / √(2π)
        let lead = 1.0 / (2.0 * std::f64::consts::PI).sqrt();
        for &u in &[1e10, 1e40, 1e150] {
            assert_rel_close(plus_value(u), lead * u.powf(-1.5), 1e-12);
        }
    }

    #[test]
    fn lower_tail_underflows_to_zero() {
        assert_eq!(minus_value(32.5), 0.0);
        assert_eq!(minus_value(f64::MAX), 0.0);
        assert!(minus_value(20.0) > 0.0);
    }

    #[test]
    fn monotone_across_breakpoints() {
        let mut prev = 0.0;
        let mut u = -24.0;
        while u < 80.0 {
            let c = standard_cdf(u, false);
            assert!(c >= prev, "cdf decreased at u={u}");
            prev = c;
            u += 0.125;
        }
    }
}
