// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Standard Map-Airy quantiles, lower and upper.
//!
//! Probabilities in `[0.125, 0.5]` use direct segments in `t = p - lower`.
//! Smaller probabilities fall into exponent buckets `[2^e_lo, 2^e_hi)` and
//! are evaluated in `t = -log2(p · 2^-e_hi)`, so each bucket covers a fixed
//! number of binades regardless of how small `p` is. No iteration.

use super::tables::quantile::{
    QUANTILE_LOWER, QUANTILE_LOWER_EXP, QUANTILE_UPPER, QUANTILE_UPPER_EXP,
};
use super::tables::{find_bucket, find_segment_from_above};
use crate::config::{
    LOWER_QUANTILE_SATURATION_EXP, QUANTILE_DIRECT_THRESHOLD, UPPER_QUANTILE_SATURATION_EXP,
};
use crate::kernels::scientific::distributions::shared::constants::{
    MAPAIRY_UPPER_QUANTILE_LIMIT, exp2i,
};

/// Inverse of [`super::cdf::standard_cdf`].
///
/// Returns `u` with `P(X ≤ u) = p` (or `P(X > u) = p` when `complementary`).
/// `NaN` or `p ∉ [0, 1]` gives `NaN`; the endpoints give `±∞`.
#[inline]
pub fn standard_quantile(p: f64, complementary: bool) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    // `1 - p` is exact for `p > 0.5`.
    if p > 0.5 {
        return standard_quantile(1.0 - p, !complementary);
    }
    if complementary { upper(p) } else { lower(p) }
}

/// `u` with `P(X > u) = p`, `p ∈ [0, 0.5]`.
///
/// The tables hold `u · p^(2/3)`, which tends to `1/∛(2π)` as `p → 0`.
#[inline(always)]
fn upper(p: f64) -> f64 {
    if p == 0.0 {
        return f64::INFINITY;
    }
    let scaled = if p >= QUANTILE_DIRECT_THRESHOLD {
        match find_segment_from_above(&QUANTILE_UPPER, p) {
            Some(seg) => seg.at(p),
            None => return f64::NAN,
        }
    } else if p < exp2i(UPPER_QUANTILE_SATURATION_EXP) {
        MAPAIRY_UPPER_QUANTILE_LIMIT
    } else {
        match find_bucket(&QUANTILE_UPPER_EXP, p) {
            Some(bucket) => bucket.at(p),
            None => MAPAIRY_UPPER_QUANTILE_LIMIT,
        }
    };
    let c = p.cbrt();
    scaled / (c * c)
}

/// `u` with `P(X ≤ u) = p`, `p ∈ [0, 0.5]`.
#[inline(always)]
fn lower(p: f64) -> f64 {
    if p >= QUANTILE_DIRECT_THRESHOLD {
        return match find_segment_from_above(&QUANTILE_LOWER, p) {
            Some(seg) => seg.at(p),
            None => f64::NAN,
        };
    }
    if p < exp2i(LOWER_QUANTILE_SATURATION_EXP) {
        return f64::NEG_INFINITY;
    }
    match find_bucket(&QUANTILE_LOWER_EXP, p) {
        Some(bucket) => bucket.at(p),
        None => f64::NEG_INFINITY,
    }
}
