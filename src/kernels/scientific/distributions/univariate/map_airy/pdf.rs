// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Standard Map-Airy density `f(u)` for location 0 and scale 1.

use super::tables::pdf::{PDF_MINUS, PDF_MINUS_TAIL, PDF_PLUS, PDF_PLUS_LIMIT};
use super::tables::find_segment;
use crate::config::{MINUS_UNDERFLOW_BOUNDARY, PLUS_LIMIT_BOUNDARY};
use crate::kernels::scientific::distributions::shared::constants::MINUS_TAIL_EXPONENT;

/// Density of the standard law at `u`.
///
/// - `u ≥ 0`: doubling segments up to 64, then `limit(w)·w/u` with
///   `w = u^(-3/2)`, which decays as `u^(-5/2)`.
/// - `u < 0`: direct segments for `v = -u ≤ 2`, then a table scaled by
///   `√v · exp(-2v³/27)` up to `v = 32`, and exactly `0` beyond.
/// - `NaN` propagates; `±∞` gives `0`.
#[inline]
pub fn standard_pdf(u: f64) -> f64 {
    if u.is_nan() {
        return f64::NAN;
    }
    if u.is_infinite() {
        return 0.0;
    }
    if u >= 0.0 {
        plus(u)
    } else {
        minus(-u)
    }
}

#[inline(always)]
fn plus(u: f64) -> f64 {
    if let Some(seg) = find_segment(&PDF_PLUS, u) {
        return seg.at(u);
    }
    debug_assert!(u > PLUS_LIMIT_BOUNDARY);
    let w = 1.0 / (u * u.sqrt());
    PDF_PLUS_LIMIT.eval(w) * w / u
}

#[inline(always)]
fn minus(v: f64) -> f64 {
    if let Some(seg) = find_segment(&PDF_MINUS, v) {
        return seg.at(v);
    }
    if v > MINUS_UNDERFLOW_BOUNDARY {
        return 0.0;
    }
    match find_segment(&PDF_MINUS_TAIL, v) {
        Some(seg) => seg.at(v) * v.sqrt() * (-MINUS_TAIL_EXPONENT * v * v * v).exp(),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::univariate::common::assert_rel_close;

    #[test]
    fn density_at_origin() {
        // f(0) = 2·3^(-1/3) / (Γ(1/3)·∛18) = 0.19751617184719185561…
        assert_rel_close(standard_pdf(0.0), 0.19751617184719186, 4e-16);
        assert_eq!(standard_pdf(-0.0), standard_pdf(0.0));
    }

    #[test]
    fn special_inputs() {
        assert!(standard_pdf(f64::NAN).is_nan());
        assert_eq!(standard_pdf(f64::INFINITY), 0.0);
        assert_eq!(standard_pdf(f64::NEG_INFINITY), 0.0);
        assert_eq!(standard_pdf(-32.5), 0.0);
        assert_eq!(standard_pdf(-1e300), 0.0);
    }

    #[test]
    fn right_tail_is_power_law() {
        // f(u) ~ (3/(2√(2π))) u^(-5/2) = 0.5984134206021...·u^(-5/2)
        let lead = 1.5 / (2.0 * std::f64::consts::PI).sqrt();
        for &u in &[1e8, 1e12, 1e20, 1e100] {
            let got = standard_pdf(u);
            assert_rel_close(got, lead * u.powf(-2.5), 1e-10);
        }
        assert!(standard_pdf(f64::MAX) >= 0.0);
    }

    #[test]
    fn continuous_across_breakpoints() {
        for &b in &[1.0f64, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0] {
            let lo = standard_pdf(b);
            let hi = standard_pdf(b * (1.0 + f64::EPSILON));
            assert_rel_close(hi, lo, 1e-14);
        }
        for &b in &[1.0f64, 2.0, 4.0, 8.0, 16.0] {
            let lo = standard_pdf(-b);
            let hi = standard_pdf(-b * (1.0 + f64::EPSILON));
            assert_rel_close(hi, lo, 1e-12);
        }
    }

    #[test]
    fn mode_is_a_maximum() {
        use crate::kernels::scientific::distributions::shared::constants::MAPAIRY_MODE;
        let peak = standard_pdf(MAPAIRY_MODE);
        for &d in &[1e-3, 1e-2, 0.1, 1.0] {
            assert!(standard_pdf(MAPAIRY_MODE - d) < peak);
            assert!(standard_pdf(MAPAIRY_MODE + d) < peak);
        }
    }
}
