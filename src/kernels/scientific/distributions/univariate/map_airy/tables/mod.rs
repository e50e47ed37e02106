// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Coefficient Tables** - *Fitted Map-Airy Approximants*
//!
//! Compile-time coefficient data for every fitted sub-range. Each table is a
//! numerator/denominator pair stored lowest order first, with a denominator
//! constant term of exactly 1. The segments of a family are ordered so that a
//! linear scan with one comparison per segment selects the right one.
//!
//! Evaluation variables by family:
//! - **Abscissa segments**: `t = x - lower`, `t ∈ [0, upper - lower]`
//! - **Limit tables**: `w = u^(-3/2)`
//! - **Probability segments**: `t = p - lower`
//! - **Exponent buckets**: `t = -log2(p · rescale)`, `t ∈ (0, e_hi - e_lo]`

pub(crate) mod cdf;
pub(crate) mod pdf;
pub(crate) mod quantile;

use crate::kernels::scientific::distributions::shared::rational::rational;

/// One fitted rational approximant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rational {
    pub numer: &'static [f64],
    pub denom: &'static [f64],
}

impl Rational {
    #[inline(always)]
    pub(crate) fn eval(&self, t: f64) -> f64 {
        rational(t, self.numer, self.denom)
    }
}

/// Approximant on the closed interval `[lower, upper]`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment {
    pub lower: f64,
    pub upper: f64,
    pub f: Rational,
}

impl Segment {
    /// Evaluates the approximant at its offset `x - lower`.
    #[inline(always)]
    pub(crate) fn at(&self, x: f64) -> f64 {
        self.f.eval(x - self.lower)
    }
}

/// Approximant on a probability bucket `[2^e_lo, 2^e_hi)`.
///
/// `floor = 2^e_lo` and `rescale = 2^-e_hi` are exact powers of two, so
/// `p · rescale` is exact and lies in `[2^(e_lo - e_hi), 1)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExpSegment {
    pub floor: f64,
    pub rescale: f64,
    pub f: Rational,
}

impl ExpSegment {
    #[inline(always)]
    pub(crate) fn at(&self, p: f64) -> f64 {
        self.f.eval(-(p * self.rescale).log2())
    }
}

/// First segment of an ascending family whose upper bound admits `x`.
#[inline(always)]
pub(crate) fn find_segment(segments: &[Segment], x: f64) -> Option<&Segment> {
    segments.iter().find(|s| x <= s.upper)
}

/// First segment of a descending family whose lower bound admits `p`.
#[inline(always)]
pub(crate) fn find_segment_from_above(segments: &[Segment], p: f64) -> Option<&Segment> {
    segments.iter().find(|s| p >= s.lower)
}

/// First bucket of a descending family whose floor admits `p`.
#[inline(always)]
pub(crate) fn find_bucket(buckets: &[ExpSegment], p: f64) -> Option<&ExpSegment> {
    buckets.iter().find(|b| p >= b.floor)
}

#[cfg(test)]
mod tests {
    use super::cdf::*;
    use super::pdf::*;
    use super::quantile::*;
    use super::*;

    fn assert_contiguous(name: &str, segs: &[Segment]) {
        for pair in segs.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower, "{name}: gap between segments");
        }
        for s in segs {
            assert!(s.lower < s.upper, "{name}: empty segment");
            assert_eq!(s.f.denom[0], 1.0, "{name}: denominator not normalised");
        }
    }

    fn assert_contiguous_descending(name: &str, segs: &[Segment]) {
        for pair in segs.windows(2) {
            assert_eq!(pair[0].lower, pair[1].upper, "{name}: gap between segments");
        }
    }

    #[test]
    fn abscissa_families_tile_their_ranges() {
        for (name, segs) in [
            ("pdf+", &PDF_PLUS[..]),
            ("pdf-", &PDF_MINUS[..]),
            ("pdf- tail", &PDF_MINUS_TAIL[..]),
            ("cdf+", &CDF_PLUS[..]),
            ("cdf-", &CDF_MINUS[..]),
            ("cdf- tail", &CDF_MINUS_TAIL[..]),
        ] {
            assert_contiguous(name, segs);
        }
        assert_eq!(PDF_PLUS[0].lower, 0.0);
        assert_eq!(PDF_PLUS[PDF_PLUS.len() - 1].upper, 64.0);
        assert_eq!(PDF_MINUS[PDF_MINUS.len() - 1].upper, PDF_MINUS_TAIL[0].lower);
        assert_eq!(CDF_MINUS_TAIL[CDF_MINUS_TAIL.len() - 1].upper, 32.0);
    }

    #[test]
    fn probability_families_tile_their_ranges() {
        assert_contiguous_descending("q+", &QUANTILE_UPPER);
        assert_contiguous_descending("q-", &QUANTILE_LOWER);
        assert_eq!(QUANTILE_UPPER[0].upper, 0.5);
        assert_eq!(QUANTILE_LOWER[QUANTILE_LOWER.len() - 1].lower, 0.125);
        for buckets in [&QUANTILE_UPPER_EXP[..], &QUANTILE_LOWER_EXP[..]] {
            assert_eq!(buckets[0].rescale, 8.0);
            for pair in buckets.windows(2) {
                assert_eq!(pair[0].floor * pair[1].rescale, 1.0, "bucket gap");
            }
        }
    }

    #[test]
    fn segment_lookup_respects_boundaries() {
        assert_eq!(find_segment(&PDF_PLUS, 1.0).map(|s| s.lower), Some(0.0));
        assert_eq!(find_segment(&PDF_PLUS, 1.5).map(|s| s.lower), Some(1.0));
        assert!(find_segment(&PDF_PLUS, 64.5).is_none());
        assert_eq!(
            find_segment_from_above(&QUANTILE_LOWER, 0.25).map(|s| s.lower),
            Some(0.25)
        );
        assert_eq!(find_bucket(&QUANTILE_LOWER_EXP, 0.1).map(|b| b.rescale), Some(8.0));
        assert!(find_bucket(&QUANTILE_UPPER_EXP, 1e-20).is_none());
    }
}
