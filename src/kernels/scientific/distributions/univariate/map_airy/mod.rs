// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Map-Airy Distribution Module** - *Maximally Skewed Stable Law, α = 3/2*
//!
//! Density, tail probabilities, quantiles and sampling for the Map-Airy
//! distribution, the stable law with stability index α = 3/2 and skewness
//! β = 1.
//!
//! ## Overview
//! The law has no elementary closed form. Its characteristic function is
//! `φ(t) = exp(−|t|^{3/2}·(1 + i·sign t))`, and the density can be written
//! through Airy functions,
//! `f(x) = m(−x/∛18)/∛18` with `m(y) = 2e^{−2y³/3}(y·Ai(y²) − Ai′(y²))`.
//! Each function is evaluated from fitted rational approximants on a
//! partition of its domain, with analytic tail factors outside the tabulated
//! range.
//!
//! ## Mathematical Definition
//! - **Support**: x ∈ (−∞, +∞)
//! - **Parameters**: μ ∈ ℝ (location), c > 0 (scale)
//! - **Right tail**: f(x) ~ (3/(2√(2π))) x^{−5/2}, P(X > x) ~ x^{−3/2}/√(2π)
//! - **Left tail**: f(−v) ∝ √v · exp(−2v³/27)
//! - **Landmarks**: P(X > 0) = 1/3, median ≈ −0.7167, mode ≈ −1.1616
//!
//! ## Tails
//! CDF and quantile kernels take a [`Tail`]. Upper-tail probabilities are
//! computed directly, so `P(X > x)` keeps full relative accuracy where
//! `1 − P(X ≤ x)` would round to zero.
//!
//! ## Use Cases
//! - Physics: limits of one-sided heavy-tailed sums at stability index 3/2
//! - Risk: one-sided heavy-tailed loss models with a light opposite tail
//! - Statistics: benchmarking stable-law estimators at a non-trivial α

pub mod cdf;
mod distribution;
pub mod pdf;
pub mod quantile;
mod std;
pub(crate) mod tables;

pub use distribution::MapAiry;

use minarrow::{Bitmask, FloatArray};
use rand::Rng;

use crate::errors::KernelError;

/// Selects which tail a CDF or quantile refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tail {
    /// `P(X ≤ x)`
    #[default]
    Lower,
    /// `P(X > x)`
    Upper,
}

impl Tail {
    /// True for [`Tail::Upper`].
    #[inline(always)]
    pub fn is_upper(self) -> bool {
        matches!(self, Tail::Upper)
    }
}

/// Computes the probability density function (PDF) of the Map-Airy distribution.
///
/// ## Parameters
/// - `x`: Array of values to evaluate
/// - `location`: Location parameter μ
/// - `scale`: Scale parameter c > 0
/// - `null_mask`: Optional validity mask (Arrow-style: 1=valid, 0=null)
/// - `null_count`: Optional count of null values for optimisation
///
/// ## Returns
/// `FloatArray<f64>` containing PDF values, with nulls propagated from input mask.
///
/// ## Behaviour
/// - `NaN` inputs give `NaN`, `±∞` give `0`
/// - Left of `μ − 32c` the density is below the subnormal range and is `0`
///
/// ## Errors
/// Returns `KernelError::InvalidArguments` if scale ≤ 0 or parameters are non-finite.
///
/// ## Example
/// ```rust,ignore
/// use mapairy_kernels::mapairy_pdf;
/// use minarrow::vec64;
///
/// let x = vec64![-2.0, 0.0, 2.0];
/// let result = mapairy_pdf(&x, 0.0, 1.0, None, None).unwrap();
/// ```
#[inline(always)]
pub fn mapairy_pdf(
    x: &[f64],
    location: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::mapairy_pdf_std(x, location, scale, null_mask, null_count)
}

/// Computes the cumulative distribution function (CDF) of the Map-Airy distribution.
///
/// Returns `P(X ≤ x)` for [`Tail::Lower`] and `P(X > x)` for [`Tail::Upper`],
/// each evaluated directly rather than as a complement.
///
/// ## Behaviour
/// - `+∞` gives `1` (lower) / `0` (upper); `−∞` the reverse
/// - At `x = location`, the lower CDF is exactly `2/3` to double precision
///
/// ## Errors
/// Returns `KernelError::InvalidArguments` if scale ≤ 0 or parameters are non-finite.
#[inline(always)]
pub fn mapairy_cdf(
    x: &[f64],
    location: f64,
    scale: f64,
    tail: Tail,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::mapairy_cdf_std(x, location, scale, tail.is_upper(), null_mask, null_count)
}

/// Computes the quantile function (inverse CDF) of the Map-Airy distribution.
///
/// For [`Tail::Upper`], returns `x` with `P(X > x) = p`.
///
/// ## Behaviour
/// - `p ∉ [0, 1]` or `NaN` gives `NaN`
/// - Lower tail: `p = 0` and `p < 2^-1024` give `−∞`
/// - Upper tail: `p = 0` gives `+∞`; tiny `p` follow `p^{−2/3}/∛(2π)`
///
/// ## Errors
/// Returns `KernelError::InvalidArguments` if scale ≤ 0 or parameters are non-finite.
///
/// ## Example
/// ```rust,ignore
/// use mapairy_kernels::{Tail, mapairy_quantile};
/// use minarrow::vec64;
///
/// let p = vec64![1e-300, 0.5, 0.999];
/// let q = mapairy_quantile(&p, 0.0, 1.0, Tail::Lower, None, None).unwrap();
/// ```
#[inline(always)]
pub fn mapairy_quantile(
    p: &[f64],
    location: f64,
    scale: f64,
    tail: Tail,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::mapairy_quantile_std(p, location, scale, tail.is_upper(), null_mask, null_count)
}

// Zero-allocation variants

/// Map-Airy PDF (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer; null lanes are written
/// as `NaN`.
///
/// ## Errors
/// `KernelError::LengthMismatch` if `output.len() != x.len()`.
#[inline(always)]
pub fn mapairy_pdf_to(
    x: &[f64],
    location: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::mapairy_pdf_std_to(x, location, scale, output, null_mask, null_count)
}

/// Map-Airy CDF (zero-allocation variant).
#[inline(always)]
pub fn mapairy_cdf_to(
    x: &[f64],
    location: f64,
    scale: f64,
    tail: Tail,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::mapairy_cdf_std_to(x, location, scale, tail.is_upper(), output, null_mask, null_count)
}

/// Map-Airy quantile (zero-allocation variant).
#[inline(always)]
pub fn mapairy_quantile_to(
    p: &[f64],
    location: f64,
    scale: f64,
    tail: Tail,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::mapairy_quantile_std_to(p, location, scale, tail.is_upper(), output, null_mask, null_count)
}

/// Draws `n` Map-Airy(location, scale) variates from `rng`.
///
/// ## Errors
/// Returns `KernelError::InvalidArguments` if scale ≤ 0 or parameters are non-finite.
#[inline(always)]
pub fn mapairy_sample<R: Rng + ?Sized>(
    n: usize,
    location: f64,
    scale: f64,
    rng: &mut R,
) -> Result<FloatArray<f64>, KernelError> {
    std::mapairy_sample_std(n, location, scale, rng)
}

#[cfg(test)]
mod map_airy_tests {
    use super::*;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, dense_data, scalar_call, single_null_mask,
    };
    use minarrow::{Vec64, vec64};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // See `./tests` for the reference-value suite

    fn mask_vec(m: &Bitmask) -> Vec64<bool> {
        (0..m.len()).map(|i| m.get(i)).collect()
    }

    #[test]
    fn mapairy_pdf_matches_distribution() {
        let d = MapAiry::new(0.5, 2.0).unwrap();
        let xs = vec64![-9.0, -2.0, 0.0, 0.5, 3.0, 120.0];
        let out = dense_data(mapairy_pdf(&xs, 0.5, 2.0, None, None).unwrap());
        for (a, &x) in out.iter().zip(xs.iter()) {
            assert_eq!(*a, d.pdf(x));
        }
    }

    #[test]
    fn mapairy_pdf_bulk_vs_scalar() {
        let xs = vec64![-5.0, -1.0, 0.3, 2.2, 70.0];
        let bulk = dense_data(mapairy_pdf(&xs, 0.0, 1.0, None, None).unwrap());
        for (i, &x) in xs.iter().enumerate() {
            let scalar = scalar_call(|s| mapairy_pdf(s, 0.0, 1.0, None, None).unwrap(), x);
            assert_eq!(bulk[i], scalar);
        }
    }

    #[test]
    fn mapairy_empty_input() {
        let arr = mapairy_pdf(&[], 0.0, 1.0, None, None).unwrap();
        assert!(arr.data.is_empty());
        assert!(arr.null_mask.is_none());
        let arr = mapairy_quantile(&[], 0.0, 1.0, Tail::Upper, None, None).unwrap();
        assert!(arr.data.is_empty());
        let mut out: [f64; 0] = [];
        assert!(mapairy_cdf_to(&[], 0.0, 1.0, Tail::Lower, &mut out, None, None).is_ok());
    }

    #[test]
    fn mapairy_pdf_mask_propagation() {
        let xs = vec64![0.0, 1.0, 2.0];
        let m = single_null_mask(3, 1);
        let arr = mapairy_pdf(&xs, 0.0, 1.0, Some(&m), Some(1)).unwrap();
        assert_eq!(
            mask_vec(arr.null_mask.as_ref().unwrap()),
            vec64![true, false, true]
        );
        assert!(arr.data[1].is_nan());
        assert!(arr.data[0] > 0.0 && arr.data[2] > 0.0);
    }

    #[test]
    fn mapairy_dense_path_keeps_supplied_mask() {
        let xs = vec64![0.0, 1.0];
        let m = Bitmask::new_set_all(2, true);
        let arr = mapairy_cdf(&xs, 0.0, 1.0, Tail::Lower, Some(&m), Some(0)).unwrap();
        assert_eq!(mask_vec(arr.null_mask.as_ref().unwrap()), vec64![true, true]);
    }

    #[test]
    fn mapairy_cdf_tails_are_complementary() {
        let xs = vec64![-7.0, -0.7, 0.0, 1.0, 25.0];
        let lo = dense_data(mapairy_cdf(&xs, 1.0, 0.5, Tail::Lower, None, None).unwrap());
        let hi = dense_data(mapairy_cdf(&xs, 1.0, 0.5, Tail::Upper, None, None).unwrap());
        for (a, b) in lo.iter().zip(hi.iter()) {
            assert_close(a + b, 1.0, 1e-15);
        }
    }

    #[test]
    fn mapairy_cdf_mask_nan_propagation() {
        let xs = vec64![0.0, f64::NAN, 3.0];
        let m = single_null_mask(3, 2);
        let arr = mapairy_cdf(&xs, 0.0, 1.0, Tail::Upper, Some(&m), Some(1)).unwrap();
        assert_eq!(
            mask_vec(arr.null_mask.as_ref().unwrap()),
            vec64![true, true, false]
        );
        // a NaN value in a valid lane stays valid
        assert!(arr.data[1].is_nan());
        assert!(arr.data[2].is_nan());
    }

    #[test]
    fn mapairy_quantile_edges() {
        let ps = vec64![0.0, 1e-300, 0.5, 1.0, -0.5, 2.0];
        let out = dense_data(mapairy_quantile(&ps, 0.0, 1.0, Tail::Lower, None, None).unwrap());
        assert_eq!(out[0], f64::NEG_INFINITY);
        assert!(out[1].is_finite() && out[1] < -20.0);
        assert_close(out[2], MapAiry::default().median(), 1e-15);
        assert_eq!(out[3], f64::INFINITY);
        assert!(out[4].is_nan() && out[5].is_nan());
    }

    #[test]
    fn mapairy_quantile_round_trip() {
        let ps = vec64![1e-200, 1e-9, 0.01, 0.2, 0.5, 0.8, 0.99, 1.0 - 1e-12];
        for tail in [Tail::Lower, Tail::Upper] {
            let xs = dense_data(mapairy_quantile(&ps, -1.0, 3.0, tail, None, None).unwrap());
            let back = dense_data(mapairy_cdf(&xs, -1.0, 3.0, tail, None, None).unwrap());
            for (b, p) in back.iter().zip(ps.iter()) {
                assert!(((b - p) / p).abs() < 1e-9, "{tail:?}: {b} vs {p}");
            }
        }
    }

    #[test]
    fn mapairy_to_variants_match_allocating() {
        let xs = vec64![-3.0, -0.5, 0.0, 4.0];
        let m = single_null_mask(4, 3);
        let mut out = vec64![0.0; 4];
        mapairy_pdf_to(&xs, 0.0, 1.0, out.as_mut_slice(), Some(&m), Some(1)).unwrap();
        let arr = mapairy_pdf(&xs, 0.0, 1.0, Some(&m), Some(1)).unwrap();
        for i in 0..3 {
            assert_eq!(out[i], arr.data[i]);
        }
        assert!(out[3].is_nan());

        let ps = vec64![0.1, 0.6];
        let mut q = vec64![0.0; 2];
        mapairy_quantile_to(&ps, 0.0, 1.0, Tail::Upper, q.as_mut_slice(), None, None).unwrap();
        let arr = dense_data(mapairy_quantile(&ps, 0.0, 1.0, Tail::Upper, None, None).unwrap());
        for i in 0..2 {
            assert_eq!(q[i], arr[i]);
        }
    }

    #[test]
    fn mapairy_to_rejects_wrong_length() {
        let xs = vec64![1.0, 2.0];
        let mut out = vec64![0.0; 3];
        let err = mapairy_pdf_to(&xs, 0.0, 1.0, out.as_mut_slice(), None, None).unwrap_err();
        assert!(matches!(err, KernelError::LengthMismatch(_)));
    }

    #[test]
    fn mapairy_invalid_parameters() {
        let xs = vec64![0.0];
        assert!(mapairy_pdf(&xs, 0.0, 0.0, None, None).is_err());
        assert!(mapairy_cdf(&xs, f64::NAN, 1.0, Tail::Lower, None, None).is_err());
        assert!(mapairy_quantile(&xs, 0.0, -1.0, Tail::Upper, None, None).is_err());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(mapairy_sample(4, 0.0, f64::INFINITY, &mut rng).is_err());
    }

    #[test]
    fn mapairy_subnormal_scale_is_rejected() {
        let xs = vec64![0.0, 1e-310];
        for err in [
            mapairy_pdf(&xs, 0.0, 1e-310, None, None).unwrap_err(),
            mapairy_cdf(&xs, 0.0, 1e-310, Tail::Lower, None, None).unwrap_err(),
            mapairy_quantile(&xs, 0.0, 1e-310, Tail::Upper, None, None).unwrap_err(),
        ] {
            assert!(matches!(err, KernelError::InvalidArguments(_)));
        }
        let mut out = vec64![0.0; 2];
        assert!(mapairy_pdf_to(&xs, 0.0, 1e-310, out.as_mut_slice(), None, None).is_err());
    }

    #[test]
    fn mapairy_null_count_without_mask_is_error() {
        let xs = vec64![0.0, 1.0];
        let err = mapairy_pdf(&xs, 0.0, 1.0, None, Some(1)).unwrap_err();
        assert!(matches!(err, KernelError::InvalidArguments(_)));
    }

    #[test]
    fn mapairy_sample_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let x = mapairy_sample(256, 2.0, 0.5, &mut a).unwrap();
        let y = mapairy_sample(256, 2.0, 0.5, &mut b).unwrap();
        assert_eq!(x.data.len(), 256);
        assert!(x.null_mask.is_none());
        for i in 0..256 {
            assert_eq!(x.data[i], y.data[i]);
        }
    }
}
