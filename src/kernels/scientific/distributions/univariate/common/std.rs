// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, Vec64};

/// Dense kernel helper
///
/// ### Null handling
/// - Null mask appearing in the dense path means a mask was supplied
/// to the kernel function, with a null_count of `0`. This can reflect
/// a scenario where one knew there was no nulls for a whole vector, or
/// the supplied window, and therefore supplied `0` to ensure that the
/// dense path was used for the kernel.
/// - Any `NaN` or `inf` values generated in the kernel function
/// are kept verbatim, without `nulling` them in the (optional)
/// mask. They can represent additional data signal, e.g. `-inf`
/// for a lower quantile at probability zero.
#[inline(always)]
pub fn dense_univariate_kernel_f64_std<FScalar>(
    x: &[f64],
    has_mask: bool,
    scalar_body: FScalar,
) -> (Vec64<f64>, Option<Bitmask>)
where
    FScalar: Fn(f64) -> f64,
{
    let len = x.len();
    let mut out = Vec64::with_capacity(len);

    for &xi in x {
        out.push(scalar_body(xi));
    }

    let out_mask = if has_mask {
        Some(Bitmask::new_set_all(len, true))
    } else {
        None
    };
    (out, out_mask)
}

/// Null-aware masked kernel helper.
///
/// ### Null handling
/// - Input mask is required and propagates nulls accordingly.
/// - Null lanes are written as `NaN` and cleared in the output mask.
#[inline(always)]
pub fn masked_univariate_kernel_f64_std<FScalar>(
    x: &[f64],
    mask: &Bitmask,
    scalar_body: FScalar,
) -> (Vec64<f64>, Bitmask)
where
    FScalar: Fn(f64) -> f64,
{
    let len = x.len();
    let mut out = Vec64::with_capacity(len);
    let mut out_mask = mask.clone();

    for idx in 0..len {
        if !unsafe { mask.get_unchecked(idx) } {
            out.push(f64::NAN);
            unsafe { out_mask.set_unchecked(idx, false) };
        } else {
            let xi = unsafe { *x.get_unchecked(idx) };
            out.push(scalar_body(xi));
            unsafe { out_mask.set_unchecked(idx, true) };
        }
    }

    (out, out_mask)
}

/// Dense kernel helper (zero-allocation variant).
///
/// Writes `scalar_body(x[i])` into `output[i]`. The caller guarantees
/// `output.len() == x.len()`.
#[inline(always)]
pub fn dense_univariate_kernel_f64_std_to<FScalar>(
    x: &[f64],
    output: &mut [f64],
    scalar_body: FScalar,
) where
    FScalar: Fn(f64) -> f64,
{
    for (o, &xi) in output.iter_mut().zip(x) {
        *o = scalar_body(xi);
    }
}

/// Null-aware masked kernel helper (zero-allocation variant).
///
/// Null lanes are written as `NaN`; valid lanes receive `scalar_body(x[i])`.
/// The caller guarantees `output.len() == x.len()` and a mask of at least
/// that length.
#[inline(always)]
pub fn masked_univariate_kernel_f64_std_to<FScalar>(
    x: &[f64],
    mask: &Bitmask,
    output: &mut [f64],
    scalar_body: FScalar,
) where
    FScalar: Fn(f64) -> f64,
{
    for (idx, o) in output.iter_mut().enumerate() {
        *o = if !mask.get(idx) {
            f64::NAN
        } else {
            scalar_body(x[idx])
        };
    }
}
