// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Map-Airy Distribution Scalar Implementation**
//!
//! Slice kernels over the standard evaluators. Every kernel validates its
//! parameters, standardises `u = (x − location)/scale` and dispatches to the
//! dense or null-aware helper.

use minarrow::{Bitmask, FloatArray, Vec64};
use rand::Rng;

use super::cdf::standard_cdf;
use super::distribution::validate_location_scale;
use super::pdf::standard_pdf;
use super::quantile::standard_quantile;
use crate::errors::{KernelError, log_length_mismatch};
use crate::kernels::scientific::distributions::shared::sampler::sample_standard_map_airy;
use crate::kernels::scientific::distributions::univariate::common::std::{
    dense_univariate_kernel_f64_std, dense_univariate_kernel_f64_std_to,
    masked_univariate_kernel_f64_std, masked_univariate_kernel_f64_std_to,
};
use crate::utils::{confirm_equal_len, has_nulls};

/// Resolves the mask for the null-aware path, checking it covers `len` lanes.
#[inline(always)]
fn required_mask<'a>(
    fname: &str,
    null_mask: Option<&'a Bitmask>,
    len: usize,
) -> Result<&'a Bitmask, KernelError> {
    let Some(mask) = null_mask else {
        log::debug!("{fname}: null_count > 0 without a null_mask");
        return Err(KernelError::InvalidArguments(format!(
            "{fname}: null_count > 0 requires null_mask"
        )));
    };
    if mask.len() < len {
        log::debug!("{fname}: null_mask shorter than input");
        return Err(KernelError::LengthMismatch(log_length_mismatch(
            fname,
            len,
            mask.len(),
        )));
    }
    Ok(mask)
}

/// Shared allocation path: dense when no nulls are present, masked otherwise.
#[inline(always)]
fn run_kernel<F>(
    fname: &str,
    x: &[f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: F,
) -> Result<FloatArray<f64>, KernelError>
where
    F: Fn(f64) -> f64,
{
    if x.is_empty() {
        return Ok(FloatArray::from_slice(&[]));
    }

    // Dense path - no nulls
    if !has_nulls(null_count, null_mask) {
        let (data, mask) = dense_univariate_kernel_f64_std(x, null_mask.is_some(), scalar_body);
        return Ok(FloatArray {
            data: data.into(),
            null_mask: mask,
        });
    }

    // Null-aware path
    let mask = required_mask(fname, null_mask, x.len())?;
    let (data, out_mask) = masked_univariate_kernel_f64_std(x, mask, scalar_body);
    Ok(FloatArray {
        data: data.into(),
        null_mask: Some(out_mask),
    })
}

/// Shared zero-allocation path.
#[inline(always)]
fn run_kernel_to<F>(
    fname: &str,
    x: &[f64],
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: F,
) -> Result<(), KernelError>
where
    F: Fn(f64) -> f64,
{
    confirm_equal_len(fname, x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    if !has_nulls(null_count, null_mask) {
        dense_univariate_kernel_f64_std_to(x, output, scalar_body);
        return Ok(());
    }
    let mask = required_mask(fname, null_mask, x.len())?;
    masked_univariate_kernel_f64_std_to(x, mask, output, scalar_body);
    Ok(())
}

/// Map-Airy PDF, null-aware and Arrow-compliant.
/// f(x; location, scale) = f₀((x − location)/scale) / scale
#[inline(always)]
pub fn mapairy_pdf_std(
    x: &[f64],
    location: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    validate_location_scale("mapairy_pdf", location, scale)?;
    let inv_scale = 1.0 / scale;
    run_kernel("mapairy_pdf", x, null_mask, null_count, move |xi| {
        standard_pdf((xi - location) * inv_scale) * inv_scale
    })
}

/// Map-Airy PDF (zero-allocation variant).
#[inline(always)]
pub fn mapairy_pdf_std_to(
    x: &[f64],
    location: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    validate_location_scale("mapairy_pdf", location, scale)?;
    let inv_scale = 1.0 / scale;
    run_kernel_to("mapairy_pdf", x, output, null_mask, null_count, move |xi| {
        standard_pdf((xi - location) * inv_scale) * inv_scale
    })
}

/// Map-Airy CDF in either tail.
/// F(x) = P(X ≤ x) when `upper` is false, otherwise P(X > x)
#[inline(always)]
pub fn mapairy_cdf_std(
    x: &[f64],
    location: f64,
    scale: f64,
    upper: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    validate_location_scale("mapairy_cdf", location, scale)?;
    let inv_scale = 1.0 / scale;
    run_kernel("mapairy_cdf", x, null_mask, null_count, move |xi| {
        standard_cdf((xi - location) * inv_scale, upper)
    })
}

/// Map-Airy CDF (zero-allocation variant).
#[inline(always)]
pub fn mapairy_cdf_std_to(
    x: &[f64],
    location: f64,
    scale: f64,
    upper: bool,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    validate_location_scale("mapairy_cdf", location, scale)?;
    let inv_scale = 1.0 / scale;
    run_kernel_to("mapairy_cdf", x, output, null_mask, null_count, move |xi| {
        standard_cdf((xi - location) * inv_scale, upper)
    })
}

/// Map-Airy quantile: Q(p) = location + scale · Q₀(p)
#[inline(always)]
pub fn mapairy_quantile_std(
    p: &[f64],
    location: f64,
    scale: f64,
    upper: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    validate_location_scale("mapairy_quantile", location, scale)?;
    run_kernel("mapairy_quantile", p, null_mask, null_count, move |pi| {
        location + scale * standard_quantile(pi, upper)
    })
}

/// Map-Airy quantile (zero-allocation variant).
#[inline(always)]
pub fn mapairy_quantile_std_to(
    p: &[f64],
    location: f64,
    scale: f64,
    upper: bool,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    validate_location_scale("mapairy_quantile", location, scale)?;
    run_kernel_to("mapairy_quantile", p, output, null_mask, null_count, move |pi| {
        location + scale * standard_quantile(pi, upper)
    })
}

/// `n` iid Map-Airy(location, scale) variates drawn from `rng`.
#[inline(always)]
pub fn mapairy_sample_std<R: Rng + ?Sized>(
    n: usize,
    location: f64,
    scale: f64,
    rng: &mut R,
) -> Result<FloatArray<f64>, KernelError> {
    validate_location_scale("mapairy_sample", location, scale)?;
    let mut out = Vec64::with_capacity(n);
    for _ in 0..n {
        out.push(location + scale * sample_standard_map_airy(rng));
    }
    Ok(FloatArray::from_vec64(out, None))
}
