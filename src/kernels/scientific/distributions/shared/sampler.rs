// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Sampling Module** - *Map-Airy Variates*
//!
//! Pseudorandom variates from the Map-Airy law via the closed-form transform
//! of one angular and one exponential uniform, with no rejection step.

use rand::Rng;
use std::f64::consts::PI;

/// Maps `u ∈ (−½, ½)` and `w ∈ (0, 1)` to a standard Map-Airy variate.
///
/// r = −sin(π(1.5u − ¼)) · ∛( 2 ln w / (cos(π(0.5u − ¼)) · cos²(πu)) )
///
/// Both cosines are strictly positive on the open interval and `ln w < 0`,
/// so the cube root argument is negative and finite.
#[inline]
pub fn map_airy_from_uniforms(u: f64, w: f64) -> f64 {
    let c = (PI * u).cos();
    let denom = (PI * (0.5 * u - 0.25)).cos() * c * c;
    -(PI * (1.5 * u - 0.25)).sin() * (2.0 * w.ln() / denom).cbrt()
}

/// Generates a single standard Map-Airy variate.
///
/// `random::<f64>()` is uniform on `[0, 1)`; the closed endpoint is redrawn so
/// both inputs of [`map_airy_from_uniforms`] lie in their open intervals.
#[inline]
pub fn sample_standard_map_airy<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u = loop {
        let r: f64 = rng.random::<f64>();
        if r > 0.0 {
            break r - 0.5;
        }
    };
    let w = loop {
        let r: f64 = rng.random::<f64>();
        if r > 0.0 {
            break r;
        }
    };
    map_airy_from_uniforms(u, w)
}
