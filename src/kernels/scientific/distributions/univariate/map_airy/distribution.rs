// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Map-Airy Distribution Value** - *Location/Scale Façade and Stable-Sum Algebra*
//!
//! [`MapAiry`] holds a validated `(μ, c)` pair with `c⁻¹` cached, and maps
//! every query onto the standard evaluators through `u = (x − μ)/c`.
//!
//! ## Algebra
//! Independent Map-Airy variables are closed under addition with
//! `c = (c₁^{3/2} + c₂^{3/2})^{2/3}`. Every combinator re-enters
//! [`MapAiry::new`], so a result whose parameters overflow or whose scale
//! is not positive is rejected rather than returned.

use std::ops::{Add, Div, Mul, Sub};

use rand::Rng;

use super::Tail;
use super::cdf::standard_cdf;
use super::pdf::standard_pdf;
use super::quantile::standard_quantile;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::constants::{
    MAPAIRY_ALPHA, MAPAIRY_BETA, MAPAIRY_ENTROPY, MAPAIRY_MEDIAN, MAPAIRY_MODE,
};
use crate::kernels::scientific::distributions::shared::sampler::{
    map_airy_from_uniforms, sample_standard_map_airy,
};

/// Map-Airy law with location `μ` and scale `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapAiry {
    mu: f64,
    c: f64,
    inv_c: f64,
}

impl Default for MapAiry {
    /// The standard law, `μ = 0`, `c = 1`.
    fn default() -> Self {
        MapAiry {
            mu: 0.0,
            c: 1.0,
            inv_c: 1.0,
        }
    }
}

/// Rejects non-finite `location` and non-finite or non-positive `scale`.
/// Subnormal scales are rejected too, since their reciprocal overflows.
pub(crate) fn validate_location_scale(
    fname: &str,
    location: f64,
    scale: f64,
) -> Result<(), KernelError> {
    if !location.is_finite() {
        log::debug!("{fname}: rejected location {location}");
        return Err(KernelError::InvalidArguments(format!(
            "{fname}: location must be finite, got {location}"
        )));
    }
    if !(scale > 0.0 && scale.is_finite()) {
        log::debug!("{fname}: rejected scale {scale}");
        return Err(KernelError::InvalidArguments(format!(
            "{fname}: scale must be finite and > 0, got {scale}"
        )));
    }
    if !(1.0 / scale).is_finite() {
        log::debug!("{fname}: rejected scale {scale}, reciprocal overflows");
        return Err(KernelError::InvalidArguments(format!(
            "{fname}: scale too small, 1/scale overflows for {scale}"
        )));
    }
    Ok(())
}

impl MapAiry {
    /// Creates the law with location `mu` and scale `c`.
    ///
    /// # Errors
    /// `KernelError::InvalidArguments` if `mu` is not finite, or `c` is not
    /// finite and strictly positive, or `1/c` overflows.
    pub fn new(mu: f64, c: f64) -> Result<Self, KernelError> {
        validate_location_scale("MapAiry::new", mu, c)?;
        Ok(MapAiry {
            mu,
            c,
            inv_c: 1.0 / c,
        })
    }

    /// Location parameter.
    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Scale parameter.
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    #[inline(always)]
    fn standardise(&self, x: f64) -> f64 {
        (x - self.mu) * self.inv_c
    }

    /// Probability density at `x`.
    #[inline]
    pub fn pdf(&self, x: f64) -> f64 {
        standard_pdf(self.standardise(x)) * self.inv_c
    }

    /// `P(X ≤ x)` for [`Tail::Lower`], `P(X > x)` for [`Tail::Upper`].
    #[inline]
    pub fn cdf(&self, x: f64, tail: Tail) -> f64 {
        standard_cdf(self.standardise(x), tail.is_upper())
    }

    /// Inverse of [`MapAiry::cdf`] for the same tail. `NaN` outside `[0, 1]`.
    #[inline]
    pub fn quantile(&self, p: f64, tail: Tail) -> f64 {
        self.mu + self.c * standard_quantile(p, tail.is_upper())
    }

    /// Draws one variate from `rng`.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.mu + self.c * sample_standard_map_airy(rng)
    }

    /// Deterministic transform of `u ∈ (−½, ½)` and `w ∈ (0, 1)`.
    #[inline]
    pub fn sample_from_uniforms(&self, u: f64, w: f64) -> f64 {
        self.mu + self.c * map_airy_from_uniforms(u, w)
    }

    /// Mean, equal to the location.
    pub fn mean(&self) -> f64 {
        self.mu
    }

    pub fn median(&self) -> f64 {
        self.mu + self.c * MAPAIRY_MEDIAN
    }

    pub fn mode(&self) -> f64 {
        self.mu + self.c * MAPAIRY_MODE
    }

    /// Differential entropy in nats.
    pub fn entropy(&self) -> f64 {
        MAPAIRY_ENTROPY + self.c.ln()
    }

    /// Undefined for this family; always `NaN`.
    pub fn variance(&self) -> f64 {
        f64::NAN
    }

    /// Undefined for this family; always `NaN`.
    pub fn skewness(&self) -> f64 {
        f64::NAN
    }

    /// Undefined for this family; always `NaN`.
    pub fn kurtosis(&self) -> f64 {
        f64::NAN
    }

    /// Stability index, `3/2`.
    pub fn alpha(&self) -> f64 {
        MAPAIRY_ALPHA
    }

    /// Skewness parameter, `1`.
    pub fn beta(&self) -> f64 {
        MAPAIRY_BETA
    }

    /// Law of `X + Y` for independent `X ~ self`, `Y ~ other`.
    pub fn combine(&self, other: &MapAiry) -> Result<MapAiry, KernelError> {
        MapAiry::new(self.mu + other.mu, combined_scale(self.c, other.c))
    }

    /// Locations subtract; the scale combines as in [`MapAiry::combine`].
    pub fn difference(&self, other: &MapAiry) -> Result<MapAiry, KernelError> {
        MapAiry::new(self.mu - other.mu, combined_scale(self.c, other.c))
    }

    /// Law of `X + s`.
    pub fn shift(&self, s: f64) -> Result<MapAiry, KernelError> {
        MapAiry::new(self.mu + s, self.c)
    }

    /// Law of `k·X`. Only `k > 0` is admissible, anything else fails
    /// the scale check of [`MapAiry::new`].
    pub fn scale(&self, k: f64) -> Result<MapAiry, KernelError> {
        MapAiry::new(self.mu * k, self.c * k)
    }
}

/// `(a^{3/2} + b^{3/2})^{2/3}`
#[inline]
fn combined_scale(a: f64, b: f64) -> f64 {
    let s = a * a.sqrt() + b * b.sqrt();
    let r = s.cbrt();
    r * r
}

impl Add for MapAiry {
    type Output = Result<MapAiry, KernelError>;

    fn add(self, rhs: MapAiry) -> Self::Output {
        self.combine(&rhs)
    }
}

impl Sub for MapAiry {
    type Output = Result<MapAiry, KernelError>;

    fn sub(self, rhs: MapAiry) -> Self::Output {
        self.difference(&rhs)
    }
}

impl Add<f64> for MapAiry {
    type Output = Result<MapAiry, KernelError>;

    fn add(self, rhs: f64) -> Self::Output {
        self.shift(rhs)
    }
}

impl Add<MapAiry> for f64 {
    type Output = Result<MapAiry, KernelError>;

    fn add(self, rhs: MapAiry) -> Self::Output {
        rhs.shift(self)
    }
}

impl Sub<f64> for MapAiry {
    type Output = Result<MapAiry, KernelError>;

    fn sub(self, rhs: f64) -> Self::Output {
        self.shift(-rhs)
    }
}

impl Mul<f64> for MapAiry {
    type Output = Result<MapAiry, KernelError>;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<MapAiry> for f64 {
    type Output = Result<MapAiry, KernelError>;

    fn mul(self, rhs: MapAiry) -> Self::Output {
        rhs.scale(self)
    }
}

impl Div<f64> for MapAiry {
    type Output = Result<MapAiry, KernelError>;

    fn div(self, rhs: f64) -> Self::Output {
        MapAiry::new(self.mu / rhs, self.c / rhs)
    }
}
