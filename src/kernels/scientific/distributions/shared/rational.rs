// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Rational Approximant Evaluation**
//!
//! Horner evaluation of `P(x)/Q(x)` for the fitted coefficient tables.
//! Coefficients are stored lowest order first; the denominator's constant
//! term is 1 in every table but is stored explicitly.

/// Evaluates the polynomial `Σ c[i]·xⁱ` by nested multiplication.
#[inline(always)]
pub fn horner(x: f64, c: &[f64]) -> f64 {
    c.iter().rev().fold(0.0, |acc, &ci| acc * x + ci)
}

/// Evaluates `Σ numer[i]·xⁱ / Σ denom[i]·xⁱ`.
///
/// No error conditions: NaN and infinities propagate per IEEE-754.
/// Callers restrict `x` to the fitted range of the table.
#[inline(always)]
pub fn rational(x: f64, numer: &[f64], denom: &[f64]) -> f64 {
    horner(x, numer) / horner(x, denom)
}
