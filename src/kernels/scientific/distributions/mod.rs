// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Map-Airy Probability Distribution Computing*
//!
//! Distribution kernels providing probability density functions (PDFs),
//! cumulative distribution functions (CDFs), quantile functions and random
//! sampling for the Map-Airy law.
//!
//! ## Core Statistical Functions
//! - **Probability density**: segment-wise rational approximants with power-law
//!   and stretched-exponential tail factors
//! - **Cumulative distribution**: either tail computed directly, so the small
//!   tail is never obtained by cancellation
//! - **Quantile functions**: direct segments near the centre and exponent
//!   buckets for tiny probabilities, no iteration
//! - **Random sampling**: closed-form transform of two uniforms
//!
//! ## Arrow Integration and Null Handling
//! Kernels operate on plain slices with an optional Arrow-style validity
//! bitmask (1 = valid, 0 = null):
//! - **Null-aware processing**: null lanes produce `NaN` and a cleared bit
//! - **Dense fast path**: when `null_count == Some(0)` or no mask is supplied
//!
//! ### Null Value Philosophy
//! Rather than assume, we choose to recognise inf and NaN as valid float values
//! (consistent with Apache Arrow semantics), leaving it to the user to subsequently
//! treat them as nulls if they wish, given that there are numerical scenarios where
//! they represent information gain.
//!
//! ## Numerical Precision and Stability
//! The approximants reproduce an extended-precision reference to within a few
//! ulp on every segment. See `./tests` for the reference points and the
//! tolerances they are checked at.
//!
//! ## Disclaimer
//! This implementation is provided on a best-effort basis and is intended for
//! general scientific and engineering use. We make no guarantees as to
//! correctness, fitness for any particular purpose, or suitability for uses
//! such as in life-critical, safety-critical, or financial applications.

/// # **Shared Distribution Utilities**
///
/// - **`constants`**: Mathematical constants and precomputed values
/// - **`rational`**: Horner evaluation of rational approximants
/// - **`sampler`**: Random number generation and sampling utilities
pub mod shared {
    pub mod constants;
    pub mod rational;
    pub mod sampler;
}

/// # **Univariate Distributions** - *Single-Variable Probability Distributions*
///
/// - **Continuous**: map_airy
/// - **Common utilities**: dense and null-aware kernel helpers
pub mod univariate {
    // common kernel patterns
    pub mod common;

    // distributions
    pub mod map_airy;
}
