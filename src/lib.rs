// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **Map-Airy Kernels**
//!
//! Double-precision evaluation of the Map-Airy distribution, the stable law
//! with stability index α = 3/2 and skewness β = 1: density, cumulative
//! probability in either tail, quantiles in either tail, and sampling.
//!
//! The distribution has no elementary closed form. Each function is covered
//! by a partition of its domain into segments, each with a fitted rational
//! approximant and, in the tails, an analytic power-law or stretched
//! exponential factor.
//!
//! Two surfaces are provided:
//! - [`MapAiry`], a location/scale value type with scalar methods, moments
//!   and the stable-sum algebra.
//! - Slice kernels (`mapairy_pdf`, `mapairy_cdf`, `mapairy_quantile`, …)
//!   producing null-aware `minarrow::FloatArray<f64>` outputs.

pub mod kernels {
    pub mod scientific {
        #[cfg(feature = "probability_distributions")]
        pub mod distributions;
    }
}

pub mod config;
pub mod errors;
pub mod utils;

#[cfg(feature = "probability_distributions")]
pub use kernels::scientific::distributions::univariate::map_airy::{
    MapAiry, Tail, mapairy_cdf, mapairy_cdf_to, mapairy_pdf, mapairy_pdf_to, mapairy_quantile,
    mapairy_quantile_to, mapairy_sample,
};
