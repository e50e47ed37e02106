// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters are tied to the fitted coefficient tables and must change
// together with them.

//! # **Configuration Constants** - *Segment Layout Parameters*
//!
//! Compile-time constants controlling where the Map-Airy evaluators switch from
//! tabulated segments to their asymptotic forms.

/// Upper end of the last tabulated positive segment.
///
/// Beyond this abscissa the PDF and upper CDF are evaluated through the
/// limit tables in `w = u^(-3/2)`.
pub const PLUS_LIMIT_BOUNDARY: f64 = 64.0;

/// Left-tail cutoff on `v = -u`.
///
/// Past this point `exp(-2v³/27)` is far below the smallest subnormal, so the
/// PDF and lower CDF are exactly zero.
pub const MINUS_UNDERFLOW_BOUNDARY: f64 = 32.0;

/// Binary exponent below which the upper quantile uses its leading
/// power-law coefficient `1/∛(2π)` instead of a table.
pub const UPPER_QUANTILE_SATURATION_EXP: i32 = -48;

/// Binary exponent below which the lower quantile saturates to `-∞`.
pub const LOWER_QUANTILE_SATURATION_EXP: i32 = -1024;

/// Probability at and above which the quantile evaluators use the direct
/// (non-bucketed) segments.
pub const QUANTILE_DIRECT_THRESHOLD: f64 = 0.125;
