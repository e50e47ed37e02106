// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types for the Map-Airy kernels and distribution constructor.
//!
//! ## Error Categories
//! - **Argument Errors**: non-finite location, non-positive or non-finite scale,
//!   and combinators that would produce such a parameter pair
//! - **Length Errors**: output buffers that do not match the input length
//!
//! Evaluation itself never fails: NaN inputs propagate, out-of-range
//! probabilities yield NaN, and tail underflow saturates to `0` or `±∞`.

use thiserror::Error;

/// Error type for all kernel operations.
///
/// Each variant carries a contextual message naming the function and the
/// offending value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    /// Invalid arguments provided to a kernel function or constructor.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Array length mismatch between input and output buffers.
    #[error("Length mismatch: {0}")]
    LengthMismatch(String),
}

/// Creates a formatted error message for length mismatches between left-hand side (LHS) and right-hand side (RHS) arrays.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Length of the left-hand side array
/// * `rhs` - Length of the right-hand side array
pub fn log_length_mismatch(fname: &str, lhs: usize, rhs: usize) -> String {
    format!("{} => Length mismatch: LHS {} RHS {}", fname, lhs, rhs)
}
