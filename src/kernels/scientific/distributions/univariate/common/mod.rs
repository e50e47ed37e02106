// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Distribution Utilities** - *Shared Kernel and Testing Helpers*
//!
//! Dense and null-aware kernel skeletons shared by the univariate
//! distribution modules, plus small helpers for their unit tests.
//!
//! ## Helper Functions
//! - **Array extraction**: Safe unwrapping of dense arrays without null masks
//! - **Scalar testing**: Single-value operation testing utilities
//! - **Mask creation**: Null mask generation for testing scenarios
//! - **Tolerance checking**: Numerical comparison with configurable precision

/// Scalar implementations of common distribution utilities.
pub mod std;

use minarrow::{Bitmask, Buffer, FloatArray};

// Common test helpers

/// Test Helper: unwrap `FloatArray`, assert *no* null mask, return data.
pub fn dense_data(arr: FloatArray<f64>) -> Buffer<f64> {
    assert!(arr.null_mask.is_none(), "unexpected mask on dense path");
    arr.data
}

/// Build a 1-lane slice (`&[T]`) on the fly, call `kernel`,
/// and return the single f64 result for *scalar* comparison.
pub fn scalar_call<F>(kernel: F, x: f64) -> f64
where
    F: Fn(&[f64]) -> FloatArray<f64>,
{
    dense_data(kernel(&[x]))[0]
}

/// Create a mask of given length with exactly the lane `idx` null.
pub fn single_null_mask(len: usize, idx: usize) -> Bitmask {
    let mut m = Bitmask::new_set_all(len, true);
    unsafe { m.set_unchecked(idx, false) };
    m
}

/// Assert absolute difference ≤ `tol`.
pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() <= tol,
        "assert_close failed: {} vs {} (tol={})",
        a,
        b,
        tol
    );
}

/// Assert relative difference ≤ `tol`, treating exact equality
/// (including matching zeros and infinities) as a pass.
pub fn assert_rel_close(a: f64, b: f64, tol: f64) {
    if a == b {
        return;
    }
    let rel = ((a - b) / b).abs();
    assert!(
        rel <= tol,
        "assert_rel_close failed: {} vs {} (rel={:e}, tol={:e})",
        a,
        b,
        rel,
        tol
    );
}
