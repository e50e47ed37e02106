// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Null Handling and Buffer Validation*
//!
//! Small helpers shared by the kernel entry points.

use minarrow::Bitmask;

use crate::errors::{KernelError, log_length_mismatch};

/// Determines whether nulls are present given an optional null count and mask reference.
/// Avoids computing mask cardinality to preserve performance guarantees.
#[inline(always)]
pub fn has_nulls(null_count: Option<usize>, mask: Option<&Bitmask>) -> bool {
    match null_count {
        Some(n) => n > 0,
        None => mask.is_some(),
    }
}

/// Validates that two lengths are equal, e.g. an input slice and the
/// caller-provided output buffer of a `_to` kernel.
///
/// # Returns
/// `Ok(())` if lengths are equal, otherwise `KernelError::LengthMismatch`.
#[inline(always)]
pub fn confirm_equal_len(label: &str, a: usize, b: usize) -> Result<(), KernelError> {
    if a != b {
        log::debug!("{label}: rejected buffer lengths {a} vs {b}");
        return Err(KernelError::LengthMismatch(log_length_mismatch(label, a, b)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_nulls_prefers_explicit_count() {
        let m = Bitmask::new_set_all(4, true);
        assert!(!has_nulls(Some(0), Some(&m)));
        assert!(has_nulls(Some(2), Some(&m)));
        assert!(has_nulls(None, Some(&m)));
        assert!(!has_nulls(None, None));
    }

    #[test]
    fn confirm_equal_len_reports_mismatch() {
        assert!(confirm_equal_len("k", 3, 3).is_ok());
        match confirm_equal_len("k", 3, 4) {
            Err(KernelError::LengthMismatch(msg)) => assert!(msg.contains("LHS 3 RHS 4")),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
