//! Stable argsort and joint reordering of paired samples.
//!
//! ## Purpose
//!
//! This module computes the permutation that sorts the observed x-values
//! ascending and applies it jointly to x and y, so that downstream
//! neighborhood search operates on a well-ordered sample.
//!
//! ## Design notes
//!
//! * **Stable**: `sort_by` preserves the relative order of equal keys, so
//!   tied x-values (and tied neighbor distances) resolve by original index.
//! * **Joint**: one permutation is applied to both arrays, keeping the
//!   `(x[i], y[i])` pairing intact.
//!
//! ## Non-goals
//!
//! * This module does not validate lengths (handled by the validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// ============================================================================
// Sorting Utilities
// ============================================================================

/// Return the indices that would sort `values` ascending.
///
/// Ties keep their original relative order (stable).
pub fn argsort<T: Float>(values: &[T]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Equal));
    order
}

/// Sort `x` ascending and apply the same permutation to `y`.
///
/// Returns owned, reordered copies; the inputs are left untouched.
pub fn sort_paired<T: Float>(x: &[T], y: &[T]) -> (Vec<T>, Vec<T>) {
    let order = argsort(x);
    let sorted_x = order.iter().map(|&i| x[i]).collect();
    let sorted_y = order.iter().map(|&i| y[i]).collect();
    (sorted_x, sorted_y)
}
