//! Polynomial basis rows for the local design matrix.
//!
//! ## Purpose
//!
//! This module fills rows of the local design matrix: powers `0..=degree`
//! of an x-value. The same routine produces both the neighbor rows of the
//! `k x (degree+1)` design matrix and the evaluation row used to read the
//! fitted polynomial back out.
//!
//! ## Invariants
//!
//! * `out[0]` is always 1 (the intercept column).
//! * The row length determines the degree: `out.len() == degree + 1`.

// External dependencies
use num_traits::Float;

// ============================================================================
// Basis Rows
// ============================================================================

/// Fill `out` with `[1, x, x^2, ..., x^(out.len() - 1)]`.
#[inline]
pub fn fill_basis_row<T: Float>(x: T, out: &mut [T]) {
    let mut power = T::one();
    for slot in out.iter_mut() {
        *slot = power;
        power = power * x;
    }
}

/// Evaluate a fitted polynomial: dot product of a basis row with the betas.
#[inline]
pub fn evaluate<T: Float>(basis: &[T], betas: &[T]) -> T {
    basis
        .iter()
        .zip(betas)
        .fold(T::zero(), |acc, (&b, &c)| acc + b * c)
}
