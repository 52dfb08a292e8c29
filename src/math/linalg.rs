//! Linear algebra backend abstraction for the weighted solve.
//!
//! ## Purpose
//!
//! This module provides a trait-based bridge from generic `Float` types to
//! the nalgebra backend that solves the per-row weighted normal equations.
//!
//! ## Design notes
//!
//! * Uses QR decomposition (Householder reflections) for numerical
//!   stability on ill-conditioned systems.
//! * Rank deficiency is detected by checking the R diagonal against a
//!   tolerance scaled by machine epsilon and the largest diagonal entry;
//!   singular systems yield `None` rather than a regularized solution, and
//!   the caller reports them as errors. There is deliberately no
//!   pseudo-inverse fallback, so degenerate neighborhoods surface instead
//!   of producing silently wrong fits.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to
//!   nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Solve the normal equations `X'WX * beta = X'Wy`.
    ///
    /// `a` is the `n x n` normal matrix (symmetric, so storage order is
    /// irrelevant), `b` the right-hand side. Returns `None` when the
    /// system is singular.
    fn solve_normal(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_normal(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_normal_equations_f64(a, b, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_normal(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_normal_equations_f32(a, b, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    /// Solve normal equations X'WX * beta = X'Wy using f64 precision.
    ///
    /// Returns `None` when the factorization is rank-deficient.
    pub fn solve_normal_equations_f64(
        xtw_x: &[f64],
        xtw_y: &[f64],
        n_coeffs: usize,
    ) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_column_slice(n_coeffs, n_coeffs, xtw_x);
        let rhs = DVector::from_column_slice(xtw_y);

        let qr = matrix.qr();

        // QR's own solve only rejects an exact-zero R diagonal; a singular
        // matrix can factor to a diagonal entry that is merely tiny. Rank
        // check against a scaled tolerance before trusting the solve.
        let r = qr.r();
        let max_diag = (0..n_coeffs).fold(0.0_f64, |a, i| a.max(r[(i, i)].abs()));
        let tol = f64::EPSILON * n_coeffs as f64 * max_diag;
        if (0..n_coeffs).any(|i| r[(i, i)].abs() <= tol) {
            return None;
        }

        qr.solve(&rhs).map(|solution| solution.as_slice().to_vec())
    }

    /// Solve normal equations X'WX * beta = X'Wy using f32 precision.
    ///
    /// Returns `None` when the factorization is rank-deficient.
    pub fn solve_normal_equations_f32(
        xtw_x: &[f32],
        xtw_y: &[f32],
        n_coeffs: usize,
    ) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_column_slice(n_coeffs, n_coeffs, xtw_x);
        let rhs = DVector::from_column_slice(xtw_y);

        let qr = matrix.qr();

        let r = qr.r();
        let max_diag = (0..n_coeffs).fold(0.0_f32, |a, i| a.max(r[(i, i)].abs()));
        let tol = f32::EPSILON * n_coeffs as f32 * max_diag;
        if (0..n_coeffs).any(|i| r[(i, i)].abs() <= tol) {
            return None;
        }

        qr.solve(&rhs).map(|solution| solution.as_slice().to_vec())
    }
}
