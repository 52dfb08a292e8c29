//! Tricubic kernel weighting of neighbor distances.
//!
//! ## Purpose
//!
//! This module converts gathered neighbor distances into regression
//! weights. Each row of distances is normalized by its own maximum and
//! passed through the tricubic kernel `w(u) = (1 - u^3)^3`, clamped to
//! `[0, 1]` to absorb tiny floating-point residues from the cubing.
//!
//! ## Key concepts
//!
//! * **Bandwidth**: the farthest selected neighbor defines the kernel
//!   support, so its weight is exactly zero.
//! * **Degenerate rows**: when every selected distance is zero (the
//!   evaluation point coincides with all its neighbors), normalization
//!   would divide by zero. Such rows fall back to uniform weights instead
//!   of propagating NaN.
//!
//! ## Invariants
//!
//! * All produced weights are in `[0, 1]`.
//! * The nearest neighbor never has a smaller weight than the farthest.

// External dependencies
use num_traits::Float;

// ============================================================================
// Tricubic Kernel
// ============================================================================

/// Tricubic kernel: `clamp((1 - u^3)^3, 0, 1)`.
#[inline]
pub fn tricube<T: Float>(u: T) -> T {
    let c = T::one() - u * u * u;
    let w = c * c * c;
    w.max(T::zero()).min(T::one())
}

/// Weight one row of gathered distances in place.
///
/// Distances are normalized by the row maximum before the kernel is
/// applied. A row whose maximum is zero gets uniform weights.
pub fn weight_row<T: Float>(distances: &[T], out: &mut [T]) {
    debug_assert_eq!(distances.len(), out.len());

    let max = distances.iter().fold(T::zero(), |a, &b| a.max(b));
    if max > T::zero() {
        for (w, &d) in out.iter_mut().zip(distances) {
            *w = tricube(d / max);
        }
    } else {
        // Coincident neighborhood: every neighbor sits on the evaluation point.
        for w in out.iter_mut() {
            *w = T::one();
        }
    }
}
