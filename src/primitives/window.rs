//! Neighborhood size computation from the smoothing span.
//!
//! ## Purpose
//!
//! This module converts the span (fraction of the sample used per local
//! fit) into a concrete neighborhood size `k = ceil(span * n)`.
//!
//! ## Invariants
//!
//! * For validated spans (`span > 0`, finite) and `n >= 1`, the result is
//!   in `1..=n`.
//! * Spans above 1 saturate at the full sample size.

// External dependencies
use num_traits::Float;

// ============================================================================
// Window Size
// ============================================================================

/// Number of neighbors per evaluation point: `ceil(span * n)`, capped at `n`.
pub fn neighborhood_size<T: Float>(n: usize, span: T) -> usize {
    let n_f = T::from(n).unwrap_or_else(T::one);
    let k = (span * n_f).ceil().to_usize().unwrap_or(n);
    k.min(n)
}
