//! Batched nearest-neighbor selection over a dense distance matrix.
//!
//! ## Purpose
//!
//! This module computes, for every evaluation point at once, the absolute
//! distances to all observed points and selects the `k` nearest. The full
//! `m x n` set of distances is evaluated row by row into a reused buffer,
//! trading memory locality for the ability to feed the rest of the
//! pipeline with flat, batched `m x k` arrays.
//!
//! ## Design notes
//!
//! * **SIMD row fill**: the distance row is filled through the
//!   [`DistanceSimd`] trait, which dispatches to `wide` lanes for f32/f64.
//! * **Stable selection**: each row is argsorted with a stable comparison,
//!   so equidistant neighbors resolve by ascending post-sort index.
//!
//! ## Invariants
//!
//! * Per row, the selected distances are in ascending order.
//! * `indices` and `distances` both have exactly `m * k` entries.
//!
//! ## Non-goals
//!
//! * No spatial index: the sample sizes this crate targets make the dense
//!   scan the simpler and cache-friendlier choice.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;
use wide::{f32x4, f64x2};

// ============================================================================
// SIMD Distance Fill
// ============================================================================

/// Bridge trait dispatching the distance-row fill to `wide` SIMD lanes.
pub trait DistanceSimd: Float {
    /// Fill `out[i] = |query - xs[i]|` for one evaluation row.
    fn abs_distance_row(query: Self, xs: &[Self], out: &mut [Self]);
}

impl DistanceSimd for f64 {
    fn abs_distance_row(query: f64, xs: &[f64], out: &mut [f64]) {
        let q = f64x2::splat(query);
        let n = xs.len();
        let mut i = 0;
        while i + 2 <= n {
            let v = f64x2::new([xs[i], xs[i + 1]]);
            let d = (v - q).abs().to_array();
            out[i] = d[0];
            out[i + 1] = d[1];
            i += 2;
        }
        // Tail
        for j in i..n {
            out[j] = (xs[j] - query).abs();
        }
    }
}

impl DistanceSimd for f32 {
    fn abs_distance_row(query: f32, xs: &[f32], out: &mut [f32]) {
        let q = f32x4::splat(query);
        let n = xs.len();
        let mut i = 0;
        while i + 4 <= n {
            let v = f32x4::new([xs[i], xs[i + 1], xs[i + 2], xs[i + 3]]);
            let d = (v - q).abs().to_array();
            out[i..i + 4].copy_from_slice(&d);
            i += 4;
        }
        // Tail
        for j in i..n {
            out[j] = (xs[j] - query).abs();
        }
    }
}

// ============================================================================
// Neighborhood Selection
// ============================================================================

/// Flat `m x k` neighbor indices and distances for a batch of evaluation points.
#[derive(Debug, Clone)]
pub struct Neighborhoods<T> {
    /// Neighbors per evaluation point.
    pub k: usize,
    /// Row-major `m x k` indices into the sorted sample, ascending by distance.
    pub indices: Vec<usize>,
    /// Row-major `m x k` distances gathered at `indices`.
    pub distances: Vec<T>,
}

impl<T: DistanceSimd> Neighborhoods<T> {
    /// Select the `k` nearest observed points for every evaluation point.
    ///
    /// `sorted_x` must be the ascending-sorted sample; `k` must be in
    /// `1..=sorted_x.len()` (guaranteed by the validator).
    pub fn select(sorted_x: &[T], eval_x: &[T], k: usize) -> Self {
        let n = sorted_x.len();
        let m = eval_x.len();

        let mut row = vec![T::zero(); n];
        let mut order: Vec<usize> = Vec::with_capacity(n);
        let mut indices = Vec::with_capacity(m * k);
        let mut distances = Vec::with_capacity(m * k);

        for &query in eval_x {
            T::abs_distance_row(query, sorted_x, &mut row);

            order.clear();
            order.extend(0..n);
            // Stable sort: equidistant neighbors keep ascending index order.
            order.sort_by(|&a, &b| row[a].partial_cmp(&row[b]).unwrap_or(Equal));

            for &i in order.iter().take(k) {
                indices.push(i);
                distances.push(row[i]);
            }
        }

        Self {
            k,
            indices,
            distances,
        }
    }

    /// Number of evaluation rows.
    #[inline]
    pub fn rows(&self) -> usize {
        if self.k == 0 {
            0
        } else {
            self.indices.len() / self.k
        }
    }

    /// Neighbor indices for evaluation row `j`.
    #[inline]
    pub fn row_indices(&self, j: usize) -> &[usize] {
        &self.indices[j * self.k..(j + 1) * self.k]
    }

    /// Neighbor distances for evaluation row `j`.
    #[inline]
    pub fn row_distances(&self, j: usize) -> &[T] {
        &self.distances[j * self.k..(j + 1) * self.k]
    }
}
