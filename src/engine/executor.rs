//! Execution engine for the batched LOESS pipeline.
//!
//! ## Purpose
//!
//! This module orchestrates the four pipeline stages for a whole batch of
//! evaluation points: ordering and setup, neighborhood selection, kernel
//! weighting, and the weighted polynomial solve.
//!
//! ## Design notes
//!
//! * **Batched**: distances, selections, and gathers are produced for the
//!   entire evaluation set before any solving starts; the per-row solves
//!   then run over flat `m x k` arrays with reused scratch buffers.
//! * **Row independence**: rows are solved in an explicit loop of
//!   independent `(degree+1)`-sized systems. Failure stays all-or-nothing:
//!   the first singular row aborts the whole call.
//! * **Accumulated normal equations**: `X'WX` and `X'Wy` are accumulated
//!   directly from basis rows and weights; the `k x (degree+1)` design
//!   matrix is never materialized.
//!
//! ## Invariants
//!
//! * Output length equals the evaluation set length, in request order.
//! * The observed sample is jointly sorted by x before any selection.
//!
//! ## Non-goals
//!
//! * No robustness iterations, intervals, or multivariate predictors.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::output::LoessResult;
use crate::engine::validator::Validator;
use crate::math::design;
use crate::math::distance::{DistanceSimd, Neighborhoods};
use crate::math::kernel;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::LoessError;
use crate::primitives::sorting::sort_paired;
use crate::primitives::window::neighborhood_size;

// ============================================================================
// Executor
// ============================================================================

/// Stateless executor for one batched LOESS computation.
#[derive(Debug, Clone, Copy)]
pub struct LoessExecutor<T> {
    /// Fraction of the sample per neighborhood.
    pub span: T,
    /// Degree of the local polynomial.
    pub degree: usize,
}

impl<T: FloatLinalg + DistanceSimd> LoessExecutor<T> {
    /// Create an executor with the given span and degree.
    pub fn new(span: T, degree: usize) -> Self {
        Self { span, degree }
    }

    /// Run the full pipeline.
    ///
    /// With `eval_x = None` the evaluation points default to the sorted
    /// sample and the result carries the paired format; an explicit
    /// evaluation set yields the values-only format, in request order.
    /// An empty explicit evaluation set is not an error and produces an
    /// empty result.
    pub fn run(
        &self,
        x: &[T],
        y: &[T],
        eval_x: Option<&[T]>,
    ) -> Result<LoessResult<T>, LoessError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_span(self.span)?;
        Validator::validate_degree(self.degree)?;

        // Stage 1: ordering & setup
        let (sorted_x, sorted_y) = sort_paired(x, y);
        let n = sorted_x.len();
        let k = neighborhood_size(n, self.span);
        let n_coeffs = self.degree + 1;
        Validator::validate_window(k, n_coeffs)?;

        let (paired_x, yhat) = match eval_x {
            Some(eval) => (None, self.smooth_at(&sorted_x, &sorted_y, eval, k)?),
            None => {
                let yhat = self.smooth_at(&sorted_x, &sorted_y, &sorted_x, k)?;
                (Some(sorted_x), yhat)
            }
        };

        Ok(LoessResult {
            x: paired_x,
            y: yhat,
            span: self.span,
            degree: self.degree,
        })
    }

    /// Stages 2-4: selection, weighting, and the per-row weighted solve.
    fn smooth_at(
        &self,
        sorted_x: &[T],
        sorted_y: &[T],
        eval_x: &[T],
        k: usize,
    ) -> Result<Vec<T>, LoessError> {
        let m = eval_x.len();
        let p = self.degree + 1;

        // Stage 2: k-nearest selection for the whole batch
        let neighborhoods = Neighborhoods::select(sorted_x, eval_x, k);

        // Scratch buffers reused across rows
        let mut weights = vec![T::zero(); k];
        let mut basis = vec![T::zero(); p];
        let mut xtw_x = vec![T::zero(); p * p];
        let mut xtw_y = vec![T::zero(); p];

        let mut yhat = Vec::with_capacity(m);

        for j in 0..m {
            let idx = neighborhoods.row_indices(j);
            let dists = neighborhoods.row_distances(j);

            // Stage 3: tricubic weights from row-normalized distances
            kernel::weight_row(dists, &mut weights);

            // Stage 4: accumulate X'WX and X'Wy over the neighborhood
            for v in xtw_x.iter_mut() {
                *v = T::zero();
            }
            for v in xtw_y.iter_mut() {
                *v = T::zero();
            }
            for (i, &col) in idx.iter().enumerate() {
                let w = weights[i];
                design::fill_basis_row(sorted_x[col], &mut basis);
                let y_val = sorted_y[col];
                for r in 0..p {
                    let wb = w * basis[r];
                    xtw_y[r] = xtw_y[r] + wb * y_val;
                    for c in 0..p {
                        xtw_x[r * p + c] = xtw_x[r * p + c] + wb * basis[c];
                    }
                }
            }

            let betas = T::solve_normal(&xtw_x, &xtw_y, p)
                .ok_or(LoessError::SingularSystem { row: j })?;

            // Evaluate the local polynomial at the point itself
            design::fill_basis_row(eval_x[j], &mut basis);
            yhat.push(design::evaluate(&basis, &betas));
        }

        Ok(yhat)
    }
}
