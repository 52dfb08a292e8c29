//! High-level API for batched LOESS smoothing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring the span and polynomial degree, and the model
//! it produces.
//!
//! ## Design notes
//!
//! * **Ergonomic**: fluent builder with sensible defaults (span 0.75,
//!   degree 2).
//! * **Validated**: parameters are checked when `.build()` is called;
//!   setting the same parameter twice is rejected.
//! * **Type-Safe**: generic over `f32`/`f64` via `FloatLinalg`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LoessBuilder`] via `Loess::new()`.
//! 2. Chain configuration methods (`.span()`, `.degree()`).
//! 3. Call `.build()` to obtain a [`LoessModel`], then `.fit()` or
//!    `.fit_at()`.

// Internal dependencies
use crate::engine::executor::LoessExecutor;
use crate::engine::validator::Validator;
use crate::math::distance::DistanceSimd;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::engine::output::LoessResult;
pub use crate::primitives::errors::LoessError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring LOESS parameters.
#[derive(Debug, Clone)]
pub struct LoessBuilder<T: FloatLinalg + DistanceSimd> {
    /// Smoothing span (fraction of the sample per neighborhood).
    pub span: Option<T>,

    /// Polynomial degree for the local fit.
    pub degree: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg + DistanceSimd> Default for LoessBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg + DistanceSimd> LoessBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            span: None,
            degree: None,
            duplicate_param: None,
        }
    }

    /// Set the smoothing span (default: 0.75).
    ///
    /// Values at or above 1 use the entire sample as every neighborhood.
    pub fn span(mut self, span: T) -> Self {
        if self.span.is_some() {
            self.duplicate_param = Some("span");
        }
        self.span = Some(span);
        self
    }

    /// Set the polynomial degree for the local fit (default: 2).
    pub fn degree(mut self, degree: usize) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<LoessModel<T>, LoessError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let span = self.span.unwrap_or_else(|| T::from(0.75).unwrap());
        Validator::validate_span(span)?;

        let degree = self.degree.unwrap_or(2);
        Validator::validate_degree(degree)?;

        Ok(LoessModel { span, degree })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated LOESS configuration, ready to fit data.
#[derive(Debug, Clone, Copy)]
pub struct LoessModel<T> {
    /// Smoothing span.
    pub span: T,
    /// Polynomial degree.
    pub degree: usize,
}

impl<T: FloatLinalg + DistanceSimd> LoessModel<T> {
    /// Smooth the sample at its own (sorted) x-values.
    ///
    /// Returns the paired format: `result.x` holds the ascending-sorted
    /// x-values and `result.y` the smoothed prediction at each.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<LoessResult<T>, LoessError> {
        LoessExecutor::new(self.span, self.degree).run(x, y, None)
    }

    /// Smooth the sample at explicit evaluation points.
    ///
    /// Returns the values-only format: `result.x` is `None` and `result.y`
    /// holds one prediction per entry of `eval_x`, in the same order. An
    /// empty `eval_x` yields an empty result.
    pub fn fit_at(&self, x: &[T], y: &[T], eval_x: &[T]) -> Result<LoessResult<T>, LoessError> {
        LoessExecutor::new(self.span, self.degree).run(x, y, Some(eval_x))
    }
}
