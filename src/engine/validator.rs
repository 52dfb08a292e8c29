//! Input and parameter validation for LOESS smoothing.
//!
//! ## Purpose
//!
//! This module provides the fail-fast checks that run before any numeric
//! work: input shapes, span and degree bounds, and the neighborhood-size
//! versus polynomial-degree relationship.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: validation stops at the first violation, with an error
//!   naming the offending quantity rather than a downstream shape or
//!   solver failure.
//! * **Ordering**: checks run from cheap to expensive.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or correct input data.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LoessError;

/// Largest supported polynomial degree for the local fit.
///
/// Keeps the `(degree + 1)^2` normal matrix small; higher-degree local
/// fits are numerically meaningless for LOESS anyway.
pub const MAX_DEGREE: usize = 10;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for LOESS configuration and input data.
///
/// All methods return `Result<(), LoessError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the observed sample arrays.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), LoessError> {
        // Check 1: Non-empty sample
        if x.is_empty() || y.is_empty() {
            return Err(LoessError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x.len() != y.len() {
            return Err(LoessError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        Ok(())
    }

    /// Validate the smoothing span.
    ///
    /// Spans above 1 are allowed; they saturate at the full sample.
    pub fn validate_span<T: Float>(span: T) -> Result<(), LoessError> {
        if !span.is_finite() || span <= T::zero() {
            return Err(LoessError::InvalidSpan(span.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate the polynomial degree.
    pub fn validate_degree(degree: usize) -> Result<(), LoessError> {
        if degree > MAX_DEGREE {
            return Err(LoessError::InvalidDegree(degree));
        }
        Ok(())
    }

    /// Validate the neighborhood size against the local fit's coefficient count.
    ///
    /// A neighborhood smaller than `degree + 1` cannot determine the
    /// polynomial; reporting it here turns an opaque singular-matrix
    /// failure into a configuration error.
    pub fn validate_window(neighbors: usize, coefficients: usize) -> Result<(), LoessError> {
        if neighbors < coefficients {
            return Err(LoessError::UnderdeterminedFit {
                neighbors,
                coefficients,
            });
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), LoessError> {
        if let Some(parameter) = duplicate_param {
            return Err(LoessError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
