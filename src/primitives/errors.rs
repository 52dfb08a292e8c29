//! Error types for LOESS smoothing.
//!
//! ## Purpose
//!
//! This module defines the single error enum surfaced by the crate. Every
//! failure mode of the batched pipeline maps to exactly one variant, so
//! callers can match on the reason without parsing messages.
//!
//! ## Design notes
//!
//! * **Terminal**: every error aborts the whole call; there is no partial
//!   or per-row result.
//! * **Fail-Fast**: configuration errors (span, degree, window size) are
//!   reported before any numeric work starts.
//! * **no_std**: implements `core::fmt::Display`; `std::error::Error` is
//!   gated on the `std` feature.

use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Errors that can occur during LOESS configuration or fitting.
#[derive(Debug, Clone, PartialEq)]
pub enum LoessError {
    /// Input arrays contain no points.
    EmptyInput,

    /// The x and y arrays have different lengths.
    MismatchedInputs {
        /// Length of the x array.
        x_len: usize,
        /// Length of the y array.
        y_len: usize,
    },

    /// The smoothing span is non-finite or not positive.
    InvalidSpan(f64),

    /// The polynomial degree exceeds the supported maximum.
    InvalidDegree(usize),

    /// The neighborhood is too small for the requested polynomial degree.
    UnderdeterminedFit {
        /// Points per neighborhood (`ceil(span * n)`).
        neighbors: usize,
        /// Coefficients the local fit must estimate (`degree + 1`).
        coefficients: usize,
    },

    /// The weighted normal matrix for one evaluation point is singular.
    SingularSystem {
        /// Index of the offending evaluation point.
        row: usize,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for LoessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoessError::EmptyInput => write!(f, "Input arrays are empty"),
            LoessError::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            LoessError::InvalidSpan(span) => {
                write!(f, "Invalid span: {} (must be > 0 and finite)", span)
            }
            LoessError::InvalidDegree(degree) => {
                write!(f, "Invalid degree: {} (must be at most 10)", degree)
            }
            LoessError::UnderdeterminedFit {
                neighbors,
                coefficients,
            } => write!(
                f,
                "Underdetermined fit: neighborhood has {} points but the local \
                 polynomial needs {} (increase span or lower degree)",
                neighbors, coefficients
            ),
            LoessError::SingularSystem { row } => {
                write!(f, "Singular normal matrix at evaluation point {}", row)
            }
            LoessError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LoessError {}
