//! # vloess — Batched LOESS smoothing for Rust
//!
//! A vectorized implementation of LOESS (Locally Estimated Scatterplot
//! Smoothing) over one-dimensional data. For every evaluation point it
//! selects the `ceil(span * n)` nearest observed points, weights them with
//! the tricubic kernel, and fits a weighted polynomial whose value at the
//! point is the smoothed prediction. The whole evaluation set is processed
//! as one batched pass: one distance/selection sweep, one flat set of
//! gathered neighborhoods, and a sequence of small independent solves.
//!
//! ## Quick Start
//!
//! ```rust
//! use vloess::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.0, 4.1, 5.9, 8.2, 9.8];
//!
//! // Build the model
//! let model = Loess::new()
//!     .span(0.75)     // Use 75% of the data for each local fit
//!     .degree(1)      // Local linear fit
//!     .build()?;
//!
//! // Smooth at the sorted sample points (paired output)
//! let result = model.fit(&x, &y)?;
//! assert_eq!(result.y.len(), 5);
//!
//! // Or predict at arbitrary points (values-only output)
//! let at = model.fit_at(&x, &y, &[1.5, 3.5])?;
//! assert_eq!(at.y.len(), 2);
//! # Result::<(), LoessError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter  | Default | Range        | Description                                   |
//! |------------|---------|--------------|-----------------------------------------------|
//! | **span**   | 0.75    | (0, 1] *     | Fraction of the sample per local neighborhood |
//! | **degree** | 2       | 0..=10       | Polynomial degree of the local fit            |
//!
//! \* spans above 1 behave like 1 (the full sample is every neighborhood).
//!
//! ## Errors
//!
//! `fit`/`fit_at` return `Result<LoessResult<T>, LoessError>`. Errors are
//! terminal for the call: there is no partial result. Configuration
//! problems (invalid span, a neighborhood too small for the requested
//! degree) are reported before any numeric work; an exactly singular local
//! system is reported with the offending evaluation point.
//!
//! The degree cap of 10 is a restriction of this crate, not of LOESS
//! itself: higher-degree local fits are numerically meaningless for a
//! smoother, so they are rejected as `InvalidDegree` rather than allowed
//! to produce an ill-conditioned solve.
//!
//! ```rust
//! use vloess::prelude::*;
//!
//! let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
//! let y = x.clone();
//!
//! // k = ceil(0.05 * 10) = 1 point cannot determine a quadratic.
//! let model = Loess::new().span(0.05).build()?;
//! assert!(matches!(
//!     model.fit(&x, &y),
//!     Err(LoessError::UnderdeterminedFit { .. })
//! ));
//! # Result::<(), LoessError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments; disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! vloess = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Cleveland, W. S. (1979). "Robust Locally Weighted Regression and Smoothing Scatterplots"
//! - NIST/SEMATECH e-Handbook of Statistical Methods, section on LOESS

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors, sorting, window sizing.
mod primitives;

// Layer 2: Math - distances, kernel, basis rows, linear algebra.
mod math;

// Layer 3: Engine - validation, batched execution, result assembly.
mod engine;

// High-level fluent API.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use vloess::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{LoessBuilder as Loess, LoessError, LoessModel, LoessResult};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// Only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
