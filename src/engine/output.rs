//! Result container for LOESS smoothing.
//!
//! ## Purpose
//!
//! This module defines the output of a fit: the smoothed predictions,
//! optionally paired with the sorted x-values when the evaluation points
//! defaulted to the sample itself.
//!
//! ## Key concepts
//!
//! * **Paired format**: `fit` (no explicit evaluation points) carries
//!   `x = Some(sorted x)`, so `(x, y)` rows are the sorted sample with its
//!   smoothed curve.
//! * **Values-only format**: `fit_at` carries `x = None`; `y` holds one
//!   prediction per requested evaluation point, in request order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use num_traits::Float;

// ============================================================================
// Result Type
// ============================================================================

/// Output of a LOESS fit.
#[derive(Debug, Clone, PartialEq)]
pub struct LoessResult<T> {
    /// Sorted x-values, present only for the paired format.
    pub x: Option<Vec<T>>,
    /// Smoothed predictions, one per evaluation point.
    pub y: Vec<T>,
    /// Span used for the fit.
    pub span: T,
    /// Polynomial degree used for the fit.
    pub degree: usize,
}

impl<T: Float> LoessResult<T> {
    /// Iterate `(x, yhat)` pairs; `None` for the values-only format.
    pub fn pairs(&self) -> Option<impl Iterator<Item = (T, T)> + '_> {
        self.x
            .as_ref()
            .map(|xs| xs.iter().copied().zip(self.y.iter().copied()))
    }
}

impl<T: Float + fmt::Display> fmt::Display for LoessResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Evaluation points: {}", self.y.len())?;
        writeln!(f, "  Span: {}", self.span)?;
        writeln!(f, "  Degree: {}", self.degree)?;
        writeln!(f)?;
        writeln!(f, "Smoothed Data:")?;

        match &self.x {
            Some(xs) => {
                writeln!(f, "  {:>9} {:>12}", "X", "Y_smooth")?;
                writeln!(f, "  {}", "-".repeat(22))?;
                for (xv, yv) in xs.iter().zip(&self.y) {
                    writeln!(f, "  {:>9.2} {:>12.5}", xv, yv)?;
                }
            }
            None => {
                writeln!(f, "  {:>12}", "Y_smooth")?;
                writeln!(f, "  {}", "-".repeat(12))?;
                for yv in &self.y {
                    writeln!(f, "  {:>12.5}", yv)?;
                }
            }
        }
        Ok(())
    }
}
