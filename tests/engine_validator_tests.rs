//! Tests for fail-fast validation.

#![cfg(feature = "dev")]

use vloess::internals::engine::validator::{Validator, MAX_DEGREE};
use vloess::internals::primitives::errors::LoessError;

// ============================================================================
// Input Validation Tests
// ============================================================================

#[test]
fn test_valid_inputs_pass() {
    let x = vec![1.0_f64, 2.0];
    let y = vec![3.0_f64, 4.0];
    assert!(Validator::validate_inputs(&x, &y).is_ok());
}

#[test]
fn test_empty_inputs_rejected() {
    let empty: Vec<f64> = vec![];
    let some = vec![1.0_f64];
    assert_eq!(
        Validator::validate_inputs(&empty, &empty).unwrap_err(),
        LoessError::EmptyInput
    );
    assert_eq!(
        Validator::validate_inputs(&some, &empty).unwrap_err(),
        LoessError::EmptyInput
    );
}

#[test]
fn test_mismatched_inputs_rejected() {
    let x = vec![1.0_f64, 2.0, 3.0];
    let y = vec![1.0_f64];
    assert_eq!(
        Validator::validate_inputs(&x, &y).unwrap_err(),
        LoessError::MismatchedInputs { x_len: 3, y_len: 1 }
    );
}

// ============================================================================
// Span Validation Tests
// ============================================================================

#[test]
fn test_valid_spans_pass() {
    assert!(Validator::validate_span(0.05_f64).is_ok());
    assert!(Validator::validate_span(0.75_f64).is_ok());
    assert!(Validator::validate_span(1.0_f64).is_ok());
    // Above 1 saturates later; not a validation error.
    assert!(Validator::validate_span(2.5_f64).is_ok());
}

#[test]
fn test_invalid_spans_rejected() {
    assert!(matches!(
        Validator::validate_span(0.0_f64),
        Err(LoessError::InvalidSpan(_))
    ));
    assert!(matches!(
        Validator::validate_span(-0.5_f64),
        Err(LoessError::InvalidSpan(_))
    ));
    assert!(matches!(
        Validator::validate_span(f64::NAN),
        Err(LoessError::InvalidSpan(_))
    ));
    assert!(matches!(
        Validator::validate_span(f64::INFINITY),
        Err(LoessError::InvalidSpan(_))
    ));
}

// ============================================================================
// Degree Validation Tests
// ============================================================================

#[test]
fn test_degree_bounds() {
    assert!(Validator::validate_degree(0).is_ok());
    assert!(Validator::validate_degree(MAX_DEGREE).is_ok());
    assert_eq!(
        Validator::validate_degree(MAX_DEGREE + 1).unwrap_err(),
        LoessError::InvalidDegree(MAX_DEGREE + 1)
    );
}

// ============================================================================
// Window Validation Tests
// ============================================================================

#[test]
fn test_window_large_enough_passes() {
    assert!(Validator::validate_window(3, 3).is_ok());
    assert!(Validator::validate_window(10, 2).is_ok());
}

#[test]
fn test_window_too_small_rejected() {
    assert_eq!(
        Validator::validate_window(2, 3).unwrap_err(),
        LoessError::UnderdeterminedFit {
            neighbors: 2,
            coefficients: 3,
        }
    );
}

// ============================================================================
// Duplicate Parameter Tests
// ============================================================================

#[test]
fn test_duplicate_tracking() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("span")).unwrap_err(),
        LoessError::DuplicateParameter { parameter: "span" }
    );
}
