//! Tests for the error types.

#![cfg(feature = "dev")]

use vloess::internals::primitives::errors::LoessError;

// ============================================================================
// Display Tests
// ============================================================================

#[test]
fn test_empty_input_display() {
    assert_eq!(LoessError::EmptyInput.to_string(), "Input arrays are empty");
}

#[test]
fn test_mismatched_inputs_display() {
    let err = LoessError::MismatchedInputs { x_len: 5, y_len: 3 };
    assert_eq!(
        err.to_string(),
        "Length mismatch: x has 5 points, y has 3"
    );
}

#[test]
fn test_invalid_span_display() {
    let err = LoessError::InvalidSpan(-0.5);
    assert_eq!(err.to_string(), "Invalid span: -0.5 (must be > 0 and finite)");
}

#[test]
fn test_invalid_degree_display() {
    let err = LoessError::InvalidDegree(11);
    assert_eq!(err.to_string(), "Invalid degree: 11 (must be at most 10)");
}

#[test]
fn test_underdetermined_fit_display() {
    let err = LoessError::UnderdeterminedFit {
        neighbors: 1,
        coefficients: 3,
    };
    assert_eq!(
        err.to_string(),
        "Underdetermined fit: neighborhood has 1 points but the local polynomial needs 3 (increase span or lower degree)"
    );
}

#[test]
fn test_singular_system_display() {
    let err = LoessError::SingularSystem { row: 4 };
    assert_eq!(err.to_string(), "Singular normal matrix at evaluation point 4");
}

#[test]
fn test_duplicate_parameter_display() {
    let err = LoessError::DuplicateParameter { parameter: "span" };
    assert_eq!(
        err.to_string(),
        "Parameter 'span' was set multiple times. Each parameter can only be configured once."
    );
}

// ============================================================================
// Trait Tests
// ============================================================================

#[test]
fn test_errors_are_comparable_and_cloneable() {
    let err = LoessError::MismatchedInputs { x_len: 2, y_len: 4 };
    let cloned = err.clone();
    assert_eq!(err, cloned);
    assert_ne!(err, LoessError::EmptyInput);
}

#[cfg(feature = "std")]
#[test]
fn test_errors_implement_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&LoessError::EmptyInput);
}
