//! Tests for the normal-equation solver bridge.

#![cfg(feature = "dev")]

use approx::assert_relative_eq;

use vloess::internals::math::linalg::FloatLinalg;

#[test]
fn test_solve_identity() {
    // I * beta = b
    let a = vec![1.0_f64, 0.0, 0.0, 1.0];
    let b = vec![3.0_f64, -2.0];
    let betas = f64::solve_normal(&a, &b, 2).unwrap();
    assert_relative_eq!(betas[0], 3.0, epsilon = 1e-12);
    assert_relative_eq!(betas[1], -2.0, epsilon = 1e-12);
}

#[test]
fn test_solve_known_2x2_system() {
    // [2 1; 1 3] * [1; 2] = [4; 7]
    let a = vec![2.0_f64, 1.0, 1.0, 3.0];
    let b = vec![4.0_f64, 7.0];
    let betas = f64::solve_normal(&a, &b, 2).unwrap();
    assert_relative_eq!(betas[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(betas[1], 2.0, epsilon = 1e-12);
}

#[test]
fn test_solve_3x3_system() {
    // Row-major [1 0 0; 0 2 0; 0 0 4] * [5; 3; 1] = [5; 6; 4]
    let a = vec![
        1.0_f64, 0.0, 0.0, //
        0.0, 2.0, 0.0, //
        0.0, 0.0, 4.0,
    ];
    let b = vec![5.0_f64, 6.0, 4.0];
    let betas = f64::solve_normal(&a, &b, 3).unwrap();
    assert_relative_eq!(betas[0], 5.0, epsilon = 1e-12);
    assert_relative_eq!(betas[1], 3.0, epsilon = 1e-12);
    assert_relative_eq!(betas[2], 1.0, epsilon = 1e-12);
}

#[test]
fn test_singular_matrix_returns_none() {
    // Second column is exactly twice the first: rank 1.
    let a = vec![1.0_f64, 2.0, 2.0, 4.0];
    let b = vec![1.0_f64, 2.0];
    assert!(f64::solve_normal(&a, &b, 2).is_none());
}

#[test]
fn test_rank_deficient_matrix_with_nonzero_factorization_returns_none() {
    // [2 2; 2 2] is rank 1 (the degree-1 normal matrix of two coincident
    // points at x = 1 with uniform weights), but its QR factorization can
    // leave a tiny nonzero R diagonal entry; the rank check must still
    // reject it.
    let a = vec![2.0_f64, 2.0, 2.0, 2.0];
    let b = vec![2.0_f64, 2.0];
    assert!(f64::solve_normal(&a, &b, 2).is_none());
}

#[test]
fn test_rank_deficient_f32_returns_none() {
    let a = vec![3.0_f32, 3.0, 3.0, 3.0];
    let b = vec![1.0_f32, 1.0];
    assert!(f32::solve_normal(&a, &b, 2).is_none());
}

#[test]
fn test_solve_f32() {
    let a = vec![4.0_f32, 0.0, 0.0, 2.0];
    let b = vec![8.0_f32, 3.0];
    let betas = f32::solve_normal(&a, &b, 2).unwrap();
    assert_relative_eq!(betas[0], 2.0, epsilon = 1e-5);
    assert_relative_eq!(betas[1], 1.5, epsilon = 1e-5);
}
