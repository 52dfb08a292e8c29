//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric building blocks of the batched
//! pipeline:
//! - Distance computation and k-nearest selection
//! - Tricubic kernel weighting
//! - Polynomial basis rows
//! - The weighted normal-equations solve (via nalgebra)
//!
//! These are reusable mathematical pieces with no pipeline-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Polynomial basis rows for the local design matrix.
pub mod design;

/// Distance matrix and nearest-neighbor selection.
pub mod distance;

/// Tricubic kernel weighting.
pub mod kernel;

/// Linear algebra backend (nalgebra bridge).
pub mod linalg;
