//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the batched pipeline:
//! - Fail-fast validation of inputs and parameters
//! - The four-stage execution (ordering, selection, weighting, solve)
//! - Result assembly
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batched pipeline execution.
pub mod executor;

/// Result container.
pub mod output;

/// Fail-fast validation.
pub mod validator;
