//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental building blocks used throughout the
//! crate:
//! - Error types
//! - Stable argsort and joint reordering of paired samples
//! - Neighborhood size computation from the span
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types surfaced by the crate.
pub mod errors;

/// Stable argsort and joint reordering.
pub mod sorting;

/// Neighborhood size from span.
pub mod window;
