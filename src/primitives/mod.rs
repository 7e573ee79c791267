//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the building blocks everything else stands on:
//! - Error types surfaced at the public boundary
//! - In-place quickselect over the index permutation
//! - Implicit-heap shape arithmetic (leaf slices, split ranks)
//!
//! These are allocation-light, index-level utilities with no knowledge of
//! construction or query logic.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Search
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for construction and queries.
pub mod errors;

/// In-place quickselect over the index permutation.
pub mod partition;

/// Implicit-heap shape arithmetic.
pub mod shape;
