//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure geometry the tree is built from:
//! - Squared Euclidean distance kernels (SIMD-accelerated)
//! - Axis-aligned hyper-rectangle algebra for subtree pruning
//!
//! These are reusable mathematical building blocks with no tree-specific
//! logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Squared Euclidean distance kernels.
pub mod distance;

/// Axis-aligned bounding boxes and their query algebra.
pub mod hyperrect;
