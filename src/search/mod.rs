//! Layer 4: Search
//!
//! # Purpose
//!
//! This layer implements the two query traversals over a built tree:
//! - k-nearest-neighbour search with hyperplane pruning
//! - radius (ball) search with bounding-box pruning
//!
//! Both are pure functions of `(tree, query, params)` and may run
//! concurrently across threads.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Search ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// k-nearest-neighbour traversal.
pub mod knn;

/// Radius (ball) query traversal.
pub mod ball;
