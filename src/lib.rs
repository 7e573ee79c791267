//! # kdtree-rs — Static k-d trees for Rust
//!
//! A compact, exact nearest-neighbour index for low-dimensional point
//! sets, built once over a known dataset and queried many times.
//!
//! ## What is a k-d tree?
//!
//! A k-d tree is a binary space-partitioning tree over points in
//! `d`-dimensional space. Each internal node splits its points with an
//! axis-aligned hyperplane; each leaf holds a small bucket of points.
//! Queries descend the tree and use the split geometry to *prune*:
//! subtrees provably farther than the answer so far are never visited,
//! which turns linear scans into roughly logarithmic searches for the
//! low dimensions (2-10) the structure is designed for.
//!
//! This crate builds a *balanced, implicit* tree:
//!
//! - Nodes are packed into arrays indexed like a binary heap: no node
//!   records, no pointers, and cache-friendly traversal.
//! - Construction reorders an index permutation in place with
//!   quickselect; the caller's coordinate buffer is borrowed, never
//!   copied or mutated.
//! - Each leaf owns a contiguous slice of the permutation, computable
//!   from the node index alone.
//!
//! **Supported queries:**
//! - k-nearest-neighbour: the `k` closest points, by ascending distance
//! - ball (radius) query: all points strictly within a radius
//!
//! ## Quick Start
//!
//! ```rust
//! use kdtree_rs::prelude::*;
//!
//! // Three 2-D points, point-contiguous: (0,0), (1,0), (4,4)
//! let points = vec![0.0_f64, 0.0, 1.0, 0.0, 4.0, 4.0];
//!
//! let tree = KdTree::build(&points, 2)?;
//!
//! let (ids, dists) = tree.knn(&[0.2, 0.0], 2)?;
//! assert_eq!(ids, vec![0, 1]);            // 0-based point ids
//! assert!(dists[0] < dists[1]);           // ascending distance
//!
//! let hits = tree.ball(&[0.0, 0.0], 1.5)?;
//! assert_eq!(hits, vec![0, 1]);           // sorted ascending
//! # Result::<(), KdTreeError>::Ok(())
//! ```
//!
//! ### Configuring the leaf size
//!
//! ```rust
//! use kdtree_rs::prelude::*;
//! # let points = vec![0.0_f64, 0.0, 1.0, 0.0, 4.0, 4.0];
//!
//! let tree = KdTree::<f64>::builder()
//!     .leaf_size(16)          // points per leaf (default: 1)
//!     .build(&points, 2)?;
//! # Result::<(), KdTreeError>::Ok(())
//! ```
//!
//! Larger leaves make the tree shallower and finish queries with short
//! linear scans; smaller leaves prune harder. Values around 8-32 are a
//! good default once point counts grow past a few hundred.
//!
//! ### Result and Error Handling
//!
//! Construction and queries return `Result<_, KdTreeError>`. Every
//! failure is a deterministic input-validation failure:
//!
//! | Error | Raised when |
//! |-------|-------------|
//! | `EmptyInput` | `build` received no points |
//! | `InvalidLeafSize` | `leaf_size` is zero |
//! | `DimensionMismatch` | query length (or buffer length) disagrees with `dims` |
//! | `InvalidK` | `k` is zero or exceeds the number of points |
//! | `InvalidRadius` | ball radius is negative (or NaN) |
//!
//! ```rust
//! use kdtree_rs::prelude::*;
//! # let points = vec![0.0_f64, 0.0, 1.0, 0.0, 4.0, 4.0];
//! let tree = KdTree::build(&points, 2)?;
//!
//! match tree.knn(&[0.0, 0.0], 99) {
//!     Ok((ids, dists)) => println!("{:?} {:?}", ids, dists),
//!     Err(e) => eprintln!("query rejected: {}", e),
//! }
//! # Result::<(), KdTreeError>::Ok(())
//! ```
//!
//! ## Query semantics
//!
//! The fine print, fixed and documented so results are reproducible
//! across platforms:
//!
//! - **Point ids are 0-based** positions in the coordinate buffer
//!   passed to `build`.
//! - **Ball inclusion is strict**: a point is a hit iff
//!   `distance < radius`, so `ball(q, 0.0)` is always empty. Ball
//!   results are sorted ascending by id.
//! - **kNN ties are stable**: among equal distances, the candidate found
//!   earlier by the traversal stays first.
//! - Distances returned by `knn` have the square root applied;
//!   internally everything compares squared values.
//!
//! ## Concurrency
//!
//! Construction is single-threaded. A built tree is immutable; queries
//! take `&self`, are pure functions of `(tree, query, params)`, and may
//! run in parallel across threads without synchronisation.
//!
//! ## Complexity
//!
//! | Operation | Time | Extra space |
//! |-----------|------|-------------|
//! | build | `O(n log n)` expected | `O(n)` permutation + `O(L·d)` bounds |
//! | knn | `O(k log n)` typical | `O(k)` output |
//! | ball | `O(log n + hits)` typical | `O(hits)` output |
//!
//! High dimensions erode the pruning that makes those "typical" bounds
//! hold; `build` logs a warning through the [`log`] facade above 20
//! dimensions.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments (with `alloc`). Disable
//! default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! kdtree-rs = { version = "0.1", default-features = false }
//! ```
//!
//! Use `f32` coordinates and modest leaf sizes to keep the footprint
//! small.
//!
//! ## References
//!
//! - Bentley, J. L. (1975). "Multidimensional Binary Search Trees Used
//!   for Associative Searching"
//! - Friedman, J. H., Bentley, J. L. & Finkel, R. A. (1977). "An
//!   Algorithm for Finding Best Matches in Logarithmic Expected Time"
//! - Maneewongvatana, S. & Mount, D. M. (1999). "It's Okay to Be Skinny,
//!   If Your Friends Are Fat"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors, quickselect, shape arithmetic.
//
// Index-level building blocks: the public error enum, in-place rank
// selection over the permutation, and the implicit-heap formulas that
// map node ids to leaf slices and split ranks.
mod primitives;

// Layer 2: Math - pure geometry.
//
// Squared Euclidean distance kernels (SIMD-accelerated for f32/f64) and
// the hyper-rectangle algebra used for ball-query pruning.
mod math;

// Layer 3: Engine - validation, construction, storage.
//
// Fail-fast input validation, the recursive builder that reorders the
// permutation and records split planes and bounds, and the frozen
// read-only tree.
mod engine;

// Layer 4: Search - query traversals.
//
// The kNN traversal (sorted best-k arrays, hyperplane pruning) and the
// ball traversal (bounding-box pruning, whole-subtree dumps).
mod search;

// High-level API.
//
// The fluent construction builder and the public query surface.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the commonly used types:
///
/// ```
/// use kdtree_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        HyperRect, KdFloat, KdTree, KdTreeBuilder, KdTreeError, TreeShape, DEFAULT_LEAF_SIZE,
        HIGH_DIMENSION_ADVISORY,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal construction engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal query traversals.
    pub mod search {
        pub use crate::search::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
