//! High-level API for building and querying trees.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a small fluent
//! builder for construction parameters, and the query methods on the
//! built [`KdTree`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with a sensible default for
//!   `leaf_size`; a one-line [`KdTree::build`] shortcut for the default
//!   configuration.
//! * **Validated**: Every public input is checked at this boundary;
//!   internal layers assume validated inputs.
//! * **Type-Safe**: Generic over [`KdFloat`] (`f32` or `f64`).
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KdTreeBuilder`] via `KdTree::builder()`.
//! 2. Optionally set `.leaf_size(..)`.
//! 3. Call `.build(&points, dims)` to validate and construct.
//! 4. Query with [`KdTree::knn`] and [`KdTree::ball`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::builder::{build_nodes, BuildState};
use crate::engine::validator::Validator;
use crate::search::ball::BallSearcher;
use crate::search::knn::KnnSearcher;

// Publicly re-exported types
pub use crate::engine::tree::KdTree;
pub use crate::math::distance::KdFloat;
pub use crate::math::hyperrect::HyperRect;
pub use crate::primitives::errors::KdTreeError;
pub use crate::primitives::shape::TreeShape;

/// Default number of points per leaf in [`KdTreeBuilder::new`].
pub const DEFAULT_LEAF_SIZE: usize = 1;

/// Dimension above which construction logs an advisory warning: the
/// pruning traversals degrade towards brute force in high dimensions.
pub const HIGH_DIMENSION_ADVISORY: usize = 20;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for tree construction parameters.
#[derive(Debug, Clone)]
pub struct KdTreeBuilder {
    /// Maximum number of points per leaf.
    pub leaf_size: usize,
}

impl Default for KdTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KdTreeBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            leaf_size: DEFAULT_LEAF_SIZE,
        }
    }

    /// Set the maximum number of points per leaf.
    ///
    /// Larger leaves trade tree depth for linear scans at the bottom;
    /// values around 8-32 are typical once point counts grow.
    pub fn leaf_size(mut self, leaf_size: usize) -> Self {
        self.leaf_size = leaf_size;
        self
    }

    /// Validate inputs and build the tree.
    ///
    /// `points` is a point-contiguous coordinate buffer holding
    /// `points.len() / dims` points of `dims` coordinates each. The tree
    /// borrows it for its lifetime; it is never copied or mutated.
    /// Coordinates must be finite; NaN or infinite values are not
    /// detected and make query results unspecified.
    ///
    /// ## Errors
    ///
    /// * [`KdTreeError::EmptyInput`] if `points` is empty.
    /// * [`KdTreeError::InvalidLeafSize`] if `leaf_size` is zero.
    /// * [`KdTreeError::DimensionMismatch`] if `dims` is zero or does
    ///   not divide `points.len()`.
    pub fn build<'a, T: KdFloat>(
        &self,
        points: &'a [T],
        dims: usize,
    ) -> Result<KdTree<'a, T>, KdTreeError> {
        Validator::validate_build(points, dims, self.leaf_size)?;

        if dims > HIGH_DIMENSION_ADVISORY {
            log::warn!(
                "building a low-dimensional k-d tree over {} dimensions; \
                 pruning will be close to ineffective",
                dims
            );
        }

        let n = points.len() / dims;
        let shape = TreeShape::new(n, self.leaf_size);

        let mut indices: Vec<usize> = (0..n).collect();
        let mut split_dims = vec![0usize; shape.leaves];
        let mut split_values = vec![T::zero(); shape.leaves];
        let mut bounds = vec![HyperRect::zeroed(dims); shape.num_nodes() + 1];
        bounds[1] = HyperRect::enclosing(points, dims);

        let mut state = BuildState {
            coords: points,
            dims,
            shape: &shape,
            indices: &mut indices,
            split_dims: &mut split_dims,
            split_values: &mut split_values,
            bounds: &mut bounds,
        };
        build_nodes(&mut state);

        Ok(KdTree {
            data: points,
            dims,
            shape,
            indices,
            split_dims,
            split_values,
            bounds,
        })
    }
}

// ============================================================================
// Public Queries
// ============================================================================

impl<'a, T: KdFloat> KdTree<'a, T> {
    /// Create a [`KdTreeBuilder`] with default settings.
    pub fn builder() -> KdTreeBuilder {
        KdTreeBuilder::new()
    }

    /// Build a tree with the default configuration.
    ///
    /// Equivalent to `KdTree::builder().build(points, dims)`; see
    /// [`KdTreeBuilder::build`] for the input contract and errors.
    pub fn build(points: &'a [T], dims: usize) -> Result<Self, KdTreeError> {
        KdTreeBuilder::new().build(points, dims)
    }

    /// The `k` points nearest to `query`, by ascending Euclidean
    /// distance.
    ///
    /// Returns `(ids, distances)` of length `k`. Ids are 0-based
    /// positions of points in the buffer passed to `build`; candidates
    /// at equal distance keep the order in which the traversal found
    /// them.
    ///
    /// ## Errors
    ///
    /// * [`KdTreeError::DimensionMismatch`] if `query.len() != dims`.
    /// * [`KdTreeError::InvalidK`] if `k` is zero or exceeds the number
    ///   of points.
    pub fn knn(&self, query: &[T], k: usize) -> Result<(Vec<usize>, Vec<T>), KdTreeError> {
        Validator::validate_query(query, self.dims)?;
        Validator::validate_k(k, self.shape.n)?;

        Ok(KnnSearcher::new(query, k).search(self))
    }

    /// Every point strictly within `radius` of `query`, as 0-based ids
    /// sorted ascending.
    ///
    /// Inclusion is strict (`distance < radius`), so a zero radius
    /// returns an empty list even when a point coincides with the query.
    ///
    /// ## Errors
    ///
    /// * [`KdTreeError::DimensionMismatch`] if `query.len() != dims`.
    /// * [`KdTreeError::InvalidRadius`] if `radius` is negative or NaN.
    pub fn ball(&self, query: &[T], radius: T) -> Result<Vec<usize>, KdTreeError> {
        Validator::validate_query(query, self.dims)?;
        Validator::validate_radius(radius)?;

        Ok(BallSearcher::new(query, radius).search(self))
    }
}
