//! The built tree: borrowed coordinates plus the implicit node arrays.
//!
//! ## Purpose
//!
//! This module defines [`KdTree`], the frozen result of construction.
//! The tree borrows the caller's coordinate buffer and owns only index
//! arithmetic: the reordered permutation, the per-internal-node split
//! planes, and the per-node bounding boxes. After construction nothing
//! is mutated, so queries take `&self` and may run concurrently without
//! synchronisation.
//!
//! ## Design notes
//!
//! * **Implicit layout**: Nodes live in arrays indexed by the 1-based
//!   heap node id; there are no node records and no pointers. Index 0 of
//!   each node array is unused padding so child arithmetic stays
//!   branch-free.
//! * **Borrowed points**: Coordinates are neither copied nor reordered;
//!   only the permutation moves during construction.
//!
//! ## Invariants
//!
//! * The permutation is a bijection of `0..n`.
//! * For every internal node with split `(j, v)`, points under the left
//!   subtree have coordinate `j <= v` and points under the right have
//!   coordinate `j >= v`.
//! * Every point reachable from a node lies inside that node's box.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::distance::KdFloat;
use crate::math::hyperrect::HyperRect;
use crate::primitives::shape::TreeShape;

// ============================================================================
// KdTree
// ============================================================================

/// A static, balanced k-d tree over a borrowed point set.
///
/// Built once via [`KdTree::build`] or the construction builder;
/// read-only afterwards. Point ids returned by queries are 0-based
/// positions of points in the original coordinate buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct KdTree<'a, T: KdFloat> {
    /// Borrowed point-contiguous coordinate buffer.
    pub(crate) data: &'a [T],
    /// Coordinates per point.
    pub(crate) dims: usize,
    /// Derived structural constants.
    pub(crate) shape: TreeShape,
    /// The index permutation; each leaf owns a contiguous slice.
    pub(crate) indices: Vec<usize>,
    /// Split dimension per internal node (node-indexed, entry 0 unused).
    pub(crate) split_dims: Vec<usize>,
    /// Split value per internal node (node-indexed, entry 0 unused).
    pub(crate) split_values: Vec<T>,
    /// Bounding box per node (node-indexed, entry 0 unused).
    pub(crate) bounds: Vec<HyperRect<T>>,
}

impl<'a, T: KdFloat> KdTree<'a, T> {
    /// Number of indexed points.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.shape.n
    }

    /// Number of coordinates per point.
    #[inline]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Maximum number of points per leaf.
    #[inline]
    pub fn leaf_size(&self) -> usize {
        self.shape.leaf_size
    }

    /// The index permutation, leaf by leaf.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Structural constants of the tree.
    #[inline]
    pub fn shape(&self) -> &TreeShape {
        &self.shape
    }

    /// Coordinates of point `id`.
    #[inline]
    pub(crate) fn point(&self, id: usize) -> &[T] {
        &self.data[id * self.dims..(id + 1) * self.dims]
    }

    /// Split plane of internal node `node`.
    #[doc(hidden)]
    #[inline]
    pub fn split_plane(&self, node: usize) -> (usize, T) {
        (self.split_dims[node], self.split_values[node])
    }

    /// Bounding box of node `node`.
    #[doc(hidden)]
    #[inline]
    pub fn node_bounds(&self, node: usize) -> &HyperRect<T> {
        &self.bounds[node]
    }
}
